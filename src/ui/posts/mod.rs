mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::PostListIntent;
pub use reducer::PostListReducer;
pub use state::PostListState;
pub use view_model::PostListViewModel;
