mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::ChatIntent;
pub use reducer::ChatReducer;
pub use state::ChatState;
pub use view_model::ChatViewModel;
