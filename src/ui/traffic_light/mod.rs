mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::TrafficLightIntent;
pub use reducer::TrafficLightReducer;
pub use state::{LightColor, TrafficLightState};
pub use view_model::TrafficLightViewModel;
