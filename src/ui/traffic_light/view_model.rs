use tokio::sync::watch;

use crate::ui::mvi::Store;
use crate::ui::traffic_light::intent::TrafficLightIntent;
use crate::ui::traffic_light::reducer::TrafficLightReducer;
use crate::ui::traffic_light::state::TrafficLightState;

/// Purely local state holder; no I/O, so no scope is needed.
#[derive(Clone, Default)]
pub struct TrafficLightViewModel {
    store: Store<TrafficLightReducer>,
}

impl TrafficLightViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrafficLightState {
        self.store.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<TrafficLightState> {
        self.store.subscribe()
    }

    pub fn advance(&self) {
        self.store.dispatch(TrafficLightIntent::Advance);
    }

    pub fn reset(&self) {
        self.store.dispatch(TrafficLightIntent::Reset);
    }
}
