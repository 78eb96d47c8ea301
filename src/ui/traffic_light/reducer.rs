use crate::ui::mvi::Reducer;
use crate::ui::traffic_light::intent::TrafficLightIntent;
use crate::ui::traffic_light::state::TrafficLightState;

pub struct TrafficLightReducer;

impl Reducer for TrafficLightReducer {
    type State = TrafficLightState;
    type Intent = TrafficLightIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TrafficLightIntent::Advance => TrafficLightState::new(state.color().next()),
            TrafficLightIntent::Reset => TrafficLightState::default(),
        }
    }
}
