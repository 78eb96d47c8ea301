use crate::ui::mvi::Reducer;
use crate::ui::weather::intent::WeatherIntent;
use crate::ui::weather::state::WeatherState;

pub struct WeatherReducer;

impl Reducer for WeatherReducer {
    type State = WeatherState;
    type Intent = WeatherIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WeatherIntent::SearchStarted { city } => WeatherState {
                query: Some(city),
                is_loading: true,
                error: None,
                ..state
            },
            WeatherIntent::Loaded { weather } => WeatherState {
                current: Some(weather),
                is_loading: false,
                error: None,
                ..state
            },
            WeatherIntent::Failed { message } => WeatherState {
                is_loading: false,
                error: Some(message),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Weather;

    fn paris() -> Weather {
        Weather {
            city: "Paris".into(),
            temperature: 18.0,
            feels_like: 17.0,
            humidity: 60,
            condition: "Clear".into(),
            description: "clear sky".into(),
            icon: None,
        }
    }

    #[test]
    fn search_records_query() {
        let new_state = WeatherReducer::reduce(
            WeatherState::default(),
            WeatherIntent::SearchStarted {
                city: "Paris".into(),
            },
        );
        assert_eq!(new_state.query.as_deref(), Some("Paris"));
        assert!(new_state.is_loading);
    }

    #[test]
    fn failure_keeps_previous_weather() {
        let state = WeatherState {
            query: Some("Atlantis".into()),
            current: Some(paris()),
            is_loading: true,
            error: None,
        };

        let new_state = WeatherReducer::reduce(
            state,
            WeatherIntent::Failed {
                message: "Error: City not found: Atlantis".into(),
            },
        );

        assert_eq!(new_state.current, Some(paris()));
        assert!(!new_state.is_loading);
        assert!(new_state.error.unwrap().contains("City not found"));
    }
}
