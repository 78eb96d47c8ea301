use crate::model::Weather;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherState {
    /// City of the last accepted search, even if it failed.
    pub query: Option<String>,
    pub current: Option<Weather>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl UiState for WeatherState {}
