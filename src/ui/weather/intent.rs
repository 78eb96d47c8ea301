use crate::model::Weather;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum WeatherIntent {
    SearchStarted { city: String },
    Loaded { weather: Weather },
    Failed { message: String },
}

impl Intent for WeatherIntent {}
