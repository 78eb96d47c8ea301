use serde::Deserialize;

use crate::api::ApiError;

/// Current conditions for one city, in the configured unit system.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    pub city: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub condition: String,
    pub description: String,
    pub icon: Option<String>,
}

/// Wire format of the current-weather endpoint, reduced to what we read.
#[derive(Debug, Deserialize)]
pub(crate) struct WeatherPayload {
    name: String,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: String,
    description: String,
    #[serde(default)]
    icon: Option<String>,
}

impl TryFrom<WeatherPayload> for Weather {
    type Error = ApiError;

    fn try_from(payload: WeatherPayload) -> Result<Self, Self::Error> {
        let condition = payload
            .weather
            .into_iter()
            .next()
            .ok_or(ApiError::EmptyResponse {
                what: "weather service",
            })?;

        Ok(Weather {
            city: payload.name,
            temperature: payload.main.temp,
            feels_like: payload.main.feels_like,
            humidity: payload.main.humidity,
            condition: condition.main,
            description: condition.description,
            icon: condition.icon,
        })
    }
}
