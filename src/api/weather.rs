use reqwest::{Client, StatusCode, Url};

use crate::config::{CredentialStatus, WeatherConfig};
use crate::model::{Weather, WeatherPayload};

use super::error::ApiError;
use super::http::{endpoint_url, ensure_success, read_json};

const WEATHER_PATH: &str = "/data/2.5/weather";

/// Typed accessor for the current-weather endpoint.
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(client: Client, config: WeatherConfig) -> Self {
        Self { client, config }
    }

    pub fn units(&self) -> &str {
        &self.config.units
    }

    pub async fn current(&self, city: &str) -> Result<Weather, ApiError> {
        let key = match self.config.resolve_credential() {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                return Err(ApiError::NotConfigured { reason });
            }
        };

        let url = Url::parse_with_params(
            &endpoint_url(&self.config.base_url, WEATHER_PATH),
            &[
                ("q", city),
                ("appid", key.expose()),
                ("units", self.config.units.as_str()),
            ],
        )
        .map_err(|e| ApiError::NotConfigured {
            reason: format!("invalid weather.base_url: {}", e),
        })?;

        tracing::debug!(city = %city, units = %self.config.units, "Fetching current weather");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::transport(format!("GET {}", WEATHER_PATH), e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                what: "City",
                name: city.to_string(),
            });
        }

        let response = ensure_success(response).await?;
        let payload: WeatherPayload = read_json(response, WEATHER_PATH).await?;
        Weather::try_from(payload)
    }
}
