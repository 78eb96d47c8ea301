//! Typed remote accessors.
//!
//! One client per endpoint family, all sharing a single `reqwest::Client`
//! built from the `[http]` config section.

mod chat;
mod error;
mod http;
mod posts;
mod weather;

pub use chat::ChatClient;
pub use error::{ApiError, ErrorKind};
pub use http::{build_client, endpoint_url, TimeoutConfig};
pub use posts::PostsClient;
pub use weather::WeatherClient;

use crate::config::Config;

/// All accessors built from one config, sharing one connection pool.
#[derive(Clone)]
pub struct ApiClients {
    pub chat: ChatClient,
    pub posts: PostsClient,
    pub weather: WeatherClient,
}

impl ApiClients {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = build_client(TimeoutConfig::from(&config.http))?;
        Ok(Self {
            chat: ChatClient::new(client.clone(), config.chat.clone()),
            posts: PostsClient::new(client.clone(), config.posts.clone()),
            weather: WeatherClient::new(client, config.weather.clone()),
        })
    }
}
