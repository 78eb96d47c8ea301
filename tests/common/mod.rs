//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use mvi_samples::api::{build_client, ChatClient, PostsClient, TimeoutConfig, WeatherClient};
use mvi_samples::config::{ChatConfig, PostsConfig, WeatherConfig};
use std::net::TcpListener;
use std::time::Duration;
use tokio::sync::watch;

/// Find an available port for testing. Nothing listens on it afterwards,
/// so connecting to it is refused.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL of a port nothing listens on.
pub fn dead_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

fn test_http() -> reqwest::Client {
    build_client(TimeoutConfig {
        connect: Duration::from_secs(2),
        request: Duration::from_secs(5),
    })
    .expect("Failed to build client")
}

pub fn posts_client(base_url: &str) -> PostsClient {
    PostsClient::new(
        test_http(),
        PostsConfig {
            base_url: base_url.to_string(),
        },
    )
}

pub fn chat_client(base_url: &str) -> ChatClient {
    ChatClient::new(
        test_http(),
        ChatConfig {
            base_url: base_url.to_string(),
            model: "gpt-test".to_string(),
            temperature: 0.5,
            api_key: Some("test-key".to_string()),
            api_key_env: "MVI_SAMPLES_TEST_UNUSED".to_string(),
        },
    )
}

pub fn weather_client(base_url: &str) -> WeatherClient {
    WeatherClient::new(
        test_http(),
        WeatherConfig {
            base_url: base_url.to_string(),
            api_key: Some("weather-key".to_string()),
            api_key_env: "MVI_SAMPLES_TEST_UNUSED".to_string(),
            units: "metric".to_string(),
        },
    )
}

/// Wait until `rx` observes a state matching `pred`.
pub async fn wait_for<T, F>(rx: &mut watch::Receiver<T>, pred: F) -> T
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|state| pred(state)))
        .await
        .expect("timed out waiting for state")
        .expect("store dropped")
        .clone()
}
