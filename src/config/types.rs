use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub posts: PostsConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

/// Settings shared by every HTTP client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connection timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Chat completion API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL without the `/v1/...` suffix.
    #[serde(default = "default_chat_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request.
    #[serde(default = "default_chat_model")]
    pub model: String,
    /// Sampling temperature, 0.0 to 1.0.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Bearer token. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    #[serde(default = "default_chat_key_env")]
    pub api_key_env: String,
}

/// Post-list API settings. The API is public, so there is no key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsConfig {
    #[serde(default = "default_posts_base_url")]
    pub base_url: String,
}

/// Current-weather API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Query-string key (`appid`). Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_weather_key_env")]
    pub api_key_env: String,
    /// Unit system: "metric", "imperial" or "standard".
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_timeout() -> u32 {
    30
}

fn default_chat_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_chat_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_chat_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_posts_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_weather_key_env() -> String {
    "OPENWEATHER_API_KEY".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: default_timeout(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_chat_base_url(),
            model: default_chat_model(),
            temperature: default_temperature(),
            api_key: None,
            api_key_env: default_chat_key_env(),
        }
    }
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            base_url: default_posts_base_url(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            api_key_env: default_weather_key_env(),
            units: default_units(),
        }
    }
}
