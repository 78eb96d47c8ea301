mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{resolve_key, CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{ChatConfig, Config, HttpConfig, PostsConfig, WeatherConfig};
