//! Plain data records exchanged with the remote APIs.

mod chat;
mod post;
mod weather;

pub use chat::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatRole};
pub use post::Post;
pub use weather::Weather;
pub(crate) use weather::WeatherPayload;
