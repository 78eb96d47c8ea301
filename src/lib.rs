//! # mvi-samples
//!
//! Fetch-and-render state holders for three small sample screens:
//!
//! - **Post list**: `GET /posts` from a public REST API
//! - **Chat**: conversation against an OpenAI-compatible completion API
//! - **Weather**: current conditions for a city
//! - **Traffic light**: a three-state cyclic state machine, no I/O
//!
//! Each view-model owns an MVI [`ui::mvi::Store`] whose state can be read
//! with `state()` or observed with `subscribe()`.
//!
//! ```rust,no_run
//! use mvi_samples::api::ApiClients;
//! use mvi_samples::config::Config;
//! use mvi_samples::ui::posts::PostListViewModel;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let clients = ApiClients::from_config(&config)?;
//!
//!     let view_model = PostListViewModel::new(clients.posts);
//!     if let Some(request) = view_model.fetch() {
//!         request.await?;
//!     }
//!
//!     let state = view_model.state();
//!     println!("{} posts, error: {:?}", state.posts.len(), state.error);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod scope;
pub mod ui;
