//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow between view-models and whatever renders them.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ Store ──→ subscribers
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of screen state
//! - **Intent**: User actions or async results
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Holds the current state and broadcasts every change

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
