//! Screen state holders.
//!
//! Each screen is an MVI triple (state, intent, reducer) plus a
//! view-model that owns the store and exposes intent methods.

pub mod chat;
pub mod mvi;
pub mod posts;
pub mod traffic_light;
pub mod weather;
