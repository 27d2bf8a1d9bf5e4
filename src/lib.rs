//! # Postboard
//!
//! A small terminal client for a public posts API.
//!
//! ## Features
//! - Fetches the post list once, on first display
//! - Posts and Favorites tabs
//! - Favorites toggled from the posts list, removed from the favorites list
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine, single owner of all state)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, Favorites};
pub use config::AppConfig;
pub use error::FetchError;
pub use messages::{AppTab, NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::Post;
pub use network::NetworkActor;
