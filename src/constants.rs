//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Endpoint the post list is fetched from
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Application name, also used as the log directory name
pub const APP_NAME: &str = "postboard";

/// Log file written inside the log directory
pub const LOG_FILE_NAME: &str = "postboard.log";

/// Marker shown next to favorited posts
pub const FAVORITE_MARKER: &str = "★";

/// UI poll interval in milliseconds
pub const UI_POLL_MS: u64 = 50;
