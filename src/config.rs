//! Runtime configuration assembled from compile-time defaults

use std::path::PathBuf;

use crate::constants::{APP_NAME, DEFAULT_POSTS_URL, LOG_FILE_NAME};

/// Settings shared by the actors and the logging setup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub posts_url: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Full path of the log file
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Same configuration pointed at a different posts endpoint
    pub fn with_posts_url(mut self, url: impl Into<String>) -> Self {
        self.posts_url = url.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let log_dir = dirs::cache_dir()
            .map(|dir| dir.join(APP_NAME))
            .unwrap_or_else(|| PathBuf::from("."));

        AppConfig {
            posts_url: String::from(DEFAULT_POSTS_URL),
            log_dir,
        }
    }
}
