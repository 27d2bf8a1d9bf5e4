//! Network messages - communication between App and Network layers

use crate::models::Post;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch the post list
    FetchPosts { id: u64, url: String },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer.
///
/// Failed fetches are logged by the network layer and never reach the app.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// Post list fetched and decoded
    PostsLoaded { id: u64, posts: Vec<Post> },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::PostsLoaded { id, .. } => *id,
        }
    }
}
