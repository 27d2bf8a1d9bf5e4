//! Network layer - post list fetching
//!
//! The Network actor receives fetch commands and sends back decoded posts.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{decode_posts, fetch_posts};
