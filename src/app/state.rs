//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Utc};

use crate::app::favorites::Favorites;
use crate::messages::render::ListRow;
use crate::messages::ui_events::AppTab;
use crate::messages::RenderState;
use crate::models::Post;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Fetched data
    pub all_posts: Vec<Post>,
    pub last_fetch_time: Option<DateTime<Utc>>,
    pub posts_url: String,
    pub next_request_id: u64,

    // User data
    pub favorites: Favorites,

    // UI state
    pub current_tab: AppTab,
    pub selected_post: usize,
    pub selected_favorite: usize,
    pub show_help: bool,
}

impl AppState {
    pub fn new(posts_url: impl Into<String>) -> Self {
        AppState {
            all_posts: Vec::new(),
            last_fetch_time: None,
            posts_url: posts_url.into(),
            next_request_id: 1,
            favorites: Favorites::new(),
            current_tab: AppTab::Posts,
            selected_post: 0,
            selected_favorite: 0,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// All posts in fetch order
    pub fn posts_view(&self) -> impl Iterator<Item = &Post> + '_ {
        self.all_posts.iter()
    }

    /// Favorited posts in the order they were added.
    ///
    /// Ids with no matching post are skipped.
    pub fn favorites_view(&self) -> impl Iterator<Item = &Post> + '_ {
        self.favorites
            .ids()
            .iter()
            .filter_map(move |&id| self.all_posts.iter().find(|post| post.id == id))
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let row = |post: &Post| ListRow {
            id: post.id,
            title: post.title.clone(),
            favorited: self.favorites.contains(post.id),
        };

        RenderState {
            active_tab: self.current_tab,
            posts: self.posts_view().map(row).collect(),
            favorites: self.favorites_view().map(row).collect(),
            selected_post: self.selected_post,
            selected_favorite: self.selected_favorite,
            last_fetch_time: self.last_fetch_time,
            show_help: self.show_help,
        }
    }
}
