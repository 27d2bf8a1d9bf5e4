//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Utc};

use crate::messages::ui_events::AppTab;

/// One rendered list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: i64,
    pub title: String,
    pub favorited: bool,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    pub active_tab: AppTab,

    // Lists, already resolved
    pub posts: Vec<ListRow>,
    pub favorites: Vec<ListRow>,

    // Selection cursors, one per tab
    pub selected_post: usize,
    pub selected_favorite: usize,

    pub last_fetch_time: Option<DateTime<Utc>>,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// Rows and selection for the active tab
    pub fn active_list(&self) -> (&[ListRow], usize) {
        match self.active_tab {
            AppTab::Posts => (&self.posts, self.selected_post),
            AppTab::Favorites => (&self.favorites, self.selected_favorite),
        }
    }
}
