//! Command handlers - business logic for processing UI events

use chrono::Utc;

use crate::app::AppState;
use crate::messages::ui_events::AppTab;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Loading
    // ========================

    /// Build the fetch command. Fire-and-forget; nothing tracks it.
    pub fn load(&mut self) -> NetworkCommand {
        let id = self.next_id();
        tracing::info!(id, url = %self.posts_url, "Requesting posts");
        NetworkCommand::FetchPosts {
            id,
            url: self.posts_url.clone(),
        }
    }

    /// Apply a network response. Every response wins, newest arrival last.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::PostsLoaded { id, posts } => {
                tracing::info!(id, count = posts.len(), "Posts loaded");
                self.all_posts = posts;
                self.last_fetch_time = Some(Utc::now());
                self.clamp_selection();
            }
        }
    }

    // ========================
    // Tabs
    // ========================

    pub fn switch_tab(&mut self, tab: AppTab) {
        self.current_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.other();
    }

    // ========================
    // Selection
    // ========================

    fn visible_len(&self) -> usize {
        match self.current_tab {
            AppTab::Posts => self.posts_view().count(),
            AppTab::Favorites => self.favorites_view().count(),
        }
    }

    fn selection_mut(&mut self) -> &mut usize {
        match self.current_tab {
            AppTab::Posts => &mut self.selected_post,
            AppTab::Favorites => &mut self.selected_favorite,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            let selected = self.selection_mut();
            *selected = (*selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            let selected = self.selection_mut();
            *selected = if *selected == 0 { len - 1 } else { *selected - 1 };
        }
    }

    /// Keep both cursors inside their lists
    fn clamp_selection(&mut self) {
        let posts = self.posts_view().count();
        let favorites = self.favorites_view().count();
        self.selected_post = self.selected_post.min(posts.saturating_sub(1));
        self.selected_favorite = self.selected_favorite.min(favorites.saturating_sub(1));
    }

    // ========================
    // Favorites
    // ========================

    pub fn toggle_favorite(&mut self, id: i64) {
        self.favorites.toggle(id);
        tracing::debug!(id, favorites = self.favorites.len(), "Toggled favorite");
        self.clamp_selection();
    }

    pub fn remove_favorite(&mut self, id: i64) {
        self.favorites.remove(id);
        tracing::debug!(id, favorites = self.favorites.len(), "Removed favorite");
        self.clamp_selection();
    }

    /// Toggle the selected post, or remove the selected favorite
    pub fn activate(&mut self) {
        match self.current_tab {
            AppTab::Posts => {
                let selected = self.posts_view().nth(self.selected_post).map(|p| p.id);
                if let Some(id) = selected {
                    self.toggle_favorite(id);
                }
            }
            AppTab::Favorites => {
                let selected = self.favorites_view().nth(self.selected_favorite).map(|p| p.id);
                if let Some(id) = selected {
                    self.remove_favorite(id);
                }
            }
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
