//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::AppConfig;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &AppConfig,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(config.posts_url.clone()),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Appeared => {
                let cmd = self.state.load();
                let _ = self.network_tx.send(cmd);
            }

            // Tabs
            UiEvent::SwitchTab(tab) => self.state.switch_tab(tab),
            UiEvent::NextTab => self.state.next_tab(),

            // Lists
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::Activate => self.state.activate(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::*;
    use crate::messages::ui_events::AppTab;
    use crate::models::Post;
    use crate::network::client::test_server::serve_sequence;
    use crate::network::NetworkActor;

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        net_resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        net_cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
    }

    fn spawn_actor() -> Harness {
        let config = AppConfig::default().with_posts_url("http://127.0.0.1:1/posts");
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(&config, net_cmd_tx, render_tx);
        tokio::spawn(actor.run(ui_rx, net_resp_rx));

        Harness { ui_tx, net_resp_tx, net_cmd_rx, render_rx }
    }

    #[tokio::test]
    async fn test_initial_render_is_empty() {
        let mut h = spawn_actor();
        let first = h.render_rx.recv().await.unwrap();
        assert!(first.posts.is_empty());
        assert!(first.last_fetch_time.is_none());
        assert_eq!(first.active_tab, AppTab::Posts);
    }

    #[tokio::test]
    async fn test_appeared_triggers_fetch() {
        let mut h = spawn_actor();
        h.ui_tx.send(UiEvent::Appeared).unwrap();
        let cmd = h.net_cmd_rx.recv().await.unwrap();
        assert_eq!(
            cmd,
            NetworkCommand::FetchPosts { id: 1, url: "http://127.0.0.1:1/posts".into() }
        );
    }

    #[tokio::test]
    async fn test_loaded_posts_are_published() {
        let mut h = spawn_actor();
        let _ = h.render_rx.recv().await;

        h.net_resp_tx
            .send(NetworkResponse::PostsLoaded {
                id: 1,
                posts: vec![Post::new(1, 1, "a", "b")],
            })
            .unwrap();

        let render = h.render_rx.recv().await.unwrap();
        assert_eq!(render.posts.len(), 1);
        assert_eq!(render.posts[0].title, "a");
        assert!(render.last_fetch_time.is_some());
    }

    #[tokio::test]
    async fn test_toggle_then_favorites_tab() {
        let mut h = spawn_actor();
        let _ = h.render_rx.recv().await;
        h.net_resp_tx
            .send(NetworkResponse::PostsLoaded {
                id: 1,
                posts: vec![Post::new(1, 1, "a", "b"), Post::new(1, 2, "c", "d")],
            })
            .unwrap();
        let _ = h.render_rx.recv().await;

        h.ui_tx.send(UiEvent::SelectNext).unwrap();
        h.ui_tx.send(UiEvent::Activate).unwrap();
        h.ui_tx.send(UiEvent::SwitchTab(AppTab::Favorites)).unwrap();

        let _ = h.render_rx.recv().await;
        let _ = h.render_rx.recv().await;
        let render = h.render_rx.recv().await.unwrap();
        assert_eq!(render.active_tab, AppTab::Favorites);
        assert_eq!(render.favorites.len(), 1);
        assert_eq!(render.favorites[0].id, 2);
        assert!(render.posts[1].favorited);
    }

    #[tokio::test]
    async fn test_quit_shuts_down_network() {
        let mut h = spawn_actor();
        h.ui_tx.send(UiEvent::Quit).unwrap();
        assert_eq!(h.net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown));
    }

    #[tokio::test]
    async fn test_malformed_refetch_keeps_loaded_posts() {
        let (url, served) = serve_sequence(vec![
            ("200 OK", r#"[{"userId":1,"id":1,"title":"a","body":"b"}]"#),
            ("200 OK", "<html>not a post list</html>"),
        ])
        .await;
        let config = AppConfig::default().with_posts_url(url);

        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        tokio::spawn(NetworkActor::new(net_resp_tx).run(net_cmd_rx));
        tokio::spawn(AppActor::new(&config, net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

        let _ = render_rx.recv().await;

        // First fetch succeeds
        ui_tx.send(UiEvent::Appeared).unwrap();
        let mut render = render_rx.recv().await.unwrap();
        while render.posts.is_empty() {
            render = render_rx.recv().await.unwrap();
        }
        assert_eq!(render.posts.len(), 1);
        assert_eq!(render.posts[0].title, "a");
        let fetched_at = render.last_fetch_time;
        assert!(fetched_at.is_some());

        // Second fetch gets garbage; nothing may clear or replace the posts
        ui_tx.send(UiEvent::Appeared).unwrap();
        served.await.unwrap();
        while let Ok(Some(render)) = timeout(Duration::from_millis(500), render_rx.recv()).await {
            assert_eq!(render.posts.len(), 1);
            assert_eq!(render.posts[0].title, "a");
            assert_eq!(render.last_fetch_time, fetched_at);
        }
    }
}
