//! Network actor - runs post fetches in Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, fetch_posts};

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchPosts { id, url }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            // No dedup: overlapping fetches all report back
                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %url, "Fetching posts");
                                match fetch_posts(&client, &url).await {
                                    Ok(posts) => {
                                        tracing::info!(id, count = posts.len(), "Fetch completed");
                                        let loaded = NetworkResponse::PostsLoaded { id, posts };
                                        let _ = response_tx.send(loaded);
                                    }
                                    Err(e) if e.is_transport() => {
                                        tracing::error!(id, error = %e, "Fetch failed");
                                    }
                                    Err(e) => {
                                        tracing::debug!(
                                            id,
                                            error = %e,
                                            "Discarding undecodable response"
                                        );
                                    }
                                }
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
