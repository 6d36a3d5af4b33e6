use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;

use crate::client::MealClient;
use crate::event::FetchUpdateEvent;

/// Spawns fetch tasks and reports their outcomes to the UI loop.
///
/// Every fetch is tagged with a monotonically increasing sequence number that
/// travels with the result event. Requests are never cancelled; superseded
/// responses are discarded by the app when they arrive.
pub struct FetchManager {
    client: MealClient,
    runtime: tokio::runtime::Handle,
    event_sender: mpsc::Sender<FetchUpdateEvent>,
    next_seq: AtomicU64,
}

impl FetchManager {
    pub fn new(
        client: MealClient,
        runtime: tokio::runtime::Handle,
        event_sender: mpsc::Sender<FetchUpdateEvent>,
    ) -> Self {
        Self {
            client,
            runtime,
            event_sender,
            next_seq: AtomicU64::new(0),
        }
    }

    /// Starts a search for `query` and returns the sequence tag issued to it.
    pub fn search(&self, query: String) -> u64 {
        let seq = self.issue_seq();
        let client = self.client.clone();
        let sender = self.event_sender.clone();

        self.runtime.spawn(async move {
            tracing::debug!(seq, %query, "dispatching search");
            let result = client
                .search_meals(&query)
                .await
                .map_err(|e| e.to_string());
            let _ = sender
                .send(FetchUpdateEvent::SearchResults { seq, result })
                .await;
        });
        seq
    }

    /// Starts a random-meal fetch; it participates in the same sequence
    /// ordering as searches, so whichever was issued last wins.
    pub fn fetch_random(&self) -> u64 {
        let seq = self.issue_seq();
        let client = self.client.clone();
        let sender = self.event_sender.clone();

        self.runtime.spawn(async move {
            tracing::debug!(seq, "dispatching random meal fetch");
            let result = client.random_meal().await.map_err(|e| e.to_string());
            let _ = sender
                .send(FetchUpdateEvent::SearchResults { seq, result })
                .await;
        });
        seq
    }

    fn issue_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_manager() -> (FetchManager, mpsc::Receiver<FetchUpdateEvent>) {
        let (tx, rx) = mpsc::channel(16);
        // Loopback port 1 is never served; spawned fetches fail fast and
        // harmlessly in tests that only care about sequencing.
        let manager = FetchManager::new(
            MealClient::new("http://127.0.0.1:1"),
            tokio::runtime::Handle::current(),
            tx,
        );
        (manager, rx)
    }

    #[tokio::test]
    async fn sequence_tags_increase_monotonically() {
        let (manager, _rx) = test_manager();
        let first = manager.search("pasta".to_string());
        let second = manager.search("soup".to_string());
        let third = manager.fetch_random();
        assert!(first < second);
        assert!(second < third);
    }

    #[tokio::test]
    async fn failed_fetch_reports_back_with_its_tag() {
        let (manager, mut rx) = test_manager();
        let seq = manager.search("pasta".to_string());

        let FetchUpdateEvent::SearchResults {
            seq: reported,
            result,
        } = rx.recv().await.expect("fetch task should report");
        assert_eq!(reported, seq);
        assert!(result.is_err());
    }
}
