use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};

use axum::extract::ws::Message;
use chrono::Utc;
use serde::Serialize;
use storage::dto::leaderboard::{LeaderboardEntry, LeaderboardSnapshot};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Wire envelope pushed to viewers. Tagged so clients can tell leaderboard
/// payloads apart from anything else the transport carries.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum LeaderboardMessage {
    LeaderboardUpdate(LeaderboardSnapshot),
}

/// Fan-out point for live standings. Each viewer connection owns an unbounded
/// channel the hub writes to; the socket read/write loop lives in the
/// connection handler, so a slow or dead socket never stalls publishing.
pub struct LeaderboardHub {
    viewers: Mutex<HashMap<Uuid, mpsc::UnboundedSender<Message>>>,
    latest: RwLock<LeaderboardSnapshot>,
    version: AtomicU64,
    refresh_lock: tokio::sync::Mutex<()>,
}

impl LeaderboardHub {
    pub fn new() -> Self {
        Self {
            viewers: Mutex::new(HashMap::new()),
            latest: RwLock::new(LeaderboardSnapshot::empty()),
            version: AtomicU64::new(0),
            refresh_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Serializes recompute-and-publish sequences. Held across the
    /// ledger read so two concurrent mutations cannot publish out of order.
    pub async fn refresh_guard(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.refresh_lock.lock().await
    }

    /// Registers a viewer and immediately queues the latest snapshot, so a
    /// fresh subscriber never waits for the next mutation to see standings.
    ///
    /// The hello and the registration form one critical section with
    /// `publish`: a viewer joining mid-publish either gets the old snapshot
    /// plus the fan-out, or just the new snapshot as its hello. Its first
    /// message is never older than the last completed publish.
    pub fn subscribe(&self) -> (Uuid, mpsc::UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let viewer_id = Uuid::new_v4();

        let mut viewers = self.viewers.lock().expect("viewer registry lock poisoned");

        let hello = encode(&self.latest());
        // The receiver is still in hand, this send cannot fail.
        let _ = tx.send(Message::Text(hello));

        viewers.insert(viewer_id, tx);

        (viewer_id, rx)
    }

    /// Idempotent: unsubscribing an unknown or already-removed viewer is fine.
    pub fn unsubscribe(&self, viewer_id: Uuid) {
        self.viewers
            .lock()
            .expect("viewer registry lock poisoned")
            .remove(&viewer_id);
    }

    /// Stamps a new snapshot version, stores it as the latest, and fans it out
    /// to every registered viewer. Delivery is best-effort per viewer: a
    /// closed channel drops that viewer and the rest still receive.
    pub fn publish(&self, entries: Vec<LeaderboardEntry>) -> LeaderboardSnapshot {
        // Registry lock taken before the latest-snapshot write: storing the
        // snapshot and delivering it to the registered set is atomic with
        // respect to `subscribe`.
        let mut viewers = self.viewers.lock().expect("viewer registry lock poisoned");

        let snapshot = LeaderboardSnapshot {
            version: self.version.fetch_add(1, Ordering::SeqCst) + 1,
            generated_at: Utc::now(),
            entries,
        };

        *self
            .latest
            .write()
            .expect("latest snapshot lock poisoned") = snapshot.clone();

        let payload = encode(&snapshot);
        viewers.retain(|viewer_id, tx| {
            let delivered = tx.send(Message::Text(payload.clone())).is_ok();
            if !delivered {
                tracing::debug!(%viewer_id, "dropping disconnected viewer");
            }
            delivered
        });

        snapshot
    }

    pub fn latest(&self) -> LeaderboardSnapshot {
        self.latest
            .read()
            .expect("latest snapshot lock poisoned")
            .clone()
    }

    pub fn viewer_count(&self) -> usize {
        self.viewers
            .lock()
            .expect("viewer registry lock poisoned")
            .len()
    }
}

impl Default for LeaderboardHub {
    fn default() -> Self {
        Self::new()
    }
}

fn encode(snapshot: &LeaderboardSnapshot) -> String {
    serde_json::to_string(&LeaderboardMessage::LeaderboardUpdate(snapshot.clone()))
        .expect("snapshot serialization cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, rank: i64, points: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            college_id: Uuid::new_v4(),
            college_name: code.to_string(),
            college_code: code.to_string(),
            total_points: points,
        }
    }

    fn decode(message: Message) -> serde_json::Value {
        match message {
            Message::Text(text) => serde_json::from_str(&text).unwrap(),
            other => panic!("expected text frame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn new_subscriber_immediately_receives_latest_snapshot() {
        let hub = LeaderboardHub::new();
        hub.publish(vec![entry("ALP", 1, 100)]);

        let (_, mut rx) = hub.subscribe();
        let payload = decode(rx.recv().await.unwrap());

        assert_eq!(payload["type"], "leaderboard_update");
        assert_eq!(payload["data"]["version"], 1);
        assert_eq!(payload["data"]["entries"][0]["college_code"], "ALP");
    }

    #[tokio::test]
    async fn publish_reaches_every_registered_viewer() {
        let hub = LeaderboardHub::new();
        let (_, mut rx_a) = hub.subscribe();
        let (_, mut rx_b) = hub.subscribe();

        // Drain the subscription hellos.
        rx_a.recv().await.unwrap();
        rx_b.recv().await.unwrap();

        hub.publish(vec![entry("BET", 1, 50)]);

        let payload_a = decode(rx_a.recv().await.unwrap());
        let payload_b = decode(rx_b.recv().await.unwrap());
        assert_eq!(payload_a["data"]["entries"][0]["college_code"], "BET");
        assert_eq!(payload_a, payload_b);
    }

    #[tokio::test]
    async fn dead_viewer_is_dropped_without_blocking_others() {
        let hub = LeaderboardHub::new();
        let (_, rx_dead) = hub.subscribe();
        let (_, mut rx_live) = hub.subscribe();
        rx_live.recv().await.unwrap();

        drop(rx_dead);
        hub.publish(vec![entry("GAM", 1, 10)]);

        assert_eq!(hub.viewer_count(), 1);
        let payload = decode(rx_live.recv().await.unwrap());
        assert_eq!(payload["data"]["entries"][0]["college_code"], "GAM");
    }

    #[tokio::test]
    async fn unsubscribe_is_idempotent() {
        let hub = LeaderboardHub::new();
        let (viewer_id, _rx) = hub.subscribe();

        hub.unsubscribe(viewer_id);
        hub.unsubscribe(viewer_id);

        assert_eq!(hub.viewer_count(), 0);
    }

    #[tokio::test]
    async fn versions_increase_monotonically() {
        let hub = LeaderboardHub::new();

        let first = hub.publish(Vec::new());
        let second = hub.publish(Vec::new());
        let third = hub.publish(Vec::new());

        assert_eq!(first.version, 1);
        assert_eq!(second.version, 2);
        assert_eq!(third.version, 3);
        assert_eq!(hub.latest().version, 3);
    }

    #[tokio::test]
    async fn hello_is_never_older_than_the_last_publish_before_subscribing() {
        let hub = std::sync::Arc::new(LeaderboardHub::new());

        let publisher = {
            let hub = hub.clone();
            tokio::spawn(async move {
                for _ in 0..200 {
                    hub.publish(Vec::new());
                    tokio::task::yield_now().await;
                }
            })
        };

        for _ in 0..50 {
            let floor = hub.latest().version;
            let (viewer_id, mut rx) = hub.subscribe();
            let payload = decode(rx.recv().await.unwrap());

            let hello_version = payload["data"]["version"].as_u64().unwrap();
            assert!(
                hello_version >= floor,
                "hello carried version {} but {} was already published",
                hello_version,
                floor
            );

            hub.unsubscribe(viewer_id);
            tokio::task::yield_now().await;
        }

        publisher.await.unwrap();
    }

    #[tokio::test]
    async fn latest_reflects_the_most_recent_publish() {
        let hub = LeaderboardHub::new();
        assert!(hub.latest().entries.is_empty());

        hub.publish(vec![entry("ALP", 1, 100)]);
        hub.publish(vec![entry("BET", 1, 200)]);

        assert_eq!(hub.latest().entries[0].college_code, "BET");
    }
}
