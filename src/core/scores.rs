//! High-score store boundary and the channel-backed client the game loop
//! polls, so score traffic never blocks a frame.
use std::fmt::Write as _;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("score store unreachable: {0}")]
    Unreachable(String),
}

/// The external store contract: append a score, list them back in the
/// store's own order. The transport behind an implementation is opaque.
pub trait ScoreStore: Send + 'static {
    fn add_high_score(&mut self, name: &str, score: u32) -> Result<(), ScoreError>;
    fn high_scores(&self) -> Result<Vec<ScoreEntry>, ScoreError>;
}

/// Store used by the demo binary and tests: keeps entries in insertion
/// order, never fails.
#[derive(Default)]
pub struct InMemoryScoreStore {
    entries: Vec<ScoreEntry>,
}

impl ScoreStore for InMemoryScoreStore {
    fn add_high_score(&mut self, name: &str, score: u32) -> Result<(), ScoreError> {
        self.entries.push(ScoreEntry {
            name: name.to_owned(),
            score,
        });
        Ok(())
    }

    fn high_scores(&self) -> Result<Vec<ScoreEntry>, ScoreError> {
        Ok(self.entries.clone())
    }
}

enum Request {
    Submit { name: String, score: u32 },
    Fetch,
}

#[derive(Debug)]
pub enum ScoreEvent {
    Submitted(Result<(), ScoreError>),
    Fetched(Result<Vec<ScoreEntry>, ScoreError>),
}

/// Owns a worker thread that talks to the store. `submit` and `fetch`
/// enqueue and return immediately; completions come back through `poll`.
/// Dropping the client closes the request channel and joins the worker.
pub struct ScoreClient {
    requests: Option<Sender<Request>>,
    events: Receiver<ScoreEvent>,
    worker: Option<JoinHandle<()>>,
}

impl ScoreClient {
    pub fn spawn(mut store: impl ScoreStore) -> Self {
        let (req_tx, req_rx) = mpsc::channel::<Request>();
        let (event_tx, event_rx) = mpsc::channel();
        let worker = thread::spawn(move || {
            for request in req_rx {
                let event = match request {
                    Request::Submit { name, score } => {
                        debug!(name = %name, score, "submitting high score");
                        let result = store.add_high_score(&name, score);
                        if let Err(err) = &result {
                            warn!(%err, "high score submission failed");
                        }
                        ScoreEvent::Submitted(result)
                    }
                    Request::Fetch => {
                        let result = store.high_scores();
                        if let Err(err) = &result {
                            warn!(%err, "high score fetch failed");
                        }
                        ScoreEvent::Fetched(result)
                    }
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });
        Self {
            requests: Some(req_tx),
            events: event_rx,
            worker: Some(worker),
        }
    }

    pub fn submit(&self, name: &str, score: u32) {
        self.send(Request::Submit {
            name: name.to_owned(),
            score,
        });
    }

    pub fn fetch(&self) {
        self.send(Request::Fetch);
    }

    fn send(&self, request: Request) {
        if let Some(tx) = &self.requests {
            // A send error means the worker is gone; the next poll finds
            // the channel disconnected and the caller sees nothing worse
            // than a missing reply.
            let _ = tx.send(request);
        }
    }

    /// Non-blocking drain, called once per tick by the game loop.
    pub fn poll(&self) -> Option<ScoreEvent> {
        self.events.try_recv().ok()
    }

    /// Blocking variant for tests.
    pub fn wait(&self, timeout: Duration) -> Option<ScoreEvent> {
        self.events.recv_timeout(timeout).ok()
    }
}

impl Drop for ScoreClient {
    fn drop(&mut self) {
        drop(self.requests.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// 1-indexed numbered listing, one entry per line.
pub fn format_listing(entries: &[ScoreEntry]) -> String {
    let mut out = String::from("High Scores:\n");
    for (index, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "{}. {}: {}", index + 1, entry.name, entry.score);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl ScoreStore for FailingStore {
        fn add_high_score(&mut self, _name: &str, _score: u32) -> Result<(), ScoreError> {
            Err(ScoreError::Unreachable("backend offline".into()))
        }

        fn high_scores(&self) -> Result<Vec<ScoreEntry>, ScoreError> {
            Err(ScoreError::Unreachable("backend offline".into()))
        }
    }

    fn timeout() -> Duration {
        Duration::from_secs(5)
    }

    #[test]
    fn added_scores_come_back_in_insertion_order() {
        let mut store = InMemoryScoreStore::default();
        store.add_high_score("Ada", 42).unwrap();
        store.add_high_score("Grace", 7).unwrap();
        let scores = store.high_scores().unwrap();
        assert_eq!(scores[0], ScoreEntry { name: "Ada".into(), score: 42 });
        assert_eq!(scores[1], ScoreEntry { name: "Grace".into(), score: 7 });
    }

    #[test]
    fn client_round_trips_submit_then_fetch() {
        let client = ScoreClient::spawn(InMemoryScoreStore::default());
        client.submit("Ada", 42);
        match client.wait(timeout()) {
            Some(ScoreEvent::Submitted(Ok(()))) => {}
            other => panic!("unexpected event: {other:?}"),
        }
        client.fetch();
        match client.wait(timeout()) {
            Some(ScoreEvent::Fetched(Ok(scores))) => {
                assert!(scores.contains(&ScoreEntry { name: "Ada".into(), score: 42 }));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn store_failure_surfaces_and_client_stays_usable() {
        let client = ScoreClient::spawn(FailingStore);
        client.submit("Ada", 42);
        match client.wait(timeout()) {
            Some(ScoreEvent::Submitted(Err(ScoreError::Unreachable(_)))) => {}
            other => panic!("unexpected event: {other:?}"),
        }
        client.fetch();
        match client.wait(timeout()) {
            Some(ScoreEvent::Fetched(Err(ScoreError::Unreachable(_)))) => {}
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn poll_is_non_blocking_when_idle() {
        let client = ScoreClient::spawn(InMemoryScoreStore::default());
        assert!(client.poll().is_none());
    }

    #[test]
    fn listing_is_one_indexed() {
        let entries = vec![
            ScoreEntry { name: "Ada".into(), score: 42 },
            ScoreEntry { name: "Grace".into(), score: 7 },
        ];
        let listing = format_listing(&entries);
        assert!(listing.contains("1. Ada: 42"));
        assert!(listing.contains("2. Grace: 7"));
    }
}
