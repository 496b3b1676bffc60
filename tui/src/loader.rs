//! Background Loading
//!
//! Network calls run on spawned tasks so the UI never waits on them. Each
//! task reports back through a channel that the app loop drains alongside
//! terminal events.

use std::sync::Arc;

use tokio::sync::mpsc;

use folio_core::{CodingStats, ContactPayload, PortfolioSource, Repo, SourceError};

/// Channel capacity; three kinds of result, at most a few in flight
const CHANNEL_SIZE: usize = 16;

/// A finished background request
#[derive(Debug)]
pub enum LoadEvent {
    Repos(Result<Vec<Repo>, SourceError>),
    Stats(Result<Option<CodingStats>, SourceError>),
    Contact(Result<(), SourceError>),
}

/// Loading state of the repository list
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RepoLoad {
    #[default]
    Loading,
    /// Filtered list, possibly empty
    Loaded(Vec<Repo>),
    Failed,
}

impl RepoLoad {
    pub fn repos(&self) -> &[Repo] {
        match self {
            Self::Loaded(repos) => repos,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Spawns requests against a source and forwards their results
pub struct Loader {
    source: Arc<dyn PortfolioSource>,
    tx: mpsc::Sender<LoadEvent>,
}

impl Loader {
    /// Create a loader and the receiver its results arrive on
    pub fn new(source: Arc<dyn PortfolioSource>) -> (Self, mpsc::Receiver<LoadEvent>) {
        let (tx, rx) = mpsc::channel(CHANNEL_SIZE);
        (Self { source, tx }, rx)
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetch repositories and statistics concurrently
    pub fn load_all(&self) {
        tracing::info!(source = self.source.name(), "Loading portfolio data");

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_repos().await;
            let _ = tx.send(LoadEvent::Repos(result)).await;
        });

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_stats().await;
            let _ = tx.send(LoadEvent::Stats(result)).await;
        });
    }

    /// Send a contact message
    pub fn submit(&self, payload: ContactPayload) {
        tracing::info!(source = self.source.name(), "Submitting contact form");

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.submit_contact(&payload).await;
            let _ = tx.send(LoadEvent::Contact(result)).await;
        });
    }
}
