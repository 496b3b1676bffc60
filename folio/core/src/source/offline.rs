//! Offline Source
//!
//! Serves whatever it was constructed with and never touches the network.
//! Used by `--offline` and as a test double.

use async_trait::async_trait;

use super::traits::{PortfolioSource, SourceError};
use crate::contact::ContactPayload;
use crate::projects::Repo;
use crate::stats::CodingStats;

/// A source with canned data
#[derive(Clone, Debug, Default)]
pub struct OfflineSource {
    repos: Vec<Repo>,
    stats: Option<CodingStats>,
}

impl OfflineSource {
    /// Nothing at all: empty repository list and no statistics
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repos(mut self, repos: Vec<Repo>) -> Self {
        self.repos = repos;
        self
    }

    pub fn with_stats(mut self, stats: CodingStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

#[async_trait]
impl PortfolioSource for OfflineSource {
    fn name(&self) -> &str {
        "offline"
    }

    async fn fetch_repos(&self) -> Result<Vec<Repo>, SourceError> {
        Ok(self.repos.clone())
    }

    async fn fetch_stats(&self) -> Result<Option<CodingStats>, SourceError> {
        Ok(self.stats.clone())
    }

    async fn submit_contact(&self, _payload: &ContactPayload) -> Result<(), SourceError> {
        Err(SourceError::Offline("contact relay"))
    }
}
