//! Portfolio Source Traits
//!
//! The portfolio pulls three things from the outside world: the public
//! repository list, coding statistics, and the contact relay. Each goes
//! through [`PortfolioSource`] so the UI can run against the live services,
//! an offline stand-in, or a test double without changing.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::{ContactError, ContactPayload};
use crate::projects::Repo;
use crate::stats::CodingStats;

/// Errors from a portfolio source
#[derive(Debug, Error)]
pub enum SourceError {
    /// Request never completed (DNS, TLS, timeout, ...)
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body could not be decoded
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// Service answered but reported failure in its payload
    #[error("{0}")]
    Rejected(String),

    /// Source is not connected to anything
    #[error("offline: {0}")]
    Offline(&'static str),
}

impl From<SourceError> for ContactError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Status { .. } | SourceError::Rejected(_) => ContactError::Rejected,
            other => ContactError::Transport(other.to_string()),
        }
    }
}

/// Where the portfolio's live data comes from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// GitHub account whose public repositories are listed
    pub github_user: String,
    /// GitHub REST base URL
    pub github_api: String,
    /// LeetCode account for the statistics section
    pub stats_user: String,
    /// Stats relay base URL
    pub stats_api: String,
    /// Inbox the contact relay forwards to
    pub contact_email: String,
    /// Contact relay base URL
    pub contact_api: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            github_user: "KING-258".to_string(),
            github_api: "https://api.github.com".to_string(),
            stats_user: "KING-258".to_string(),
            stats_api: "https://leetcode-stats.tashif.codes".to_string(),
            contact_email: "amulyaparashar258@gmail.com".to_string(),
            contact_api: "https://formsubmit.co/ajax".to_string(),
            timeout_secs: 15,
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?per_page=100&sort=updated",
            self.github_api.trim_end_matches('/'),
            self.github_user
        )
    }

    pub fn stats_url(&self) -> String {
        format!("{}/{}", self.stats_api.trim_end_matches('/'), self.stats_user)
    }

    pub fn contact_url(&self) -> String {
        format!("{}/{}", self.contact_api.trim_end_matches('/'), self.contact_email)
    }
}

/// Portfolio data source
///
/// Implementations must be cheap to share; the TUI holds one behind an `Arc`
/// and calls it from spawned tasks.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// Human-readable name for logs and the status bar
    fn name(&self) -> &str;

    /// Public repositories, unfiltered, most recently updated first
    async fn fetch_repos(&self) -> Result<Vec<Repo>, SourceError>;

    /// Coding statistics; `Ok(None)` when the service has nothing usable
    async fn fetch_stats(&self) -> Result<Option<CodingStats>, SourceError>;

    /// Deliver a contact message
    async fn submit_contact(&self, payload: &ContactPayload) -> Result<(), SourceError>;
}
