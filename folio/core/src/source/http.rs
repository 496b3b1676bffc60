//! HTTP Source
//!
//! Talks to the public services over HTTPS with a single shared
//! `reqwest::Client`.
//!
//! # Endpoints
//!
//! - `GET {github_api}/users/{user}/repos?per_page=100&sort=updated`
//! - `GET {stats_api}/{user}`
//! - `POST {contact_api}/{email}` with a JSON [`ContactPayload`]

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use super::traits::{PortfolioSource, SourceConfig, SourceError};
use crate::contact::ContactPayload;
use crate::projects::Repo;
use crate::stats::{CodingStats, StatsResponse};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Live source backed by the public HTTP services
#[derive(Clone)]
pub struct HttpSource {
    config: SourceConfig,
    http_client: reqwest::Client,
}

impl HttpSource {
    /// Create a source with the configured timeout
    pub fn new(config: SourceConfig) -> Result<Self, SourceError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(AGENT)
            .build()
            .map_err(|source| SourceError::Http {
                url: String::new(),
                source,
            })?;
        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Send a prepared request and decode a JSON body, checking status first
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> Result<T, SourceError> {
        let response = request.send().await.map_err(|source| SourceError::Http {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| SourceError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl PortfolioSource for HttpSource {
    fn name(&self) -> &str {
        "live"
    }

    async fn fetch_repos(&self) -> Result<Vec<Repo>, SourceError> {
        let url = self.config.repos_url();
        tracing::debug!(%url, "Fetching repositories");

        let request = self
            .http_client
            .get(&url)
            .header(ACCEPT, GITHUB_ACCEPT);
        let body: serde_json::Value = self.get_json(url.clone(), request).await?;

        // Rate-limit and error bodies are objects, not lists
        let serde_json::Value::Array(items) = body else {
            tracing::warn!(%url, "Repository listing was not an array");
            return Ok(Vec::new());
        };

        let mut repos = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<Repo>(item) {
                Ok(repo) => repos.push(repo),
                Err(e) => tracing::debug!(error = %e, "Skipping malformed repository entry"),
            }
        }
        tracing::info!(count = repos.len(), "Repositories loaded");
        Ok(repos)
    }

    async fn fetch_stats(&self) -> Result<Option<CodingStats>, SourceError> {
        let url = self.config.stats_url();
        tracing::debug!(%url, "Fetching coding statistics");

        let request = self.http_client.get(&url).header(ACCEPT, "application/json");
        let response: StatsResponse = self.get_json(url, request).await?;

        let stats = CodingStats::from_response(self.config.stats_user.clone(), response);
        if stats.is_none() {
            tracing::warn!("Stats service reported failure");
        }
        Ok(stats)
    }

    async fn submit_contact(&self, payload: &ContactPayload) -> Result<(), SourceError> {
        let url = self.config.contact_url();
        tracing::info!(name = %payload.name, "Sending contact message");

        let request = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload);
        let reply: RelayReply = self.get_json(url, request).await.or_else(|e| match e {
            // The relay occasionally answers 200 with an empty body
            SourceError::Decode { .. } => Ok(RelayReply::default()),
            other => Err(other),
        })?;

        if reply.is_failure() {
            return Err(SourceError::Rejected(
                reply.message.unwrap_or_else(|| "Failed to send message.".to_string()),
            ));
        }
        Ok(())
    }
}

/// Contact relay acknowledgement; `success` is sometimes a string
#[derive(Debug, Default, serde::Deserialize)]
struct RelayReply {
    #[serde(default)]
    success: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

impl RelayReply {
    fn is_failure(&self) -> bool {
        match &self.success {
            Some(serde_json::Value::Bool(b)) => !b,
            Some(serde_json::Value::String(s)) => s.eq_ignore_ascii_case("false"),
            _ => false,
        }
    }
}
