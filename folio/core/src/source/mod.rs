//! Portfolio Data Sources
//!
//! Everything the portfolio fetches goes through [`PortfolioSource`].
//!
//! # Available Sources
//!
//! - **HttpSource**: GitHub, the stats relay and the contact relay (default)
//! - **OfflineSource**: canned data, no network
//!
//! # Usage
//!
//! ```ignore
//! use folio_core::source::{HttpSource, PortfolioSource, SourceConfig};
//!
//! let source = HttpSource::new(SourceConfig::default())?;
//! let repos = source.fetch_repos().await?;
//! ```

mod http;
mod offline;
mod traits;

pub use http::HttpSource;
pub use offline::OfflineSource;
pub use traits::{PortfolioSource, SourceConfig, SourceError};
