//! Folio Core - Headless Portfolio Logic
//!
//! Everything the portfolio does that is not drawing: the hero's typing
//! loop, the particle background simulation, the project catalog, coding
//! statistics, the contact form, and the HTTP sources feeding them.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                     folio (TUI)                           │
//! │   sections · compositor · cursor · background renderer    │
//! └─────────────┬───────────────────────────────┬─────────────┘
//!               │ snapshots / state             │ fetch / submit
//! ┌─────────────┴───────────────┐ ┌─────────────┴─────────────┐
//! │  typing · particles         │ │  source::PortfolioSource  │
//! │  projects · stats · contact │ │  (HttpSource, Offline)    │
//! └─────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! # Module Overview
//!
//! - [`typing`]: The typing/deleting loop and its timer driver
//! - [`particles`]: The drifting node field behind everything
//! - [`projects`]: Repository filtering, categories, paging, featured list
//! - [`stats`]: Coding statistics and the submission heatmap
//! - [`contact`]: Contact form validation and submission status
//! - [`source`]: Where repositories, stats and contact delivery come from
//! - [`profile`]: Static page content
//! - [`config`]: TOML/env/CLI configuration
//!
//! # No TUI Dependencies
//!
//! This crate does not depend on ratatui or crossterm.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod contact;
pub mod particles;
pub mod profile;
pub mod projects;
pub mod source;
pub mod stats;
pub mod typing;

pub use config::{
    default_config_path, load_config, load_config_from_path, CliOverrides, ConfigError,
    ConfigSource, FolioConfig, FolioToml,
};
pub use contact::{ContactError, ContactForm, ContactPayload, Field, SubmissionStatus};
pub use particles::{FieldConfig, Link, Node, ParticleField};
pub use profile::{Profile, SiteMeta};
pub use projects::{Category, CategoryFilter, ProjectView, Repo, SortOrder};
pub use source::{HttpSource, OfflineSource, PortfolioSource, SourceConfig, SourceError};
pub use stats::{CodingStats, Difficulty, HeatDay, StatsLoad, StatsResponse};
pub use typing::{
    Action, AnimationState, Step, TypingDriver, TypingLoop, TypingSnapshot, TypingTimings,
};
