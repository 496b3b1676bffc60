//! TOML Configuration File Support
//!
//! Centralized configuration loading for folio, from a TOML file at
//! `~/.config/folio/folio.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (`FOLIO_*`)
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! profile_path = "/home/me/.config/folio/profile.toml"
//!
//! [typing]
//! text = "Grace Hopper"
//! type_ms = 90
//! delete_ms = 50
//! pause_after_type_ms = 2000
//! pause_after_delete_ms = 800
//! start_delay_ms = 500
//!
//! [background]
//! enabled = true
//! node_count = 60
//! connection_distance = 150.0
//!
//! [sources]
//! github_user = "KING-258"
//! stats_user = "KING-258"
//! offline = false
//!
//! [projects]
//! excluded = ["email-agent-react", "Torch", "torch"]
//! featured = ["PacMan-RL", "Multi-Agent-RL"]
//!
//! [ui]
//! fps = 30
//! cursor = true
//!
//! [logging]
//! file = "/tmp/folio.log"
//! level = "info"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::particles::FieldConfig;
use crate::projects::{DEFAULT_EXCLUDED, DEFAULT_FEATURED};
use crate::source::SourceConfig;
use crate::typing::TypingTimings;

/// Highest frame rate the UI accepts
pub const MAX_FPS: u32 = 240;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Typing animation section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingToml {
    /// Text typed in the hero (defaults to the profile name)
    pub text: Option<String>,
    pub type_ms: Option<u64>,
    pub delete_ms: Option<u64>,
    pub pause_after_type_ms: Option<u64>,
    pub pause_after_delete_ms: Option<u64>,
    pub start_delay_ms: Option<u64>,
}

/// Particle background section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundToml {
    pub enabled: Option<bool>,
    pub node_count: Option<usize>,
    pub connection_distance: Option<f32>,
    pub max_speed: Option<f32>,
}

/// Remote services section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesToml {
    pub github_user: Option<String>,
    pub github_api: Option<String>,
    pub stats_user: Option<String>,
    pub stats_api: Option<String>,
    pub contact_email: Option<String>,
    pub contact_api: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Never touch the network
    pub offline: Option<bool>,
}

/// Project listing section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsToml {
    /// Repository names never shown
    pub excluded: Option<Vec<String>>,
    /// Repository names shown in the featured section, in order
    pub featured: Option<Vec<String>>,
}

/// Terminal UI section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiToml {
    pub fps: Option<u32>,
    /// Draw the mouse-following cursor
    pub cursor: Option<bool>,
}

/// Logging section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingToml {
    pub file: Option<PathBuf>,
    /// Filter directive used when `FOLIO_LOG`/`RUST_LOG` are unset
    pub level: Option<String>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioToml {
    /// Profile content file
    pub profile_path: Option<PathBuf>,
    pub typing: TypingToml,
    pub background: BackgroundToml,
    pub sources: SourcesToml,
    pub projects: ProjectsToml,
    pub ui: UiToml,
    pub logging: LoggingToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved configuration for folio
#[derive(Clone, Debug)]
pub struct FolioConfig {
    /// Hero text override; `None` types the profile name
    pub typing_text: Option<String>,
    pub typing: TypingTimings,
    pub background_enabled: bool,
    pub field: FieldConfig,
    pub sources: SourceConfig,
    pub offline: bool,
    pub excluded_repos: Vec<String>,
    pub featured_repos: Vec<String>,
    pub fps: u32,
    pub cursor_enabled: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub profile_path: Option<PathBuf>,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            typing_text: None,
            typing: TypingTimings::default(),
            background_enabled: true,
            field: FieldConfig::default(),
            sources: SourceConfig::default(),
            offline: false,
            excluded_repos: DEFAULT_EXCLUDED.iter().map(|s| (*s).to_string()).collect(),
            featured_repos: DEFAULT_FEATURED.iter().map(|s| (*s).to_string()).collect(),
            fps: 30,
            cursor_enabled: true,
            log_file: None,
            log_level: "info".to_string(),
            profile_path: None,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl FolioConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Time budget for one frame
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.clamp(1, MAX_FPS)))
    }

    /// Reject values the UI cannot run with
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::ValidationError(format!(
                "fps must be between 1 and {MAX_FPS}, got {}",
                self.fps
            )));
        }
        if self.typing_text.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "typing.text must not be empty".to_string(),
            ));
        }
        if self.background_enabled && self.field.node_count == 0 {
            return Err(ConfigError::ValidationError(
                "background.node_count must be at least 1 (disable the background instead)"
                    .to_string(),
            ));
        }
        let field = &self.field;
        for (name, value) in [
            ("max_speed", field.max_speed),
            ("connection_distance", field.connection_distance),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "background.{name} must be a positive number, got {value}"
                )));
            }
        }
        for (name, value) in [("min_radius", field.min_radius), ("max_radius", field.max_radius)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "background.{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.sources.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "sources.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/folio/folio.toml` or
/// `~/.config/folio/folio.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("folio").join("folio.toml"))
}

/// Load configuration from the default path and the environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
/// A missing config file is not an error (defaults are used).
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<FolioConfig, ConfigError> {
    let mut config = FolioConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: FolioToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config);

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut FolioConfig, toml: &FolioToml) {
    if toml.profile_path.is_some() {
        config.profile_path = toml.profile_path.clone();
    }

    // Typing
    if toml.typing.text.is_some() {
        config.typing_text = toml.typing.text.clone();
    }
    if let Some(ms) = toml.typing.type_ms {
        config.typing.type_speed = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.typing.delete_ms {
        config.typing.delete_speed = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.typing.pause_after_type_ms {
        config.typing.pause_after_type = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.typing.pause_after_delete_ms {
        config.typing.pause_after_delete = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.typing.start_delay_ms {
        config.typing.start_delay = Duration::from_millis(ms);
    }

    // Background
    if let Some(enabled) = toml.background.enabled {
        config.background_enabled = enabled;
    }
    if let Some(count) = toml.background.node_count {
        config.field.node_count = count;
    }
    if let Some(distance) = toml.background.connection_distance {
        config.field.connection_distance = distance;
    }
    if let Some(speed) = toml.background.max_speed {
        config.field.max_speed = speed;
    }

    // Sources
    let s = &toml.sources;
    if let Some(ref user) = s.github_user {
        config.sources.github_user = user.clone();
    }
    if let Some(ref api) = s.github_api {
        config.sources.github_api = api.clone();
    }
    if let Some(ref user) = s.stats_user {
        config.sources.stats_user = user.clone();
    }
    if let Some(ref api) = s.stats_api {
        config.sources.stats_api = api.clone();
    }
    if let Some(ref email) = s.contact_email {
        config.sources.contact_email = email.clone();
    }
    if let Some(ref api) = s.contact_api {
        config.sources.contact_api = api.clone();
    }
    if let Some(secs) = s.timeout_secs {
        config.sources.timeout_secs = secs;
    }
    if let Some(offline) = s.offline {
        config.offline = offline;
    }

    // Projects
    if let Some(ref excluded) = toml.projects.excluded {
        config.excluded_repos = excluded.clone();
    }
    if let Some(ref featured) = toml.projects.featured {
        config.featured_repos = featured.clone();
    }

    // UI
    if let Some(fps) = toml.ui.fps {
        config.fps = fps;
    }
    if let Some(cursor) = toml.ui.cursor {
        config.cursor_enabled = cursor;
    }

    // Logging
    if toml.logging.file.is_some() {
        config.log_file = toml.logging.file.clone();
    }
    if let Some(ref level) = toml.logging.level {
        config.log_level = level.clone();
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config(config: &mut FolioConfig) {
    apply_env_from(config, |key| std::env::var(key).ok());
}

/// Apply `FOLIO_*` overrides read through `lookup`
///
/// Unparseable values are ignored.
pub fn apply_env_from<F>(config: &mut FolioConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let flag = |v: &str| v != "0" && !v.eq_ignore_ascii_case("false");

    if let Some(user) = lookup("FOLIO_GITHUB_USER") {
        config.sources.github_user = user;
        config.source = ConfigSource::Env;
    }
    if let Some(user) = lookup("FOLIO_STATS_USER") {
        config.sources.stats_user = user;
        config.source = ConfigSource::Env;
    }
    if let Some(email) = lookup("FOLIO_CONTACT_EMAIL") {
        config.sources.contact_email = email;
        config.source = ConfigSource::Env;
    }
    if let Some(offline) = lookup("FOLIO_OFFLINE") {
        config.offline = flag(&offline);
        config.source = ConfigSource::Env;
    }
    if let Some(disabled) = lookup("FOLIO_NO_BACKGROUND") {
        config.background_enabled = !flag(&disabled);
        config.source = ConfigSource::Env;
    }
    if let Some(fps) = lookup("FOLIO_FPS") {
        if let Ok(n) = fps.parse::<u32>() {
            config.fps = n;
            config.source = ConfigSource::Env;
        }
    }
    if let Some(path) = lookup("FOLIO_LOG_FILE") {
        config.log_file = Some(PathBuf::from(path));
        config.source = ConfigSource::Env;
    }
    if let Some(path) = lookup("FOLIO_PROFILE") {
        config.profile_path = Some(PathBuf::from(path));
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct CliOverrides {
    pub offline: Option<bool>,
    pub no_background: Option<bool>,
    pub fps: Option<u32>,
    pub log_file: Option<PathBuf>,
    pub profile_path: Option<PathBuf>,
}

impl CliOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = Some(offline);
        self
    }

    #[must_use]
    pub fn with_no_background(mut self, disabled: bool) -> Self {
        self.no_background = Some(disabled);
        self
    }

    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    #[must_use]
    pub fn with_profile_path(mut self, path: PathBuf) -> Self {
        self.profile_path = Some(path);
        self
    }

    fn is_empty(&self) -> bool {
        self.offline.is_none()
            && self.no_background.is_none()
            && self.fps.is_none()
            && self.log_file.is_none()
            && self.profile_path.is_none()
    }

    /// Apply overrides to a configuration
    pub fn apply(&self, config: &mut FolioConfig) {
        if self.is_empty() {
            return;
        }
        config.source = ConfigSource::Cli;

        if let Some(offline) = self.offline {
            config.offline = offline;
        }
        if let Some(disabled) = self.no_background {
            config.background_enabled = !disabled;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(ref path) = self.log_file {
            config.log_file = Some(path.clone());
        }
        if let Some(ref path) = self.profile_path {
            config.profile_path = Some(path.clone());
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn from_toml(content: &str) -> FolioConfig {
        let toml: FolioToml = toml::from_str(content).unwrap();
        let mut config = FolioConfig::default();
        apply_toml_config(&mut config, &toml);
        config
    }

    // =========================================================================
    // Default Configuration Tests
    // =========================================================================

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();

        assert_eq!(config.fps, 30);
        assert!(config.background_enabled);
        assert!(config.cursor_enabled);
        assert!(!config.offline);
        assert_eq!(config.typing, TypingTimings::default());
        assert_eq!(config.excluded_repos, vec!["email-agent-react", "Torch", "torch"]);
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        if let Some(p) = default_config_path() {
            assert!(p.ends_with("folio/folio.toml"));
        }
    }

    #[test]
    fn test_frame_duration() {
        let mut config = FolioConfig::default();
        config.fps = 50;
        assert_eq!(config.frame_duration(), Duration::from_millis(20));
    }

    // =========================================================================
    // TOML Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_valid_toml() {
        let toml_content = r#"
profile_path = "/srv/profile.toml"

[typing]
text = "Hello"
type_ms = 40
start_delay_ms = 0

[background]
enabled = false
node_count = 12

[sources]
github_user = "octocat"
timeout_secs = 3
offline = true

[projects]
excluded = ["junk"]

[ui]
fps = 60
cursor = false

[logging]
file = "/tmp/folio.log"
level = "debug"
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.typing_text.as_deref(), Some("Hello"));
        assert_eq!(config.typing.type_speed, Duration::from_millis(40));
        assert_eq!(config.typing.start_delay, Duration::ZERO);
        assert_eq!(config.typing.delete_speed, Duration::from_millis(50));
        assert!(!config.background_enabled);
        assert_eq!(config.field.node_count, 12);
        assert_eq!(config.sources.github_user, "octocat");
        assert_eq!(config.sources.timeout_secs, 3);
        assert_eq!(config.excluded_repos, vec!["junk"]);
        assert_eq!(config.fps, 60);
        assert!(!config.cursor_enabled);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.profile_path, Some(PathBuf::from("/srv/profile.toml")));
        assert_eq!(config.config_file_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = from_toml("[ui]\nfps = 15\n");
        assert_eq!(config.fps, 15);
        assert_eq!(config.sources, SourceConfig::default());
        assert_eq!(config.field, FieldConfig::default());
    }

    #[test]
    fn test_missing_file_graceful() {
        let config =
            load_config_from_path(Some(PathBuf::from("/nonexistent/folio/folio.toml"))).unwrap();
        assert!(config.config_file_path.is_none());
        assert_eq!(config.fps, 30);
    }

    #[test]
    fn test_malformed_toml_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[ui]\nfps = \"fast\"\n").unwrap();

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    // =========================================================================
    // Priority Ordering Tests
    // =========================================================================

    #[test]
    fn test_env_overrides_file() {
        let mut config = from_toml("[sources]\ngithub_user = \"file-user\"\n\n[ui]\nfps = 20\n");
        config.set_source(ConfigSource::File);

        apply_env_from(
            &mut config,
            env(&[("FOLIO_GITHUB_USER", "env-user"), ("FOLIO_FPS", "45")]),
        );

        assert_eq!(config.sources.github_user, "env-user");
        assert_eq!(config.fps, 45);
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_env_ignores_garbage() {
        let mut config = FolioConfig::default();
        apply_env_from(&mut config, env(&[("FOLIO_FPS", "lots")]));
        assert_eq!(config.fps, 30);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_env_flags() {
        let mut config = FolioConfig::default();
        apply_env_from(
            &mut config,
            env(&[("FOLIO_OFFLINE", "1"), ("FOLIO_NO_BACKGROUND", "false")]),
        );
        assert!(config.offline);
        assert!(config.background_enabled);
    }

    #[test]
    fn test_cli_overrides_env() {
        let mut config = FolioConfig::default();
        apply_env_from(&mut config, env(&[("FOLIO_FPS", "45")]));

        CliOverrides::new()
            .with_fps(10)
            .with_no_background(true)
            .apply(&mut config);

        assert_eq!(config.fps, 10);
        assert!(!config.background_enabled);
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_empty_overrides_no_change() {
        let mut config = FolioConfig::default();
        CliOverrides::new().apply(&mut config);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = FolioConfig::default();
        config.fps = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = FolioConfig::default();
        config.typing_text = Some("  ".to_string());
        assert!(config.validate().is_err());

        let mut config = FolioConfig::default();
        config.field.node_count = 0;
        assert!(config.validate().is_err());
        config.background_enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_finite_field_values() {
        let mut config = FolioConfig::default();
        config.field.max_speed = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = FolioConfig::default();
        config.field.max_speed = 0.0;
        assert!(config.validate().is_err());

        let mut config = FolioConfig::default();
        config.field.connection_distance = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = FolioConfig::default();
        config.field.max_radius = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_infinite_speed_in_toml_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[background]\nmax_speed = inf").unwrap();
        let err = load_config_from_path(Some(file.path().to_path_buf()))
            .and_then(|config| config.validate())
            .unwrap_err();
        assert!(err.to_string().contains("max_speed"));
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Cli.to_string(), "CLI");
        assert_eq!(ConfigSource::Env.to_string(), "environment");
        assert_eq!(ConfigSource::File.to_string(), "config file");
        assert_eq!(ConfigSource::Default.to_string(), "default");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ValidationError("fps must be between 1 and 240, got 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: fps must be between 1 and 240, got 0"
        );
    }
}
