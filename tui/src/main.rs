//! Folio Entry Point
//!
//! Usage:
//!   folio [OPTIONS]
//!
//! Options:
//!   --config <PATH>    Config file (default: ~/.config/folio/folio.toml)
//!   --offline          Don't contact GitHub, the stats service or the form relay
//!   --no-background    Disable the particle background
//!   --fps <FPS>        Frame rate
//!   --log-file <PATH>  Write logs to a file (the screen is taken by the UI)

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::{
    load_config_from_path, CliOverrides, FolioConfig, HttpSource, OfflineSource,
    PortfolioSource, Profile,
};
use folio_tui::App;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "A developer portfolio in your terminal")]
struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Don't make network requests
    #[arg(long)]
    offline: bool,

    /// Disable the particle background
    #[arg(long)]
    no_background: bool,

    /// Frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Profile content (TOML)
    #[arg(long)]
    profile: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides::new();
        if self.offline {
            overrides = overrides.with_offline(true);
        }
        if self.no_background {
            overrides = overrides.with_no_background(true);
        }
        if let Some(fps) = self.fps {
            overrides = overrides.with_fps(fps);
        }
        if let Some(path) = &self.log_file {
            overrides = overrides.with_log_file(path.clone());
        }
        if let Some(path) = &self.profile {
            overrides = overrides.with_profile_path(path.clone());
        }
        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config_from_path(cli.config.clone())?;
    cli.overrides().apply(&mut config);
    config.validate()?;

    init_logging(&config)?;
    tracing::info!(source = ?config.source(), file = ?config.config_file_path, "Configuration loaded");

    let profile = match &config.profile_path {
        Some(path) => Profile::from_toml_path(path)?,
        None => Profile::default(),
    };
    let source = choose_source(&config);

    // Check if we have a TTY before attempting initialization
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: folio requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means stdin or stdout is piped, or SSH ran without -t.");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle(&profile.meta.title)
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    let result = run_app(&mut terminal, config, profile, source).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: FolioConfig,
    profile: Profile,
    source: Arc<dyn PortfolioSource>,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
    let mut app = App::new(config, profile, source, area);
    let result = app.run(terminal).await;
    app.shutdown().await;
    result
}

/// Live services unless offline; fall back to offline if the client can't be built
fn choose_source(config: &FolioConfig) -> Arc<dyn PortfolioSource> {
    if config.offline {
        tracing::info!("Running offline");
        return Arc::new(OfflineSource::new());
    }
    match HttpSource::new(config.sources.clone()) {
        Ok(source) => Arc::new(source),
        Err(e) => {
            tracing::warn!(error = %e, "HTTP client unavailable, running offline");
            Arc::new(OfflineSource::new())
        }
    }
}

/// Logs go to a file or nowhere; the terminal belongs to the UI
fn init_logging(config: &FolioConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(file)),
                )
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(io::sink),
                )
                .with(filter)
                .init();
        }
    }
    Ok(())
}
