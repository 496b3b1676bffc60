//! Integration Tests for the Folio App
//!
//! Drive the full app (state, rendering, hit-testing, background loads)
//! against a `TestBackend` and canned sources.
//!
//! # Test Coverage
//!
//! 1. **Navigation**: keys and clicks switch sections, q quits
//! 2. **Projects**: filters, selection, opening a project
//! 3. **Contact**: editing, validation, failed delivery toast
//! 4. **Event Loop**: background loads land while the loop runs

use std::io;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use folio_core::{
    Category, CategoryFilter, CodingStats, ContactError, ContactPayload, Field, FolioConfig,
    OfflineSource, PortfolioSource, Profile, Repo, SourceError, StatsLoad, SubmissionStatus,
};
use folio_tui::{nav, App, LoadEvent, RepoLoad, Section};

// ============================================================================
// Fixtures
// ============================================================================

fn repo(id: u64, name: &str, stars: u32, fork: bool) -> Repo {
    let when = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(id as i64);
    Repo {
        id,
        name: name.to_string(),
        description: None,
        html_url: format!("https://github.com/someone/{name}"),
        homepage: None,
        stargazers_count: stars,
        forks_count: 0,
        language: Some("Rust".to_string()),
        topics: Vec::new(),
        fork,
        updated_at: when,
        created_at: Some(when),
        pushed_at: when,
    }
}

fn repos() -> Vec<Repo> {
    vec![
        repo(1, "neural-net", 5, false),
        repo(2, "react-site", 9, false),
        repo(3, "tcp-server", 1, false),
        repo(4, "dotfiles", 0, false),
        repo(5, "someone-elses-lib", 50, true),
        repo(6, "Torch", 2, false),
    ]
}

fn quiet_config() -> FolioConfig {
    let mut config = FolioConfig::default();
    config.background_enabled = false;
    config
}

fn app_with(source: Arc<dyn PortfolioSource>, width: u16, height: u16) -> App {
    App::new(
        quiet_config(),
        Profile::default(),
        source,
        Rect::new(0, 0, width, height),
    )
}

fn offline_app() -> App {
    app_with(Arc::new(OfflineSource::new()), 100, 40)
}

fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}

/// Whole screen as text, one line per row
fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer.cell((x, y)).map_or(" ", |c| c.symbol()));
        }
        out.push('\n');
    }
    out
}

/// Source whose every request fails
struct Unreachable;

#[async_trait]
impl PortfolioSource for Unreachable {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn fetch_repos(&self) -> Result<Vec<Repo>, SourceError> {
        Err(SourceError::Status {
            url: "https://api.github.com".to_string(),
            status: 503,
        })
    }

    async fn fetch_stats(&self) -> Result<Option<CodingStats>, SourceError> {
        Err(SourceError::Rejected("down".to_string()))
    }

    async fn submit_contact(&self, _payload: &ContactPayload) -> Result<(), SourceError> {
        Err(SourceError::Rejected("down".to_string()))
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn test_keys_switch_sections_and_wrap() {
    let mut app = offline_app();
    assert_eq!(app.section(), Section::Home);

    app.handle_event(key(KeyCode::Right));
    assert_eq!(app.section(), Section::About);
    app.handle_event(key(KeyCode::Char('h')));
    assert_eq!(app.section(), Section::Home);
    app.handle_event(key(KeyCode::Left));
    assert_eq!(app.section(), Section::Contact);
    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.section(), Section::Home);

    app.shutdown().await;
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = offline_app();
    app.handle_event(key(KeyCode::Char('q')));
    assert!(!app.is_running());

    let mut app = offline_app();
    app.handle_event(ctrl('c'));
    assert!(!app.is_running());
}

#[tokio::test]
async fn test_click_nav_entry() {
    let mut app = offline_app();
    let mut term = terminal(100, 40);
    app.render(&mut term).unwrap();

    let (rect, _) = nav::layout(Rect::new(0, 0, 100, 1))
        .into_iter()
        .find(|(_, s)| *s == Section::Stats)
        .expect("stats entry fits");
    app.handle_event(click(rect.x + 1, rect.y));
    assert_eq!(app.section(), Section::Stats);
    assert!(app.cursor().is_pressed());
}

#[tokio::test]
async fn test_scroll_is_per_section() {
    // App and terminal agree on a short viewport so the hero overflows
    let mut app = app_with(Arc::new(OfflineSource::new()), 100, 12);
    let mut term = terminal(100, 12);
    app.render(&mut term).unwrap();

    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Down));
    assert_eq!(app.scroll_offset(), 2);

    app.handle_event(key(KeyCode::Right));
    assert_eq!(app.scroll_offset(), 0);
    app.handle_event(key(KeyCode::Left));
    assert_eq!(app.scroll_offset(), 2);

    app.handle_event(key(KeyCode::Home));
    assert_eq!(app.scroll_offset(), 0);
}

#[tokio::test]
async fn test_render_shows_brand_and_status() {
    let mut app = offline_app();
    let mut term = terminal(100, 40);
    app.render(&mut term).unwrap();

    let text = screen(&term);
    assert!(text.contains("AP."));
    assert!(text.contains("offline"));
    assert!(text.contains("repos: loading"));
}

// ============================================================================
// Loads
// ============================================================================

#[tokio::test]
async fn test_repo_load_drops_forks_and_excluded() {
    let mut app = offline_app();
    app.apply_load(LoadEvent::Repos(Ok(repos())));

    let names: Vec<&str> = app.repos().repos().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["neural-net", "react-site", "tcp-server", "dotfiles"]);
}

#[tokio::test]
async fn test_failed_loads() {
    let mut app = offline_app();
    app.apply_load(LoadEvent::Repos(Err(SourceError::Offline("github"))));
    app.apply_load(LoadEvent::Stats(Err(SourceError::Rejected("nope".into()))));

    assert!(matches!(app.repos(), RepoLoad::Failed));
    assert!(matches!(app.stats(), StatsLoad::Unavailable));

    app.apply_load(LoadEvent::Stats(Ok(None)));
    assert!(matches!(app.stats(), StatsLoad::Unavailable));
}

// ============================================================================
// Projects
// ============================================================================

#[tokio::test]
async fn test_project_filter_resets_selection() {
    let mut app = offline_app();
    app.apply_load(LoadEvent::Repos(Ok(repos())));
    for _ in 0..3 {
        app.handle_event(key(KeyCode::Right));
    }
    assert_eq!(app.section(), Section::Projects);

    app.handle_event(key(KeyCode::Char('j')));
    app.handle_event(key(KeyCode::Char('j')));
    assert_eq!(app.selected(), Some(1));

    app.handle_event(key(KeyCode::Char('2')));
    assert_eq!(app.projects().filter(), CategoryFilter::Only(Category::AiMl));
    assert_eq!(app.selected(), None);

    // Only one AI/ML project; selection stops at the end
    app.handle_event(key(KeyCode::Char('j')));
    app.handle_event(key(KeyCode::Char('j')));
    assert_eq!(app.selected(), Some(0));

    app.handle_event(key(KeyCode::Enter));
    let notice = app.notice().expect("opening a project shows its URL");
    assert_eq!(notice.text, "https://github.com/someone/neural-net");
}

#[tokio::test]
async fn test_sort_toggle_and_show_all_keys() {
    let mut app = offline_app();
    app.apply_load(LoadEvent::Repos(Ok(repos())));
    for _ in 0..3 {
        app.handle_event(key(KeyCode::Right));
    }

    app.handle_event(key(KeyCode::Char('s')));
    let visible = app.projects().visible(app.repos().repos());
    assert_eq!(visible[0].name, "react-site");

    app.handle_event(key(KeyCode::Char('a')));
    assert!(app.projects().shows_all());
}

// ============================================================================
// Contact
// ============================================================================

fn open_contact(app: &mut App) {
    app.handle_event(key(KeyCode::Left));
    assert_eq!(app.section(), Section::Contact);
    app.handle_event(key(KeyCode::Enter));
    assert!(app.is_editing());
}

#[tokio::test]
async fn test_contact_typing_moves_through_fields() {
    let mut app = offline_app();
    open_contact(&mut app);

    type_text(&mut app, "Ada");
    app.handle_event(key(KeyCode::Enter));
    type_text(&mut app, "ada@example.com");
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "hello");
    app.handle_event(key(KeyCode::Enter));
    type_text(&mut app, "there");

    let form = app.contact();
    assert_eq!(form.value(Field::Name), "Ada");
    assert_eq!(form.value(Field::Email), "ada@example.com");
    assert_eq!(form.value(Field::Company), "");
    assert_eq!(form.value(Field::Message), "hello\nthere");

    // q is text while editing
    type_text(&mut app, "q");
    assert!(app.is_running());
    app.handle_event(key(KeyCode::Esc));
    assert!(!app.is_editing());
    assert!(app.is_running());
}

#[tokio::test]
async fn test_contact_validation_then_failed_delivery() {
    let mut app = offline_app();
    let mut term = terminal(100, 40);
    open_contact(&mut app);

    type_text(&mut app, "Ada");
    app.handle_event(ctrl('s'));
    assert_eq!(
        app.contact().status(),
        &SubmissionStatus::Failed(ContactError::MissingFields)
    );

    app.handle_event(key(KeyCode::Enter));
    type_text(&mut app, "ada@example.com");
    app.handle_event(key(KeyCode::Enter));
    app.handle_event(key(KeyCode::Enter));
    type_text(&mut app, "Let's talk");
    app.handle_event(ctrl('s'));
    assert!(app.contact().status().is_sending());

    // Second submit while sending is ignored
    app.handle_event(ctrl('s'));
    assert!(app.contact().status().is_sending());

    app.apply_load(LoadEvent::Contact(Err(SourceError::Offline("contact relay"))));
    assert!(matches!(
        app.contact().status(),
        SubmissionStatus::Failed(ContactError::Transport(_))
    ));

    app.render(&mut term).unwrap();
    assert!(screen(&term).contains("offline: contact relay"));
}

#[tokio::test]
async fn test_contact_sent_toast() {
    let mut app = offline_app();
    let mut term = terminal(100, 40);
    open_contact(&mut app);
    type_text(&mut app, "Ada");
    app.handle_event(key(KeyCode::Enter));
    type_text(&mut app, "ada@example.com");
    app.handle_event(key(KeyCode::Enter));
    app.handle_event(key(KeyCode::Enter));
    type_text(&mut app, "hi");
    app.handle_event(ctrl('s'));

    app.apply_load(LoadEvent::Contact(Ok(())));
    assert_eq!(app.contact().status(), &SubmissionStatus::Sent);
    app.render(&mut term).unwrap();
    assert!(screen(&term).contains("Message sent successfully!"));
}

// ============================================================================
// Event Loop
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_run_applies_loads_then_quits() {
    let source = OfflineSource::new().with_repos(repos());
    let mut app = app_with(Arc::new(source), 100, 40);
    let mut term = terminal(100, 40);

    let events = futures::stream::once(async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        Ok::<_, io::Error>(key(KeyCode::Char('q')))
    });

    app.run_with(&mut term, Box::pin(events)).await.unwrap();

    assert!(!app.is_running());
    assert_eq!(app.repos().repos().len(), 4);
    assert!(matches!(app.stats(), StatsLoad::Unavailable));
    assert!(screen(&term).contains("repos: 4"));
    app.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_run_with_unreachable_source() {
    let mut app = app_with(Arc::new(Unreachable), 100, 40);
    let mut term = terminal(100, 40);

    let events = futures::stream::once(async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        Ok::<_, io::Error>(key(KeyCode::Esc))
    });
    app.run_with(&mut term, Box::pin(events)).await.unwrap();

    assert!(matches!(app.repos(), RepoLoad::Failed));
    assert!(matches!(app.stats(), StatsLoad::Unavailable));
    assert!(screen(&term).contains("unreachable"));
}
