//! Main Application
//!
//! The App owns all UI state and runs the event loop:
//! - terminal events (keyboard, mouse, focus, resize)
//! - results from background loads
//! - a frame tick that advances animations and redraws
//!
//! Rendering goes through the compositor: the particle background at the
//! bottom, the scrolled section page above it, then the navigation and
//! status bars, toasts, and the cursor on top.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

use folio_core::projects::filter_repos;
use folio_core::{
    CategoryFilter, ContactError, ContactForm, Field, FolioConfig, PortfolioSource, Profile,
    ProjectView, StatsLoad, SubmissionStatus, TypingDriver,
};

use crate::background::Background;
use crate::compositor::{Compositor, LayerId};
use crate::cursor::Cursor;
use crate::hotspot::{Hotspot, Hotspots};
use crate::loader::{LoadEvent, Loader, RepoLoad};
use crate::nav::{self, Section};
use crate::sections::{self, Page, View};
use crate::theme;
use crate::toast::{self, Toast, ToastKind};
use crate::widgets::{blit_window, ScrollState, PAGE_ROWS};

/// Caret blink half-period
const CARET_BLINK: Duration = Duration::from_millis(530);

/// How long a link notice stays up
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Rows scrolled per mouse wheel notch
const WHEEL_ROWS: i32 = 3;

/// Layer IDs for UI regions
struct AppLayers {
    background: LayerId,
    content: LayerId,
    nav: LayerId,
    status: LayerId,
    toast: LayerId,
    cursor: LayerId,
}

/// Main application state
pub struct App {
    // === Core State ===
    running: bool,
    config: FolioConfig,
    profile: Profile,
    section: Section,
    scroll: HashMap<Section, ScrollState>,

    // === Content State ===
    hero_text: String,
    typing: TypingDriver,
    repos: RepoLoad,
    projects: ProjectView,
    selected: Option<usize>,
    stats: StatsLoad,
    contact: ContactForm,
    editing: bool,

    // === Loading ===
    loader: Loader,
    loads: Option<mpsc::Receiver<LoadEvent>>,
    started: bool,

    // === UI Components ===
    compositor: Compositor,
    layers: AppLayers,
    background: Background,
    cursor: Cursor,
    /// Off-screen page the current section is drawn on
    page: Buffer,
    /// Clickable regions in page coordinates
    page_spots: Hotspots,
    /// Clickable regions in screen coordinates, from the last frame
    screen_spots: Hotspots,
    /// Scroll to the keyboard focus on the next frame
    follow_focus: bool,
    notice: Option<(Toast, Instant)>,

    // === Misc State ===
    epoch: Instant,
    size: Rect,
}

impl App {
    /// Create the app for a screen of `area`
    ///
    /// Must be called from within a tokio runtime; the typing animation
    /// starts immediately.
    pub fn new(
        config: FolioConfig,
        profile: Profile,
        source: Arc<dyn PortfolioSource>,
        area: Rect,
    ) -> Self {
        let hero_text = config
            .typing_text
            .clone()
            .unwrap_or_else(|| profile.name.clone());
        let typing = TypingDriver::spawn(&hero_text, config.typing);
        let (loader, loads) = Loader::new(source);

        let mut compositor = Compositor::new(area);
        let layers = AppLayers {
            background: compositor.create_layer(area, 0),
            content: compositor.create_layer(content_area(area), 10),
            nav: compositor.create_layer(Rect::new(0, 0, area.width, 1), 20),
            status: compositor.create_layer(status_area(area), 20),
            toast: compositor.create_layer(Rect::new(0, 0, 0, 0), 30),
            cursor: compositor.create_layer(Rect::new(0, 0, 0, 0), 100),
        };
        compositor.set_visible(layers.toast, false);
        compositor.set_visible(layers.cursor, false);

        let background = Background::new(
            config.field.clone(),
            area,
            config.fps,
            config.background_enabled,
        );

        tracing::info!(
            width = area.width,
            height = area.height,
            source = loader.source_name(),
            fps = config.fps,
            "App created"
        );

        Self {
            running: true,
            config,
            profile,
            section: Section::Home,
            scroll: HashMap::new(),
            hero_text,
            typing,
            repos: RepoLoad::Loading,
            projects: ProjectView::new(),
            selected: None,
            stats: StatsLoad::Loading,
            contact: ContactForm::new(),
            editing: false,
            loader,
            loads: Some(loads),
            started: false,
            compositor,
            layers,
            background,
            cursor: Cursor::new(),
            page: Buffer::empty(Rect::new(0, 0, area.width, PAGE_ROWS)),
            page_spots: Hotspots::default(),
            screen_spots: Hotspots::default(),
            follow_focus: false,
            notice: None,
            epoch: Instant::now(),
            size: area,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn repos(&self) -> &RepoLoad {
        &self.repos
    }

    pub fn stats(&self) -> &StatsLoad {
        &self.stats
    }

    pub fn projects(&self) -> &ProjectView {
        &self.projects
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.get(&self.section).map_or(0, |s| s.offset)
    }

    /// Current link notice, if one is showing
    pub fn notice(&self) -> Option<&Toast> {
        self.notice.as_ref().map(|(t, _)| t)
    }

    // ========================================================================
    // Event Loop
    // ========================================================================

    /// Main event loop on the real terminal
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        self.run_with(terminal, EventStream::new()).await
    }

    /// Event loop over any event source
    ///
    /// Ends when the user quits or the event stream closes.
    pub async fn run_with<B, S>(&mut self, terminal: &mut Terminal<B>, mut events: S) -> anyhow::Result<()>
    where
        B: Backend,
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        let mut loads = self
            .loads
            .take()
            .ok_or_else(|| anyhow!("event loop is already running"))?;

        if !self.started {
            self.started = true;
            self.loader.load_all();
        }

        let mut frames = tokio::time::interval(self.config.frame_duration());
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Render initial frame immediately so user sees UI
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(e)) => tracing::warn!(error = %e, "Terminal event error"),
                    None => {
                        tracing::debug!("Event stream closed");
                        self.running = false;
                    }
                },

                Some(load) = loads.recv() => self.apply_load(load),

                // Frame tick - animate and render
                _ = frames.tick() => {
                    self.tick();
                    self.render(terminal)?;
                }
            }
        }

        self.loads = Some(loads);
        tracing::info!("Event loop finished");
        Ok(())
    }

    /// Tear down background work
    pub async fn shutdown(self) {
        self.typing.stop().await;
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(w, h) => self.handle_resize(w, h),
            Event::FocusLost => self.cursor.hide(),
            Event::FocusGained => self.cursor.show(),
            Event::Paste(text) if self.editing => {
                for ch in text.chars() {
                    self.contact.push(ch);
                }
            }
            _ => {}
        }
    }

    /// Apply a finished background request
    pub fn apply_load(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Repos(Ok(repos)) => {
                let total = repos.len();
                let kept = filter_repos(repos, &self.config.excluded_repos);
                tracing::info!(total, shown = kept.len(), "Repositories loaded");
                self.repos = RepoLoad::Loaded(kept);
                self.clamp_selection();
            }
            LoadEvent::Repos(Err(e)) => {
                tracing::warn!(error = %e, "Repository fetch failed");
                self.repos = RepoLoad::Failed;
            }
            LoadEvent::Stats(Ok(Some(stats))) => {
                tracing::info!(solved = stats.total_solved, "Stats loaded");
                self.stats = StatsLoad::Loaded(stats);
            }
            LoadEvent::Stats(Ok(None)) => {
                tracing::info!("Stats service returned nothing usable");
                self.stats = StatsLoad::Unavailable;
            }
            LoadEvent::Stats(Err(e)) => {
                tracing::warn!(error = %e, "Stats fetch failed");
                self.stats = StatsLoad::Unavailable;
            }
            LoadEvent::Contact(result) => {
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "Contact submission failed");
                } else {
                    tracing::info!("Contact message delivered");
                }
                self.contact
                    .finish(result.map_err(ContactError::from), Instant::now().into_std());
            }
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.editing {
            self.handle_form_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.go_to(self.section.prev()),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.go_to(self.section.next()),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-self.page_rows()),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(self.page_rows()),
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll.entry(self.section).or_default().to_top();
            }
            _ => match self.section {
                Section::Projects => self.handle_projects_key(key),
                Section::Contact => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char('i')) {
                        self.start_editing(None);
                    }
                }
                Section::Home if key.code == KeyCode::Enter => self.go_to(Section::Projects),
                Section::Stats if key.code == KeyCode::Enter => {
                    if let Some(stats) = self.stats.stats() {
                        let url = stats.profile_url();
                        self.open_link(&url);
                    }
                }
                _ => {}
            },
        }
    }

    fn handle_projects_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                self.set_filter(CategoryFilter::ALL[index]);
            }
            KeyCode::Char('s') => self.projects.set_sort(self.projects.sort().toggled()),
            KeyCode::Char('a') => self.projects.show_all(),
            KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Enter => {
                let url = self.selected.and_then(|i| {
                    self.projects
                        .visible(self.repos.repos())
                        .get(i)
                        .map(|r| r.html_url.clone())
                });
                if let Some(url) = url {
                    self.open_link(&url);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.editing = false,
            KeyCode::Tab => self.contact.focus_next(),
            KeyCode::BackTab => self.contact.focus_prev(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Enter => {
                if self.contact.focus() == Field::Message {
                    self.contact.push('\n');
                } else {
                    self.contact.focus_next();
                }
            }
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.contact.push(c);
            }
            _ => return,
        }
        self.follow_focus = true;
    }

    /// Handle mouse input
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.cursor.move_to(x, y);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.cursor.move_to(x, y);
                self.cursor.set_pressed(true);
                if let Some(hotspot) = self.screen_spots.at(x, y).cloned() {
                    self.activate(hotspot);
                } else if self.editing {
                    self.editing = false;
                }
            }
            MouseEventKind::Up(_) => self.cursor.set_pressed(false),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_ROWS),
            _ => {}
        }
        self.cursor.set_hovering(self.screen_spots.at(x, y).is_some());
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        let area = Rect::new(0, 0, width, height);
        if area == self.size {
            return;
        }
        tracing::debug!(width, height, "Terminal resized");
        self.size = area;
        self.compositor.resize(area);
        self.compositor.place_layer(self.layers.background, area);
        self.compositor
            .place_layer(self.layers.content, content_area(area));
        self.compositor
            .place_layer(self.layers.nav, Rect::new(0, 0, width, 1));
        self.compositor.place_layer(self.layers.status, status_area(area));
        self.background.resize(area);
        if self.page.area.width != width {
            self.page = Buffer::empty(Rect::new(0, 0, width, PAGE_ROWS));
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.running = false;
    }

    fn go_to(&mut self, section: Section) {
        if section != self.section {
            tracing::debug!(from = ?self.section, to = ?section, "Switching section");
            self.section = section;
            self.editing = false;
        }
    }

    fn activate(&mut self, hotspot: Hotspot) {
        match hotspot {
            Hotspot::Nav(section) => self.go_to(section),
            Hotspot::Link(url) => self.open_link(&url),
            Hotspot::Filter(filter) => self.set_filter(filter),
            Hotspot::Sort(sort) => self.projects.set_sort(sort),
            Hotspot::ShowAll => self.projects.show_all(),
            Hotspot::Field(field) => self.start_editing(Some(field)),
            Hotspot::Submit => self.submit(),
        }
    }

    /// Links can't leave the terminal; show where they point instead
    fn open_link(&mut self, url: &str) {
        tracing::info!(url, "Link activated");
        let until = Instant::now() + NOTICE_TTL;
        self.notice = Some((Toast::new(ToastKind::Info, url), until));
    }

    fn set_filter(&mut self, filter: CategoryFilter) {
        self.projects.set_filter(filter);
        self.selected = None;
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.projects.visible(self.repos.repos()).len();
        if count == 0 {
            self.selected = None;
            return;
        }
        let next = match self.selected {
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(count - 1),
        };
        self.selected = Some(next);
        self.follow_focus = true;
    }

    fn clamp_selection(&mut self) {
        let count = self.projects.visible(self.repos.repos()).len();
        self.selected = self.selected.filter(|i| *i < count);
    }

    fn start_editing(&mut self, field: Option<Field>) {
        if self.section != Section::Contact {
            self.go_to(Section::Contact);
        }
        if let Some(field) = field {
            self.contact.set_focus(field);
        }
        self.editing = true;
        self.follow_focus = true;
    }

    fn submit(&mut self) {
        if self.contact.status().is_sending() {
            return;
        }
        match self.contact.begin_submit() {
            Ok(payload) => self.loader.submit(payload),
            Err(e) => tracing::debug!(error = %e, "Contact form not sent"),
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        self.scroll.entry(self.section).or_default().scroll(delta);
    }

    fn page_rows(&self) -> i32 {
        i32::from(content_area(self.size).height.saturating_sub(2).max(1))
    }

    // ========================================================================
    // Frame
    // ========================================================================

    /// Advance time-based state by one frame
    fn tick(&mut self) {
        let now = Instant::now();
        self.background.tick();
        self.contact.tick(now.into_std());
        if self.notice.as_ref().is_some_and(|(_, until)| now >= *until) {
            self.notice = None;
        }
    }

    fn caret_on(&self) -> bool {
        let half_periods = self.epoch.elapsed().as_millis() / CARET_BLINK.as_millis();
        half_periods % 2 == 0
    }

    /// Toasts to show: link notice above the contact result
    fn toasts(&self) -> Vec<Toast> {
        let mut out = Vec::new();
        if let Some((toast, _)) = &self.notice {
            out.push(toast.clone());
        }
        match self.contact.status() {
            SubmissionStatus::Sent => {
                out.push(Toast::new(ToastKind::Success, "Message sent successfully!"));
            }
            SubmissionStatus::Failed(e) => {
                let text = match e {
                    ContactError::Transport(msg) if msg.is_empty() => "Failed to send.".to_string(),
                    other => other.to_string(),
                };
                out.push(Toast::new(ToastKind::Error, text));
            }
            _ => {}
        }
        out
    }

    /// Compose every layer and draw the frame
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        self.render_background();
        self.render_content();
        self.render_nav();
        self.render_status();
        self.render_toasts();
        self.render_cursor();

        terminal.draw(|frame| {
            self.compositor.render_into(frame.buffer_mut());
        })?;

        Ok(())
    }

    fn render_background(&mut self) {
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.background) {
            self.background.render(buf);
        }
    }

    fn render_content(&mut self) {
        let viewport = content_area(self.size);
        self.screen_spots.clear();
        self.page_spots.clear();
        self.page.reset();

        let snapshot = self.typing.snapshot();
        let view = View {
            profile: &self.profile,
            hero_text: &self.hero_text,
            typing: &snapshot,
            caret_on: self.caret_on(),
            repos: &self.repos,
            featured_order: &self.config.featured_repos,
            projects: &self.projects,
            selected: self.selected,
            stats: &self.stats,
            contact: &self.contact,
            editing: self.editing,
            now: chrono::Utc::now(),
        };
        let mut page = Page::new(&mut self.page, &mut self.page_spots);
        let height = sections::render(self.section, &view, &mut page);
        let focus = page.focus_rows();

        let scroll = self.scroll.entry(self.section).or_default();
        scroll.update(height, viewport.height);
        if self.follow_focus {
            if let Some((top, bottom)) = focus {
                scroll.reveal(top, bottom);
            }
            self.follow_focus = false;
        }
        let offset = scroll.offset;

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.content) {
            buf.reset();
            blit_window(&self.page, offset, buf);
        }
        self.page_spots
            .project_into(offset, viewport, &mut self.screen_spots);
    }

    fn render_nav(&mut self) {
        let area = Rect::new(0, 0, self.size.width, 1);
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.nav) {
            buf.reset();
            nav::render(buf, area, self.section, &mut self.screen_spots);
        }
    }

    fn render_status(&mut self) {
        let width = self.size.width;
        let repos = match &self.repos {
            RepoLoad::Loading => "repos: loading".to_string(),
            RepoLoad::Loaded(list) => format!("repos: {}", list.len()),
            RepoLoad::Failed => "repos: unavailable".to_string(),
        };
        let left = format!(
            " {} · {} · {}",
            self.section.label(),
            self.loader.source_name(),
            repos
        );
        let more = self
            .scroll
            .get(&self.section)
            .is_some_and(ScrollState::has_more_below);
        let right = match (self.editing, more) {
            (true, _) => "editing · Esc to stop ".to_string(),
            (false, true) => "↓ more · ←/→ sections · q quit ".to_string(),
            (false, false) => "←/→ sections · q quit ".to_string(),
        };

        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) else {
            return;
        };
        let area = buf.area;
        buf.reset();
        buf.set_style(area, Style::default().bg(theme::SURFACE).fg(theme::MUTED));
        buf.set_stringn(
            0,
            0,
            &left,
            usize::from(width),
            Style::default()
                .bg(theme::SURFACE)
                .fg(theme::FOREGROUND)
                .add_modifier(Modifier::BOLD),
        );
        let right_w = unicode_width::UnicodeWidthStr::width(right.as_str()) as u16;
        if right_w + 2 < width {
            buf.set_string(width - right_w, 0, &right, Style::default().bg(theme::SURFACE).fg(theme::MUTED));
        }
    }

    fn render_toasts(&mut self) {
        let toasts = self.toasts();
        if toasts.is_empty() {
            self.compositor.set_visible(self.layers.toast, false);
            return;
        }
        let (w, h) = toast::stack_size(&toasts, self.size.width.saturating_sub(2));
        let status = status_area(self.size);
        let bounds = Rect::new(
            self.size.width.saturating_sub(w + 1),
            status.y.saturating_sub(h + 1),
            w,
            h,
        );
        self.compositor.place_layer(self.layers.toast, bounds);
        self.compositor.set_visible(self.layers.toast, true);
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.toast) {
            toast::render(&toasts, buf);
        }
    }

    fn render_cursor(&mut self) {
        if !self.config.cursor_enabled {
            self.compositor.set_visible(self.layers.cursor, false);
            return;
        }
        if let Some((x, y)) = self.cursor.position() {
            self.cursor.set_hovering(self.screen_spots.at(x, y).is_some());
        }
        let Some(footprint) = self.cursor.footprint(self.size) else {
            self.compositor.set_visible(self.layers.cursor, false);
            return;
        };
        self.compositor.place_layer(self.layers.cursor, footprint);
        self.compositor.set_visible(self.layers.cursor, true);
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.cursor) {
            self.cursor.render(buf, footprint);
        }
    }
}

/// Between the navigation bar and the status bar
fn content_area(area: Rect) -> Rect {
    Rect::new(0, 1, area.width, area.height.saturating_sub(2))
}

fn status_area(area: Rect) -> Rect {
    Rect::new(0, area.height.saturating_sub(1), area.width, 1)
}
