//! Folio TUI - A developer portfolio in the terminal
//!
//! Full-screen rendition of a personal portfolio site: a typed-out name
//! over a drifting particle field, featured and filterable projects,
//! coding statistics, and a working contact form.
//!
//! # Architecture
//!
//! - **Compositor**: Layered rendering with z-ordering (background, page, bars, toasts, cursor)
//! - **Sections**: Each page section draws onto a tall off-screen page that scrolls
//! - **Hotspots**: Clickable regions recorded while drawing, used for mouse hit-testing
//! - **Loader**: Background fetches whose results come back over a channel

pub mod app;
pub mod background;
pub mod compositor;
pub mod cursor;
pub mod hotspot;
pub mod loader;
pub mod nav;
pub mod sections;
pub mod theme;
pub mod toast;
pub mod widgets;

pub use app::App;
pub use loader::{LoadEvent, RepoLoad};
pub use nav::Section;
