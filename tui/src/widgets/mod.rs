//! Reusable widgets

mod scroll;
mod text_block;

pub use scroll::{blit_window, ScrollState, PAGE_ROWS};
pub use text_block::TextBlock;
