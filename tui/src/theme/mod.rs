//! Theme and Colors
//!
//! The portfolio palette: near-black background, indigo accent, soft grey
//! text. Everything that fades (particle links, heatmap cells) blends toward
//! the background with [`blend`].

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Base Palette
// ============================================================================

/// Page background
pub const BACKGROUND: Color = Color::Rgb(10, 10, 15);

/// Card surfaces
pub const SURFACE: Color = Color::Rgb(22, 22, 30);

/// Card borders and separators
pub const BORDER: Color = Color::Rgb(45, 45, 58);

/// Body text
pub const FOREGROUND: Color = Color::Rgb(237, 237, 240);

/// Secondary text
pub const MUTED: Color = Color::Rgb(140, 140, 155);

// ============================================================================
// Accent
// ============================================================================

/// Indigo accent (buttons, caret, particles)
pub const ACCENT: Color = Color::Rgb(99, 102, 241);

/// Lighter accent for labels and highlights
pub const ACCENT_LIGHT: Color = Color::Rgb(129, 140, 248);

/// Darker accent for pressed states
pub const ACCENT_DIM: Color = Color::Rgb(79, 70, 229);

/// Second gradient stop in the hero name
pub const PURPLE: Color = Color::Rgb(168, 85, 247);

// ============================================================================
// Status Colors
// ============================================================================

pub const SUCCESS_GREEN: Color = Color::Rgb(34, 197, 94);

pub const ERROR_RED: Color = Color::Rgb(239, 68, 68);

pub const EASY: Color = SUCCESS_GREEN;

pub const MEDIUM: Color = Color::Rgb(245, 158, 11);

pub const HARD: Color = ERROR_RED;

/// Heatmap buckets, empty to busiest (accent at 0, 20, 40, 60, 100%)
pub const HEAT: [Color; 5] = [
    Color::Rgb(17, 17, 22),
    Color::Rgb(28, 28, 60),
    Color::Rgb(46, 47, 105),
    Color::Rgb(63, 65, 151),
    ACCENT,
];

// ============================================================================
// Helpers
// ============================================================================

/// Mix `fg` over `bg` at `alpha` (0 = all background, 1 = all foreground)
///
/// Non-RGB colors are returned unchanged.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| {
                let v = f32::from(b) + (f32::from(f) - f32::from(b)) * a;
                v.round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => fg,
    }
}

/// RGB tuple to a terminal color
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

pub fn text() -> Style {
    Style::default().fg(FOREGROUND)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn label() -> Style {
    Style::default().fg(ACCENT_LIGHT).add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD)
}

/// Clickable text
pub fn link() -> Style {
    Style::default()
        .fg(ACCENT_LIGHT)
        .add_modifier(Modifier::UNDERLINED)
}

/// Filled button
pub fn button(active: bool) -> Style {
    if active {
        Style::default()
            .fg(FOREGROUND)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(FOREGROUND).bg(SURFACE)
    }
}
