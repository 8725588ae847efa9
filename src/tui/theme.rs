//! Centralized deep-blue banking theme for the FinanceAI TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Blue 400: icons, masked numbers, focused borders.
pub const PRIMARY: Color = Color::Rgb(0x60, 0xA5, 0xFA);
/// Blue 600: user chat bubbles, progress bars.
pub const PRIMARY_STRONG: Color = Color::Rgb(0x25, 0x63, 0xEB);
/// Blue 800: unfocused card borders.
pub const PRIMARY_DARK: Color = Color::Rgb(0x1E, 0x40, 0xAF);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Cyan: total-value card, brand highlight.
pub const ACCENT: Color = Color::Rgb(0x22, 0xD3, 0xEE);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Blue 950: header and footer background.
pub const BG_BASE: Color = Color::Rgb(0x17, 0x25, 0x54);
/// Assistant chat bubbles, spending cards.
pub const BG_SURFACE: Color = Color::Rgb(0x1E, 0x2A, 0x5A);
/// Flagged transaction rows.
pub const BG_ALERT: Color = Color::Rgb(0x45, 0x14, 0x1A);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xF1, 0xF5, 0xF9);
/// Muted text: secondary labels, dates.
pub const TEXT_MUTED: Color = Color::Rgb(0x94, 0xA3, 0xB8);
/// Dim text: disabled items, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x47, 0x55, 0x69);

// ── Semantic ────────────────────────────────────────────────────────────────

/// Red 400: fraud, rising spend.
pub const ERROR: Color = Color::Rgb(0xF8, 0x71, 0x71);
/// Green 400: credits, falling spend, confirmations.
pub const SUCCESS: Color = Color::Rgb(0x4A, 0xDE, 0x80);
/// Amber: alerts.
pub const WARNING: Color = Color::Rgb(0xFB, 0xBF, 0x24);
/// Informational highlights.
pub const INFO: Color = PRIMARY;

// ── Style helpers ───────────────────────────────────────────────────────────

/// Bold card and panel titles.
pub fn title() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

/// Large figures (balances).
pub fn figure() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

/// Focused border style.
pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

/// Unfocused border style.
pub fn border_default() -> Style {
    Style::default().fg(PRIMARY_DARK)
}

/// Selected row.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for disabled/faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Outlined badge, e.g. an account kind.
pub fn badge(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Filled destructive badge ("Suspicious", "2 Alerts").
pub fn alert_badge() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(Color::Rgb(0xDC, 0x26, 0x26))
        .add_modifier(Modifier::BOLD)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Insert mode badge.
pub fn insert_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered panel whose border reflects keyboard focus.
pub fn panel(label: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {label} "))
        .title_style(title())
        .borders(Borders::ALL)
        .border_style(if focused {
            border_focused()
        } else {
            border_default()
        })
}

/// A bordered card with default styling.
pub fn card(label: &str) -> Block<'_> {
    panel(label, false)
}
