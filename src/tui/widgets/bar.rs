//! Horizontal percentage bar built from block glyphs.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::theme;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Number of filled cells for `percentage` (clamped to 100) in `width`.
pub fn filled_cells(percentage: u8, width: usize) -> usize {
    let pct = usize::from(percentage.min(100));
    (pct * width + 50) / 100
}

/// Two spans, filled then empty, `width` cells in total.
pub fn percent_bar(percentage: u8, width: usize, color: Color) -> Vec<Span<'static>> {
    let filled = filled_cells(percentage, width);
    vec![
        Span::styled(FILLED.repeat(filled), Style::default().fg(color)),
        Span::styled(
            EMPTY.repeat(width - filled),
            Style::default().fg(theme::TEXT_DIM),
        ),
    ]
}
