//! AI Spending Analysis: one card per category with trend and share bar.

use std::cell::Cell;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::ledger::{Ledger, SpendingCategory, Trend};
use crate::core::money;
use crate::tui::theme;
use crate::tui::widgets::bar;

/// Two columns of categories at or above this panel width.
const GRID_MIN_WIDTH: u16 = 56;
const LINES_PER_CATEGORY: usize = 3;

/// Rising spend is bad, falling spend is good.
pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => theme::ERROR,
        Trend::Down => theme::SUCCESS,
        Trend::Stable => theme::TEXT_MUTED,
    }
}

#[derive(Debug, Default)]
pub struct SpendingViewState {
    /// Scroll position in categories, never past `max_scroll`.
    scroll: usize,
    /// Updated during render from the tallest column.
    max_scroll: Cell<usize>,
}

impl SpendingViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Returns `true` if the key was consumed.
    pub fn handle_input(&mut self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };
        if *modifiers != KeyModifiers::NONE {
            return false;
        }

        match code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(self.max_scroll.get());
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.min(self.max_scroll.get()).saturating_sub(1);
                true
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.scroll = 0;
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ledger: &Ledger, focused: bool) {
        let block = theme::panel("AI Spending Analysis", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.max_scroll.set(0);

        let categories = ledger.categories();
        if categories.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::styled("  No spending data", theme::dim())),
                inner,
            );
            return;
        }

        if inner.width >= GRID_MIN_WIDTH {
            let cols = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(inner);
            let (left, right): (Vec<_>, Vec<_>) =
                categories.iter().enumerate().partition(|(i, _)| i % 2 == 0);
            self.render_column(frame, cols[0], left.into_iter().map(|(_, c)| c));
            self.render_column(frame, cols[1], right.into_iter().map(|(_, c)| c));
        } else {
            self.render_column(frame, inner, categories.iter());
        }
    }

    fn render_column<'a>(
        &self,
        frame: &mut Frame,
        area: Rect,
        categories: impl Iterator<Item = &'a SpendingCategory>,
    ) {
        let width = area.width as usize;
        let lines: Vec<Line> = categories
            .flat_map(|c| category_lines(c, width))
            .collect();

        let visible_height = area.height as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        let steps = max_scroll.div_ceil(LINES_PER_CATEGORY);
        self.max_scroll.set(self.max_scroll.get().max(steps));
        let scroll = (self.scroll * LINES_PER_CATEGORY).min(max_scroll);

        let visible: Vec<Line> = lines.into_iter().skip(scroll).take(visible_height).collect();
        frame.render_widget(Paragraph::new(visible), area);
    }
}

fn category_lines(category: &SpendingCategory, width: usize) -> Vec<Line<'static>> {
    let color = trend_color(category.trend);
    let amount = money::usd_plain(category.amount);

    let arrow = format!(" {}", category.trend.arrow());
    let name = format!(" {}", category.name);
    let used = arrow.chars().count() + name.chars().count() + amount.chars().count() + 1;
    let pad = width.saturating_sub(used).max(1);

    let percent = format!(" {}%", category.percentage);
    let bar_width = width.saturating_sub(percent.chars().count() + 2);

    let mut bar_line = vec![Span::raw(" ")];
    bar_line.extend(bar::percent_bar(category.percentage, bar_width, theme::PRIMARY_STRONG));
    bar_line.push(Span::styled(percent, theme::muted()));

    vec![
        Line::from(vec![
            Span::styled(arrow, Style::default().fg(color)),
            Span::styled(
                name,
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(pad)),
            Span::styled(amount, theme::figure()),
        ]),
        Line::from(bar_line),
        Line::raw(""),
    ]
}
