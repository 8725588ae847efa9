//! AI Financial Advisor chat panel.
//!
//! Owns the [`AdvisorSession`] and the input line. An accepted submission
//! spawns one reply task that awaits [`Advisor::respond`] and posts the
//! result back as [`AppEvent::AdvisorReply`] or [`AppEvent::AdvisorFailed`].
//! The task is aborted when the view is dropped.

use std::cell::Cell;
use std::sync::Arc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use tokio::task::AbortHandle;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::advisor::{AdvisorSession, ChatMessage, ChatRole, Submission};
use crate::tui::events::{AppEvent, Notification, NotificationLevel};
use crate::tui::services::Services;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

const PLACEHOLDER: &str = "Ask about your finances...";
const TYPING_FRAMES: [&str; 3] = ["●○○", "○●○", "○○●"];
/// Ticks per typing-indicator frame.
const TICKS_PER_FRAME: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatInputMode {
    Normal,
    Insert,
}

pub struct AdvisorViewState {
    session: AdvisorSession,
    input: InputBuffer,
    input_mode: ChatInputMode,
    scroll_offset: usize,
    auto_scroll: bool,
    /// Largest scroll offset seen by the last render.
    max_scroll: Cell<usize>,
    pending: Option<AbortHandle>,
    typing_ticks: usize,
}

impl AdvisorViewState {
    pub fn new() -> Self {
        Self::with_session(AdvisorSession::new())
    }

    pub fn with_session(session: AdvisorSession) -> Self {
        Self {
            session,
            input: InputBuffer::new(),
            input_mode: ChatInputMode::Normal,
            scroll_offset: 0,
            auto_scroll: true,
            max_scroll: Cell::new(0),
            pending: None,
            typing_ticks: 0,
        }
    }

    pub fn session(&self) -> &AdvisorSession {
        &self.session
    }

    pub fn input_mode(&self) -> ChatInputMode {
        self.input_mode
    }

    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    pub fn is_awaiting(&self) -> bool {
        self.session.is_awaiting()
    }

    // ── Input ────────────────────────────────────────────────────────

    /// Returns `true` if the event was consumed.
    pub fn handle_input(&mut self, event: &Event, services: &Services) -> bool {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match self.input_mode {
                ChatInputMode::Insert => self.handle_insert_input(*code, *modifiers, services),
                ChatInputMode::Normal => self.handle_normal_input(*code, *modifiers),
            },
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) if self.input_mode == ChatInputMode::Insert => {
                self.input.insert_str(text);
                true
            }
            _ => false,
        }
    }

    fn handle_insert_input(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        services: &Services,
    ) -> bool {
        // These always fall through to global
        match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return false,
            (_, KeyCode::Tab) | (_, KeyCode::BackTab) => return false,
            _ => {}
        }

        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.input_mode = ChatInputMode::Normal;
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                self.send(services);
                true
            }
            (KeyModifiers::NONE, KeyCode::Backspace) => {
                self.input.backspace();
                true
            }
            (KeyModifiers::NONE, KeyCode::Delete) => {
                self.input.delete();
                true
            }
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.input.move_left();
                true
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.input.move_right();
                true
            }
            (KeyModifiers::NONE, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
                self.input.move_home();
                true
            }
            (KeyModifiers::NONE, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                self.input.move_end();
                true
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.input.clear();
                true
            }
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
                self.input.delete_word();
                true
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert_char(c);
                true
            }
            _ => true, // Consume but ignore other keys in insert mode
        }
    }

    fn handle_normal_input(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers != KeyModifiers::NONE && modifiers != KeyModifiers::SHIFT {
            return false;
        }

        match code {
            KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Enter => {
                self.input_mode = ChatInputMode::Insert;
                true
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_down(1);
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_up(1);
                true
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.scroll_to_bottom();
                true
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.scroll_to_top();
                true
            }
            KeyCode::PageDown => {
                self.scroll_down(10);
                true
            }
            KeyCode::PageUp => {
                self.scroll_up(10);
                true
            }
            _ => false, // Fall through to global handler
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.scroll_down(3);
                true
            }
            MouseEventKind::ScrollUp => {
                self.scroll_up(3);
                true
            }
            _ => false,
        }
    }

    // ── Submission and replies ───────────────────────────────────────

    /// Submit the current input. Blank input and submissions while a reply
    /// is pending leave everything unchanged.
    pub fn send(&mut self, services: &Services) -> Submission {
        let outcome = self.session.submit(self.input.text());
        if let Submission::Accepted(ref query) = outcome {
            self.input.clear();
            self.spawn_reply(query.clone(), services);
            self.scroll_to_bottom();
        }
        outcome
    }

    fn spawn_reply(&mut self, query: String, services: &Services) {
        let advisor = Arc::clone(&services.advisor);
        let tx = services.event_tx.clone();
        log::debug!("Requesting advisor reply ({} chars)", query.len());

        let handle = tokio::spawn(async move {
            let event = match advisor.respond(&query).await {
                Ok(reply) => AppEvent::AdvisorReply(reply),
                Err(e) => AppEvent::AdvisorFailed(e.to_string()),
            };
            let _ = tx.send(event);
        });
        self.pending = Some(handle.abort_handle());
        self.typing_ticks = 0;
    }

    /// Apply a reply from the advisor. Returns `false` if it was dropped.
    pub fn on_reply(&mut self, reply: String) -> bool {
        self.pending = None;
        let applied = self.session.complete(reply);
        if applied && self.auto_scroll {
            self.scroll_to_bottom();
        }
        applied
    }

    /// The advisor could not answer: unblock the input and tell the user.
    pub fn on_failure(&mut self, error: &str, services: &Services) {
        self.pending = None;
        self.session.abandon();
        log::error!("Advisor failed: {error}");
        services.notify(Notification::new(
            format!("Advisor unavailable: {error}"),
            NotificationLevel::Error,
        ));
    }

    /// Abort the outstanding reply task, if any.
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            log::debug!("Cancelled pending advisor reply");
        }
    }

    pub fn tick(&mut self) {
        if self.session.is_awaiting() {
            self.typing_ticks = self.typing_ticks.wrapping_add(1);
        }
    }

    // ── Scrolling ────────────────────────────────────────────────────

    fn scroll_down(&mut self, n: usize) {
        let max = self.max_scroll.get();
        self.scroll_offset = self.scroll_offset.saturating_add(n).min(max);
        self.auto_scroll = self.scroll_offset >= max;
    }

    fn scroll_up(&mut self, n: usize) {
        if self.auto_scroll {
            self.scroll_offset = self.max_scroll.get();
        }
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
        self.auto_scroll = false;
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll.get();
        self.auto_scroll = true;
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.auto_scroll = false;
    }

    // ── Rendering ────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Messages
            Constraint::Length(3), // Input
        ])
        .split(area);

        self.render_messages(frame, chunks[0], focused);
        frame.render_widget(
            render_advisor_input(&self.input, self.input_mode, self.is_awaiting(), chunks[1].width),
            chunks[1],
        );
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let block = theme::panel("AI Financial Advisor", focused).title(
            Line::styled(" ● Online ", Style::default().fg(theme::SUCCESS))
                .alignment(Alignment::Right),
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = inner.width as usize;
        let mut all_lines: Vec<Line> = self
            .session
            .messages()
            .iter()
            .flat_map(|m| message_lines(m, width))
            .collect();

        if self.is_awaiting() {
            let frame_idx = (self.typing_ticks / TICKS_PER_FRAME) % TYPING_FRAMES.len();
            all_lines.push(Line::from(vec![
                Span::styled(" ◆ ", Style::default().fg(theme::PRIMARY)),
                Span::styled(TYPING_FRAMES[frame_idx], Style::default().fg(theme::PRIMARY)),
                Span::styled(" Advisor is typing", theme::muted()),
            ]));
        }

        let visible_height = inner.height as usize;
        let total = all_lines.len();
        let max_scroll = total.saturating_sub(visible_height);
        self.max_scroll.set(max_scroll);

        let effective_scroll = if self.auto_scroll {
            max_scroll
        } else {
            self.scroll_offset.min(max_scroll)
        };

        let visible: Vec<Line> = all_lines
            .into_iter()
            .skip(effective_scroll)
            .take(visible_height)
            .collect();
        frame.render_widget(Paragraph::new(visible), inner);

        if total > visible_height && visible_height > 0 {
            let mut scrollbar_state = ScrollbarState::new(total)
                .position(effective_scroll)
                .viewport_content_length(visible_height);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut scrollbar_state,
            );
        }

        if !self.auto_scroll && effective_scroll < max_scroll {
            let indicator = Line::styled(
                " ↓ new messages below ",
                Style::default()
                    .fg(theme::BG_BASE)
                    .bg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            );
            let indicator_area = Rect::new(
                inner.x + inner.width.saturating_sub(22),
                inner.y + inner.height.saturating_sub(1),
                22.min(inner.width),
                1.min(inner.height),
            );
            frame.render_widget(Paragraph::new(indicator), indicator_area);
        }
    }
}

impl Default for AdvisorViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AdvisorViewState {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Role label, bubble lines and a blank separator. User messages are
/// right-aligned, assistant messages left-aligned.
fn message_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    let bubble_width = (width * 4 / 5).max(1);
    let wrapped = wrap_text(&message.content, bubble_width.saturating_sub(2).max(1));

    let (label, label_style, bubble_style, alignment) = match message.role {
        ChatRole::User => (
            "You",
            Style::default().fg(theme::PRIMARY).add_modifier(Modifier::BOLD),
            Style::default().fg(theme::TEXT).bg(theme::PRIMARY_STRONG),
            Alignment::Right,
        ),
        ChatRole::Assistant => (
            "◆ Advisor",
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
            Style::default().fg(theme::TEXT).bg(theme::BG_SURFACE),
            Alignment::Left,
        ),
    };

    let mut out = vec![Line::styled(format!(" {label} "), label_style).alignment(alignment)];
    out.extend(
        wrapped
            .into_iter()
            .map(|l| Line::styled(format!(" {l} "), bubble_style).alignment(alignment)),
    );
    out.push(Line::raw(""));
    out
}

/// Greedy word wrap on whitespace, measured in display columns. Words wider
/// than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while UnicodeWidthStr::width(word.as_str()) > width {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let split = split_at_width(&word, width);
            let rest = word.split_off(split);
            lines.push(word);
            word = rest;
        }

        let word_width = UnicodeWidthStr::width(word.as_str());
        let needed = if current_width == 0 {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed > width && current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current_width += word_width;
        current.push_str(&word);
    }

    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Byte offset of the longest prefix of `word` that fits in `width` columns.
/// Always takes at least one char so a glyph wider than `width` still advances.
fn split_at_width(word: &str, width: usize) -> usize {
    let mut used = 0;
    for (i, ch) in word.char_indices() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > width {
            return if i == 0 { ch.len_utf8() } else { i };
        }
        used += cw;
    }
    word.len()
}

// ============================================================================
// Input line
// ============================================================================

fn render_advisor_input(
    input: &InputBuffer,
    mode: ChatInputMode,
    awaiting: bool,
    outer_width: u16,
) -> Paragraph<'static> {
    let (border_color, title) = match mode {
        ChatInputMode::Insert => (theme::ACCENT, " Message (Esc to exit) "),
        ChatInputMode::Normal => (theme::TEXT_MUTED, " Message "),
    };

    let display = if input.text().is_empty() {
        let hint = if mode == ChatInputMode::Insert {
            PLACEHOLDER.to_string()
        } else {
            format!("{PLACEHOLDER} (i to type)")
        };
        Line::styled(hint, theme::muted())
    } else if mode == ChatInputMode::Insert {
        let width = outer_width.saturating_sub(2) as usize;
        let (visible, col) = input.visible_window(width);
        let before: String = visible.chars().take(col).collect();
        let cursor_char = visible
            .chars()
            .nth(col)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = visible.chars().skip(col + 1).collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_char, Style::default().bg(theme::TEXT).fg(theme::BG_BASE)),
            Span::raw(after),
        ])
    } else {
        Line::raw(input.text().to_string())
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);

    if awaiting {
        block = block.title_bottom(Line::styled(
            " waiting for advisor... ",
            Style::default().fg(theme::PRIMARY),
        ));
    }

    Paragraph::new(display).block(block)
}
