use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Focus, Notification, NotificationLevel};
use super::layout::DashboardLayout;
use super::services::Services;
use super::theme;
use super::views::advisor::{AdvisorViewState, ChatInputMode};
use super::views::overview;
use super::views::spending::SpendingViewState;
use super::views::transactions::{TransactionsResult, TransactionsViewState};

/// Technologies credited in the footer.
const TECH_BADGES: [&str; 7] = [
    "React",
    "Java",
    "Spring Boot",
    "Python",
    "Scikit-learn",
    "Kafka",
    "AWS",
];

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Panel with keyboard focus.
    pub focus: Focus,
    /// Recent transactions panel.
    pub transactions: TransactionsViewState,
    /// Spending analysis panel.
    pub spending: SpendingViewState,
    /// Advisor chat panel.
    pub advisor: AdvisorViewState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Receiver for backend events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Backend services handle.
    services: Services,
}

impl AppState {
    pub fn new(event_rx: mpsc::UnboundedReceiver<AppEvent>, services: Services) -> Self {
        Self {
            running: true,
            focus: Focus::Transactions,
            transactions: TransactionsViewState::new(),
            spending: SpendingViewState::new(),
            advisor: AdvisorViewState::new(),
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            event_rx,
            services,
        }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        log::info!("Dashboard started (tick {}ms)", tick_rate.as_millis());

        while self.running {
            // Render
            terminal.draw(|frame| self.render(frame))?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                    self.process_pending_events();
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        log::info!("Dashboard stopped");
        Ok(())
    }

    /// Apply every event already queued on the channel without waiting.
    pub fn process_pending_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Mouse wheel always scrolls the chat
                if let Event::Mouse(_) = crossterm_event {
                    self.advisor.handle_input(&crossterm_event, &self.services);
                    return;
                }

                // Priority 3: Focused panel
                if self.dispatch_view_input(&crossterm_event) {
                    return;
                }

                // Priority 4: Global keybindings
                if let Some(action) = self.map_input_to_action(crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::AdvisorReply(reply) => {
                self.advisor.on_reply(reply);
            }
            AppEvent::AdvisorFailed(error) => {
                self.advisor.on_failure(&error, &self.services);
            }
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    /// Dispatch input to the focused panel. Returns true if consumed.
    fn dispatch_view_input(&mut self, event: &Event) -> bool {
        match self.focus {
            Focus::Transactions => {
                match self.transactions.handle_input(event, &self.services.ledger) {
                    Some(TransactionsResult::Consumed) => true,
                    Some(TransactionsResult::Review(action)) => {
                        self.handle_action(action);
                        true
                    }
                    None => false,
                }
            }
            Focus::Spending => self.spending.handle_input(event),
            Focus::Advisor => self.advisor.handle_input(event, &self.services),
        }
    }

    /// Map help modal input to action.
    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        // Global keybindings (always active when no modal/panel consumes)
        match (modifiers, code) {
            // Ctrl+C → quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, _) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Tab => Some(Action::TabNext),
                KeyCode::BackTab => Some(Action::TabPrev),
                KeyCode::Char('1') => Some(Action::FocusTransactions),
                KeyCode::Char('2') => Some(Action::FocusSpending),
                KeyCode::Char('3') => Some(Action::FocusAdvisor),
                _ => None,
            },
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::FocusTransactions => self.set_focus(Focus::Transactions),
            Action::FocusSpending => self.set_focus(Focus::Spending),
            Action::FocusAdvisor => self.set_focus(Focus::Advisor),
            Action::TabNext => self.set_focus(self.focus.next()),
            Action::TabPrev => self.set_focus(self.focus.prev()),
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::ConfirmTransaction(id) => {
                let description = self.transaction_label(id);
                log::info!("Transaction {id} confirmed by user");
                self.push_notification(
                    format!("Marked as yours: {description}"),
                    NotificationLevel::Success,
                );
            }
            Action::ReportFraud(id) => {
                let description = self.transaction_label(id);
                log::warn!("Transaction {id} reported as fraud");
                self.push_notification(
                    format!("Fraud reported: {description}. Your card is protected."),
                    NotificationLevel::Warning,
                );
            }
        }
    }

    fn transaction_label(&self, id: u32) -> String {
        self.services
            .ledger
            .transaction(id)
            .map(|tx| tx.description.clone())
            .unwrap_or_else(|| format!("transaction #{id}"))
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            log::debug!("Focus: {} -> {}", self.focus.label(), focus.label());
        }
        self.focus = focus;
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notification_counter += 1;
        let mut notification = Notification::new(message, level);
        notification.id = self.notification_counter;
        self.notifications.push(notification);

        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired, animate the chat.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);

        self.advisor.tick();
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let (layout, _) = DashboardLayout::compute(area);
        let ledger = &self.services.ledger;

        overview::render_header(frame, layout.header, ledger);
        overview::render_accounts(frame, layout.accounts, ledger);
        overview::render_total(frame, layout.total, ledger);

        self.transactions.render(
            frame,
            layout.transactions,
            ledger,
            self.focus == Focus::Transactions,
        );
        self.spending
            .render(frame, layout.spending, ledger, self.focus == Focus::Spending);
        self.advisor
            .render(frame, layout.advisor, self.focus == Focus::Advisor);

        render_footer(frame, layout.footer);
        self.render_status_bar(frame, layout.status);

        // Overlays
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let advisor_status = if self.advisor.is_awaiting() {
            Span::styled("typing", Style::default().fg(theme::PRIMARY))
        } else {
            Span::styled("ready", Style::default().fg(theme::TEXT_MUTED))
        };

        let mode_indicator = match self.advisor.input_mode() {
            ChatInputMode::Insert if self.focus == Focus::Advisor => {
                Span::styled(" INSERT ", theme::insert_badge())
            }
            _ => Span::raw(""),
        };

        let status = Line::from(vec![
            Span::styled(" FinanceAI ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled(
                self.focus.label(),
                Style::default()
                    .fg(theme::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled("Advisor:", theme::key_hint()),
            Span::raw(" "),
            advisor_status,
            Span::raw(" │ "),
            Span::styled("Tab", theme::key_hint()),
            Span::raw(":focus "),
            Span::styled("j/k", theme::key_hint()),
            Span::raw(":move "),
            Span::styled("i", theme::key_hint()),
            Span::raw(":ask "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 60.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1.min(area.height.saturating_sub(height));

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(&n.message),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
            notification_area,
        );
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = [
            ("Global:", ""),
            ("q", "Quit application"),
            ("?", "Toggle this help"),
            ("Tab / Shift+Tab", "Next / previous panel"),
            ("1-3", "Jump to panel by number"),
            ("Ctrl+C", "Force quit"),
            ("", ""),
            ("Transactions:", ""),
            ("j/k", "Select transaction"),
            ("g / G", "First / last"),
            ("c", "It's Me (flagged only)"),
            ("f", "Report Fraud (flagged only)"),
            ("", ""),
            ("Spending:", ""),
            ("j/k", "Scroll categories"),
            ("", ""),
            ("Advisor:", ""),
            ("i / Enter / a", "Enter insert mode"),
            ("Enter", "Send question"),
            ("Esc", "Exit insert mode"),
            ("Ctrl+U / Ctrl+W", "Clear line / delete word"),
            ("j/k", "Scroll messages"),
            ("G / g", "Jump to bottom / top"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                " Keybindings",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];

        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {key}"),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<18}", key),
                        Style::default().fg(theme::PRIMARY).bold(),
                    ),
                    Span::raw(*desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", Style::default().fg(theme::PRIMARY).bold()),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(theme::PRIMARY).bold()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let mut badges = vec![
        Span::styled(" Demo Project ", theme::brand_badge()),
        Span::raw("  "),
    ];
    for tech in TECH_BADGES {
        badges.push(Span::styled(format!(" {tech} "), theme::badge(theme::PRIMARY)));
        badges.push(Span::raw(" "));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::border_default());
    frame.render_widget(
        Paragraph::new(Line::from(badges))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
