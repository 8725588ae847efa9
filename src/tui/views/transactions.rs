//! Recent transactions panel with fraud review actions.
//!
//! Flagged rows carry "It's Me" (`c`) and "Report Fraud" (`f`). Both only
//! produce an [`Action`]; the ledger itself is never touched.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::core::aggregate;
use crate::core::ledger::{Ledger, Transaction, TransactionKind};
use crate::core::money;
use crate::tui::events::Action;
use crate::tui::theme;

/// Lines per transaction row: main line, meta line, actions or spacer.
const ROW_HEIGHT: usize = 3;

/// Outcome of a key handled by the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionsResult {
    /// Key handled locally (selection moved).
    Consumed,
    /// A review action on the selected flagged transaction.
    Review(Action),
}

#[derive(Debug, Default)]
pub struct TransactionsViewState {
    selected: usize,
}

impl TransactionsViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Currently selected transaction, if the list is non-empty.
    pub fn selected_transaction<'a>(&self, ledger: &'a Ledger) -> Option<&'a Transaction> {
        ledger.transactions().get(self.selected)
    }

    /// Handle a key event. Returns `None` when the key should fall through
    /// to the global handler.
    pub fn handle_input(&mut self, event: &Event, ledger: &Ledger) -> Option<TransactionsResult> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        if *modifiers != KeyModifiers::NONE && *modifiers != KeyModifiers::SHIFT {
            return None;
        }

        let len = ledger.transactions().len();
        match code {
            KeyCode::Char('j') | KeyCode::Down => {
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
                Some(TransactionsResult::Consumed)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Some(TransactionsResult::Consumed)
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.selected = 0;
                Some(TransactionsResult::Consumed)
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.selected = len.saturating_sub(1);
                Some(TransactionsResult::Consumed)
            }
            KeyCode::Char('c') => self
                .flagged_selection(ledger)
                .map(|tx| TransactionsResult::Review(Action::ConfirmTransaction(tx.id))),
            KeyCode::Char('f') => self
                .flagged_selection(ledger)
                .map(|tx| TransactionsResult::Review(Action::ReportFraud(tx.id))),
            _ => None,
        }
    }

    fn flagged_selection<'a>(&self, ledger: &'a Ledger) -> Option<&'a Transaction> {
        self.selected_transaction(ledger).filter(|tx| tx.is_flagged())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ledger: &Ledger, focused: bool) {
        let transactions = ledger.transactions();

        let block = theme::panel("Recent Transactions", focused)
            .title(
                Line::styled(
                    " ◈ AI Fraud Detection Active ",
                    Style::default().fg(theme::SUCCESS),
                )
                .alignment(Alignment::Right),
            )
            .title_bottom(Line::from(vec![
                Span::styled(" In ", theme::muted()),
                Span::styled(
                    money::usd_fixed(aggregate::total_credits(transactions)),
                    Style::default().fg(theme::SUCCESS),
                ),
                Span::styled("  Out ", theme::muted()),
                Span::styled(
                    money::usd_fixed(aggregate::total_debits(transactions)),
                    Style::default().fg(theme::TEXT),
                ),
                Span::raw(" "),
            ]));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if transactions.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::styled("  No transactions yet", theme::dim())),
                inner,
            );
            return;
        }

        let width = inner.width as usize;
        let lines: Vec<Line> = transactions
            .iter()
            .enumerate()
            .flat_map(|(i, tx)| transaction_lines(tx, focused && i == self.selected, width))
            .collect();

        let visible_height = inner.height as usize;
        let total = lines.len();
        let max_scroll = total.saturating_sub(visible_height);
        // Keep the selected row in view.
        let selected_bottom = (self.selected + 1) * ROW_HEIGHT;
        let scroll = selected_bottom.saturating_sub(visible_height).min(max_scroll);

        let visible: Vec<Line> = lines.into_iter().skip(scroll).take(visible_height).collect();
        frame.render_widget(Paragraph::new(visible), inner);

        if total > visible_height && visible_height > 0 {
            let mut scrollbar_state = ScrollbarState::new(total)
                .position(scroll)
                .viewport_content_length(visible_height);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut scrollbar_state,
            );
        }
    }
}

/// Signed amount as shown in the list, e.g. `+$5420.00` or `-$156.99`.
pub fn signed_amount(tx: &Transaction) -> String {
    format!("{}{}", tx.kind.sign(), money::usd_fixed(tx.amount))
}

fn transaction_lines(tx: &Transaction, selected: bool, width: usize) -> Vec<Line<'static>> {
    let flagged = tx.is_flagged();
    let row_bg = if flagged {
        Style::default().bg(theme::BG_ALERT)
    } else {
        Style::default()
    };

    let (arrow_color, amount_color) = match tx.kind {
        TransactionKind::Credit => (theme::SUCCESS, theme::SUCCESS),
        TransactionKind::Debit => (theme::ERROR, theme::TEXT),
    };
    let marker = if selected { "▶ " } else { "  " };
    let description_style = if selected {
        theme::highlight()
    } else {
        Style::default().fg(theme::TEXT)
    };

    let amount = signed_amount(tx);
    let mut left = vec![
        Span::styled(marker, theme::highlight()),
        Span::styled(format!("{} ", tx.kind.arrow()), Style::default().fg(arrow_color)),
        Span::styled(tx.description.clone(), description_style),
    ];
    if flagged {
        left.push(Span::raw(" "));
        left.push(Span::styled(" Suspicious ", theme::alert_badge()));
    }

    // Right-align the amount inside the row.
    let used: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(used + amount.chars().count() + 1).max(1);
    left.push(Span::raw(" ".repeat(pad)));
    left.push(Span::styled(
        amount,
        Style::default().fg(amount_color).add_modifier(Modifier::BOLD),
    ));

    let meta = Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("{} • {}", tx.category, tx.date), theme::muted()),
    ]);

    let third = if flagged {
        Line::from(vec![
            Span::raw("    "),
            Span::styled("[c] It's Me", Style::default().fg(theme::SUCCESS)),
            Span::raw("   "),
            Span::styled(
                "[f] Report Fraud",
                Style::default().fg(theme::ERROR).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::raw("")
    };

    vec![
        Line::from(left).style(row_bg),
        meta.style(row_bg),
        third.style(row_bg),
    ]
}
