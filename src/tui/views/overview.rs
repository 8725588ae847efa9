//! Header bar, account cards and the total portfolio card.
//!
//! Stateless: everything is derived from the ledger on each frame.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::aggregate;
use crate::core::ledger::{Account, AccountKind, Ledger};
use crate::core::money;
use crate::tui::theme;

/// Shown under the total. Display-only; not derived from data.
const MONTHLY_CHANGE: &str = "+5.2% this month";

// ── Header ──────────────────────────────────────────────────────────────────

pub fn render_header(frame: &mut Frame, area: Rect, ledger: &Ledger) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::border_default())
        .style(Style::default().bg(theme::BG_BASE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand = Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(theme::PRIMARY)),
        Span::styled("FinanceAI", theme::title()),
        Span::styled("  Smart Banking", theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(brand), inner);

    frame.render_widget(
        Paragraph::new(header_badges(aggregate::flagged_count(ledger.transactions())))
            .alignment(Alignment::Right),
        inner,
    );
}

/// Right side of the header: alert badge (only when something is flagged)
/// and the cards hint.
pub fn header_badges(flagged: usize) -> Line<'static> {
    let mut spans = Vec::new();
    if flagged > 0 {
        spans.push(Span::styled(format!(" ! {flagged} Alerts "), theme::alert_badge()));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled("▭ Cards ", theme::muted()));
    Line::from(spans)
}

// ── Account cards ───────────────────────────────────────────────────────────

pub fn render_accounts(frame: &mut Frame, area: Rect, ledger: &Ledger) {
    let accounts = ledger.accounts();
    if accounts.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("  No accounts", theme::dim())).block(theme::card("Accounts")),
            area,
        );
        return;
    }

    let constraints: Vec<Constraint> = accounts
        .iter()
        .map(|_| Constraint::Ratio(1, accounts.len() as u32))
        .collect();
    let cells = Layout::horizontal(constraints).split(area);

    for (account, cell) in accounts.iter().zip(cells.iter()) {
        render_account_card(frame, *cell, account);
    }
}

fn kind_color(kind: AccountKind) -> ratatui::style::Color {
    match kind {
        AccountKind::Checking => theme::PRIMARY,
        AccountKind::Savings => theme::SUCCESS,
        AccountKind::Investment => theme::ACCENT,
    }
}

fn render_account_card(frame: &mut Frame, area: Rect, account: &Account) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_default())
        .title(Span::styled(format!(" {} ", account.name), theme::muted()))
        .title(
            Line::styled(
                format!(" {} ", account.kind.label()),
                theme::badge(kind_color(account.kind)),
            )
            .alignment(Alignment::Right),
        );

    let lines = vec![
        Line::from(Span::styled(money::usd_grouped(account.balance), theme::figure())),
        Line::from(Span::styled(
            account.number.clone(),
            Style::default().fg(theme::PRIMARY),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ── Total ───────────────────────────────────────────────────────────────────

pub fn render_total(frame: &mut Frame, area: Rect, ledger: &Ledger) {
    let total = aggregate::total_balance(ledger.accounts());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(Span::styled(" Total Portfolio Value ", theme::title()));

    let lines = vec![
        Line::from(Span::styled(
            money::usd_grouped(total),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" ↗ {MONTHLY_CHANGE} "), theme::badge(theme::SUCCESS)),
            Span::raw("  "),
            Span::styled(" AI Managed ", theme::badge(theme::PRIMARY)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
