//! Dashboard Integration Tests
//!
//! Full-frame rendering and panel interaction over the seed ledger:
//! - Aggregates shown in the header and total card
//! - Fraud review raises a toast and leaves the ledger untouched
//! - Rendering never panics, whatever the size

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use rust_decimal::Decimal;
use tokio::sync::mpsc;

use crate::core::advisor::SimulatedAdvisor;
use crate::core::aggregate::{flagged_count, total_balance};
use crate::core::ledger::Ledger;
use crate::tests::common::{app_with, key, simulated_advisor};
use crate::tui::app::AppState;
use crate::tui::events::{AppEvent, Focus, NotificationLevel};
use crate::tui::services::Services;

fn screen(app: &AppState, w: u16, h: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn test_seed_aggregates() {
    let ledger = Ledger::seed();
    assert_eq!(total_balance(ledger.accounts()), Decimal::new(186_528_28, 2));
    assert_eq!(flagged_count(ledger.transactions()), 2);
}

#[test]
fn test_dashboard_shows_seed_figures() {
    let app = app_with(simulated_advisor());
    let text = screen(&app, 160, 50);
    for expected in [
        "2 Alerts",
        "$186,528.28",
        "$45,230.00",
        "+5.2% this month",
        "AI Managed",
        "+$5420.00",
        "-$156.99",
        "Groceries",
        "AI Financial Advisor",
        "Ask about your finances...",
    ] {
        assert!(text.contains(expected), "missing {expected:?}");
    }
}

#[test]
fn test_review_walks_both_flagged_rows() {
    let mut app = app_with(simulated_advisor());
    let before = app.services().ledger.transactions().to_vec();

    // Row 3 (id 3): It's Me
    app.handle_event(AppEvent::Input(key(KeyCode::Char('j'))));
    app.handle_event(AppEvent::Input(key(KeyCode::Char('j'))));
    app.handle_event(AppEvent::Input(key(KeyCode::Char('c'))));
    // Last row (id 8): Report Fraud
    app.handle_event(AppEvent::Input(key(KeyCode::Char('G'))));
    app.handle_event(AppEvent::Input(key(KeyCode::Char('f'))));
    // Non-flagged row: nothing
    app.handle_event(AppEvent::Input(key(KeyCode::Char('g'))));
    app.handle_event(AppEvent::Input(key(KeyCode::Char('f'))));

    let levels: Vec<NotificationLevel> = app.notifications.iter().map(|n| n.level).collect();
    assert_eq!(levels, vec![NotificationLevel::Success, NotificationLevel::Warning]);
    assert!(app.notifications[1].message.contains("Foreign Transaction"));
    assert_eq!(app.services().ledger.transactions(), before.as_slice());
    assert_eq!(flagged_count(app.services().ledger.transactions()), 2);
}

#[test]
fn test_focus_follows_tab_and_numbers() {
    let mut app = app_with(simulated_advisor());
    app.handle_event(AppEvent::Input(key(KeyCode::Char('2'))));
    assert_eq!(app.focus, Focus::Spending);
    app.handle_event(AppEvent::Input(key(KeyCode::Tab)));
    assert_eq!(app.focus, Focus::Advisor);
    app.handle_event(AppEvent::Input(key(KeyCode::Tab)));
    assert_eq!(app.focus, Focus::Transactions);
}

#[test]
fn test_render_never_panics() {
    let (tx, rx) = mpsc::unbounded_channel();
    let advisor = Arc::new(SimulatedAdvisor::with_defaults(Duration::ZERO));
    let empty = AppState::new(rx, Services::new(Ledger::empty(), advisor, tx));
    let seeded = app_with(simulated_advisor());

    for app in [&empty, &seeded] {
        for (w, h) in [(200, 60), (100, 30), (99, 30), (60, 20), (30, 10), (10, 4), (2, 2)] {
            screen(app, w, h);
        }
    }

    let text = screen(&empty, 120, 40);
    assert!(text.contains("No transactions yet"));
    assert!(text.contains("$0.00"));
}
