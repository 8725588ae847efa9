//! Common Test Utilities
//!
//! Shared fixtures and mock advisors used across test modules.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::core::advisor::{Advisor, AdvisorError, Result, SimulatedAdvisor};
use crate::core::ledger::Ledger;
use crate::tui::app::AppState;
use crate::tui::events::{AppEvent, Focus};
use crate::tui::services::Services;
use crate::tui::views::advisor::ChatInputMode;

/// Reply delay used by the flow tests.
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);

/// An advisor whose backend is always down.
pub struct FailingAdvisor;

#[async_trait]
impl Advisor for FailingAdvisor {
    fn name(&self) -> &str {
        "failing"
    }

    async fn respond(&self, _query: &str) -> Result<String> {
        Err(AdvisorError::Backend("connection refused".to_string()))
    }
}

pub fn simulated_advisor() -> Arc<dyn Advisor> {
    Arc::new(SimulatedAdvisor::with_defaults(REPLY_DELAY))
}

pub fn services_with(advisor: Arc<dyn Advisor>) -> (Services, mpsc::UnboundedReceiver<AppEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Services::new(Ledger::seed(), advisor, tx), rx)
}

/// Dashboard over the seed ledger wired to `advisor`.
pub fn app_with(advisor: Arc<dyn Advisor>) -> AppState {
    let (services, rx) = services_with(advisor);
    AppState::new(rx, services)
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Focus the advisor, type `text` in insert mode and press Enter.
pub fn ask(app: &mut AppState, text: &str) {
    if app.focus != Focus::Advisor {
        app.handle_event(AppEvent::Input(key(KeyCode::Char('3'))));
    }
    if app.advisor.input_mode() != ChatInputMode::Insert {
        app.handle_event(AppEvent::Input(key(KeyCode::Char('i'))));
    }
    for c in text.chars() {
        app.handle_event(AppEvent::Input(key(KeyCode::Char(c))));
    }
    app.handle_event(AppEvent::Input(key(KeyCode::Enter)));
}

/// Let timers up to `after` fire, then apply whatever the reply task sent.
pub async fn settle(app: &mut AppState, after: Duration) {
    tokio::time::sleep(after).await;
    tokio::task::yield_now().await;
    app.process_pending_events();
}
