use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::advisor::{build_advisor, Advisor};
use crate::core::ledger::Ledger;

use super::events::{AppEvent, Notification};

/// Centralized handle to the dashboard's backends.
///
/// Created once at startup, then passed by ref to views that need data or
/// the advisor. Both backends are cheap to clone.
pub struct Services {
    pub ledger: Ledger,
    pub advisor: Arc<dyn Advisor>,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Services {
    pub fn new(
        ledger: Ledger,
        advisor: Arc<dyn Advisor>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            ledger,
            advisor,
            event_tx,
        }
    }

    /// Initialize all services from config.
    ///
    /// Failures here are fatal: an invalid ledger or an empty reply set
    /// stops startup.
    pub async fn init(
        config: &AppConfig,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let ledger = Ledger::seed();
        ledger.validate()?;
        log::info!(
            "Ledger loaded: {} accounts, {} transactions, {} categories",
            ledger.accounts().len(),
            ledger.transactions().len(),
            ledger.categories().len()
        );

        let advisor = build_advisor(
            config.advisor.backend,
            config.advisor.reply_set(),
            config.advisor.reply_delay(),
        )?;
        log::info!("Advisor backend: {}", advisor.name());

        Ok(Self::new(ledger, advisor, event_tx))
    }

    /// Post a notification toast onto the event channel.
    pub fn notify(&self, notification: Notification) {
        let _ = self.event_tx.send(AppEvent::Notification(notification));
    }
}
