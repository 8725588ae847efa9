/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for animations, notification TTLs, etc.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// The advisor produced a reply for the pending question.
    AdvisorReply(String),
    /// The advisor failed to produce a reply.
    AdvisorFailed(String),
    /// A resolved action to execute.
    Action(Action),
    /// Notification to display to the user.
    Notification(Notification),
    /// Request to quit the application.
    Quit,
}

/// High-level actions dispatched by the input mapper or a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    FocusTransactions,
    FocusSpending,
    FocusAdvisor,
    TabNext,
    TabPrev,

    // Modals
    ShowHelp,
    CloseHelp,

    // Flagged transaction review (no effect on the ledger)
    ConfirmTransaction(u32),
    ReportFraud(u32),

    // Application
    Quit,
}

/// Which dashboard panel has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Transactions,
    Spending,
    Advisor,
}

impl Focus {
    pub const ALL: [Focus; 3] = [Focus::Transactions, Focus::Spending, Focus::Advisor];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Transactions => "Transactions",
            Focus::Spending => "Spending",
            Focus::Advisor => "Advisor",
        }
    }

    pub fn next(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + 1) % Focus::ALL.len()]
    }

    pub fn prev(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + Focus::ALL.len() - 1) % Focus::ALL.len()]
    }

    pub fn to_action(self) -> Action {
        match self {
            Focus::Transactions => Action::FocusTransactions,
            Focus::Spending => Action::FocusSpending,
            Focus::Advisor => Action::FocusAdvisor,
        }
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}

impl Notification {
    /// Build a notification; the id is assigned when it is pushed.
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            id: 0,
            message: message.into(),
            level,
            ttl_ticks: 100,
        }
    }
}
