//! Account, transaction and spending-category records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ── Accounts ────────────────────────────────────────────────────────────────

/// The kind of a bank account, shown as a badge on its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    Checking,
    Savings,
    Investment,
}

impl AccountKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking",
            Self::Savings => "Savings",
            Self::Investment => "Investment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    /// Masked account number, e.g. `****4532`.
    pub number: String,
    pub balance: Decimal,
    pub kind: AccountKind,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        balance: Decimal,
        kind: AccountKind,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            balance,
            kind,
        }
    }
}

// ── Transactions ────────────────────────────────────────────────────────────

/// Direction of money flow relative to the account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    /// Sign prefix used when displaying the amount.
    pub fn sign(self) -> &'static str {
        match self {
            Self::Credit => "+",
            Self::Debit => "-",
        }
    }

    /// Arrow glyph: money coming in points down-left, going out up-right.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Credit => "↙",
            Self::Debit => "↗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: String,
    /// Display text ("Today", "Dec 15"), never parsed.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flagged: Option<bool>,
}

impl Transaction {
    pub fn new(
        id: u32,
        description: impl Into<String>,
        amount: Decimal,
        kind: TransactionKind,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            date: date.into(),
            flagged: None,
        }
    }

    /// Mark the transaction as suspicious.
    pub fn flagged(mut self) -> Self {
        self.flagged = Some(true);
        self
    }

    /// Absent and `false` are treated identically.
    pub fn is_flagged(&self) -> bool {
        self.flagged == Some(true)
    }
}

// ── Spending categories ─────────────────────────────────────────────────────

/// Month-over-month movement of a spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Stable => "→",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingCategory {
    pub name: String,
    pub amount: Decimal,
    /// Share of monthly spending, 0-100. Categories need not sum to 100.
    pub percentage: u8,
    pub trend: Trend,
}

impl SpendingCategory {
    pub fn new(name: impl Into<String>, amount: Decimal, percentage: u8, trend: Trend) -> Self {
        Self {
            name: name.into(),
            amount,
            percentage,
            trend,
        }
    }
}
