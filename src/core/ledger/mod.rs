//! Static data store for the dashboard.
//!
//! A [`Ledger`] holds the accounts, transactions and spending categories
//! fixed at startup. There are no write operations: collections live in
//! `Arc<[T]>` and are only handed out as shared slices, so cloning a ledger
//! is cheap and no consumer can change what another one sees.

mod models;
mod seed;

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

pub use models::{
    Account, AccountKind, SpendingCategory, Transaction, TransactionKind, Trend,
};

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// Two transactions share the same id.
    #[error("Duplicate transaction id: {0}")]
    DuplicateTransactionId(u32),

    /// A spending category percentage is outside 0..=100.
    #[error("Category '{name}' has percentage {percentage}, expected 0-100")]
    PercentageOutOfRange { name: String, percentage: u8 },
}

#[derive(Debug, Clone)]
pub struct Ledger {
    accounts: Arc<[Account]>,
    transactions: Arc<[Transaction]>,
    categories: Arc<[SpendingCategory]>,
}

impl Ledger {
    /// The demo dataset.
    pub fn seed() -> Self {
        Self::build(seed::accounts(), seed::transactions(), seed::categories())
    }

    /// A ledger with no records at all.
    pub fn empty() -> Self {
        Self::build(Vec::new(), Vec::new(), Vec::new())
    }

    /// Build a ledger from explicit collections, rejecting invalid data.
    pub fn from_parts(
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        categories: Vec<SpendingCategory>,
    ) -> Result<Self> {
        let ledger = Self::build(accounts, transactions, categories);
        ledger.validate()?;
        Ok(ledger)
    }

    fn build(
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        categories: Vec<SpendingCategory>,
    ) -> Self {
        Self {
            accounts: accounts.into(),
            transactions: transactions.into(),
            categories: categories.into(),
        }
    }

    /// Check transaction id uniqueness and percentage bounds.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.transactions.len());
        for tx in self.transactions.iter() {
            if !seen.insert(tx.id) {
                return Err(LedgerError::DuplicateTransactionId(tx.id));
            }
        }

        if let Some(cat) = self.categories.iter().find(|c| c.percentage > 100) {
            return Err(LedgerError::PercentageOutOfRange {
                name: cat.name.clone(),
                percentage: cat.percentage,
            });
        }

        Ok(())
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[SpendingCategory] {
        &self.categories
    }

    pub fn transaction(&self, id: u32) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::seed()
    }
}
