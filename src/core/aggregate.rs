//! Pure aggregates over the ledger, recomputed on every render.

use rust_decimal::Decimal;

use super::ledger::{Account, Transaction, TransactionKind};

/// Sum of all account balances. Zero for no accounts.
pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|a| a.balance).sum()
}

/// Number of transactions marked for review.
pub fn flagged_count(transactions: &[Transaction]) -> usize {
    transactions.iter().filter(|t| t.is_flagged()).count()
}

/// Sum of incoming amounts.
pub fn total_credits(transactions: &[Transaction]) -> Decimal {
    sum_of_kind(transactions, TransactionKind::Credit)
}

/// Sum of outgoing amounts.
pub fn total_debits(transactions: &[Transaction]) -> Decimal {
    sum_of_kind(transactions, TransactionKind::Debit)
}

fn sum_of_kind(transactions: &[Transaction], kind: TransactionKind) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}
