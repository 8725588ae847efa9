//! Demo dataset loaded at startup.

use rust_decimal::Decimal;

use super::models::{
    Account, AccountKind, SpendingCategory, Transaction, TransactionKind, Trend,
};

/// Cents helper: `usd(12847_53)` is $12,847.53.
fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub(super) fn accounts() -> Vec<Account> {
    vec![
        Account::new("Primary Checking", "****4532", usd(12847_53), AccountKind::Checking),
        Account::new("Savings Account", "****7891", usd(45230_00), AccountKind::Savings),
        Account::new(
            "Investment Portfolio",
            "****2156",
            usd(128450_75),
            AccountKind::Investment,
        ),
    ]
}

pub(super) fn transactions() -> Vec<Transaction> {
    use TransactionKind::{Credit, Debit};

    vec![
        Transaction::new(1, "Amazon Purchase", usd(156_99), Debit, "Shopping", "Today"),
        Transaction::new(2, "Salary Deposit", usd(5420_00), Credit, "Income", "Dec 15"),
        Transaction::new(3, "Unusual ATM Withdrawal - Miami", usd(800_00), Debit, "Cash", "Dec 14")
            .flagged(),
        Transaction::new(4, "Netflix Subscription", usd(15_99), Debit, "Entertainment", "Dec 13"),
        Transaction::new(5, "Whole Foods", usd(87_43), Debit, "Groceries", "Dec 12"),
        Transaction::new(6, "Transfer from Savings", usd(1000_00), Credit, "Transfer", "Dec 10"),
        Transaction::new(7, "Uber Rides", usd(45_60), Debit, "Transport", "Dec 9"),
        Transaction::new(8, "Foreign Transaction - Unknown", usd(299_99), Debit, "Unknown", "Dec 8")
            .flagged(),
    ]
}

pub(super) fn categories() -> Vec<SpendingCategory> {
    vec![
        SpendingCategory::new("Groceries", Decimal::from(542), 28, Trend::Stable),
        SpendingCategory::new("Transport", Decimal::from(312), 16, Trend::Down),
        SpendingCategory::new("Entertainment", Decimal::from(189), 10, Trend::Up),
        SpendingCategory::new("Shopping", Decimal::from(456), 24, Trend::Up),
        SpendingCategory::new("Utilities", Decimal::from(234), 12, Trend::Stable),
        SpendingCategory::new("Other", Decimal::from(198), 10, Trend::Down),
    ]
}
