//! Property-based tests for the ledger aggregates
//!
//! Tests invariants:
//! - `total_balance` is the exact sum of balances
//! - `flagged_count` counts only explicit `Some(true)`
//! - Credits plus debits equals the sum of all amounts

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::core::aggregate::{flagged_count, total_balance, total_credits, total_debits};
use crate::core::ledger::{Account, AccountKind, Transaction, TransactionKind};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Non-negative balances up to $10M, in cents.
fn arb_cents() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..1_000_000_000, 0..20)
}

fn arb_kind() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![Just(TransactionKind::Credit), Just(TransactionKind::Debit)]
}

fn arb_transactions() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        (0i64..10_000_000, arb_kind(), prop::option::of(any::<bool>())),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (cents, kind, flagged))| {
                let mut tx = Transaction::new(
                    i as u32,
                    format!("tx {i}"),
                    Decimal::new(cents, 2),
                    kind,
                    "Test",
                    "Today",
                );
                tx.flagged = flagged;
                tx
            })
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: the total is the arithmetic sum (0 for no accounts)
    #[test]
    fn prop_total_balance_is_sum(cents in arb_cents()) {
        let accounts: Vec<Account> = cents
            .iter()
            .map(|&c| Account::new("A", "****0000", Decimal::new(c, 2), AccountKind::Checking))
            .collect();
        let expected = Decimal::new(cents.iter().sum(), 2);
        prop_assert_eq!(total_balance(&accounts), expected);
    }

    /// Property: absent and false are never counted
    #[test]
    fn prop_flagged_counts_only_true(transactions in arb_transactions()) {
        let expected = transactions.iter().filter(|t| t.flagged == Some(true)).count();
        prop_assert_eq!(flagged_count(&transactions), expected);
        prop_assert!(flagged_count(&transactions) <= transactions.len());
    }

    /// Property: credits and debits together cover every amount once
    #[test]
    fn prop_credits_and_debits_partition(transactions in arb_transactions()) {
        let all: Decimal = transactions.iter().map(|t| t.amount).sum();
        prop_assert_eq!(total_credits(&transactions) + total_debits(&transactions), all);
    }

    /// Property: aggregates do not depend on order
    #[test]
    fn prop_total_order_independent(mut cents in arb_cents()) {
        let build = |cents: &[i64]| -> Vec<Account> {
            cents
                .iter()
                .map(|&c| Account::new("A", "****0000", Decimal::new(c, 2), AccountKind::Savings))
                .collect()
        };
        let forward = total_balance(&build(&cents));
        cents.reverse();
        prop_assert_eq!(total_balance(&build(&cents)), forward);
    }
}
