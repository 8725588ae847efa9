//! Property-based tests for dollar formatting
//!
//! Tests invariants:
//! - Grouped output without commas equals the fixed output
//! - Exactly two digits after the decimal point

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::core::money::{usd_fixed, usd_grouped};

proptest! {
    /// Property: grouping only inserts commas
    #[test]
    fn prop_grouping_only_adds_commas(cents in -100_000_000_000i64..100_000_000_000) {
        let amount = Decimal::new(cents, 2);
        prop_assert_eq!(usd_grouped(amount).replace(',', ""), usd_fixed(amount));
    }

    /// Property: always two decimals, and the digits round-trip
    #[test]
    fn prop_two_decimals(cents in 0i64..100_000_000_000) {
        let amount = Decimal::new(cents, 2);
        let fixed = usd_fixed(amount);
        let digits = fixed.trim_start_matches('$');
        let (_, frac) = digits.split_once('.').expect("decimal point");
        prop_assert_eq!(frac.len(), 2);
        prop_assert_eq!(digits.parse::<Decimal>().unwrap(), amount);
    }

    /// Property: commas separate groups of exactly three digits
    #[test]
    fn prop_group_sizes(cents in 0i64..100_000_000_000) {
        let grouped = usd_grouped(Decimal::new(cents, 2));
        let int_part = grouped.trim_start_matches('$').split('.').next().unwrap_or_default();
        let groups: Vec<&str> = int_part.split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }
}
