//! Dollar formatting for balances and amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// `$186,528.28`: thousands grouping, always two decimals.
pub fn usd_grouped(amount: Decimal) -> String {
    let fixed = two_places(amount);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// `$5420.00`: two decimals, no grouping.
pub fn usd_fixed(amount: Decimal) -> String {
    let fixed = two_places(amount);
    match fixed.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${fixed}"),
    }
}

/// `$542`: no forced decimals, trailing zeros dropped.
pub fn usd_plain(amount: Decimal) -> String {
    format!("${}", amount.normalize())
}

fn two_places(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
