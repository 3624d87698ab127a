//! Currency parsing and formatting.
//!
//! Amounts in case records are hand-maintained strings like `"$100,000"`.
//! Parsing is forgiving: anything unusable becomes zero. Two display formats
//! exist and they are not interchangeable: compact labels for charts and
//! full two-decimal amounts for detail panels.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::models::Money;

const HALF_UP: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Parse a formatted currency string into an amount.
///
/// Every character that is not a digit, `.` or `-` is stripped before
/// parsing. Strings that still fail to parse yield zero.
#[must_use]
pub fn parse_currency(raw: &str) -> Money {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Compact chart label: `$1.2M`, `$75.0K` or `$950`.
///
/// The unit is chosen after rounding, so `$999,960` is `$1.0M` rather than
/// `$1000.0K`.
#[must_use]
pub fn format_compact_currency(value: Money) -> String {
    let magnitude = value.abs();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let dollars = magnitude.round_dp_with_strategy(0, HALF_UP);
    let thousands = (magnitude / dec!(1000)).round_dp_with_strategy(1, HALF_UP);

    if thousands >= dec!(1000) {
        let millions = (magnitude / dec!(1000000)).round_dp_with_strategy(1, HALF_UP);
        format!("{sign}${millions:.1}M")
    } else if dollars >= dec!(1000) {
        format!("{sign}${thousands:.1}K")
    } else if dollars.is_zero() {
        "$0".to_string()
    } else {
        format!("{sign}${dollars}")
    }
}

/// Detail-panel amount: `$1,234.56`, negative values as `-$1,234.56`.
#[must_use]
pub fn format_currency(value: Money) -> String {
    let rounded = value.round_dp_with_strategy(2, HALF_UP);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}${}.{fraction}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
