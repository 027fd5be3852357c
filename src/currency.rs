//! Formats amounts as Brazilian Real, e.g. `R$ 1.234,56`.

use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

const CURRENCY_SYMBOL: &str = "R$";
const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Format `amount` the way browsers format BRL for the pt-BR locale.
///
/// The symbol is followed by a non-breaking space, thousands are grouped with
/// `.` and there are always two decimal places after a `,`. Amounts are
/// rounded to the nearest cent, with halves rounded away from zero.
///
/// Non-finite amounts are formatted as zero.
pub fn format_currency(amount: f64) -> String {
    let cents = Decimal::from_f64(amount)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let sign = if cents.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };

    let mut magnitude = cents.abs();
    magnitude.rescale(2);
    let digits = magnitude.to_string();
    let (integer_part, fraction_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{sign}{CURRENCY_SYMBOL}\u{a0}{}{DECIMAL_SEPARATOR}{fraction_part}",
        group_thousands(integer_part)
    )
}

/// Insert a thousands separator between every group of three digits, counting
/// from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }

        grouped.push(digit);
    }

    grouped
}
