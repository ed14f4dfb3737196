//! Display formatting for amounts.

use rust_decimal::Decimal;

use crate::currency::round_for_display;

/// Formats an amount with thousands separators and two decimal places.
///
/// `1234567.891` becomes `1,234,567.89`. Rounding is banker's rounding and
/// applies to the returned text only.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_for_display(amount, 2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction}")
}

/// Formats an exchange rate the way the user typed it (no trailing zeros).
#[must_use]
pub fn format_rate(rate: Decimal) -> String {
    rate.normalize().to_string()
}
