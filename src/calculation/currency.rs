//! Currency formatting for explanation text.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole US dollars with thousands separators.
///
/// Cents are rounded half away from zero.
///
/// # Examples
///
/// ```
/// use overtime_eligibility::calculation::format_usd;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_usd(Decimal::new(58656, 0)), "$58,656");
/// assert_eq!(format_usd(Decimal::new(99950, 2)), "$1,000");
/// assert_eq!(format_usd(Decimal::new(-1000, 0)), "-$1,000");
/// ```
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
