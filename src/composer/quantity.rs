//! Display text for a group's quantity at its current serving multiplier.
//!
//! Computed on demand from the original text, which is never overwritten.

use crate::models::ServingMultiplier;

/// Split a leading amount ("2", "0.5", "1/2") from the rest of the text.
fn split_leading_amount(text: &str) -> Option<(f64, &str)> {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '/'))
        .unwrap_or(trimmed.len());
    let (number, rest) = trimmed.split_at(end);
    if number.is_empty() {
        return None;
    }

    let amount = match number.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.parse().ok()?;
            let den: f64 = den.parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => number.parse().ok()?,
    };
    Some((amount, rest))
}

/// Format with at most two decimals and no trailing zeros.
pub fn format_amount(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Quantity text as shown to the user at `multiplier`.
///
/// "2 slices" at 1.5x reads "3 slices". Text without a leading amount is
/// prefixed with the multiplier instead.
pub fn scaled_quantity(original: &str, multiplier: ServingMultiplier) -> String {
    if multiplier == ServingMultiplier::ONE {
        return original.to_string();
    }
    match split_leading_amount(original) {
        Some((amount, rest)) => format!("{}{}", format_amount(amount * multiplier.value()), rest),
        None => format!("{} x {}", format_amount(multiplier.value()), original),
    }
}
