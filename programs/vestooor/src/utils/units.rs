//! Decimal scaling between token base units and human-readable amounts.

use crate::constants::MAX_DECIMALS;
use crate::error::VestooorError;

/// Renders `value` base units with `decimals` fractional digits.
/// Trailing zeros are trimmed but at least one fractional digit is kept ("1.0").
pub fn format_units(value: i128, decimals: u8) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    let decimals = decimals as usize;
    if decimals == 0 {
        return format!("{sign}{digits}");
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (whole, frac) = padded.split_at(padded.len() - decimals);
    let frac = frac.trim_end_matches('0');
    let frac = if frac.is_empty() { "0" } else { frac };
    format!("{sign}{whole}.{frac}")
}

/// Parses a decimal string such as "42069" or "-0.25" into base units.
pub fn parse_units(input: &str, decimals: u8) -> Result<i128, VestooorError> {
    if decimals > MAX_DECIMALS {
        return Err(VestooorError::TooManyDecimals);
    }
    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(VestooorError::InvalidDecimalString);
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(VestooorError::InvalidDecimalString);
    }

    let frac = frac.trim_end_matches('0');
    if frac.len() > decimals as usize {
        return Err(VestooorError::TooManyDecimals);
    }

    let mut acc: i128 = 0;
    let padding = std::iter::repeat(b'0').take(decimals as usize - frac.len());
    for b in whole.bytes().chain(frac.bytes()).chain(padding) {
        acc = acc
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as i128))
            .ok_or(VestooorError::MathOverflow)?;
    }
    Ok(if negative { -acc } else { acc })
}
