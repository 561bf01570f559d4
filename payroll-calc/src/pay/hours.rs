//! Hours text parsing
//!
//! Hours are stored exactly as typed. Parsing follows a leading-number scan:
//! the longest numeric prefix counts, anything after it is ignored, and text
//! with no numeric prefix counts as zero.

use rust_decimal::prelude::*;

/// Parse entered hours text, falling back to zero
pub fn parse_hours(raw: &str) -> Decimal {
    numeric_prefix(raw.trim_start())
        .and_then(|prefix| {
            if prefix.contains('e') {
                Decimal::from_scientific(&prefix).ok()
            } else {
                Decimal::from_str(&prefix).ok()
            }
        })
        .unwrap_or(Decimal::ZERO)
}

/// Normalized numeric prefix of `s` (`-0.5`, `8`, `1.5e1`), if any
///
/// A missing integer part is filled with `0` and a leading `+` dropped so the
/// result is always accepted by the Decimal parser.
fn numeric_prefix(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let mut out = String::new();

    match bytes.first() {
        Some(b'-') => {
            out.push('-');
            pos += 1;
        }
        Some(b'+') => pos += 1,
        _ => {}
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            frac_digits = &s[frac_start..frac_end];
            pos = frac_end;
        } else if !int_digits.is_empty() {
            // "8." - the dot is consumed but adds nothing
            pos = frac_start;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    out.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }

    // Exponent only counts when at least one digit follows it
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp_pos = pos + 1;
        let mut exp = String::from("e");
        match bytes.get(exp_pos) {
            Some(b'-') => {
                exp.push('-');
                exp_pos += 1;
            }
            Some(b'+') => exp_pos += 1,
            _ => {}
        }
        let exp_start = exp_pos;
        while exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            exp_pos += 1;
        }
        if exp_pos > exp_start {
            exp.push_str(&s[exp_start..exp_pos]);
            out.push_str(&exp);
        }
    }

    Some(out)
}
