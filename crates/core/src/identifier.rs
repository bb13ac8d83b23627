//! Identifier formatting utilities.
//!
//! Shared functions for turning free-form CPF and phone text into their
//! canonical display form. Both follow the same pipeline: extract digits,
//! check the digit count, then interleave separators at fixed offsets.
//!
//! A value whose digit count does not match is *not representable*. The
//! plain functions signal that with `None`; the `try_` variants return
//! [`FormatError::NotRepresentable`] for callers that propagate with `?`.

use crate::error::{FormatError, IdentifierKind};

/// Number of digits in a CPF.
pub const NATIONAL_ID_DIGITS: usize = 11;
/// Number of digits in a landline phone number (area code + 8).
pub const LANDLINE_DIGITS: usize = 10;
/// Number of digits in a mobile phone number (area code + 9).
pub const MOBILE_DIGITS: usize = 11;

/// Keeps only the ASCII decimal digits of `input`, in order.
///
/// Idempotent: extracting from the output yields the output.
#[inline]
#[must_use]
pub fn extract_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a CPF as `XXX.XXX.XXX-XX`.
///
/// Returns `None` for absent or empty input, or when the text does not
/// contain exactly 11 digits.
#[must_use]
pub fn format_national_id(input: Option<&str>) -> Option<String> {
    try_format_national_id(input).ok()
}

/// Formats a phone number as `(XX) XXXX-XXXX` or `(XX) XXXXX-XXXX`.
///
/// Returns `None` for absent or empty input, or when the text does not
/// contain exactly 10 or 11 digits.
#[must_use]
pub fn format_phone_number(input: Option<&str>) -> Option<String> {
    try_format_phone_number(input).ok()
}

/// Like [`format_national_id`], but reports why the value was rejected.
///
/// # Errors
/// Returns [`FormatError::NotRepresentable`] when the digit count is not 11.
pub fn try_format_national_id(input: Option<&str>) -> Result<String, FormatError> {
    let digits = extract_digits(input.unwrap_or_default());

    if digits.len() != NATIONAL_ID_DIGITS {
        return Err(FormatError::not_representable(
            IdentifierKind::NationalId,
            digits.len(),
        ));
    }

    Ok(format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    ))
}

/// Like [`format_phone_number`], but reports why the value was rejected.
///
/// # Errors
/// Returns [`FormatError::NotRepresentable`] when the digit count is
/// neither 10 nor 11.
pub fn try_format_phone_number(input: Option<&str>) -> Result<String, FormatError> {
    let digits = extract_digits(input.unwrap_or_default());

    // Subscriber part is 4 digits for landlines, 5 for mobiles.
    let split = match digits.len() {
        LANDLINE_DIGITS => 6,
        MOBILE_DIGITS => 7,
        n => {
            return Err(FormatError::not_representable(IdentifierKind::Phone, n));
        }
    };

    Ok(format!(
        "({}) {}-{}",
        &digits[0..2],
        &digits[2..split],
        &digits[split..]
    ))
}
