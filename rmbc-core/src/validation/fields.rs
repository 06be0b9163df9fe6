//! Per-field validation rules
//!
//! Each validator checks one field in isolation and is usable on its own
//! for targeted diagnostics or field-level feedback in a front end.

use crate::check_digit::calculate_check_digit;
use crate::format::{COUNTRY_CODE, SERIAL_LENGTH};

use super::messages;
use super::ValidationResult;

/// Valid iff the prefix is exactly two ASCII uppercase letters
pub fn validate_prefix(prefix: &str) -> ValidationResult {
    let mut chars = prefix.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), None)
            if first.is_ascii_uppercase() && second.is_ascii_uppercase() =>
        {
            ValidationResult::valid()
        }
        _ => ValidationResult::invalid(messages::PREFIX),
    }
}

/// Valid iff the serial number is exactly eight ASCII digits
pub fn validate_serial_number(serial_number: &str) -> ValidationResult {
    let digits = serial_number.as_bytes();
    if digits.len() == SERIAL_LENGTH && digits.iter().all(|b| b.is_ascii_digit()) {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(messages::SERIAL_NUMBER)
    }
}

/// Valid iff the country code is exactly "GB"
///
/// Case-sensitive; normalization has already uppercased the input by the
/// time this rule runs.
pub fn validate_country_code(country_code: &str) -> ValidationResult {
    if country_code == COUNTRY_CODE {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(messages::COUNTRY_CODE)
    }
}

/// Valid iff the check digit field is the single digit expected for the serial
///
/// The pipeline only runs this step after the serial number has passed
/// [`validate_serial_number`]. A malformed serial is reported as a
/// check-digit failure so the function stays total.
pub fn validate_check_digit(serial_number: &str, check_digit: &str) -> ValidationResult {
    let expected = match calculate_check_digit(serial_number) {
        Ok(digit) => digit,
        Err(_) => return ValidationResult::invalid(messages::CHECK_DIGIT),
    };

    let mut chars = check_digit.chars();
    match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
        (Some(actual), None) if actual == u32::from(expected) => ValidationResult::valid(),
        _ => ValidationResult::invalid(messages::CHECK_DIGIT),
    }
}
