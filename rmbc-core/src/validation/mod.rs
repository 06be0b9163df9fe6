//! Validation rules for Royal Mail barcodes
//!
//! This module contains pure validation functions with no I/O dependencies.
//! Field validators return a [`ValidationResult`] and never raise; the
//! orchestrator in [`pipeline`] runs them in a fixed, short-circuiting
//! order.

pub mod fields;
pub mod pipeline;

pub use fields::{
    validate_check_digit, validate_country_code, validate_prefix, validate_serial_number,
};
pub use pipeline::{validate_barcode, BarcodeField, ValidationStep, FIELD_STEPS};

/// Failure messages, one per violated rule
pub mod messages {
    /// Empty input, reported before the length rule
    pub const EMPTY: &str = "Validation failed - Barcode cannot be empty";
    /// Input is not exactly 13 characters
    pub const LENGTH: &str = "Validation failed - Barcode is not the correct length";
    pub const PREFIX: &str = "Validation failed - Prefix is not in the range AA to ZZ";
    pub const SERIAL_NUMBER: &str =
        "Validation failed - Serial number is not in the range 00000000 to 99999999";
    pub const CHECK_DIGIT: &str = "Validation failed - Check digit is not correct";
    pub const COUNTRY_CODE: &str = "Validation failed - Country code is not GB";
}

/// Outcome of a validation check
///
/// Exactly one of two shapes exists: valid with no message, or invalid with
/// the first violated rule's message. The constructors enforce this, so a
/// result can never be invalid without a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationResult {
    is_valid: bool,
    error_message: Option<&'static str>,
}

impl ValidationResult {
    /// A passing result
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    /// A failing result carrying the violated rule's message
    pub const fn invalid(message: &'static str) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message),
        }
    }

    /// Whether the check passed
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The diagnostic message, present exactly when the result is invalid
    pub const fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_carries_no_message() {
        let result = ValidationResult::valid();
        assert!(result.is_valid());
        assert_eq!(result.error_message(), None);
    }

    #[test]
    fn invalid_always_carries_a_message() {
        let result = ValidationResult::invalid(messages::PREFIX);
        assert!(!result.is_valid());
        assert_eq!(result.error_message(), Some(messages::PREFIX));
    }
}
