//! Ordered validation pipeline
//!
//! The orchestrator runs an explicit table of field rules so the evaluation
//! order stays auditable: prefix, serial number, country code, check digit.
//! The first failing rule wins and the rest are skipped, so a barcode with
//! several bad fields always reports the same single reason.

use crate::format::{BarcodeComponents, BARCODE_LENGTH};

use super::fields;
use super::messages;
use super::ValidationResult;

/// The four validated fields of a barcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeField {
    /// Two-letter prefix
    Prefix,
    /// Eight-digit serial number
    SerialNumber,
    /// Country code suffix
    CountryCode,
    /// Check digit
    CheckDigit,
}

impl core::fmt::Display for BarcodeField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            BarcodeField::Prefix => "prefix",
            BarcodeField::SerialNumber => "serial number",
            BarcodeField::CountryCode => "country code",
            BarcodeField::CheckDigit => "check digit",
        };
        write!(f, "{name}")
    }
}

/// A single rule in the field validation pipeline
#[derive(Clone, Copy)]
pub struct ValidationStep {
    /// Field this rule checks
    pub field: BarcodeField,
    check: fn(&BarcodeComponents<'_>) -> ValidationResult,
}

impl ValidationStep {
    /// Run this rule against parsed components
    pub fn run(&self, components: &BarcodeComponents<'_>) -> ValidationResult {
        (self.check)(components)
    }
}

fn check_prefix(components: &BarcodeComponents<'_>) -> ValidationResult {
    fields::validate_prefix(components.prefix)
}

fn check_serial_number(components: &BarcodeComponents<'_>) -> ValidationResult {
    fields::validate_serial_number(components.serial_number)
}

fn check_country_code(components: &BarcodeComponents<'_>) -> ValidationResult {
    fields::validate_country_code(components.country_code)
}

fn check_check_digit(components: &BarcodeComponents<'_>) -> ValidationResult {
    fields::validate_check_digit(components.serial_number, components.check_digit)
}

/// Field rules in evaluation order
///
/// The country code runs before the check digit: a wrong suffix is reported
/// even when the check digit would also fail. The check digit runs last, so
/// its serial-number argument is always well-formed by then.
pub const FIELD_STEPS: [ValidationStep; 4] = [
    ValidationStep {
        field: BarcodeField::Prefix,
        check: check_prefix,
    },
    ValidationStep {
        field: BarcodeField::SerialNumber,
        check: check_serial_number,
    },
    ValidationStep {
        field: BarcodeField::CountryCode,
        check: check_country_code,
    },
    ValidationStep {
        field: BarcodeField::CheckDigit,
        check: check_check_digit,
    },
];

/// Validate a normalized barcode string
///
/// Short-circuits at the first failing check: empty input, character
/// length, then [`FIELD_STEPS`] in order. Deterministic: the same input
/// always reports the same single failing reason.
pub fn validate_barcode(barcode: &str) -> ValidationResult {
    if barcode.is_empty() {
        return ValidationResult::invalid(messages::EMPTY);
    }

    if barcode.chars().count() != BARCODE_LENGTH {
        return ValidationResult::invalid(messages::LENGTH);
    }

    let components = BarcodeComponents::parse(barcode);
    for step in &FIELD_STEPS {
        let result = step.run(&components);
        if !result.is_valid() {
            return result;
        }
    }

    ValidationResult::valid()
}
