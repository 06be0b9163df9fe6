//! RMBC - Royal Mail Barcode Validation
//!
//! This crate wraps the pure validation core with the application-side
//! pieces: a validation history, a simulated remote confirmation service,
//! and the submission flow that drives all three.
//!
//! ## Architecture
//!
//! RMBC follows a clean specification/implementation separation:
//!
//! - **rmbc-core**: Pure format definitions and validation rules (no I/O)
//! - **rmbc**: History tracking, async confirmation, and front-end plumbing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rmbc::{RemoteConfig, SubmitOutcome, ValidationService};
//!
//! # async fn example() {
//! let service = ValidationService::new(RemoteConfig::default());
//!
//! match service.submit("  ab473124829gb  ").await {
//!     SubmitOutcome::Resolved { id, status } => println!("entry {id}: {status}"),
//!     SubmitOutcome::Rejected { message } => eprintln!("{message}"),
//! }
//! # }
//! ```

// Re-export core format definitions and validation entry points
pub use rmbc_core::{
    // Format definitions
    BarcodeComponents, BARCODE_LENGTH, COUNTRY_CODE, SERIAL_LENGTH,
    // Normalization
    normalize_barcode,
    // Check digit
    calculate_check_digit, WEIGHTS,
    // Error handling
    BarcodeError, Result,
    // Validation
    messages, validate_barcode, validate_check_digit, validate_country_code, validate_prefix,
    validate_serial_number, BarcodeField, ValidationResult, ValidationStep, FIELD_STEPS,
};

// Implementation modules
pub mod history;
#[cfg(feature = "remote")]
pub mod remote_backend;
#[cfg(feature = "remote")]
pub mod service;

// Public exports
pub use history::{ValidationEntry, ValidationHistory, ValidationStatus};

// Remote confirmation features
#[cfg(feature = "remote")]
pub use remote_backend::{RemoteConfig, RemoteOutcome, RemoteValidator};
#[cfg(feature = "remote")]
pub use service::{SubmitOutcome, ValidationService};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_then_validate_accepts_messy_input() {
        let barcode = normalize_barcode("  ab473124829gb  ");
        assert_eq!(barcode, "AB473124829GB");
        assert!(validate_barcode(&barcode).is_valid());
    }

    #[test]
    fn field_names_are_human_readable() {
        assert_eq!(BarcodeField::Prefix.to_string(), "prefix");
        assert_eq!(BarcodeField::SerialNumber.to_string(), "serial number");
        assert_eq!(BarcodeField::CountryCode.to_string(), "country code");
        assert_eq!(BarcodeField::CheckDigit.to_string(), "check digit");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn components_serialize_to_json() {
        let components = BarcodeComponents::parse("AB473124829GB");
        let json = serde_json::to_value(components).unwrap();
        assert_eq!(json["prefix"], "AB");
        assert_eq!(json["serial_number"], "47312482");
        assert_eq!(json["check_digit"], "9");
        assert_eq!(json["country_code"], "GB");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn validation_result_serializes_its_message() {
        let json = serde_json::to_value(validate_barcode("AB473124820GB")).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["error_message"], messages::CHECK_DIGIT);

        let json = serde_json::to_value(validate_barcode("AB473124829GB")).unwrap();
        assert_eq!(json["is_valid"], true);
        assert!(json["error_message"].is_null());
    }
}
