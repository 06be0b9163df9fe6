//! Error types for barcode operations

/// Errors that can occur during barcode operations
///
/// Expected validation failures are never raised as errors; they are
/// returned as [`crate::ValidationResult`] values. This type covers caller
/// contract violations only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeError {
    /// Input outside the contract of a derived-value computation
    InvalidInput,
}

impl core::fmt::Display for BarcodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BarcodeError::InvalidInput => "Serial number must be exactly 8 digits",
        };
        write!(f, "{msg}")
    }
}

/// Result type for barcode operations
pub type Result<T> = core::result::Result<T, BarcodeError>;
