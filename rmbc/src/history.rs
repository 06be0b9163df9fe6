//! Validation history tracking
//!
//! An in-memory, newest-first record of submitted barcodes: each entry
//! carries the normalized barcode, its current status, and a submission
//! timestamp. This is what a front end renders as the history list.

use std::time::{SystemTime, UNIX_EPOCH};

/// Status of a submitted barcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValidationStatus {
    /// Pre-validation passed, remote confirmation pending
    Validating,
    /// Confirmed by the remote service
    Valid,
    /// Denied by the remote service
    Invalid,
}

impl ValidationStatus {
    /// Glyph used by text front ends
    pub const fn symbol(&self) -> &'static str {
        match self {
            ValidationStatus::Validating => "⏳",
            ValidationStatus::Valid => "✓",
            ValidationStatus::Invalid => "✗",
        }
    }

    /// Human-readable status label
    pub const fn label(&self) -> &'static str {
        match self {
            ValidationStatus::Validating => "Validating...",
            ValidationStatus::Valid => "Valid barcode",
            ValidationStatus::Invalid => "Invalid barcode",
        }
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single entry in the validation history
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationEntry {
    /// History-assigned identifier, unique and increasing per history
    pub id: u64,
    /// Normalized barcode as submitted
    pub barcode: String,
    /// Current status
    pub status: ValidationStatus,
    /// Submission time, Unix epoch milliseconds
    pub timestamp_ms: u64,
}

/// In-memory history of submitted barcodes, newest first
#[derive(Debug, Default)]
pub struct ValidationHistory {
    entries: Vec<ValidationEntry>,
    next_id: u64,
}

impl ValidationHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted barcode as pending confirmation
    ///
    /// Entries are kept newest first. Returns the id used to resolve the
    /// entry once a confirmation outcome arrives.
    pub fn record(&mut self, barcode: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            0,
            ValidationEntry {
                id,
                barcode: barcode.to_string(),
                status: ValidationStatus::Validating,
                timestamp_ms: now_ms(),
            },
        );
        id
    }

    /// Update the status of a recorded entry
    ///
    /// Returns false when the id is unknown.
    pub fn resolve(&mut self, id: u64, status: ValidationStatus) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.status = status;
                true
            }
            None => false,
        }
    }

    /// Look up an entry by id
    pub fn get(&self, id: u64) -> Option<&ValidationEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[ValidationEntry] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries still awaiting confirmation
    pub fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.status == ValidationStatus::Validating)
            .count()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
