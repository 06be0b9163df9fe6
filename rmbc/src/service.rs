//! Submission service
//!
//! Drives the pieces the way a front end does: normalize the raw input, run
//! the synchronous pre-validation, and only then record the barcode in the
//! history and ask the remote service to confirm it.

use rmbc_core::{normalize_barcode, validate_barcode};
use tokio::sync::RwLock;

use crate::history::{ValidationEntry, ValidationHistory, ValidationStatus};
use crate::remote_backend::{RemoteConfig, RemoteValidator};

/// Outcome of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Pre-validation failed; the barcode never reached the server
    Rejected {
        /// First violated rule's message
        message: &'static str,
    },
    /// Recorded in the history and resolved by the remote service
    Resolved {
        /// History entry id
        id: u64,
        /// Final status, Valid or Invalid
        status: ValidationStatus,
    },
}

/// Shared submission front end over a history and a remote validator
///
/// Safe to share across tasks: the history sits behind a
/// [`tokio::sync::RwLock`] and each submission is independent.
pub struct ValidationService {
    history: RwLock<ValidationHistory>,
    remote: RemoteValidator,
}

impl ValidationService {
    /// Create a service with the given remote configuration
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            history: RwLock::new(ValidationHistory::new()),
            remote: RemoteValidator::new(config),
        }
    }

    /// Submit raw input for validation
    ///
    /// Normalizes and pre-validates synchronously; a failure is returned
    /// immediately and leaves the history untouched. A pass is recorded as
    /// pending, confirmed remotely, and resolved to its final status.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let barcode = normalize_barcode(input);
        let result = validate_barcode(&barcode);

        if !result.is_valid() {
            return SubmitOutcome::Rejected {
                message: result.error_message().unwrap_or("Validation failed"),
            };
        }

        let id = self.history.write().await.record(&barcode);

        let outcome = self.remote.confirm(&barcode).await;
        let status = if outcome.confirmed {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        };
        self.history.write().await.resolve(id, status);

        SubmitOutcome::Resolved { id, status }
    }

    /// Snapshot of the history, newest first
    pub async fn entries(&self) -> Vec<ValidationEntry> {
        self.history.read().await.entries().to_vec()
    }

    /// Number of submissions still awaiting confirmation
    pub async fn pending_count(&self) -> usize {
        self.history.read().await.pending_count()
    }
}
