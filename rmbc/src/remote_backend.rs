//! Simulated remote confirmation backend
//!
//! Stands in for the carrier's server-side validation: each submitted
//! barcode resolves after a randomized delay with a randomized verdict.
//! Only available when the "remote" feature is enabled.

use std::time::Duration;

use rand::Rng;

/// Configuration for the simulated confirmation service
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Minimum simulated round-trip delay in milliseconds
    pub min_delay_ms: u64,
    /// Maximum simulated round-trip delay in milliseconds
    pub max_delay_ms: u64,
    /// Probability in [0, 1] that the server confirms a barcode
    pub success_rate: f64,
}

impl RemoteConfig {
    /// Set the simulated delay range in milliseconds
    pub fn with_delay_range(mut self, min_delay_ms: u64, max_delay_ms: u64) -> Self {
        self.min_delay_ms = min_delay_ms;
        self.max_delay_ms = max_delay_ms;
        self
    }

    /// Set the probability that the server confirms a barcode
    pub fn with_success_rate(mut self, success_rate: f64) -> Self {
        self.success_rate = success_rate.clamp(0.0, 1.0);
        self
    }

    /// Deterministic configuration: no delay, every barcode confirms
    pub fn instant() -> Self {
        Self {
            min_delay_ms: 0,
            max_delay_ms: 0,
            success_rate: 1.0,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 1_000,
            max_delay_ms: 30_000,
            success_rate: 0.5,
        }
    }
}

/// Outcome returned by the confirmation service
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoteOutcome {
    /// Whether the server confirmed the barcode
    pub confirmed: bool,
    /// Barcode the outcome applies to
    pub barcode: String,
    /// Server-side diagnostic
    pub message: String,
}

/// Simulated remote validator with latency and verdict injection
#[derive(Debug, Clone)]
pub struct RemoteValidator {
    config: RemoteConfig,
}

impl RemoteValidator {
    /// Create a validator with the given configuration
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Confirm a pre-validated barcode
    ///
    /// Resolves exactly once per call, after a uniformly random delay in
    /// the configured range. Concurrent calls are independent; each
    /// submission gets its own delay and verdict.
    pub async fn confirm(&self, barcode: &str) -> RemoteOutcome {
        // ThreadRng is not Send; draw everything before suspending
        let (delay_ms, confirmed) = {
            let mut rng = rand::thread_rng();
            let delay_ms = if self.config.max_delay_ms > self.config.min_delay_ms {
                rng.gen_range(self.config.min_delay_ms..=self.config.max_delay_ms)
            } else {
                self.config.min_delay_ms
            };
            (delay_ms, rng.gen_bool(self.config.success_rate.clamp(0.0, 1.0)))
        };

        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        if confirmed {
            RemoteOutcome {
                confirmed: true,
                barcode: barcode.to_string(),
                message: "Barcode validated successfully by server".to_string(),
            }
        } else {
            RemoteOutcome {
                confirmed: false,
                barcode: barcode.to_string(),
                message: "Server validation failed - please try again".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn instant_config_confirms() {
        let validator = RemoteValidator::new(RemoteConfig::instant());
        let outcome = validator.confirm("AB473124829GB").await;

        assert!(outcome.confirmed);
        assert_eq!(outcome.barcode, "AB473124829GB");
        assert_eq!(outcome.message, "Barcode validated successfully by server");
    }

    #[tokio::test]
    async fn zero_success_rate_denies() {
        let config = RemoteConfig::instant().with_success_rate(0.0);
        let validator = RemoteValidator::new(config);
        let outcome = validator.confirm("AB473124829GB").await;

        assert!(!outcome.confirmed);
        assert_eq!(outcome.message, "Server validation failed - please try again");
    }

    #[tokio::test]
    async fn waits_at_least_the_minimum_delay() {
        let config = RemoteConfig::instant().with_delay_range(10, 20);
        let validator = RemoteValidator::new(config);

        let start = tokio::time::Instant::now();
        validator.confirm("AB473124829GB").await;
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn success_rate_is_clamped() {
        let config = RemoteConfig::default().with_success_rate(1.5);
        assert_eq!(config.success_rate, 1.0);

        let config = RemoteConfig::default().with_success_rate(-0.5);
        assert_eq!(config.success_rate, 0.0);
    }
}
