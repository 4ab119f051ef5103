//! Shared configuration constants and scoring parameters.

use thiserror::Error;

/// Sigmoid probability a label must exceed in multi-label mode.
pub const DEFAULT_THRESHOLD: f32 = 0.5;
/// Number of sections returned in ranked mode.
pub const DEFAULT_TOP_K: usize = 3;
/// Softmax temperature applied in ranked mode.
pub const DEFAULT_TEMPERATURE: f32 = 1.5;
/// Ranked-mode token budget for truncation and fixed-length padding.
pub const DEFAULT_MAX_LENGTH: usize = 192;
/// Multi-label token budget when `tokenizer.json` declares no truncation.
pub const MODEL_MAX_LENGTH: usize = 512;
/// Title reported for a label index with no mapping entry.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Number of leading catalog entries sampled by the generator.
pub const CATALOG_PREFIX: usize = 50;
/// Probability of injecting typos into a generated complaint.
pub const TYPO_RATE: f64 = 0.1;
/// Default number of generated records.
pub const DEFAULT_SAMPLES: usize = 25_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("threshold must be within [0, 1], got {0}")]
    Threshold(f32),

    #[error("temperature must be positive, got {0}")]
    Temperature(f32),

    #[error("top-k must be at least 1")]
    TopK,

    #[error("max length must be at least 1")]
    MaxLength,

    #[error("typo rate must be within [0, 1], got {0}")]
    TypoRate(f64),
}

/// Parameters for turning logits into section predictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub threshold: f32,
    pub top_k: usize,
    pub temperature: f32,
    /// Token budget for ranked mode. Multi-label mode keeps the tokenizer's own.
    pub max_length: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            temperature: DEFAULT_TEMPERATURE,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if self.temperature.is_nan() || self.temperature <= 0.0 {
            return Err(ConfigError::Temperature(self.temperature));
        }
        if self.top_k == 0 {
            return Err(ConfigError::TopK);
        }
        if self.max_length == 0 {
            return Err(ConfigError::MaxLength);
        }
        Ok(())
    }
}

/// Validate a probability-like rate such as the generator's typo rate.
pub fn validate_rate(rate: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(ConfigError::TypoRate(rate))
    }
}
