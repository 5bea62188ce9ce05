//! Result presentation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::ScoreThresholds;

/// Score color bands for the results table
#[derive(Debug, Clone, Deserialize)]
pub struct PresentationConfig {
    /// Scores at or above this are "high"
    #[serde(default = "default_high")]
    pub high_threshold: f64,

    /// Scores at or above this (and below high) are "medium"
    #[serde(default = "default_medium")]
    pub medium_threshold: f64,
}

impl PresentationConfig {
    pub fn thresholds(&self) -> ScoreThresholds {
        ScoreThresholds {
            high: self.high_threshold,
            medium: self.medium_threshold,
        }
    }

    /// Requires `0 <= medium <= high <= 10`
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ordered = 0.0 <= self.medium_threshold
            && self.medium_threshold <= self.high_threshold
            && self.high_threshold <= 10.0;
        if ordered {
            Ok(())
        } else {
            Err(ValidationError::InvalidThresholds)
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            high_threshold: default_high(),
            medium_threshold: default_medium(),
        }
    }
}

fn default_high() -> f64 {
    8.0
}

fn default_medium() -> f64 {
    5.0
}
