//! Scoring configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};

/// Decision threshold applied when nothing else is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// Tunables for the assessment pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Default probability at or above which an application is declined.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ScoringConfig {
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        let cfg = Self { threshold };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(RiskError::InvariantViolation(format!(
                "decision threshold {} is outside [0, 1]",
                self.threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_one_half() {
        assert_eq!(ScoringConfig::default().threshold, 0.5);
    }

    #[test]
    fn empty_json_uses_defaults() {
        let cfg: ScoringConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ScoringConfig::default());
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        assert!(ScoringConfig::with_threshold(0.0).is_ok());
        assert!(ScoringConfig::with_threshold(1.0).is_ok());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let err = ScoringConfig::with_threshold(bad).unwrap_err();
            assert!(matches!(err, RiskError::InvariantViolation(_)), "{bad}");
        }
    }
}
