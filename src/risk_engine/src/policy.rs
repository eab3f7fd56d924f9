//! Probability -> APPROVE / DECLINE.

use crate::config::DEFAULT_THRESHOLD;
use crate::error::{Result, RiskError};
use crate::types::{Assessment, Decision};

/// DECLINE when `probability >= threshold`, APPROVE otherwise.
pub fn decide(probability: f64, threshold: f64) -> Result<Decision> {
    check_unit("probability", probability)?;
    check_unit("threshold", threshold)?;
    if probability >= threshold {
        Ok(Decision::Decline)
    } else {
        Ok(Decision::Approve)
    }
}

fn check_unit(what: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RiskError::InvariantViolation(format!(
            "{what} {value} is outside [0, 1]"
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionPolicy {
    threshold: f64,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DecisionPolicy {
    pub fn new(threshold: f64) -> Result<Self> {
        check_unit("threshold", threshold)?;
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn decide(&self, probability: f64) -> Result<Decision> {
        decide(probability, self.threshold)
    }

    /// Decision plus the probability of the chosen outcome.
    pub fn assess(&self, probability: f64) -> Result<Assessment> {
        let decision = self.decide(probability)?;
        let confidence = match decision {
            Decision::Decline => probability,
            Decision::Approve => 1.0 - probability,
        };
        Ok(Assessment {
            decision,
            probability,
            confidence,
            threshold: self.threshold,
        })
    }
}
