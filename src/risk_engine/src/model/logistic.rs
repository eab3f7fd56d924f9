use serde::{Deserialize, Serialize};

use super::{sigmoid, Classifier};
use crate::error::{Result, RiskError};
use crate::types::FeatureVector;

/// Linear model over standardized features: `sigmoid(intercept + w . x)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(weights: Vec<f64>, intercept: f64) -> Result<Self> {
        let model = Self { weights, intercept };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(RiskError::artifact("model", "logistic model has no weights"));
        }
        if !self.intercept.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err(RiskError::artifact("model", "non-finite coefficient"));
        }
        Ok(())
    }

    /// Raw log-odds before the logistic link.
    pub fn decision_function(&self, x: &[f64]) -> f64 {
        self.intercept
            + self
                .weights
                .iter()
                .zip(x)
                .map(|(w, v)| w * v)
                .sum::<f64>()
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn predict_probability(&self, features: &FeatureVector) -> Result<f64> {
        if features.len() != self.n_features() {
            return Err(RiskError::ShapeMismatch {
                expected: self.n_features(),
                actual: features.len(),
            });
        }
        Ok(sigmoid(self.decision_function(features.as_slice())))
    }

    fn describe(&self) -> &'static str {
        "logistic_regression"
    }
}
