//! Per-feature standardization.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};
use crate::types::FeatureVector;

/// Fitted transform applied to every feature vector before classification.
pub trait FeatureTransform: Send + Sync {
    /// Number of features the transform was fit with.
    fn n_features(&self) -> usize;

    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector>;

    /// Training column headers, when the artifact recorded them.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }
}

/// `(x - mean) / scale`, per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feature_names: Option<Vec<String>>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self {
            feature_names: None,
            mean,
            scale,
        };
        scaler.validate()?;
        Ok(scaler)
    }

    pub fn with_feature_names(mut self, names: Vec<String>) -> Result<Self> {
        self.feature_names = Some(names);
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.mean.is_empty() {
            return Err(RiskError::artifact("scaler", "no features"));
        }
        if self.mean.len() != self.scale.len() {
            return Err(RiskError::artifact(
                "scaler",
                format!(
                    "{} means but {} scales",
                    self.mean.len(),
                    self.scale.len()
                ),
            ));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.mean.len() {
                return Err(RiskError::artifact(
                    "scaler",
                    format!(
                        "{} feature names for {} features",
                        names.len(),
                        self.mean.len()
                    ),
                ));
            }
        }
        if let Some(i) = self
            .mean
            .iter()
            .chain(&self.scale)
            .position(|v| !v.is_finite())
        {
            return Err(RiskError::artifact(
                "scaler",
                format!("non-finite statistic at position {i}"),
            ));
        }
        if self.scale.iter().any(|s| *s < 0.0) {
            return Err(RiskError::artifact("scaler", "negative scale"));
        }
        Ok(())
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }
}

impl FeatureTransform for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector> {
        if features.len() != self.n_features() {
            return Err(RiskError::ShapeMismatch {
                expected: self.n_features(),
                actual: features.len(),
            });
        }
        let scaled = features
            .as_slice()
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                // Constant features were fit with zero variance.
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect();
        Ok(FeatureVector::new(scaled))
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}
