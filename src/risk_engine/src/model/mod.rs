//! Classifiers that turn a scaled feature vector into a default probability.
//!
//! Both model families are plain data deserialized from the model artifact
//! and validated once at load time; evaluation afterwards cannot fail except
//! on a vector of the wrong length.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::FeatureVector;

pub mod gbdt;
pub mod logistic;

pub use gbdt::{GradientBoostedTrees, Node, Tree};
pub use logistic::LogisticRegression;

/// Probability estimator for the positive (default) class.
pub trait Classifier: Send + Sync {
    fn n_features(&self) -> usize;

    /// Probability of default for an already scaled feature vector.
    fn predict_probability(&self, features: &FeatureVector) -> Result<f64>;

    /// Short model family name for diagnostics.
    fn describe(&self) -> &'static str;
}

/// On-disk model representation, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    GradientBoosting(GradientBoostedTrees),
    Logistic(LogisticRegression),
}

impl ModelArtifact {
    /// Validate the parameters and hand back a ready classifier.
    pub fn into_classifier(self) -> Result<Box<dyn Classifier>> {
        match self {
            ModelArtifact::GradientBoosting(model) => {
                model.validate()?;
                Ok(Box::new(model))
            }
            ModelArtifact::Logistic(model) => {
                model.validate()?;
                Ok(Box::new(model))
            }
        }
    }
}

/// Logistic link, evaluated without overflowing for large `|z|`.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
