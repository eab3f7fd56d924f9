//! Gradient-boosted decision trees for binary classification.
//!
//! The ensemble output is `init_score + learning_rate * sum(tree(x))` in
//! log-odds space, mapped to a probability by the logistic link. Trees are
//! stored as flat node arrays rooted at index 0; a sample goes to the left
//! child when `x[feature] <= threshold`.

use serde::{Deserialize, Serialize};

use super::{sigmoid, Classifier};
use crate::error::{Result, RiskError};
use crate::types::FeatureVector;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    fn validate(&self, n_features: usize, index: usize) -> Result<()> {
        let fail = |reason: String| -> Result<()> {
            Err(RiskError::artifact("model", format!("tree {index}: {reason}")))
        };
        if self.nodes.is_empty() {
            return fail("no nodes".into());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return fail(format!(
                            "node {i} splits on feature {feature} of {n_features}"
                        ));
                    }
                    if !threshold.is_finite() {
                        return fail(format!("node {i} has a non-finite threshold"));
                    }
                    // Children strictly after their parent keeps every walk finite.
                    for child in [left, right] {
                        if child <= i || child >= self.nodes.len() {
                            return fail(format!("node {i} points at invalid child {child}"));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return fail(format!("leaf {i} is not finite"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Leaf value reached by `x`. Only valid on a validated tree.
    fn evaluate(&self, x: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if x[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostedTrees {
    n_features: usize,
    /// Prior log-odds of default.
    init_score: f64,
    learning_rate: f64,
    trees: Vec<Tree>,
}

impl GradientBoostedTrees {
    pub fn new(
        n_features: usize,
        init_score: f64,
        learning_rate: f64,
        trees: Vec<Tree>,
    ) -> Result<Self> {
        let model = Self {
            n_features,
            init_score,
            learning_rate,
            trees,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_features == 0 {
            return Err(RiskError::artifact("model", "ensemble declares no features"));
        }
        if !self.init_score.is_finite() || !self.learning_rate.is_finite() {
            return Err(RiskError::artifact("model", "non-finite ensemble parameter"));
        }
        if self.learning_rate <= 0.0 {
            return Err(RiskError::artifact("model", "learning rate must be positive"));
        }
        if self.trees.is_empty() {
            return Err(RiskError::artifact("model", "ensemble has no trees"));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features, i)?;
        }
        Ok(())
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Ensemble output in log-odds space.
    pub fn raw_score(&self, x: &[f64]) -> f64 {
        let sum: f64 = self.trees.iter().map(|t| t.evaluate(x)).sum();
        self.init_score + self.learning_rate * sum
    }
}

impl Classifier for GradientBoostedTrees {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_probability(&self, features: &FeatureVector) -> Result<f64> {
        if features.len() != self.n_features {
            return Err(RiskError::ShapeMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }
        Ok(sigmoid(self.raw_score(features.as_slice())))
    }

    fn describe(&self) -> &'static str {
        "gradient_boosting"
    }
}
