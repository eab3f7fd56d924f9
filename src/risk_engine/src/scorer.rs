//! Scaling followed by classification.

use tracing::debug;

use crate::error::{Result, RiskError};
use crate::model::Classifier;
use crate::scaler::FeatureTransform;
use crate::types::{FeatureVector, RiskScore};

pub struct Scorer {
    transform: Box<dyn FeatureTransform>,
    classifier: Box<dyn Classifier>,
}

impl Scorer {
    pub fn new(transform: Box<dyn FeatureTransform>, classifier: Box<dyn Classifier>) -> Self {
        Self {
            transform,
            classifier,
        }
    }

    /// Feature count the fitted scaler expects.
    pub fn n_features(&self) -> usize {
        self.transform.n_features()
    }

    pub fn transform(&self) -> &dyn FeatureTransform {
        self.transform.as_ref()
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn score(&self, features: &FeatureVector) -> Result<RiskScore> {
        let expected = self.transform.n_features();
        if features.len() != expected {
            return Err(RiskError::ShapeMismatch {
                expected,
                actual: features.len(),
            });
        }
        let scaled = self.transform.transform(features)?;
        let p = self.classifier.predict_probability(&scaled)?;
        if !(0.0..=1.0).contains(&p) {
            return Err(RiskError::InvariantViolation(format!(
                "{} produced probability {p} outside [0, 1]",
                self.classifier.describe()
            )));
        }
        debug!(model = self.classifier.describe(), probability = p, "scored");
        Ok(RiskScore::new_unchecked(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogisticRegression;
    use crate::scaler::StandardScaler;

    /// Classifier that ignores its input.
    struct Fixed(f64);

    impl Classifier for Fixed {
        fn n_features(&self) -> usize {
            2
        }

        fn predict_probability(&self, _: &FeatureVector) -> Result<f64> {
            Ok(self.0)
        }

        fn describe(&self) -> &'static str {
            "fixed"
        }
    }

    fn identity() -> Box<StandardScaler> {
        Box::new(StandardScaler::new(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap())
    }

    #[test]
    fn scales_before_classifying() {
        let scaler = StandardScaler::new(vec![100.0, 0.0], vec![10.0, 1.0]).unwrap();
        let model = LogisticRegression::new(vec![1.0, 0.0], 0.0).unwrap();
        let scorer = Scorer::new(Box::new(scaler), Box::new(model));
        // 100 scales to 0, so the log-odds are exactly 0.
        let score = scorer
            .score(&FeatureVector::new(vec![100.0, 42.0]))
            .unwrap();
        assert_eq!(score.probability(), 0.5);
    }

    #[test]
    fn shape_is_checked_against_the_scaler() {
        let scorer = Scorer::new(identity(), Box::new(Fixed(0.2)));
        let err = scorer
            .score(&FeatureVector::new(vec![1.0, 2.0, 3.0]))
            .unwrap_err();
        assert_eq!(
            err,
            RiskError::ShapeMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn out_of_range_output_is_an_invariant_violation() {
        for bad in [1.01, -0.2, f64::NAN] {
            let scorer = Scorer::new(identity(), Box::new(Fixed(bad)));
            let err = scorer.score(&FeatureVector::new(vec![0.0, 0.0])).unwrap_err();
            assert!(matches!(err, RiskError::InvariantViolation(_)), "{bad}");
        }
    }

    #[test]
    fn boundary_probabilities_pass_through() {
        for p in [0.0, 1.0] {
            let scorer = Scorer::new(identity(), Box::new(Fixed(p)));
            let score = scorer.score(&FeatureVector::new(vec![0.0, 0.0])).unwrap();
            assert_eq!(score.probability(), p);
        }
    }
}
