//! Error taxonomy for the scoring pipeline.
//!
//! Every per-request failure is returned to the caller as-is; nothing in the
//! pipeline retries. [`RiskError::ArtifactLoadFailure`] only occurs while the
//! artifact store is being assembled and is fatal to the embedding process.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading artifacts or assessing an applicant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// A field the feature schema needs was not supplied.
    #[error("missing field: {field}")]
    MissingField { field: String },

    /// A categorical value outside the fitted encoder vocabulary.
    #[error("unknown category for {field}: {value:?}")]
    UnknownCategory { field: String, value: String },

    /// A numeric field that cannot be fed to the scaler (NaN or infinite).
    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// Feature vector length disagrees with what the artifacts were fit on.
    #[error("shape mismatch: expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A value that must lie in a fixed range did not.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// An artifact could not be read, parsed or validated.
    #[error("failed to load artifact {artifact}: {reason}")]
    ArtifactLoadFailure { artifact: String, reason: String },
}

/// Stable, machine-readable tag for each [`RiskError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingField,
    UnknownCategory,
    InvalidField,
    ShapeMismatch,
    InvariantViolation,
    ArtifactLoadFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingField => "missing_field",
            ErrorKind::UnknownCategory => "unknown_category",
            ErrorKind::InvalidField => "invalid_field",
            ErrorKind::ShapeMismatch => "shape_mismatch",
            ErrorKind::InvariantViolation => "invariant_violation",
            ErrorKind::ArtifactLoadFailure => "artifact_load_failure",
        }
    }
}

impl RiskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RiskError::MissingField { .. } => ErrorKind::MissingField,
            RiskError::UnknownCategory { .. } => ErrorKind::UnknownCategory,
            RiskError::InvalidField { .. } => ErrorKind::InvalidField,
            RiskError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            RiskError::InvariantViolation(_) => ErrorKind::InvariantViolation,
            RiskError::ArtifactLoadFailure { .. } => ErrorKind::ArtifactLoadFailure,
        }
    }

    pub(crate) fn artifact(artifact: impl Into<String>, reason: impl ToString) -> Self {
        RiskError::ArtifactLoadFailure {
            artifact: artifact.into(),
            reason: reason.to_string(),
        }
    }

    /// True for failures caused by the request rather than the deployment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RiskError::MissingField { .. }
                | RiskError::UnknownCategory { .. }
                | RiskError::InvalidField { .. }
        )
    }
}

/// A convenience type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, RiskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_category() {
        let err = RiskError::UnknownCategory {
            field: "home_ownership".into(),
            value: "SPACESHIP".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown category for home_ownership: \"SPACESHIP\""
        );
    }

    #[test]
    fn display_shape_mismatch() {
        let err = RiskError::ShapeMismatch {
            expected: 9,
            actual: 7,
        };
        assert_eq!(err.to_string(), "shape mismatch: expected 9 features, got 7");
    }

    #[test]
    fn display_artifact_failure() {
        let err = RiskError::artifact("le_home.json", "no such file");
        assert_eq!(
            err.to_string(),
            "failed to load artifact le_home.json: no such file"
        );
    }

    #[test]
    fn kinds_map_one_to_one() {
        let cases = [
            (RiskError::MissingField { field: "age".into() }, "missing_field"),
            (
                RiskError::InvalidField {
                    field: "income".into(),
                    reason: "NaN".into(),
                },
                "invalid_field",
            ),
            (
                RiskError::InvariantViolation("p=1.2".into()),
                "invariant_violation",
            ),
        ];
        for (err, tag) in cases {
            assert_eq!(err.kind().as_str(), tag);
        }
    }

    #[test]
    fn input_errors_are_distinguished_from_configuration_errors() {
        assert!(RiskError::MissingField { field: "age".into() }.is_input_error());
        assert!(!RiskError::ShapeMismatch {
            expected: 1,
            actual: 2
        }
        .is_input_error());
        assert!(!RiskError::artifact("x", "y").is_input_error());
    }
}
