//! Artifacts compiled into the canister wasm.

use risk_engine::{ArtifactStore, Result, RiskPipeline, ScoringConfig};

use crate::types::DashboardConfig;

pub const MODEL_JSON: &str = include_str!("../artifacts/credit_risk_model.json");
pub const SCALER_JSON: &str = include_str!("../artifacts/credit_scaler.json");
pub const HOME_ENCODER_JSON: &str = include_str!("../artifacts/le_home.json");
pub const INTENT_ENCODER_JSON: &str = include_str!("../artifacts/le_intent.json");

pub fn scoring_config(config: &DashboardConfig) -> Result<ScoringConfig> {
    match config.threshold {
        Some(threshold) => ScoringConfig::with_threshold(threshold),
        None => Ok(ScoringConfig::default()),
    }
}

/// Parse the bundled artifacts and wire the pipeline.
pub fn bundled_pipeline(config: &DashboardConfig) -> Result<RiskPipeline> {
    let store = ArtifactStore::from_json(
        MODEL_JSON,
        SCALER_JSON,
        HOME_ENCODER_JSON,
        INTENT_ENCODER_JSON,
    )?;
    RiskPipeline::new(store, scoring_config(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard;
    use crate::types::{ApplicantInput, Band, Recommendation};
    use risk_engine::{ApplicantRecord, Decision, RiskError};

    fn pipeline() -> RiskPipeline {
        bundled_pipeline(&DashboardConfig::default()).unwrap()
    }

    fn prime_borrower() -> ApplicantInput {
        ApplicantInput {
            age: Some(35.0),
            income: Some(80_000.0),
            loan_amount: Some(15_000.0),
            credit_score: Some(750.0),
            employment_length: Some(8.0),
            dti_ratio: Some(0.15),
            home_ownership: Some("RENT".into()),
            loan_intent: Some("EDUCATION".into()),
            previous_defaults: Some(false),
            ..Default::default()
        }
    }

    fn subprime_borrower() -> ApplicantInput {
        ApplicantInput {
            age: Some(26.0),
            income: Some(22_000.0),
            loan_amount: Some(18_000.0),
            credit_score: Some(480.0),
            employment_length: Some(1.0),
            dti_ratio: Some(0.55),
            home_ownership: Some("MORTGAGE".into()),
            loan_intent: Some("DEBTCONSOLIDATION".into()),
            previous_defaults: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn bundled_artifacts_load() {
        let p = pipeline();
        assert_eq!(p.model_kind(), "gradient_boosting");
        assert_eq!(p.schema().len(), 9);
        assert_eq!(p.threshold(), 0.5);
    }

    #[test]
    fn prime_borrower_is_approved() {
        let a = pipeline()
            .assess(&ApplicantRecord::from(prime_borrower()))
            .unwrap();
        assert!(a.probability < 0.5, "p = {}", a.probability);
        assert_eq!(a.decision, Decision::Approve);
    }

    #[test]
    fn subprime_borrower_is_declined() {
        let a = pipeline()
            .assess(&ApplicantRecord::from(subprime_borrower()))
            .unwrap();
        assert!(a.probability >= 0.5, "p = {}", a.probability);
        assert_eq!(a.decision, Decision::Decline);
    }

    #[test]
    fn dashboard_defaults_are_approved() {
        // Initial slider and dropdown values of the form.
        let input = ApplicantInput {
            age: Some(30.0),
            income: Some(55_000.0),
            loan_amount: Some(15_000.0),
            credit_score: Some(680.0),
            employment_length: Some(5.0),
            home_ownership: Some("Rent".into()),
            loan_intent: Some("Personal".into()),
            previous_defaults: Some(false),
            ..Default::default()
        };
        let view = dashboard::build(&pipeline(), input).unwrap();
        assert_eq!(view.assessment.decision, Recommendation::Approve);
        assert_eq!(view.status.headline, "LOAN APPROVED");
        let dti = view.dti_gauge.unwrap();
        assert_eq!(dti.band, Band::Good);
        assert!((dti.value - 15_000.0 / 55_001.0 * 100.0).abs() < 1e-9);
        assert_eq!(view.credit_score_gauge.unwrap().band, Band::Caution);
    }

    #[test]
    fn unseen_category_is_rejected() {
        let mut input = prime_borrower();
        input.home_ownership = Some("SPACESHIP".into());
        let err = pipeline()
            .assess(&ApplicantRecord::from(input.clone()))
            .unwrap_err();
        assert!(matches!(err, RiskError::UnknownCategory { .. }));

        let view_err = dashboard::build(&pipeline(), input).unwrap_err();
        assert_eq!(view_err.kind, "unknown_category");
        assert!(view_err.message.contains("SPACESHIP"));
    }

    #[test]
    fn missing_field_is_reported_to_the_dashboard() {
        let mut input = subprime_borrower();
        input.age = None;
        let err = dashboard::build(&pipeline(), input).unwrap_err();
        assert_eq!(err.kind, "missing_field");
        assert_eq!(err.message, "missing field: age");
    }

    #[test]
    fn repeated_assessment_is_identical() {
        let p = pipeline();
        let first = dashboard::build(&p, subprime_borrower()).unwrap();
        let second = dashboard::build(&p, subprime_borrower()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.status.headline, "HIGH RISK DETECTED");
        assert_eq!(first.credit_score_gauge.unwrap().band, Band::Danger);
        assert_eq!(first.dti_gauge.unwrap().band, Band::Danger);
    }

    #[test]
    fn threshold_comes_from_config() {
        let strict = bundled_pipeline(&DashboardConfig {
            threshold: Some(0.05),
        })
        .unwrap();
        let a = strict
            .assess(&ApplicantRecord::from(prime_borrower()))
            .unwrap();
        assert_eq!(a.decision, Decision::Decline);
    }

    #[test]
    fn invalid_threshold_fails_startup() {
        let err = bundled_pipeline(&DashboardConfig {
            threshold: Some(1.5),
        })
        .err()
        .unwrap();
        assert!(matches!(err, RiskError::InvariantViolation(_)));
    }
}
