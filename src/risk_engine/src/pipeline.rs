//! The assessment pipeline: encode, scale, classify, decide.

use tracing::{debug, warn};

use crate::artifacts::ArtifactStore;
use crate::config::ScoringConfig;
use crate::encoder::FeatureEncoder;
use crate::error::{Result, RiskError};
use crate::policy::DecisionPolicy;
use crate::schema::FeatureSchema;
use crate::scorer::Scorer;
use crate::types::{ApplicantRecord, Assessment, FeatureVector};

/// Immutable, fully wired scoring pipeline. Safe to share between callers.
pub struct RiskPipeline {
    encoder: FeatureEncoder,
    scorer: Scorer,
    policy: DecisionPolicy,
}

impl RiskPipeline {
    /// Wire the artifacts together, refusing stores whose parts disagree on
    /// the feature layout.
    pub fn new(store: ArtifactStore, config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        let policy = DecisionPolicy::new(config.threshold)?;

        let ArtifactStore {
            model,
            scaler,
            home_ownership,
            loan_intent,
            schema,
        } = store;

        let widths = [
            ("feature schema", schema.len()),
            ("scaler", scaler.n_features()),
            ("model", model.n_features()),
        ];
        if let Some((name, width)) = widths.iter().find(|(_, w)| *w != schema.len()) {
            return Err(RiskError::artifact(
                *name,
                format!(
                    "expects {width} features but the schema has {}",
                    schema.len()
                ),
            ));
        }

        if let Some(names) = scaler.feature_names() {
            let recorded = FeatureSchema::from_names(names)?;
            if recorded != schema {
                return Err(RiskError::artifact(
                    "scaler",
                    format!(
                        "fitted column order {:?} differs from schema {:?}",
                        recorded.names(),
                        schema.names()
                    ),
                ));
            }
        }

        debug!(
            features = schema.len(),
            threshold = policy.threshold(),
            "pipeline ready"
        );

        Ok(Self {
            encoder: FeatureEncoder::new(schema, home_ownership, loan_intent),
            scorer: Scorer::new(scaler, model),
            policy,
        })
    }

    pub fn schema(&self) -> &FeatureSchema {
        self.encoder.schema()
    }

    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    pub fn threshold(&self) -> f64 {
        self.policy.threshold()
    }

    pub fn model_kind(&self) -> &'static str {
        self.scorer.classifier().describe()
    }

    /// Feature vector for `record`, before scaling.
    pub fn features(&self, record: &ApplicantRecord) -> Result<FeatureVector> {
        self.encoder.encode(record)
    }

    /// Score one applicant. Pure: the same record always yields the same
    /// assessment.
    pub fn assess(&self, record: &ApplicantRecord) -> Result<Assessment> {
        self.run(record).inspect_err(|err| {
            warn!(kind = err.kind().as_str(), error = %err, "assessment rejected");
        })
    }

    fn run(&self, record: &ApplicantRecord) -> Result<Assessment> {
        let features = self.encoder.encode(record)?;
        let score = self.scorer.score(&features)?;
        let assessment = self.policy.assess(score.probability())?;
        debug!(
            decision = assessment.decision.as_str(),
            probability = assessment.probability,
            "assessed"
        );
        Ok(assessment)
    }
}
