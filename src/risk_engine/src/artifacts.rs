//! Loading the fitted model, scaler and label encoders.
//!
//! Artifacts are JSON documents with fixed file names. They are read once,
//! validated, and then only ever borrowed immutably; any failure here is an
//! [`RiskError::ArtifactLoadFailure`] and the caller is expected to abort.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::encoder::LabelEncoder;
use crate::error::{Result, RiskError};
use crate::model::{Classifier, ModelArtifact};
use crate::scaler::{FeatureTransform, StandardScaler};
use crate::schema::FeatureSchema;

pub const MODEL_FILE: &str = "credit_risk_model.json";
pub const SCALER_FILE: &str = "credit_scaler.json";
pub const HOME_ENCODER_FILE: &str = "le_home.json";
pub const INTENT_ENCODER_FILE: &str = "le_intent.json";

/// Everything the pipeline needs, loaded once at startup.
pub struct ArtifactStore {
    pub model: Box<dyn Classifier>,
    pub scaler: Box<dyn FeatureTransform>,
    pub home_ownership: LabelEncoder,
    pub loan_intent: LabelEncoder,
    pub schema: FeatureSchema,
}

impl ArtifactStore {
    /// Assemble a store from already constructed parts.
    pub fn new(
        model: Box<dyn Classifier>,
        scaler: Box<dyn FeatureTransform>,
        home_ownership: LabelEncoder,
        loan_intent: LabelEncoder,
        schema: FeatureSchema,
    ) -> Self {
        Self {
            model,
            scaler,
            home_ownership,
            loan_intent,
            schema,
        }
    }

    /// Parse the four artifact documents.
    ///
    /// The feature order comes from the scaler's recorded column names when
    /// present, otherwise the default training order is assumed.
    pub fn from_json(model: &str, scaler: &str, home: &str, intent: &str) -> Result<Self> {
        let model = parse::<ModelArtifact>(MODEL_FILE, model)?.into_classifier()?;

        let scaler: StandardScaler = parse(SCALER_FILE, scaler)?;
        scaler.validate().map_err(|e| attribute_to(e, SCALER_FILE))?;
        let schema = match scaler.feature_names() {
            Some(names) => FeatureSchema::from_names(names),
            None => Ok(FeatureSchema::default()),
        }
        .map_err(|e| attribute_to(e, SCALER_FILE))?;

        let home_ownership = parse_encoder(HOME_ENCODER_FILE, home)?;
        let loan_intent = parse_encoder(INTENT_ENCODER_FILE, intent)?;

        info!(
            model = model.describe(),
            features = schema.len(),
            home_labels = home_ownership.classes().len(),
            intent_labels = loan_intent.classes().len(),
            "artifacts loaded"
        );

        Ok(Self::new(
            model,
            Box::new(scaler),
            home_ownership,
            loan_intent,
            schema,
        ))
    }

    /// Read the artifacts from their fixed file names under `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            fs::read_to_string(dir.join(name)).map_err(|e| RiskError::artifact(name, e))
        };
        info!(dir = %dir.display(), "loading artifacts");
        Self::from_json(
            &read(MODEL_FILE)?,
            &read(SCALER_FILE)?,
            &read(HOME_ENCODER_FILE)?,
            &read(INTENT_ENCODER_FILE)?,
        )
    }
}

fn parse<T: DeserializeOwned>(artifact: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| RiskError::artifact(artifact, e))
}

fn parse_encoder(artifact: &str, json: &str) -> Result<LabelEncoder> {
    let encoder: LabelEncoder = parse(artifact, json)?;
    encoder.validate().map_err(|e| attribute_to(e, artifact))?;
    Ok(encoder)
}

/// Attribute a validation failure to the file it came from.
fn attribute_to(err: RiskError, artifact: &str) -> RiskError {
    match err {
        RiskError::ArtifactLoadFailure { artifact: part, reason } => RiskError::ArtifactLoadFailure {
            artifact: artifact.to_string(),
            reason: format!("{part}: {reason}"),
        },
        other => other,
    }
}
