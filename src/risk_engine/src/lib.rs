//! Loan-default risk scoring core.
//!
//! Loads the fitted artifacts (classifier, scaler, two label encoders) once
//! and runs each applicant through a pure pipeline:
//! encode -> standardize -> classify -> threshold.
//!
//! ```no_run
//! use risk_engine::{ApplicantRecord, ArtifactStore, RiskPipeline, ScoringConfig};
//!
//! let store = ArtifactStore::load_dir("artifacts")?;
//! let pipeline = RiskPipeline::new(store, ScoringConfig::default())?;
//! let record: ApplicantRecord = serde_json::from_str(r#"{"age": 30}"#).unwrap();
//! let assessment = pipeline.assess(&record)?;
//! println!("{} ({:.1}%)", assessment.decision.as_str(), assessment.probability * 100.0);
//! # Ok::<(), risk_engine::RiskError>(())
//! ```

pub mod artifacts;
pub mod config;
pub mod encoder;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod policy;
pub mod scaler;
pub mod schema;
pub mod scorer;
pub mod types;

pub use artifacts::ArtifactStore;
pub use config::ScoringConfig;
pub use encoder::{FeatureEncoder, LabelEncoder};
pub use error::{ErrorKind, Result, RiskError};
pub use model::{Classifier, ModelArtifact};
pub use pipeline::RiskPipeline;
pub use policy::{decide, DecisionPolicy};
pub use scaler::{FeatureTransform, StandardScaler};
pub use schema::FeatureSchema;
pub use types::{ApplicantRecord, Assessment, Decision, FeatureVector, Field, RiskScore};
