use candid::CandidType;
use serde::{Deserialize, Serialize};

use risk_engine::{ApplicantRecord, Assessment, Decision, RiskError, RiskPipeline};

/// Install / upgrade argument.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, Default)]
pub struct DashboardConfig {
    /// Default probability at or above which loans are declined (0.5 if unset).
    pub threshold: Option<f64>,
}

/// Form fields submitted by the dashboard.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, Default)]
pub struct ApplicantInput {
    pub age: Option<f64>,
    pub income: Option<f64>,
    pub loan_amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub employment_length: Option<f64>,
    pub credit_history_length: Option<f64>,
    pub credit_score: Option<f64>,
    pub dti_ratio: Option<f64>,
    pub home_ownership: Option<String>,
    pub loan_intent: Option<String>,
    pub previous_defaults: Option<bool>,
}

impl From<ApplicantInput> for ApplicantRecord {
    fn from(input: ApplicantInput) -> Self {
        ApplicantRecord {
            age: input.age,
            income: input.income,
            loan_amount: input.loan_amount,
            interest_rate: input.interest_rate,
            employment_length: input.employment_length,
            credit_history_length: input.credit_history_length,
            credit_score: input.credit_score,
            dti_ratio: input.dti_ratio,
            home_ownership: input.home_ownership,
            loan_intent: input.loan_intent,
            previous_defaults: input.previous_defaults,
        }
    }
}

#[derive(CandidType, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recommendation {
    #[serde(rename = "APPROVE")]
    Approve,
    #[serde(rename = "DECLINE")]
    Decline,
}

impl From<Decision> for Recommendation {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approve => Recommendation::Approve,
            Decision::Decline => Recommendation::Decline,
        }
    }
}

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AssessmentView {
    pub decision: Recommendation,
    pub probability: f64,
    pub confidence: f64,
    pub threshold: f64,
}

impl From<Assessment> for AssessmentView {
    fn from(a: Assessment) -> Self {
        AssessmentView {
            decision: a.decision.into(),
            probability: a.probability,
            confidence: a.confidence,
            threshold: a.threshold,
        }
    }
}

/// Rejected assessment, with a stable `kind` tag for the front end.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AssessError {
    pub kind: String,
    pub message: String,
}

impl From<RiskError> for AssessError {
    fn from(err: RiskError) -> Self {
        AssessError {
            kind: err.kind().as_str().to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(CandidType, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Danger,
    Caution,
    Good,
}

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GaugeBand {
    pub from: f64,
    pub to: f64,
    pub band: Band,
}

/// Data behind one gauge widget; drawing it is up to the front end.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GaugeView {
    pub title: String,
    pub value: f64,
    pub suffix: String,
    pub min: f64,
    pub max: f64,
    pub bands: Vec<GaugeBand>,
    pub threshold: f64,
    /// Band the value falls into.
    pub band: Band,
}

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatusCard {
    pub headline: String,
    pub recommendation: Recommendation,
    pub score_label: String,
    pub score_percent: f64,
    pub score_display: String,
}

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub assessment: AssessmentView,
    pub status: StatusCard,
    pub credit_score_gauge: Option<GaugeView>,
    pub dti_gauge: Option<GaugeView>,
}

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelInfo {
    pub model_kind: String,
    pub features: Vec<String>,
    pub home_ownership: Vec<String>,
    pub loan_intent: Vec<String>,
    pub threshold: f64,
}

impl From<&RiskPipeline> for ModelInfo {
    fn from(pipeline: &RiskPipeline) -> Self {
        let encoder = pipeline.encoder();
        ModelInfo {
            model_kind: pipeline.model_kind().to_string(),
            features: pipeline
                .schema()
                .names()
                .into_iter()
                .map(String::from)
                .collect(),
            home_ownership: encoder.home_ownership().classes().to_vec(),
            loan_intent: encoder.loan_intent().classes().to_vec(),
            threshold: pipeline.threshold(),
        }
    }
}
