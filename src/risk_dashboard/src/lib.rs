// src/risk_dashboard/lib.rs
use ic_cdk_macros::{init, post_upgrade, query};
use once_cell::sync::OnceCell;

use risk_engine::{ApplicantRecord, RiskPipeline};

mod artifacts;
mod dashboard;
mod types;

use types::{ApplicantInput, AssessError, AssessmentView, DashboardConfig, DashboardView, ModelInfo};

/// Pipeline wired from the bundled artifacts; set once per install or upgrade.
static PIPELINE: OnceCell<RiskPipeline> = OnceCell::new();

/// Load the artifacts or trap, which aborts the install/upgrade.
fn start(config: Option<DashboardConfig>) {
    let config = config.unwrap_or_default();
    let pipeline = match artifacts::bundled_pipeline(&config) {
        Ok(pipeline) => pipeline,
        Err(err) => ic_cdk::trap(&format!("Risk dashboard failed to start: {err}")),
    };
    ic_cdk::println!(
        "Risk dashboard online: {} model, {} features, threshold {}",
        pipeline.model_kind(),
        pipeline.schema().len(),
        pipeline.threshold()
    );
    if PIPELINE.set(pipeline).is_err() {
        ic_cdk::trap("Risk dashboard started twice");
    }
}

fn pipeline() -> &'static RiskPipeline {
    match PIPELINE.get() {
        Some(pipeline) => pipeline,
        None => ic_cdk::trap("Risk dashboard is not initialized"),
    }
}

#[init]
fn init(config: Option<DashboardConfig>) {
    start(config);
}

#[post_upgrade]
fn post_upgrade(config: Option<DashboardConfig>) {
    start(config);
}

/// Score one applicant.
#[query]
fn assess(input: ApplicantInput) -> Result<AssessmentView, AssessError> {
    let record = ApplicantRecord::from(input);
    match pipeline().assess(&record) {
        Ok(assessment) => Ok(assessment.into()),
        Err(err) => {
            ic_cdk::println!("Assessment rejected: {}", err);
            Err(err.into())
        }
    }
}

/// Score one applicant and build the status card and gauges.
#[query]
fn dashboard(input: ApplicantInput) -> Result<DashboardView, AssessError> {
    dashboard::build(pipeline(), input)
}

/// Feature order, vocabularies and threshold the canister was started with.
#[query]
fn model_info() -> ModelInfo {
    ModelInfo::from(pipeline())
}

#[query]
fn version() -> String {
    "risk_dashboard v1.0.0".to_string()
}
