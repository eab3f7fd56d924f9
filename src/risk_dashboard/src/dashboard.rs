//! Shapes an assessment into the status card and the two gauge widgets.

use risk_engine::{ApplicantRecord, Assessment, Decision, RiskPipeline};

use crate::types::{
    ApplicantInput, AssessError, AssessmentView, Band, DashboardView, GaugeBand, GaugeView,
    StatusCard,
};

/// Static layout of a gauge: range, colored bands and the threshold marker.
pub struct GaugeSpec {
    pub title: &'static str,
    pub suffix: &'static str,
    pub min: f64,
    pub max: f64,
    /// `(from, to, band)`, contiguous and ascending.
    pub bands: &'static [(f64, f64, Band)],
    pub threshold: f64,
}

pub const CREDIT_SCORE_GAUGE: GaugeSpec = GaugeSpec {
    title: "FICO Score",
    suffix: "",
    min: 300.0,
    max: 850.0,
    bands: &[
        (300.0, 600.0, Band::Danger),
        (600.0, 750.0, Band::Caution),
        (750.0, 850.0, Band::Good),
    ],
    threshold: 600.0,
};

pub const DTI_GAUGE: GaugeSpec = GaugeSpec {
    title: "Debt Load (DTI)",
    suffix: "%",
    min: 0.0,
    max: 100.0,
    bands: &[
        (0.0, 30.0, Band::Good),
        (30.0, 45.0, Band::Caution),
        (45.0, 100.0, Band::Danger),
    ],
    threshold: 40.0,
};

impl GaugeSpec {
    /// Band for `value`; bands include their lower bound, and values off the
    /// scale count as the nearest end.
    pub fn band_for(&self, value: f64) -> Band {
        let v = value.clamp(self.min, self.max);
        self.bands
            .iter()
            .find(|(_, to, _)| v < *to)
            .or_else(|| self.bands.last())
            .map(|(_, _, band)| *band)
            .unwrap_or(Band::Caution)
    }

    pub fn render(&self, value: f64) -> GaugeView {
        GaugeView {
            title: self.title.to_string(),
            value,
            suffix: self.suffix.to_string(),
            min: self.min,
            max: self.max,
            bands: self
                .bands
                .iter()
                .map(|&(from, to, band)| GaugeBand { from, to, band })
                .collect(),
            threshold: self.threshold,
            band: self.band_for(value),
        }
    }
}

pub fn status_card(assessment: &Assessment) -> StatusCard {
    let (headline, score_label, percent) = match assessment.decision {
        Decision::Approve => (
            "LOAN APPROVED",
            "Repayment Score",
            (1.0 - assessment.probability) * 100.0,
        ),
        Decision::Decline => (
            "HIGH RISK DETECTED",
            "Default Probability",
            assessment.probability * 100.0,
        ),
    };
    StatusCard {
        headline: headline.to_string(),
        recommendation: assessment.decision.into(),
        score_label: score_label.to_string(),
        score_percent: percent,
        score_display: format!("{percent:.1}%"),
    }
}

/// Assess `input` and build every widget the dashboard shows.
pub fn build(pipeline: &RiskPipeline, input: ApplicantInput) -> Result<DashboardView, AssessError> {
    let record = ApplicantRecord::from(input);
    let assessment = pipeline.assess(&record)?;
    Ok(DashboardView {
        status: status_card(&assessment),
        assessment: AssessmentView::from(assessment),
        credit_score_gauge: record.credit_score.map(|s| CREDIT_SCORE_GAUGE.render(s)),
        dti_gauge: record
            .effective_dti()
            .map(|dti| DTI_GAUGE.render(dti * 100.0)),
    })
}
