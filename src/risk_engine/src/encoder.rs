//! Applicant record -> feature vector.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RiskError};
use crate::schema::FeatureSchema;
use crate::types::{ApplicantRecord, FeatureVector, Field};

/// Fitted mapping from a fixed vocabulary to integer codes.
///
/// The code of a label is its position in `classes`, which for a
/// scikit-learn `LabelEncoder` is the sorted order of the training labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new<S: Into<String>>(classes: impl IntoIterator<Item = S>) -> Result<Self> {
        let encoder = Self {
            classes: classes.into_iter().map(Into::into).collect(),
        };
        encoder.validate()?;
        Ok(encoder)
    }

    /// Reject empty vocabularies and labels that would collide on lookup.
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(RiskError::artifact("label encoder", "empty vocabulary"));
        }
        for (i, class) in self.classes.iter().enumerate() {
            if class.trim().is_empty() {
                return Err(RiskError::artifact("label encoder", "blank label"));
            }
            if self.classes[..i]
                .iter()
                .any(|prev| prev.trim().eq_ignore_ascii_case(class.trim()))
            {
                return Err(RiskError::artifact(
                    "label encoder",
                    format!("duplicate label {class:?}"),
                ));
            }
        }
        Ok(())
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Code for `value`, ignoring surrounding whitespace and ASCII case.
    pub fn transform(&self, value: &str) -> Option<usize> {
        let value = value.trim();
        self.classes
            .iter()
            .position(|class| class.trim().eq_ignore_ascii_case(value))
    }
}

/// Builds feature vectors in schema order.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    schema: FeatureSchema,
    home_ownership: LabelEncoder,
    loan_intent: LabelEncoder,
}

impl FeatureEncoder {
    pub fn new(
        schema: FeatureSchema,
        home_ownership: LabelEncoder,
        loan_intent: LabelEncoder,
    ) -> Self {
        Self {
            schema,
            home_ownership,
            loan_intent,
        }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn home_ownership(&self) -> &LabelEncoder {
        &self.home_ownership
    }

    pub fn loan_intent(&self) -> &LabelEncoder {
        &self.loan_intent
    }

    pub fn encode(&self, record: &ApplicantRecord) -> Result<FeatureVector> {
        let values = self
            .schema
            .fields()
            .iter()
            .map(|&field| self.encode_field(record, field))
            .collect::<Result<Vec<_>>>()?;
        debug!(features = values.len(), "encoded applicant record");
        Ok(FeatureVector::new(values))
    }

    fn encode_field(&self, record: &ApplicantRecord, field: Field) -> Result<f64> {
        match field {
            Field::HomeOwnership => {
                categorical(&self.home_ownership, field, record.home_ownership.as_deref())
            }
            Field::LoanIntent => {
                categorical(&self.loan_intent, field, record.loan_intent.as_deref())
            }
            Field::PreviousDefaults => match record.previous_defaults {
                Some(true) => Ok(1.0),
                Some(false) => Ok(0.0),
                None => Err(missing(field)),
            },
            Field::DtiRatio => {
                // Check the inputs the ratio may be derived from before dividing.
                if record.dti_ratio.is_none() {
                    finite(Field::LoanAmount, record.loan_amount)?;
                    finite(Field::Income, record.income)?;
                }
                finite(field, record.effective_dti())
            }
            _ => finite(field, record.numeric(field)),
        }
    }
}

fn missing(field: Field) -> RiskError {
    RiskError::MissingField {
        field: field.as_str().to_string(),
    }
}

fn finite(field: Field, value: Option<f64>) -> Result<f64> {
    match value {
        None => Err(missing(field)),
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => Err(RiskError::InvalidField {
            field: field.as_str().to_string(),
            reason: format!("{v} is not a finite number"),
        }),
    }
}

fn categorical(encoder: &LabelEncoder, field: Field, value: Option<&str>) -> Result<f64> {
    let value = value.ok_or_else(|| missing(field))?;
    encoder
        .transform(value)
        .map(|code| code as f64)
        .ok_or_else(|| RiskError::UnknownCategory {
            field: field.as_str().to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> LabelEncoder {
        LabelEncoder::new(["MORTGAGE", "OTHER", "OWN", "RENT"]).unwrap()
    }

    fn intent() -> LabelEncoder {
        LabelEncoder::new(["EDUCATION", "MEDICAL", "PERSONAL", "VENTURE"]).unwrap()
    }

    fn record() -> ApplicantRecord {
        ApplicantRecord {
            age: Some(30.0),
            income: Some(55_000.0),
            loan_amount: Some(15_000.0),
            credit_score: Some(680.0),
            employment_length: Some(5.0),
            home_ownership: Some("RENT".into()),
            loan_intent: Some("PERSONAL".into()),
            previous_defaults: Some(false),
            ..Default::default()
        }
    }

    fn encoder() -> FeatureEncoder {
        FeatureEncoder::new(FeatureSchema::default(), home(), intent())
    }

    #[test]
    fn label_codes_follow_vocabulary_order() {
        let enc = home();
        assert_eq!(enc.transform("MORTGAGE"), Some(0));
        assert_eq!(enc.transform("RENT"), Some(3));
    }

    #[test]
    fn label_lookup_ignores_case_and_padding() {
        assert_eq!(home().transform(" Rent "), Some(3));
        assert_eq!(intent().transform("education"), Some(0));
    }

    #[test]
    fn label_lookup_does_not_guess() {
        assert_eq!(home().transform("RENTING"), None);
        assert_eq!(home().transform(""), None);
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let classes: [&str; 0] = [];
        assert!(LabelEncoder::new(classes).is_err());
    }

    #[test]
    fn colliding_labels_are_rejected() {
        assert!(LabelEncoder::new(["RENT", "rent"]).is_err());
    }

    #[test]
    fn encodes_in_schema_order() {
        let vector = encoder().encode(&record()).unwrap();
        let dti = 15_000.0 / 55_001.0;
        assert_eq!(
            vector.as_slice(),
            &[30.0, 55_000.0, 15_000.0, 680.0, 5.0, 3.0, 2.0, 0.0, dti]
        );
    }

    #[test]
    fn custom_schema_changes_order() {
        let schema =
            FeatureSchema::new(vec![Field::PreviousDefaults, Field::CreditScore]).unwrap();
        let enc = FeatureEncoder::new(schema, home(), intent());
        let mut rec = record();
        rec.previous_defaults = Some(true);
        assert_eq!(enc.encode(&rec).unwrap().as_slice(), &[1.0, 680.0]);
    }

    #[test]
    fn unknown_category_names_field_and_value() {
        let mut rec = record();
        rec.home_ownership = Some("SPACESHIP".into());
        let err = encoder().encode(&rec).unwrap_err();
        assert_eq!(
            err,
            RiskError::UnknownCategory {
                field: "home_ownership".into(),
                value: "SPACESHIP".into(),
            }
        );
    }

    #[test]
    fn missing_required_field() {
        let mut rec = record();
        rec.credit_score = None;
        let err = encoder().encode(&rec).unwrap_err();
        assert_eq!(
            err,
            RiskError::MissingField {
                field: "credit_score".into()
            }
        );
    }

    #[test]
    fn missing_flag_is_reported() {
        let mut rec = record();
        rec.previous_defaults = None;
        assert!(matches!(
            encoder().encode(&rec),
            Err(RiskError::MissingField { field }) if field == "previous_defaults"
        ));
    }

    #[test]
    fn unused_fields_are_not_required() {
        let rec = record();
        assert!(rec.interest_rate.is_none());
        assert!(encoder().encode(&rec).is_ok());
    }

    #[test]
    fn underivable_dti_reports_missing_income() {
        let mut rec = record();
        rec.income = None;
        assert!(matches!(
            encoder().encode(&rec),
            Err(RiskError::MissingField { field }) if field == "income"
        ));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let mut rec = record();
        rec.age = Some(f64::NAN);
        assert!(matches!(
            encoder().encode(&rec),
            Err(RiskError::InvalidField { field, .. }) if field == "age"
        ));
    }
}
