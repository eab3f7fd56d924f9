//! Feature order contract between the encoder, scaler and classifier.

use serde::Serialize;

use crate::error::{Result, RiskError};
use crate::types::Field;

/// Column order the shipped scaler and model were fit with.
pub const DEFAULT_ORDER: [Field; 9] = [
    Field::Age,
    Field::Income,
    Field::LoanAmount,
    Field::CreditScore,
    Field::EmploymentLength,
    Field::HomeOwnership,
    Field::LoanIntent,
    Field::PreviousDefaults,
    Field::DtiRatio,
];

/// Ordered list of fields making up a feature vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureSchema {
    fields: Vec<Field>,
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self {
            fields: DEFAULT_ORDER.to_vec(),
        }
    }
}

impl FeatureSchema {
    pub fn new(fields: Vec<Field>) -> Result<Self> {
        if fields.is_empty() {
            return Err(RiskError::artifact("feature schema", "no features"));
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].contains(field) {
                return Err(RiskError::artifact(
                    "feature schema",
                    format!("duplicate feature {}", field.as_str()),
                ));
            }
        }
        Ok(Self { fields })
    }

    /// Build a schema from training column headers.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let fields = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                Field::parse(name).ok_or_else(|| {
                    RiskError::artifact("feature schema", format!("unknown feature {name:?}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(fields)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(Field::as_str).collect()
    }
}
