use serde::{Deserialize, Serialize};

/// Every input the dashboard form can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Age,
    Income,
    LoanAmount,
    InterestRate,
    EmploymentLength,
    CreditHistoryLength,
    CreditScore,
    DtiRatio,
    HomeOwnership,
    LoanIntent,
    PreviousDefaults,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Age,
        Field::Income,
        Field::LoanAmount,
        Field::InterestRate,
        Field::EmploymentLength,
        Field::CreditHistoryLength,
        Field::CreditScore,
        Field::DtiRatio,
        Field::HomeOwnership,
        Field::LoanIntent,
        Field::PreviousDefaults,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Income => "income",
            Field::LoanAmount => "loan_amount",
            Field::InterestRate => "interest_rate",
            Field::EmploymentLength => "employment_length",
            Field::CreditHistoryLength => "credit_history_length",
            Field::CreditScore => "credit_score",
            Field::DtiRatio => "dti_ratio",
            Field::HomeOwnership => "home_ownership",
            Field::LoanIntent => "loan_intent",
            Field::PreviousDefaults => "previous_defaults",
        }
    }

    /// Parse a field name, accepting the column headers used at training
    /// time (`Loan_Amount`, `DTI_Ratio`, ...) as well as snake case.
    pub fn parse(name: &str) -> Option<Field> {
        let normalized = name.trim().to_ascii_lowercase();
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == normalized)
    }
}

/// One loan application as entered on the dashboard.
///
/// All fields are optional here; the feature schema decides which of them
/// are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
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

impl ApplicantRecord {
    /// Raw numeric value of a numeric field, `None` for categoricals.
    pub fn numeric(&self, field: Field) -> Option<f64> {
        match field {
            Field::Age => self.age,
            Field::Income => self.income,
            Field::LoanAmount => self.loan_amount,
            Field::InterestRate => self.interest_rate,
            Field::EmploymentLength => self.employment_length,
            Field::CreditHistoryLength => self.credit_history_length,
            Field::CreditScore => self.credit_score,
            Field::DtiRatio => self.dti_ratio,
            Field::HomeOwnership | Field::LoanIntent | Field::PreviousDefaults => None,
        }
    }

    /// Debt-to-income ratio: the supplied value, or `loan_amount / (income + 1)`.
    pub fn effective_dti(&self) -> Option<f64> {
        self.dti_ratio.or_else(|| match (self.loan_amount, self.income) {
            (Some(loan), Some(income)) => Some(loan / (income + 1.0)),
            _ => None,
        })
    }
}

/// Ordered numeric input to the scaler.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Estimated probability of default, always within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct RiskScore(f64);

impl RiskScore {
    pub(crate) fn new_unchecked(p: f64) -> Self {
        Self(p)
    }

    pub fn probability(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Approve,
    Decline,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approve => "APPROVE",
            Decision::Decline => "DECLINE",
        }
    }
}

/// Outcome of a single assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    pub decision: Decision,
    /// Probability of default.
    pub probability: f64,
    /// Probability of the chosen outcome: default probability on a decline,
    /// repayment probability on an approval.
    pub confidence: f64,
    pub threshold: f64,
}
