//! Per-field validators turning raw candidate values into committed slot values.
//!
//! Every validator is a pure function of the raw input, a read-only view of the
//! committed slots, and the underwriting configuration. Rejections never touch the
//! store; the pipeline decides what gets committed.

mod config;
mod location;
mod numeric;
mod property;

pub use config::{UnderwritingConfig, DEFAULT_BANK_RATE};

use super::domain::{Field, RiskTier, SlotValue};
use super::store::SlotStore;
use serde::Serialize;

/// Result of a single validation call: exactly one of accepted or rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Accepted(Acceptance),
    Rejected(Rejection),
}

impl ValidationOutcome {
    pub fn field(&self) -> Field {
        match self {
            ValidationOutcome::Accepted(accepted) => accepted.field,
            ValidationOutcome::Rejected(rejected) => rejected.field,
        }
    }

    /// Text surfaced to the user: the advisory for acceptances, the corrective prompt otherwise.
    pub fn message(&self) -> &str {
        match self {
            ValidationOutcome::Accepted(accepted) => &accepted.advisory,
            ValidationOutcome::Rejected(rejected) => &rejected.prompt,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted(_))
    }

    pub fn tier(&self) -> Option<RiskTier> {
        match self {
            ValidationOutcome::Accepted(accepted) => accepted.tier,
            ValidationOutcome::Rejected(_) => None,
        }
    }
}

/// Normalized value plus the advisory produced for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acceptance {
    pub field: Field,
    pub value: SlotValue,
    /// Present for numeric fields only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<RiskTier>,
    pub advisory: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    pub field: Field,
    pub error: ValidationError,
    pub prompt: String,
}

/// Recoverable reasons a candidate value is turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("{field} input is missing or does not match its expected format")]
    UnparseableInput { field: Field },
    #[error("{field} requires {missing} to be provided first")]
    UnmetDependency { field: Field, missing: Field },
}

impl ValidationError {
    pub const fn kind(&self) -> &'static str {
        match self {
            ValidationError::UnparseableInput { .. } => "unparseable_input",
            ValidationError::UnmetDependency { .. } => "unmet_dependency",
        }
    }
}

pub(crate) fn accept(
    field: Field,
    value: SlotValue,
    tier: Option<RiskTier>,
    advisory: impl Into<String>,
) -> ValidationOutcome {
    ValidationOutcome::Accepted(Acceptance {
        field,
        value,
        tier,
        advisory: advisory.into(),
    })
}

pub(crate) fn unparseable(field: Field, prompt: impl Into<String>) -> ValidationOutcome {
    ValidationOutcome::Rejected(Rejection {
        field,
        error: ValidationError::UnparseableInput { field },
        prompt: prompt.into(),
    })
}

pub(crate) fn unmet_dependency(field: Field, missing: Field) -> ValidationOutcome {
    let prompt = match (field, missing) {
        (Field::DownPayment, Field::SalesPrice) => {
            "I don't have the sales price yet. Please provide the sales price first.".to_string()
        }
        _ => format!(
            "I need the {} before I can take the {}. {}",
            missing.label().to_lowercase(),
            field.label().to_lowercase(),
            missing.prompt()
        ),
    };

    ValidationOutcome::Rejected(Rejection {
        field,
        error: ValidationError::UnmetDependency { field, missing },
        prompt,
    })
}

/// Trimmed, non-empty raw input or `None`.
pub(crate) fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Dispatch a raw candidate to the validator for `field`.
pub fn validate(
    field: Field,
    raw: Option<&str>,
    store: &SlotStore,
    config: &UnderwritingConfig,
) -> ValidationOutcome {
    match field {
        Field::SalesPrice => numeric::sales_price(raw),
        Field::DownPayment => numeric::down_payment(raw, store),
        Field::InterestRate => numeric::interest_rate(raw, config),
        Field::LoanTerm => numeric::loan_term(raw),
        Field::ZipCode => location::zip_code(raw),
        Field::PropertyState => location::property_state(raw),
        Field::OccupancyType => property::occupancy_type(raw),
        Field::TitleInsurance => property::title_insurance(raw),
        Field::PropertyType => property::property_type(raw),
    }
}
