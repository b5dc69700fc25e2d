use serde::Serialize;

use super::super::calculator::LoanSummary;
use super::super::domain::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    Complete,
    MissingInformation,
    Unworkable,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub status: SummaryStatus,
    pub complete: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan: Option<LoanSummary>,
}
