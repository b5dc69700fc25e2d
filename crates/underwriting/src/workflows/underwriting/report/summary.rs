use std::fmt::Write as _;

use super::super::calculator::{CalculatorError, LoanSummary, LoanTerms};
use super::super::domain::Field;
use super::super::format::{currency, years};
use super::super::store::SlotStore;
use super::views::{SummaryStatus, SummaryView};

pub const MISSING_INFORMATION: &str =
    "I'm missing some information. Please provide sales price, down payment, and interest rate.";

const RESTART_HINT: &str = "Type 'reset' to start a new calculation or 'hi' to begin again.";

/// Optional slots rendered after the financing lines, `N/A` when unset.
const DETAIL_FIELDS: [Field; 5] = [
    Field::ZipCode,
    Field::PropertyState,
    Field::PropertyType,
    Field::OccupancyType,
    Field::TitleInsurance,
];

/// Outcome of a summary request against the current slots.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryReport {
    Complete {
        terms: LoanTerms,
        loan: LoanSummary,
        text: String,
    },
    MissingInformation {
        missing: Vec<Field>,
    },
    Unworkable {
        error: CalculatorError,
    },
}

impl SummaryReport {
    /// Build the report from the committed slots. Figures are recomputed on every call.
    pub fn from_store(store: &SlotStore) -> Self {
        let missing = Field::required()
            .into_iter()
            .filter(|field| !store.is_set(*field))
            .collect::<Vec<_>>();

        if !missing.is_empty() {
            return SummaryReport::MissingInformation { missing };
        }

        match LoanTerms::from_store(store) {
            Some(Ok(terms)) => {
                let loan = terms.compute();
                if !loan.is_finite() {
                    return SummaryReport::Unworkable {
                        error: CalculatorError::PaymentOverflow,
                    };
                }
                let text = render(store, &terms, &loan);
                SummaryReport::Complete { terms, loan, text }
            }
            Some(Err(error)) => SummaryReport::Unworkable { error },
            None => SummaryReport::MissingInformation {
                missing: Field::required().to_vec(),
            },
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SummaryReport::Complete { .. })
    }

    pub fn text(&self) -> String {
        match self {
            SummaryReport::Complete { text, .. } => text.clone(),
            SummaryReport::MissingInformation { .. } => MISSING_INFORMATION.to_string(),
            SummaryReport::Unworkable { error } => format!(
                "I can't calculate a payment with these numbers: {error}. Please correct the sales price, down payment, interest rate, or loan term."
            ),
        }
    }

    pub fn view(&self) -> SummaryView {
        let (status, loan, missing) = match self {
            SummaryReport::Complete { loan, .. } => (SummaryStatus::Complete, Some(*loan), Vec::new()),
            SummaryReport::MissingInformation { missing } => {
                (SummaryStatus::MissingInformation, None, missing.clone())
            }
            SummaryReport::Unworkable { .. } => (SummaryStatus::Unworkable, None, Vec::new()),
        };

        SummaryView {
            status,
            complete: self.is_complete(),
            text: self.text(),
            missing,
            loan,
        }
    }
}

/// Render the plain-text report for committed slots and the figures derived from them.
pub fn render(store: &SlotStore, terms: &LoanTerms, loan: &LoanSummary) -> String {
    let mut text = String::from("📊 Summary:\n");

    let _ = writeln!(text, "- Sales Price: {}", currency(terms.sales_price()));
    let _ = writeln!(
        text,
        "- Down Payment: {} ({:.1}%)",
        currency(terms.down_payment()),
        loan.down_payment_pct
    );
    let _ = writeln!(text, "- Loan Amount: {}", currency(loan.loan_amount));
    let _ = writeln!(text, "- Interest Rate: {:.2}%", terms.interest_rate_pct());
    let _ = writeln!(
        text,
        "- Loan Term: {} years ({} payments)",
        years(terms.loan_term_years()),
        loan.payment_count
    );
    let _ = writeln!(text, "- Monthly Payment: ~{}", currency(loan.monthly_payment));

    for field in DETAIL_FIELDS {
        let value = store
            .get(field)
            .map(ToString::to_string)
            .unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(text, "- {}: {}", field.label(), value);
    }

    text.push('\n');
    text.push_str(RESTART_HINT);
    text
}
