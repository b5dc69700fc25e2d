//! Fixed-rate amortization over committed financing terms.

use serde::Serialize;

use super::domain::Field;
use super::store::SlotStore;

pub const DEFAULT_LOAN_TERM_YEARS: f64 = 30.0;

/// Largest payment count [`LoanSummary::payment_count`] can hold.
const MAX_PAYMENT_COUNT: f64 = u32::MAX as f64;

/// Financing inputs that satisfy the calculator preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanTerms {
    sales_price: f64,
    down_payment: f64,
    interest_rate_pct: f64,
    loan_term_years: f64,
}

impl LoanTerms {
    pub fn new(
        sales_price: f64,
        down_payment: f64,
        interest_rate_pct: f64,
        loan_term_years: f64,
    ) -> Result<Self, CalculatorError> {
        if sales_price <= 0.0 {
            return Err(CalculatorError::NonPositivePrice);
        }
        if down_payment < 0.0 {
            return Err(CalculatorError::NegativeDownPayment);
        }
        if sales_price <= down_payment {
            return Err(CalculatorError::NonPositiveLoanAmount);
        }
        let payments = payment_count(loan_term_years);
        if payments < 1.0 {
            return Err(CalculatorError::NonPositiveTerm);
        }
        if payments > MAX_PAYMENT_COUNT {
            return Err(CalculatorError::TermTooLong);
        }

        Ok(Self {
            sales_price,
            down_payment,
            interest_rate_pct,
            loan_term_years,
        })
    }

    /// Terms from the committed slots, or `None` while a required slot is unset.
    /// An unset loan term falls back to [`DEFAULT_LOAN_TERM_YEARS`].
    pub fn from_store(store: &SlotStore) -> Option<Result<Self, CalculatorError>> {
        let sales_price = store.number(Field::SalesPrice)?;
        let down_payment = store.number(Field::DownPayment)?;
        let interest_rate = store.number(Field::InterestRate)?;
        let loan_term = store
            .number(Field::LoanTerm)
            .unwrap_or(DEFAULT_LOAN_TERM_YEARS);

        Some(Self::new(sales_price, down_payment, interest_rate, loan_term))
    }

    pub fn sales_price(&self) -> f64 {
        self.sales_price
    }

    pub fn down_payment(&self) -> f64 {
        self.down_payment
    }

    pub fn interest_rate_pct(&self) -> f64 {
        self.interest_rate_pct
    }

    pub fn loan_term_years(&self) -> f64 {
        self.loan_term_years
    }

    pub fn compute(&self) -> LoanSummary {
        compute(
            self.sales_price,
            self.down_payment,
            self.interest_rate_pct,
            self.loan_term_years,
        )
    }
}

/// Derived financing figures. Never stored; recomputed from the slots on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanSummary {
    pub loan_amount: f64,
    pub down_payment_pct: f64,
    pub monthly_rate: f64,
    pub payment_count: u32,
    pub monthly_payment: f64,
}

impl LoanSummary {
    pub fn is_finite(&self) -> bool {
        self.loan_amount.is_finite()
            && self.down_payment_pct.is_finite()
            && self.monthly_rate.is_finite()
            && self.monthly_payment.is_finite()
    }
}

/// Standard fixed-rate amortization. No rounding happens here; a non-positive
/// rate falls back to straight-line repayment.
///
/// `(1 + r)^n - 1` is evaluated as `expm1(n * ln1p(r))`. When that underflows to zero
/// the payment is the straight-line limit; when it overflows the payment is the
/// interest-only limit `loan_amount * r`.
///
/// Callers guarantee `sales_price > 0`, `down_payment >= 0`, a positive loan amount
/// and a term of 1 to `u32::MAX` payments; [`LoanTerms::new`] checks exactly that.
pub fn compute(
    sales_price: f64,
    down_payment: f64,
    interest_rate_pct: f64,
    loan_term_years: f64,
) -> LoanSummary {
    let loan_amount = sales_price - down_payment;
    let down_payment_pct = down_payment / sales_price * 100.0;
    let monthly_rate = interest_rate_pct / 100.0 / 12.0;
    let n = payment_count(loan_term_years);

    let monthly_payment = if monthly_rate > 0.0 {
        let growth_excess = (n * monthly_rate.ln_1p()).exp_m1();
        if growth_excess == 0.0 {
            loan_amount / n
        } else if !growth_excess.is_finite() {
            loan_amount * monthly_rate
        } else {
            loan_amount * monthly_rate * (growth_excess + 1.0) / growth_excess
        }
    } else {
        loan_amount / n
    };

    LoanSummary {
        loan_amount,
        down_payment_pct,
        monthly_rate,
        payment_count: n as u32,
        monthly_payment,
    }
}

fn payment_count(loan_term_years: f64) -> f64 {
    (loan_term_years * 12.0).round()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    #[error("sales price must be greater than zero")]
    NonPositivePrice,
    #[error("down payment cannot be negative")]
    NegativeDownPayment,
    #[error("down payment must be less than the sales price")]
    NonPositiveLoanAmount,
    #[error("loan term must cover at least one monthly payment")]
    NonPositiveTerm,
    #[error("loan term has more monthly payments than can be scheduled")]
    TermTooLong,
    #[error("monthly payment is too large to compute")]
    PaymentOverflow,
}
