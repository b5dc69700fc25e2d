use super::super::domain::{Field, RiskTier, SlotValue, YellowReason};
use super::super::format::{currency, years};
use super::super::store::SlotStore;
use super::config::UnderwritingConfig;
use super::{accept, present, unmet_dependency, unparseable, ValidationOutcome};

const MINIMUM_SALES_PRICE: f64 = 50_000.0;
const MINIMUM_DOWN_PAYMENT_PCT: f64 = 10.0;
const OPTIMAL_DOWN_PAYMENT_PCT: f64 = 20.0;
const MARKET_SPREAD: f64 = 2.0;
const USURY_THRESHOLD: f64 = 10.0;
const SHORT_TERM_YEARS: f64 = 5.0;
const LONG_TERM_YEARS: f64 = 30.0;

/// Parses an amount, tolerating a leading `$` and `,` separators. Non-finite values fail.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = unsigned.chars().filter(|c| *c != ',').collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub(crate) fn sales_price(raw: Option<&str>) -> ValidationOutcome {
    let field = Field::SalesPrice;
    let Some(price) = present(raw).and_then(parse_number) else {
        return unparseable(
            field,
            "I didn't understand the sales price. Please provide a number.",
        );
    };

    if price < MINIMUM_SALES_PRICE {
        let tier = RiskTier::Yellow(YellowReason::BelowMinimum);
        accept(
            field,
            SlotValue::Number(price),
            Some(tier),
            format!(
                "{} YELLOW - Minimum Property Value - Low price reduces exit options ({}).",
                tier.glyph(),
                currency(price)
            ),
        )
    } else {
        let tier = RiskTier::Green;
        accept(
            field,
            SlotValue::Number(price),
            Some(tier),
            format!(
                "{} GREEN - Sales Price is acceptable ({}).",
                tier.glyph(),
                currency(price)
            ),
        )
    }
}

pub(crate) fn down_payment(raw: Option<&str>, store: &SlotStore) -> ValidationOutcome {
    let field = Field::DownPayment;
    // A zero price cannot anchor a percentage, so it counts as not yet provided.
    let Some(price) = store
        .number(Field::SalesPrice)
        .filter(|price| *price > 0.0)
    else {
        return unmet_dependency(field, Field::SalesPrice);
    };

    let Some(down) = present(raw).and_then(parse_number) else {
        return unparseable(
            field,
            "I didn't understand the down payment. Please provide a number.",
        );
    };

    let pct = down / price * 100.0;
    let (tier, advisory) = if pct < MINIMUM_DOWN_PAYMENT_PCT {
        (
            RiskTier::Yellow(YellowReason::BelowMinimum),
            format!("YELLOW - Minimum Down Payment - Target at least 10% ({pct:.1}% down)."),
        )
    } else if pct < OPTIMAL_DOWN_PAYMENT_PCT {
        (
            RiskTier::Yellow(YellowReason::Moderate),
            format!("YELLOW - Moderate Down Payment - Consider increasing to 20% ({pct:.1}% down)."),
        )
    } else {
        (
            RiskTier::Green,
            format!("GREEN - Optimal Down Payment - {pct:.1}% down. Excellent equity position!"),
        )
    };

    accept(
        field,
        SlotValue::Number(down),
        Some(tier),
        format!("{} {advisory}", tier.glyph()),
    )
}

pub(crate) fn interest_rate(raw: Option<&str>, config: &UnderwritingConfig) -> ValidationOutcome {
    let field = Field::InterestRate;
    let Some(rate) = present(raw)
        .map(|value| value.trim_end().trim_end_matches('%'))
        .and_then(parse_number)
    else {
        return unparseable(
            field,
            "I didn't understand the interest rate. Please provide a percentage.",
        );
    };

    // First matching rule wins, so a high bank rate lets below-market shadow the usury warning.
    let (tier, advisory) = if rate < config.bank_rate + MARKET_SPREAD {
        (
            RiskTier::Yellow(YellowReason::BelowMarket),
            format!("YELLOW - Minimum Interest Rate - Below market rate, verify details ({rate:.2}%)."),
        )
    } else if rate > USURY_THRESHOLD {
        (
            RiskTier::Yellow(YellowReason::UsuryWarning),
            format!("YELLOW - Usury Warning - High rate, consider refinancing ({rate:.2}%)."),
        )
    } else {
        (
            RiskTier::Green,
            format!("GREEN - Optimal Interest Rate - {rate:.2}% is competitive."),
        )
    };

    accept(
        field,
        SlotValue::Number(rate),
        Some(tier),
        format!("{} {advisory}", tier.glyph()),
    )
}

pub(crate) fn loan_term(raw: Option<&str>) -> ValidationOutcome {
    let field = Field::LoanTerm;
    let Some(term) = present(raw)
        .map(strip_year_suffix)
        .and_then(parse_number)
    else {
        return unparseable(
            field,
            "I didn't understand the loan term. Please provide the number of years.",
        );
    };

    let label = years(term);
    let (tier, advisory) = if term < SHORT_TERM_YEARS {
        (
            RiskTier::Yellow(YellowReason::ShortTerm),
            format!("YELLOW - Short Loan Term - {label} years keeps interest low but raises the monthly payment."),
        )
    } else if term > LONG_TERM_YEARS {
        (
            RiskTier::Yellow(YellowReason::LongTerm),
            format!("YELLOW - Long Loan Term - {label} years lowers the payment but increases total interest."),
        )
    } else {
        (
            RiskTier::Green,
            format!("GREEN - Standard Loan Term - {label} years."),
        )
    };

    accept(
        field,
        SlotValue::Number(term),
        Some(tier),
        format!("{} {advisory}", tier.glyph()),
    )
}

fn strip_year_suffix(value: &str) -> &str {
    let lowered = value.to_ascii_lowercase();
    for suffix in ["years", "year", "yrs", "yr"] {
        if lowered.ends_with(suffix) {
            return value[..value.len() - suffix.len()].trim_end();
        }
    }
    value
}
