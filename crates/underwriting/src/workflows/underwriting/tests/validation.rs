use super::common::*;
use crate::workflows::underwriting::domain::{Field, FieldKind, RiskTier, SlotValue, YellowReason};
use crate::workflows::underwriting::store::SlotStore;
use crate::workflows::underwriting::validation::{
    validate, UnderwritingConfig, ValidationError, ValidationOutcome,
};

fn check(field: Field, raw: &str) -> ValidationOutcome {
    validate(field, Some(raw), &SlotStore::new(), &config())
}

fn check_down_payment(price: &str, down: &str) -> ValidationOutcome {
    let store = store_with(&[(Field::SalesPrice, price)]);
    validate(Field::DownPayment, Some(down), &store, &config())
}

#[test]
fn sales_price_tiers_split_at_fifty_thousand() {
    for raw in ["50000", "50000.00", "300000", "1250000"] {
        assert_eq!(check(Field::SalesPrice, raw).tier(), Some(RiskTier::Green), "{raw}");
    }
    for raw in ["49999.99", "45000", "1"] {
        assert_eq!(
            check(Field::SalesPrice, raw).tier(),
            Some(RiskTier::Yellow(YellowReason::BelowMinimum)),
            "{raw}"
        );
    }
}

#[test]
fn sales_price_advisory_mentions_formatted_amount() {
    let outcome = check(Field::SalesPrice, "45000");
    assert_eq!(
        outcome.message(),
        "🟡 YELLOW - Minimum Property Value - Low price reduces exit options ($45,000)."
    );

    let outcome = check(Field::SalesPrice, "$300,000");
    assert_eq!(accepted_number(&outcome), 300_000.0);
    assert_eq!(
        outcome.message(),
        "🟢 GREEN - Sales Price is acceptable ($300,000)."
    );
}

#[test]
fn sales_price_rejects_missing_and_garbage() {
    for raw in ["", "   ", "three hundred grand", "NaN", "inf"] {
        let outcome = check(Field::SalesPrice, raw);
        match outcome {
            ValidationOutcome::Rejected(rejected) => {
                assert_eq!(
                    rejected.error,
                    ValidationError::UnparseableInput {
                        field: Field::SalesPrice
                    }
                );
                assert!(rejected.prompt.contains("provide a number"));
            }
            other => panic!("expected rejection for {raw:?}, got {other:?}"),
        }
    }

    let outcome = validate(Field::SalesPrice, None, &SlotStore::new(), &config());
    assert!(!outcome.is_accepted());
}

#[test]
fn down_payment_uses_half_open_tiers() {
    assert_eq!(
        check_down_payment("100000", "9999").tier(),
        Some(RiskTier::Yellow(YellowReason::BelowMinimum))
    );
    assert_eq!(
        check_down_payment("100000", "10000").tier(),
        Some(RiskTier::Yellow(YellowReason::Moderate))
    );
    assert_eq!(
        check_down_payment("300000", "30000").tier(),
        Some(RiskTier::Yellow(YellowReason::Moderate))
    );
    assert_eq!(
        check_down_payment("100000", "19999").tier(),
        Some(RiskTier::Yellow(YellowReason::Moderate))
    );
    assert_eq!(check_down_payment("100000", "20000").tier(), Some(RiskTier::Green));
    assert_eq!(check_down_payment("450000", "90000").tier(), Some(RiskTier::Green));
}

#[test]
fn down_payment_advisory_reports_percentage() {
    let outcome = check_down_payment("300000", "60000");
    assert_eq!(
        outcome.message(),
        "🟢 GREEN - Optimal Down Payment - 20.0% down. Excellent equity position!"
    );

    let outcome = check_down_payment("300000", "15000");
    assert!(outcome.message().contains("(5.0% down)"));
}

#[test]
fn down_payment_requires_sales_price_regardless_of_input() {
    let empty = SlotStore::new();
    for raw in [Some("60000"), Some("garbage"), Some(""), None] {
        let outcome = validate(Field::DownPayment, raw, &empty, &config());
        match outcome {
            ValidationOutcome::Rejected(rejected) => {
                assert_eq!(
                    rejected.error,
                    ValidationError::UnmetDependency {
                        field: Field::DownPayment,
                        missing: Field::SalesPrice,
                    }
                );
                assert!(rejected.prompt.contains("sales price first"));
            }
            other => panic!("expected dependency rejection for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn down_payment_rejects_unparseable_once_price_known() {
    let outcome = check_down_payment("300000", "a lot");
    assert!(matches!(
        outcome,
        ValidationOutcome::Rejected(ref rejected)
            if rejected.error == ValidationError::UnparseableInput { field: Field::DownPayment }
    ));
}

#[test]
fn zero_sales_price_cannot_anchor_down_payment() {
    let outcome = check_down_payment("0", "10000");
    assert!(matches!(
        outcome,
        ValidationOutcome::Rejected(ref rejected)
            if matches!(rejected.error, ValidationError::UnmetDependency { .. })
    ));
}

#[test]
fn interest_rate_strips_percent_sign() {
    let with_sign = check(Field::InterestRate, "7.5%");
    let bare = check(Field::InterestRate, "7.5");
    assert_eq!(accepted_number(&with_sign), 7.5);
    assert_eq!(accepted_number(&with_sign), accepted_number(&bare));
    assert_eq!(accepted_number(&check(Field::InterestRate, " 9 % ")), 9.0);

    let outcome = check(Field::InterestRate, "percent");
    assert!(outcome.message().contains("provide a percentage"));
}

#[test]
fn interest_rate_tiers_against_bank_rate() {
    assert_eq!(
        check(Field::InterestRate, "8.49").tier(),
        Some(RiskTier::Yellow(YellowReason::BelowMarket))
    );
    assert_eq!(check(Field::InterestRate, "8.5").tier(), Some(RiskTier::Green));
    assert_eq!(check(Field::InterestRate, "10").tier(), Some(RiskTier::Green));
    assert_eq!(
        check(Field::InterestRate, "10.25").tier(),
        Some(RiskTier::Yellow(YellowReason::UsuryWarning))
    );
    assert_eq!(
        check(Field::InterestRate, "9").message(),
        "🟢 GREEN - Optimal Interest Rate - 9.00% is competitive."
    );
}

#[test]
fn below_market_shadows_usury_when_bank_rate_is_high() {
    let config = UnderwritingConfig { bank_rate: 9.5 };
    let outcome = validate(Field::InterestRate, Some("11"), &SlotStore::new(), &config);
    assert_eq!(
        outcome.tier(),
        Some(RiskTier::Yellow(YellowReason::BelowMarket))
    );
}

#[test]
fn loan_term_is_advisory_only() {
    assert_eq!(
        check(Field::LoanTerm, "3").tier(),
        Some(RiskTier::Yellow(YellowReason::ShortTerm))
    );
    assert_eq!(check(Field::LoanTerm, "5").tier(), Some(RiskTier::Green));
    assert_eq!(check(Field::LoanTerm, "30 years").tier(), Some(RiskTier::Green));
    assert_eq!(
        check(Field::LoanTerm, "40").tier(),
        Some(RiskTier::Yellow(YellowReason::LongTerm))
    );
    assert_eq!(accepted_number(&check(Field::LoanTerm, "15 yrs")), 15.0);
    assert!(!check(Field::LoanTerm, "forever").is_accepted());
}

#[test]
fn zip_code_requires_five_digits() {
    assert_eq!(accepted_text(&check(Field::ZipCode, " 94110 ")), "94110");
    for raw in ["9411", "941101", "94-11", "abcde", ""] {
        assert!(!check(Field::ZipCode, raw).is_accepted(), "{raw:?}");
    }
}

#[test]
fn property_state_is_case_insensitive_and_idempotent() {
    for raw in ["California", "california", "CA", "ca", "  CALIFORNIA "] {
        assert_eq!(accepted_text(&check(Field::PropertyState, raw)), "CA", "{raw}");
    }
    assert_eq!(accepted_text(&check(Field::PropertyState, "new   york")), "NY");
    assert_eq!(accepted_text(&check(Field::PropertyState, "NY")), "NY");
}

#[test]
fn property_state_uppercases_unknown_input() {
    let outcome = check(Field::PropertyState, "Ontario");
    assert_eq!(accepted_text(&outcome), "ONTARIO");
    assert!(outcome.tier().is_none());
    assert!(!check(Field::PropertyState, " ").is_accepted());
}

#[test]
fn occupancy_type_normalizes_to_two_values() {
    assert_eq!(
        accepted_text(&check(Field::OccupancyType, "Owner occupied")),
        "owner-occupied"
    );
    assert_eq!(
        accepted_text(&check(Field::OccupancyType, "non-owner")),
        "non-owner-occupied"
    );
    assert_eq!(
        accepted_text(&check(Field::OccupancyType, "investment rental")),
        "non-owner-occupied"
    );
    assert!(!check(Field::OccupancyType, "").is_accepted());
}

#[test]
fn title_insurance_maps_synonyms_and_passes_unknown_through() {
    assert_eq!(accepted_text(&check(Field::TitleInsurance, "Yep")), "yes");
    assert_eq!(accepted_text(&check(Field::TitleInsurance, "NO THANKS")), "no");
    assert_eq!(
        accepted_text(&check(Field::TitleInsurance, "ask my lawyer")),
        "ask my lawyer"
    );
    assert!(!check(Field::TitleInsurance, "").is_accepted());
}

#[test]
fn property_type_resolves_synonyms_or_lists_categories() {
    assert_eq!(
        accepted_text(&check(Field::PropertyType, "SFH")),
        "Single Family Home"
    );
    assert_eq!(
        accepted_text(&check(Field::PropertyType, "single-family home")),
        "Single Family Home"
    );
    assert_eq!(accepted_text(&check(Field::PropertyType, "Condominium")), "Condo");

    let outcome = check(Field::PropertyType, "castle");
    match outcome {
        ValidationOutcome::Rejected(rejected) => {
            assert!(rejected.prompt.contains("Single Family Home"));
            assert!(rejected.prompt.contains("Townhouse"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn only_numeric_fields_carry_a_tier() {
    let store = financed_store();
    for field in Field::ordered() {
        let raw = match field {
            Field::ZipCode => "10001",
            Field::PropertyState => "NY",
            Field::SalesPrice => "300000",
            Field::DownPayment => "60000",
            Field::InterestRate => "9",
            Field::OccupancyType => "owner",
            Field::LoanTerm => "30",
            Field::TitleInsurance => "yes",
            Field::PropertyType => "condo",
        };
        let outcome = validate(field, Some(raw), &store, &config());
        let is_numeric = matches!(
            outcome,
            ValidationOutcome::Accepted(ref accepted) if matches!(accepted.value, SlotValue::Number(_))
        );
        assert_eq!(outcome.tier().is_some(), is_numeric, "{field}");
        assert_eq!(field.kind() == FieldKind::Numeric, is_numeric, "{field}");
    }
}
