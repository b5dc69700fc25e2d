use super::common::*;
use crate::workflows::underwriting::domain::{Field, SlotValue};
use crate::workflows::underwriting::store::SlotStore;
use crate::workflows::underwriting::validation::{ValidationError, ValidationOutcome};

#[test]
fn accepted_values_are_committed_normalized() {
    let pipeline = pipeline();
    let mut store = SlotStore::new();

    let outcome = pipeline.submit(Field::PropertyState, Some("texas"), &mut store);

    assert!(outcome.is_accepted());
    assert_eq!(store.text(Field::PropertyState), Some("TX"));
    assert_eq!(store.len(), 1);
}

#[test]
fn rejections_leave_the_store_untouched() {
    let pipeline = pipeline();
    let mut store = financed_store();
    let before = store.clone();

    for (field, raw) in [
        (Field::SalesPrice, "lots"),
        (Field::InterestRate, ""),
        (Field::ZipCode, "123"),
        (Field::PropertyType, "igloo"),
    ] {
        let outcome = pipeline.submit(field, Some(raw), &mut store);
        assert!(!outcome.is_accepted(), "{field} accepted {raw:?}");
    }

    assert_eq!(store, before);
}

#[test]
fn dependency_gate_short_circuits_before_validation() {
    let pipeline = pipeline();
    let mut store = SlotStore::new();

    let outcome = pipeline.submit(Field::DownPayment, Some("not a number"), &mut store);

    match outcome {
        ValidationOutcome::Rejected(rejected) => assert_eq!(
            rejected.error,
            ValidationError::UnmetDependency {
                field: Field::DownPayment,
                missing: Field::SalesPrice,
            }
        ),
        other => panic!("expected dependency rejection, got {other:?}"),
    }
    assert!(store.is_empty());
}

#[test]
fn resubmission_overwrites_previous_value() {
    let pipeline = pipeline();
    let mut store = store_with(&[(Field::SalesPrice, "45000")]);

    pipeline.submit(Field::SalesPrice, Some("325000"), &mut store);

    assert_eq!(store.get(Field::SalesPrice), Some(&SlotValue::Number(325_000.0)));
}

#[test]
fn check_validates_without_committing() {
    let pipeline = pipeline();
    let store = store_with(&[(Field::SalesPrice, "300000")]);

    let outcome = pipeline.check(Field::DownPayment, Some("60000"), &store);

    assert!(outcome.is_accepted());
    assert!(!store.is_set(Field::DownPayment));
}

#[test]
fn store_iterates_in_declaration_order() {
    let store = store_with(&[
        (Field::PropertyType, "condo"),
        (Field::SalesPrice, "300000"),
        (Field::ZipCode, "10001"),
    ]);

    let fields = store.iter().map(|(field, _)| field).collect::<Vec<_>>();
    assert_eq!(
        fields,
        vec![Field::ZipCode, Field::SalesPrice, Field::PropertyType]
    );
}

#[test]
fn next_unset_follows_collection_order() {
    let mut store = SlotStore::new();
    assert_eq!(store.next_unset(), Some(Field::SalesPrice));

    store = financed_store();
    assert_eq!(store.next_unset(), Some(Field::LoanTerm));

    let pipeline = pipeline();
    for (field, raw) in [
        (Field::LoanTerm, "30"),
        (Field::ZipCode, "10001"),
        (Field::PropertyState, "NY"),
        (Field::PropertyType, "condo"),
        (Field::OccupancyType, "owner"),
        (Field::TitleInsurance, "yes"),
    ] {
        pipeline.submit(field, Some(raw), &mut store);
    }
    assert_eq!(store.next_unset(), None);
}
