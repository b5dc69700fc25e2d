use super::super::domain::{Field, SlotValue};
use super::{accept, present, unparseable, ValidationOutcome};

const OWNER_OCCUPIED: &str = "owner-occupied";
const NON_OWNER_OCCUPIED: &str = "non-owner-occupied";

const TITLE_YES: [&str; 11] = [
    "yes", "y", "yeah", "yep", "sure", "true", "ok", "okay", "of course", "definitely",
    "absolutely",
];
const TITLE_NO: [&str; 8] = [
    "no", "n", "nope", "nah", "false", "none", "not needed", "no thanks",
];

/// Canonical property categories and the synonyms that resolve to them.
const PROPERTY_TYPES: [(&str, &[&str]); 5] = [
    (
        "Single Family Home",
        &[
            "sfh",
            "sfr",
            "single family",
            "single family home",
            "single family residence",
            "house",
            "detached",
        ],
    ),
    ("Condo", &["condo", "condominium", "apartment condo"]),
    ("Townhouse", &["townhouse", "townhome", "row house"]),
    (
        "Multi-Family",
        &[
            "multi family",
            "multifamily",
            "duplex",
            "triplex",
            "fourplex",
            "quadplex",
            "2 4 unit",
        ],
    ),
    (
        "Manufactured Home",
        &["manufactured", "manufactured home", "mobile home", "mobile"],
    ),
];

fn normalize_phrase(value: &str) -> String {
    let spaced = value.replace(['-', '_', '/'], " ");
    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

pub(crate) fn occupancy_type(raw: Option<&str>) -> ValidationOutcome {
    let field = Field::OccupancyType;
    let Some(occupancy) = present(raw) else {
        return unparseable(
            field,
            "Please tell me whether the property will be owner-occupied or an investment.",
        );
    };

    let lowered = occupancy.to_lowercase();
    let normalized = if lowered.contains("owner") && !lowered.contains("non") {
        OWNER_OCCUPIED
    } else {
        NON_OWNER_OCCUPIED
    };

    accept(
        field,
        SlotValue::Text(normalized.to_string()),
        None,
        format!("Noted, the property is {normalized}."),
    )
}

pub(crate) fn title_insurance(raw: Option<&str>) -> ValidationOutcome {
    let field = Field::TitleInsurance;
    let Some(answer) = present(raw) else {
        return unparseable(
            field,
            "Will you be purchasing title insurance? Please answer yes or no.",
        );
    };

    let phrase = normalize_phrase(answer);
    let normalized = if TITLE_YES.contains(&phrase.as_str()) {
        "yes".to_string()
    } else if TITLE_NO.contains(&phrase.as_str()) {
        "no".to_string()
    } else {
        answer.to_string()
    };

    let advisory = format!("Noted, title insurance: {normalized}.");
    accept(field, SlotValue::Text(normalized), None, advisory)
}

pub(crate) fn property_type(raw: Option<&str>) -> ValidationOutcome {
    let field = Field::PropertyType;
    let resolved = present(raw).and_then(|value| {
        let phrase = normalize_phrase(value);
        PROPERTY_TYPES
            .iter()
            .find(|(canonical, synonyms)| {
                normalize_phrase(canonical) == phrase || synonyms.contains(&phrase.as_str())
            })
            .map(|(canonical, _)| *canonical)
    });

    match resolved {
        Some(category) => accept(
            field,
            SlotValue::Text(category.to_string()),
            None,
            format!("Got it, property type {category}."),
        ),
        None => {
            let categories = PROPERTY_TYPES
                .iter()
                .map(|(canonical, _)| *canonical)
                .collect::<Vec<_>>()
                .join(", ");
            unparseable(
                field,
                format!("I didn't recognize that property type. Please choose one of: {categories}."),
            )
        }
    }
}
