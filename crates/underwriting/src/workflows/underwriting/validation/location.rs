use super::super::domain::{Field, SlotValue};
use super::{accept, present, unparseable, ValidationOutcome};

const US_STATES: [(&str, &str); 51] = [
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("district of columbia", "DC"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
];

pub(crate) fn zip_code(raw: Option<&str>) -> ValidationOutcome {
    let field = Field::ZipCode;
    match present(raw) {
        Some(zip) if zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit()) => accept(
            field,
            SlotValue::Text(zip.to_string()),
            None,
            format!("Got it, zip code {zip}."),
        ),
        _ => unparseable(
            field,
            "That doesn't look like a valid zip code. Please provide a 5-digit zip code.",
        ),
    }
}

/// Resolves full state names and known codes to the two-letter code.
///
/// Unrecognized input is uppercased and kept as a best-effort code.
pub(crate) fn property_state(raw: Option<&str>) -> ValidationOutcome {
    let field = Field::PropertyState;
    let Some(state) = present(raw) else {
        return unparseable(
            field,
            "I didn't catch the state. Please provide the state the property is in.",
        );
    };

    let collapsed = state.split_whitespace().collect::<Vec<_>>().join(" ");
    let lowered = collapsed.to_ascii_lowercase();
    let upper = collapsed.to_ascii_uppercase();

    let resolved = US_STATES
        .iter()
        .find(|(name, code)| *name == lowered || *code == upper)
        .map(|(_, code)| (*code).to_string());

    match resolved {
        Some(code) => {
            let advisory = format!("Got it, the property is in {code}.");
            accept(field, SlotValue::Text(code), None, advisory)
        }
        None => {
            tracing::debug!(field = %field, "state not recognized, keeping uppercased input");
            let advisory = format!("Noted the property state as {upper}.");
            accept(field, SlotValue::Text(upper), None, advisory)
        }
    }
}
