/// Whole-dollar amount with thousands separators, e.g. `$1,516`.
pub(crate) fn currency(value: f64) -> String {
    format!("${}", group_thousands(value))
}

/// Rounds to whole units and inserts `,` every three digits.
pub(crate) fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if grouped == "0" {
        grouped
    } else {
        format!("{sign}{grouped}")
    }
}

/// Year counts print without a trailing `.0` when whole.
pub(crate) fn years(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{value}")
    }
}
