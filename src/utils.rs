/// Common utility functions.
use crate::pattern::FieldValueType;

/// Converts string into unsigned number with bounds validation.
///
/// Accepts plain decimal tokens only; a multi-digit token must not start
/// with zero.
pub(crate) fn parse_field_value(
    input: &str,
    min: FieldValueType,
    max: FieldValueType,
) -> Option<FieldValueType> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if input.len() > 1 && input.starts_with('0') {
        return None;
    }

    let value = input.parse::<FieldValueType>().ok()?;
    if value < min || value > max {
        None
    } else {
        Some(value)
    }
}

/// Returns the number of days in the specified month, from the fixed
/// calendar table: February is always 29, and months outside `1..=12`
/// have no table row.
pub(crate) fn max_days_in_month(month: FieldValueType) -> Option<FieldValueType> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(29),
        _ => None,
    }
}
