use crate::error::DirectionsError;

/// Renders `value` as the shortest decimal string that parses back to the
/// same `f64`, with at least one fractional digit.
///
/// The output never uses an exponent and always uses `.` as the decimal
/// point, so `1.42` stays `"1.42"` and `0.0` becomes `"0.0"`.
pub fn format_decimal(field: &'static str, value: f64) -> Result<String, DirectionsError> {
    if !value.is_finite() {
        return Err(DirectionsError::InvalidValue { field, value });
    }
    Ok(render_finite(value))
}

/// Same rendering as [`format_decimal`] for values already known to be finite.
pub(crate) fn render_finite(value: f64) -> String {
    debug_assert!(value.is_finite());
    // f64's Display is the shortest round-trip form and never uses an exponent.
    let mut rendered = value.to_string();
    if !rendered.contains('.') {
        rendered.push_str(".0");
    }
    rendered
}
