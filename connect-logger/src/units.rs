//! Splitting raw dashboard values into a number and a technical unit.

/// Technical unit symbols the dashboard appends to values. Closed set;
/// anything else trailing a value is treated as part of the value itself.
const UNIT_SYMBOLS: [&str; 5] = ["%", "°C", "h", "t", "kg"];

/// Splits a raw value text into `(value, unit)`.
///
/// The unit, if any, is the token after the last space — but only when it is
/// one of the recognized symbols. `"55 %"` becomes `("55", "%")` while
/// `"12 banana"` stays `("12 banana", "")` and `"42"` stays `("42", "")`.
pub fn split_value_unit(raw: &str) -> (String, String) {
    if let Some(pos) = raw.rfind(' ') {
        let (value, unit) = (&raw[..pos], &raw[pos + 1..]);
        if UNIT_SYMBOLS.contains(&unit) {
            return (value.to_string(), unit.to_string());
        }
    }
    (raw.to_string(), String::new())
}
