use crate::interpreter::token::parse_number;

/// Interprets `value` as a percentage.
///
/// Without a usable `base` the result is the plain ratio `value / 100`. With one it is
/// `value` percent of `base`, which is what `base + value%` and `base - value%` need.
/// Deciding which of the two applies is up to the caller.
///
/// An unparsable `value` yields `"0"`.
pub fn calculate_percent(value: &str, base: Option<&str>) -> String {
    let percentage = match parse_number(value.trim()) {
        Some(percentage) => percentage,
        None => return "0".to_string(),
    };
    let ratio = percentage / 100.0;

    let result = match base.and_then(|base| parse_number(base.trim())) {
        Some(base) => base * ratio,
        None => ratio,
    };
    result.to_string()
}
