//! Turns calculation results into display text.

use itertools::Itertools;

/// Fractional digits kept when displaying a result.
pub const DEFAULT_MAX_DECIMALS: usize = 10;

/// Results smaller than this in magnitude (but non-zero) are shown in exponent form.
const SMALL_MAGNITUDE: f64 = 0.000001;

/// Results larger than this in magnitude are shown in exponent form.
const LARGE_MAGNITUDE: f64 = 1e15;

/// Adds thousands separators to the integer part of a number.
///
/// Text that is not a number is returned unchanged.
///
/// # Examples
///
/// ```
/// use scientific_calculator::formatter::format_number;
///
/// assert_eq!(format_number("-1234567.891"), "-1,234,567.891");
/// ```
pub fn format_number(value: &str) -> String {
    if value.is_empty() || value.parse::<f64>().is_err() {
        return value.to_string();
    }

    let (integer_part, decimal_part) = match value.split_once('.') {
        Some((integer_part, decimal_part)) => (integer_part, Some(decimal_part)),
        None => (value, None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return value.to_string();
    }

    let grouped = group_thousands(digits);
    match decimal_part {
        Some(decimal_part) => format!("{}{}.{}", sign, grouped, decimal_part),
        None => format!("{}{}", sign, grouped),
    }
}

fn group_thousands(digits: &str) -> String {
    let reversed_groups = digits
        .chars()
        .rev()
        .chunks(3)
        .into_iter()
        .map(|group| group.collect::<String>())
        .join(",");
    reversed_groups.chars().rev().collect()
}

/// Rounds a number to at most `max_decimals` fractional digits and drops trailing zeros.
///
/// Integers and text that is not a number are returned unchanged.
pub fn format_decimal(value: &str, max_decimals: usize) -> String {
    let number = match value.parse::<f64>() {
        Ok(number) if number.is_finite() => number,
        _ => return value.to_string(),
    };
    if number.fract() == 0.0 {
        return value.to_string();
    }

    remove_trailing_zeros(&to_fixed(number, max_decimals))
}

/// Enough fractional digits to print any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Fixed-point text with `fraction_digits` decimals, rounding exact halves away from zero.
fn to_fixed(number: f64, fraction_digits: usize) -> String {
    let fraction_digits = fraction_digits.min(EXACT_FRACTION_DIGITS);
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, number.abs());
    let (integer_part, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = integer_part
        .bytes()
        .chain(fraction.bytes().take(fraction_digits))
        .collect();
    if matches!(fraction.as_bytes().get(fraction_digits), Some(digit) if *digit >= b'5') {
        increment_digits(&mut digits);
    }

    let split = digits.len() - fraction_digits;
    let text: String = digits.iter().map(|digit| *digit as char).collect();
    let sign = if number < 0.0 { "-" } else { "" };
    if fraction_digits == 0 {
        format!("{}{}", sign, text)
    } else {
        format!("{}{}.{}", sign, &text[..split], &text[split..])
    }
}

fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Strips trailing zeros after the decimal point, and the point itself if nothing is left.
pub fn remove_trailing_zeros(value: &str) -> String {
    if !value.contains('.') {
        return value.to_string();
    }

    let trimmed = value.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

/// Formats a result for display.
///
/// * `Infinity` and `-Infinity` are kept, `NaN` becomes `Error`.
/// * Very small and very large magnitudes use exponent form with six fractional digits.
/// * Everything else is limited to ten decimals and gets thousands separators.
///
/// # Examples
///
/// ```
/// use scientific_calculator::formatter::format_result;
///
/// assert_eq!(format_result("1234.5000"), "1,234.5");
/// assert_eq!(format_result("NaN"), "Error");
/// ```
pub fn format_result(value: &str) -> String {
    match value {
        "Infinity" | "-Infinity" => return value.to_string(),
        "NaN" => return "Error".to_string(),
        _ => {}
    }

    let number = match value.parse::<f64>() {
        Ok(number) if number.is_finite() => number,
        _ => return value.to_string(),
    };

    if (number != 0.0 && number.abs() < SMALL_MAGNITUDE) || number.abs() > LARGE_MAGNITUDE {
        return to_exponential(number, 6);
    }

    let formatted = format_decimal(&number.to_string(), DEFAULT_MAX_DECIMALS);
    let formatted = remove_trailing_zeros(&formatted);
    format_number(&formatted)
}

/// Formats a computed value for display, see [`format_result`].
pub fn format_value(value: f64) -> String {
    format_result(&result_text(value))
}

/// The unformatted text of a result, as it is stored in the history.
///
/// `NaN`, `Infinity` and `-Infinity` are spelled out, everything else parses back to the
/// same value.
pub fn result_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        value.to_string()
    }
}

/// Exponent form with an explicit exponent sign, e.g. `1.234568e+16`.
fn to_exponential(number: f64, fraction_digits: usize) -> String {
    let formatted = format!("{:.*e}", fraction_digits, number);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
