use crate::value::FilterValue;

/// Fraction digits used when the caller does not pin a precision.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;
pub const MAX_DECIMALS: usize = 20;

const GROUP_SEPARATOR: char = ',';
const GROUP_SIZE: usize = 3;

/// Formats a number for display with thousands grouping.
///
/// `Some(n)` renders exactly `n` fraction digits. `None` renders up to three
/// and drops trailing zeros. Rounding is half away from zero on the shortest
/// decimal representation of the value, so `2.345` rounds to `2.35`.
pub fn format_number(value: f64, decimals: Option<usize>) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fraction_digits = decimals
        .unwrap_or(DEFAULT_MAX_FRACTION_DIGITS)
        .min(MAX_DECIMALS);
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes())
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    let keep = int_len + fraction_digits;
    if digits.len() > keep {
        let round_up = digits[keep] >= 5;
        digits.truncate(keep);
        if round_up && increment(&mut digits) {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let mut fraction: Vec<u8> = digits.split_off(int_len);
    if decimals.is_some() {
        fraction.resize(fraction_digits, 0);
    } else {
        while fraction.last() == Some(&0) {
            fraction.pop();
        }
    }

    let negative = value < 0.0 && digits.iter().chain(fraction.iter()).any(|d| *d != 0);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&digits));
    if !fraction.is_empty() {
        out.push('.');
        out.extend(fraction.iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Renders a ratio as a percentage: `0.1` becomes `10%`. Input that does not
/// read as a number formats as zero.
pub fn percentage(input: impl Into<FilterValue>, decimals: Option<usize>) -> String {
    let value = input.into().as_number().unwrap_or(0.0);
    format!("{}%", format_number(value * 100.0, decimals))
}

// Returns true when the carry ran off the most significant digit.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

fn group_thousands(digits: &[u8]) -> String {
    if digits.is_empty() {
        return "0".to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / GROUP_SIZE);
    for (idx, digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % GROUP_SIZE == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(char::from(b'0' + digit));
    }
    out
}
