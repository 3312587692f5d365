//! Leading-prefix numeric reading of text values.
//!
//! MySQL never rejects text in a numeric context; it reads as much of the
//! front of the string as looks like a number and silently ignores the rest.

fn trim_leading(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the longest prefix of `text` that reads as a decimal number.
///
/// Returns 0 if the text does not start with a number. An exponent is only
/// part of the prefix when it carries at least one digit, so `"1e"` reads
/// as `1`.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let integral = count_digits(bytes, pos);
    pos += integral;

    let mut fractional = 0;
    if bytes.get(pos) == Some(&b'.') {
        fractional = count_digits(bytes, pos + 1);
        pos += 1 + fractional;
    }

    if integral + fractional == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(bytes, exp_pos);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    pos
}

/// Numeric value of the leading number in `text`, or 0.0 if there is none.
///
/// Out-of-range values saturate at the largest finite double.
pub fn leading_double(text: &str) -> f64 {
    let text = trim_leading(text);
    let len = numeric_prefix_len(text);
    if len == 0 {
        return 0.0;
    }
    text[..len]
        .parse::<f64>()
        .map_or(0.0, |value| value.clamp(f64::MIN, f64::MAX))
}

/// Leading signed integer in `text`, truncated at the first non-digit.
///
/// Values beyond the `i64` range saturate at the nearest bound.
pub fn leading_signed(text: &str) -> i64 {
    let bytes = trim_leading(text).as_bytes();
    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let mut value: i64 = 0;
    for digit in bytes[start..].iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i64::from(digit - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    value
}
