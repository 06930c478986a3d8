//! Number rendering helpers for the text report.

use crate::config::Notation;

/// Render `value` in `notation`.
///
/// With no `precision`, float notation prints the shortest representation
/// that round-trips, and scientific notation prints as many mantissa digits
/// as that needs.
pub fn render(value: f64, notation: Notation, precision: Option<usize>) -> String {
    match notation {
        Notation::Float => float(value, precision),
        Notation::Scientific => scientific(value, precision),
        Notation::Shortest => {
            let fixed = float(value, precision);
            let exp = scientific(value, precision);
            // ties go to float
            if exp.chars().count() < fixed.chars().count() {
                exp
            } else {
                fixed
            }
        }
    }
}

/// Fixed-point rendering.
pub fn float(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{}", value),
    }
}

/// Exponential rendering with a signed, two-digit-minimum exponent
/// (`1.012e+01`, `5e-07`).
pub fn scientific(value: f64, precision: Option<usize>) -> String {
    let raw = match precision {
        Some(p) => format!("{:.*e}", p, value),
        None => format!("{:e}", value),
    };

    let Some((mantissa, exponent)) = raw.split_once('e') else {
        // inf and NaN have no exponent
        return raw;
    };

    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        Err(_) => raw,
    }
}

/// Prefix `+` unless the rendering already starts with a sign.
pub fn with_sign(rendered: String) -> String {
    if rendered.starts_with('-') || rendered.starts_with('+') {
        rendered
    } else {
        format!("+{}", rendered)
    }
}

/// Insert thousands separators into the integer digits of a rendered number.
///
/// A leading sign stays outside the grouped digits and the fractional part is
/// left untouched. Input whose integer part is not plain digits (`inf`,
/// `NaN`) is returned unchanged.
///
/// ```
/// use time_it::reporter::number::group_thousands;
///
/// assert_eq!(group_thousands("1234567.891"), "1,234,567.891");
/// assert_eq!(group_thousands("-1000"), "-1,000");
/// assert_eq!(group_thousands("+999"), "+999");
/// ```
pub fn group_thousands(rendered: &str) -> String {
    let (sign, unsigned) = match rendered.strip_prefix(|c: char| c == '-' || c == '+') {
        Some(rest) => rendered.split_at(rendered.len() - rest.len()),
        None => ("", rendered),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return rendered.to_string();
    }

    let digits = integer.len();
    let mut grouped = String::with_capacity(rendered.len() + digits / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}
