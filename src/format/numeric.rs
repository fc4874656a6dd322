//! Shared numeric helpers: number-to-text, comma grouping, rounding and
//! lenient float parsing.
//!
//! The higher-level formatters in [`latency`](super::latency) and
//! [`metric`](super::metric) are layered on these.

/// Placeholder rendered for an absent metric value.
pub const PLACEHOLDER: &str = "---";

/// Placeholder rendered by the generic formatter for a NaN input.
pub const NOT_AVAILABLE: &str = "N/A";

/// Convert a number to text the way the dashboard prints numbers natively.
///
/// Shortest round-trip digits, no trailing `.0`, exponent form (with an
/// explicit exponent sign) below `1e-6` and from `1e21` upwards.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Covers -0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        value.to_string()
    }
}

/// Insert a `,` every three digits from the right of the integer part.
///
/// Pure string transform: the fractional part (everything after the first
/// `.`) is left untouched, and signs or exponent markers stay where they are.
pub fn add_commas(text: &str) -> String {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text, None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3);
    let mut run = String::new();
    for c in int_part.chars() {
        if c.is_ascii_digit() {
            run.push(c);
        } else {
            push_grouped(&mut out, &run);
            run.clear();
            out.push(c);
        }
    }
    push_grouped(&mut out, &run);

    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
}

/// Round to `decimals` places: `round(num * 10^d) / 10^d`, half away from zero.
pub fn round_number(num: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (num * factor).round() / factor
}

/// Fixed-point rendering with `decimals` places, rounding half away from zero.
///
/// Negative zero prints without a sign; non-finite values print as
/// [`number_to_string`] does.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return number_to_string(value);
    }
    let rounded = round_number(value, decimals as i32);
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals, rounded)
}

/// Comma-grouped rendering of a metric value.
///
/// Absent values render as [`PLACEHOLDER`]. No rounding is applied.
pub fn format_with_comma(value: Option<f64>) -> String {
    match value {
        Some(v) => add_commas(&number_to_string(v)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Parse the leading float literal of `text`, ignoring any trailing garbage.
///
/// `"0.25s"` parses as `0.25`, `"  -1e3ms"` as `-1000`. Returns `None` when
/// no numeric prefix exists.
pub fn parse_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if s[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_to_string_drops_trailing_zero() {
        assert_eq!(number_to_string(1500.0), "1500");
        assert_eq!(number_to_string(1.5), "1.5");
    }

    #[test]
    fn number_to_string_negative_zero() {
        assert_eq!(number_to_string(-0.0), "0");
    }

    #[test]
    fn number_to_string_exponent_forms() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_string(0.000001), "0.000001");
    }

    #[test]
    fn number_to_string_non_finite() {
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn add_commas_groups_integer_part() {
        assert_eq!(add_commas("1234567"), "1,234,567");
        assert_eq!(add_commas("123"), "123");
        assert_eq!(add_commas("1000"), "1,000");
    }

    #[test]
    fn add_commas_leaves_fraction_alone() {
        assert_eq!(add_commas("1234.56789"), "1,234.56789");
    }

    #[test]
    fn add_commas_keeps_sign() {
        assert_eq!(add_commas("-1500"), "-1,500");
    }

    #[test]
    fn add_commas_ignores_non_numeric() {
        assert_eq!(add_commas("NaN"), "NaN");
        assert_eq!(add_commas("1e+21"), "1e+21");
    }

    #[test]
    fn round_number_decimals() {
        assert_eq!(round_number(1.23456, 3), 1.235);
        assert_eq!(round_number(1499.5, 0), 1500.0);
        assert_eq!(round_number(0.125, 2), 0.13);
    }

    #[test]
    fn to_fixed_pads_zeros() {
        assert_eq!(to_fixed(95.0, 2), "95.00");
        assert_eq!(to_fixed(-0.0001, 2), "0.00");
    }

    #[test]
    fn to_fixed_non_finite() {
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    #[test]
    fn format_with_comma_absent() {
        assert_eq!(format_with_comma(None), "---");
    }

    #[test]
    fn format_with_comma_values() {
        assert_eq!(format_with_comma(Some(1234567.0)), "1,234,567");
        assert_eq!(format_with_comma(Some(1234.5)), "1,234.5");
        assert_eq!(format_with_comma(Some(0.0)), "0");
    }

    #[test]
    fn parse_float_plain() {
        assert_eq!(parse_float("0.25"), Some(0.25));
        assert_eq!(parse_float("12"), Some(12.0));
    }

    #[test]
    fn parse_float_with_trailing_garbage() {
        assert_eq!(parse_float("0.25s"), Some(0.25));
        assert_eq!(parse_float("  -1e3ms"), Some(-1000.0));
        assert_eq!(parse_float("5e"), Some(5.0));
    }

    #[test]
    fn parse_float_leading_dot() {
        assert_eq!(parse_float(".5"), Some(0.5));
    }

    #[test]
    fn parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn parse_float_rejects_non_numeric() {
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("."), None);
    }
}
