//! SI-prefixed rendering with a fixed number of significant digits.

use super::numeric::{add_commas, number_to_string};

/// Prefix symbols from yocto (10^-24) to yotta (10^24).
const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Format `value` with `significant_digits` significant digits and an SI prefix.
///
/// Trailing zeros are kept (`1.0` renders as `"1.00"` at 3 digits) and the
/// integer part is comma-grouped. Non-finite values fall back to
/// [`number_to_string`].
///
/// ```
/// use dashfmt::format_si;
///
/// assert_eq!(format_si(12.3456, 3), "12.3");
/// assert_eq!(format_si(1234.5, 3), "1.23k");
/// assert_eq!(format_si(0.0042, 3), "4.20m");
/// ```
pub fn format_si(value: f64, significant_digits: usize) -> String {
    if !value.is_finite() {
        return number_to_string(value);
    }

    let precision = significant_digits.max(1);
    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = decimal_parts(value.abs(), precision);

    let prefix_exponent = exponent.div_euclid(3).clamp(-8, 8);
    // Number of digits in front of the decimal point
    let int_len = exponent - prefix_exponent * 3 + 1;
    let n = digits.len() as i32;

    let body = if int_len == n {
        digits
    } else if int_len > n {
        format!("{}{}", digits, "0".repeat((int_len - n) as usize))
    } else if int_len > 0 {
        let (head, tail) = digits.split_at(int_len as usize);
        format!("{head}.{tail}")
    } else {
        format!("0.{}{}", "0".repeat((-int_len) as usize), digits)
    };

    let prefix = SI_PREFIXES[(prefix_exponent + 8) as usize];
    // A value that rounds to zero carries no sign
    let sign = if body.bytes().all(|b| b == b'0' || b == b'.') { "" } else { sign };
    format!("{sign}{}{prefix}", add_commas(&body))
}

/// Split `abs` into its `precision` leading decimal digits and base-10 exponent.
fn decimal_parts(abs: f64, precision: usize) -> (String, i32) {
    if abs == 0.0 {
        return ("0".repeat(precision), 0);
    }

    let p = precision as i32;
    let mut exponent = abs.log10().floor() as i32;
    let mut mantissa = scale(abs, p - 1 - exponent).round();

    // log10 can be off by one near powers of ten, and rounding can carry
    let upper = 10f64.powi(p);
    if mantissa >= upper {
        exponent += 1;
        mantissa = scale(abs, p - 1 - exponent).round();
    } else if mantissa < upper / 10.0 {
        exponent -= 1;
        mantissa = scale(abs, p - 1 - exponent).round();
    }

    (format!("{:.0}", mantissa), exponent)
}

/// Multiply by `10^power`, in steps so that subnormal inputs do not need a
/// factor beyond `f64::MAX`.
fn scale(mut value: f64, mut power: i32) -> f64 {
    while power > 300 {
        value *= 1e300;
        power -= 300;
    }
    while power < -300 {
        value /= 1e300;
        power += 300;
    }
    if power >= 0 {
        value * 10f64.powi(power)
    } else {
        value / 10f64.powi(-power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_digits_in_unit_range() {
        assert_eq!(format_si(1.0, 3), "1.00");
        assert_eq!(format_si(12.3456, 3), "12.3");
        assert_eq!(format_si(123.456, 3), "123");
    }

    #[test]
    fn kilo_and_mega_prefixes() {
        assert_eq!(format_si(1234.5, 3), "1.23k");
        assert_eq!(format_si(45_600.0, 3), "45.6k");
        assert_eq!(format_si(2_500_000.0, 3), "2.50M");
    }

    #[test]
    fn sub_unit_prefixes() {
        assert_eq!(format_si(0.0042, 3), "4.20m");
        assert_eq!(format_si(0.000_015, 3), "15.0µ");
    }

    #[test]
    fn rounding_carries_into_next_prefix() {
        assert_eq!(format_si(999_999.0, 3), "1.00M");
        assert_eq!(format_si(9.999, 3), "10.0");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_si(1.125, 3), "1.13");
    }

    #[test]
    fn zero() {
        assert_eq!(format_si(0.0, 3), "0.00");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_si(-1500.0, 3), "-1.50k");
    }

    #[test]
    fn beyond_yotta_pads_and_groups() {
        assert_eq!(format_si(1e30, 3), "1,000,000Y");
    }

    #[test]
    fn subnormal_values_stay_numeric() {
        let smallest = format_si(5e-324, 3);
        assert!(smallest.starts_with("0.000"));
        assert!(smallest.ends_with("494y"));
        assert!(!smallest.contains("inf"));

        let tiny = format_si(1e-310, 3);
        assert!(tiny.ends_with("100y"));
        assert!(!tiny.contains("inf"));
    }

    #[test]
    fn largest_finite_value() {
        assert!(format_si(f64::MAX, 3).ends_with('Y'));
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_si(f64::NAN, 3), "NaN");
        assert_eq!(format_si(f64::INFINITY, 3), "Infinity");
    }
}
