//! Number rendering policy.
//!
//! This module provides:
//! - [`format_number`]: the canonical textual form used by `Display` and the formatter.
//! - [`to_fixed`] / [`to_radix`]: precision and base renderings for the number namespace.
//!
//! Key behaviors:
//! - `NaN` renders as `NaN`, the infinities as `Infinity` / `-Infinity`.
//! - Integral floats render without a decimal point (`3`, not `3.0`); negative zero renders
//!   as `0`.
//! - Finite non-integral values use Rust's shortest round-trip rendering (documented divergence
//!   from host environments that switch to exponent notation for large magnitudes).

/// Largest magnitude at which every integer is exactly representable in an `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0; // 2^53 - 1

/// Render `n` in its canonical textual form.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Collapses -0.0.
        return "0".to_string();
    }
    n.to_string()
}

/// Whether `n` is a finite value with no fractional part.
#[inline]
pub fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

/// Render `n` with exactly `digits` digits after the decimal point.
///
/// Non-finite input falls back to [`format_number`] naming (`NaN`, `Infinity`).
pub fn to_fixed(n: f64, digits: usize) -> String {
    if !n.is_finite() {
        return format_number(n);
    }
    format!("{n:.digits$}")
}

/// Render an integral `n` in base `radix`.
///
/// ## Returns
/// - `Some(String)` for finite integral `n` within the exactly-representable integer range and
///   `2 <= radix <= 36`; digits beyond `9` use lowercase letters, negatives keep a leading `-`.
/// - `None` otherwise.
pub fn to_radix(n: f64, radix: u32) -> Option<String> {
    if !(2..=36).contains(&radix) || !is_integer(n) || n.abs() > MAX_SAFE_INTEGER {
        return None;
    }
    let negative = n < 0.0;
    let mut magnitude = n.abs() as u64;
    if magnitude == 0 {
        return Some("0".to_string());
    }
    let mut digits = Vec::new();
    while magnitude > 0 {
        let d = (magnitude % u64::from(radix)) as u32;
        digits.push(char::from_digit(d, radix)?);
        magnitude /= u64::from(radix);
    }
    if negative {
        digits.push('-');
    }
    Some(digits.iter().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_non_finite_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn integral_floats_drop_the_decimal_point() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.5), "1.5");
    }

    #[test]
    fn to_fixed_controls_precision() {
        assert_eq!(to_fixed(std::f64::consts::PI, 2), "3.14");
        assert_eq!(to_fixed(1.0, 3), "1.000");
        assert_eq!(to_fixed(2.5, 0), "2");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn to_radix_renders_common_bases() {
        assert_eq!(to_radix(255.0, 16).as_deref(), Some("ff"));
        assert_eq!(to_radix(-255.0, 16).as_deref(), Some("-ff"));
        assert_eq!(to_radix(5.0, 2).as_deref(), Some("101"));
        assert_eq!(to_radix(0.0, 8).as_deref(), Some("0"));
        assert_eq!(to_radix(35.0, 36).as_deref(), Some("z"));
    }

    #[test]
    fn to_radix_rejects_unusable_input() {
        assert_eq!(to_radix(1.5, 16), None);
        assert_eq!(to_radix(f64::NAN, 16), None);
        assert_eq!(to_radix(10.0, 1), None);
        assert_eq!(to_radix(10.0, 37), None);
    }
}
