//! Numeric rendering policy.
//!
//! Every place that shows a number to a person goes through [`format_number`],
//! so `3.0` always reads `3` and long fractions are cut to three places.

/// Digits kept after the decimal point.
pub(crate) const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a number for display.
///
/// Integral values render without a decimal point. Other values are rounded
/// half away from zero to three places, then trailing zeros
/// and a dangling decimal point are stripped.
///
/// ```
/// use stepwise_foundation::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(3.92), "3.92");
/// assert_eq!(format_number(0.293_847_928_374), "0.294");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    if is_integral(value) {
        return format!("{value:.0}");
    }

    let scale = 10f64.powi(MAX_FRACTION_DIGITS as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if is_integral(rounded) {
        return format!("{rounded:.0}");
    }

    let text = format!("{rounded:.MAX_FRACTION_DIGITS$}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
