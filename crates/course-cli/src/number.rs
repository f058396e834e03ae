//! Console formatting for marks and statistics.

/// Significant digits shown for every printed number.
pub const SIGNIFICANT_DIGITS: i32 = 6;

/// Format `value` with up to six significant digits, dropping trailing
/// zeros, the same way iostreams print a `double` by default.
///
/// Values whose decimal exponent falls outside `-4..6` switch to scientific
/// notation (`1.5e+06`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let precision = (SIGNIFICANT_DIGITS - 1) as usize;
    let scientific = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    // Exponent after rounding to the shown precision.
    let exponent: i32 = exponent.parse().unwrap_or_default();
    if (-4..SIGNIFICANT_DIGITS).contains(&exponent) {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}"))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    }
}

fn trim_fraction(formatted: &str) -> String {
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted.to_string()
    }
}
