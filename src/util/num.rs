/// Lower bound of the decimal exponent printed without exponent notation.
const MIN_PLAIN_EXPONENT: i32 = -4;
/// Decimal exponent from which exponent notation is used.
const MAX_PLAIN_EXPONENT: i32 = 6;

/// Truncates a floating value toward zero into an `i64`.
///
/// Values outside the `i64` range saturate at the nearest bound and `NaN`
/// becomes `0`. The fractional part is discarded, never rounded.
///
/// ## Example
/// ```
/// use linecalc::util::num::truncate_to_i64;
///
/// assert_eq!(truncate_to_i64(3.9), 3);
/// assert_eq!(truncate_to_i64(-3.9), -3);
/// assert_eq!(truncate_to_i64(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn truncate_to_i64(value: f64) -> i64 {
    value as i64
}

/// Converts a stored integer back to the floating domain used by arithmetic.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Returns `true` when `value` survives a round trip through `i64` unchanged.
///
/// This decides the kind of a freshly created variable: `4.0` is an integer,
/// `4.5`, infinities and `NaN` are not.
///
/// ## Example
/// ```
/// use linecalc::util::num::is_exact_integer;
///
/// assert!(is_exact_integer(16.0));
/// assert!(is_exact_integer(-2.0));
/// assert!(!is_exact_integer(2.5));
/// assert!(!is_exact_integer(f64::INFINITY));
/// ```
#[allow(clippy::float_cmp)]
#[must_use]
pub fn is_exact_integer(value: f64) -> bool {
    i64_to_f64(truncate_to_i64(value)) == value
}

/// Formats a floating value in general notation.
///
/// Uses the shortest digits that round-trip. Plain decimal notation is used
/// when the decimal exponent lies in `-4..6`, exponent notation with a signed,
/// at least two digit exponent otherwise. Infinities print as `+Inf`/`-Inf`.
///
/// ## Example
/// ```
/// use linecalc::util::num::format_general;
///
/// assert_eq!(format_general(7.0), "7");
/// assert_eq!(format_general(2.5), "2.5");
/// assert_eq!(format_general(0.0001), "0.0001");
/// assert_eq!(format_general(1_000_000.0), "1e+06");
/// assert_eq!(format_general(0.00001), "1e-05");
/// assert_eq!(format_general(1_234_567.0), "1.234567e+06");
/// assert_eq!(format_general(f64::NEG_INFINITY), "-Inf");
/// ```
#[must_use]
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if (MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT).contains(&exponent) {
        return value.to_string();
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}
