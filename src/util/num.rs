/// Largest integer magnitude below which every `i64` converts to `f64`
/// without rounding (`2^53`).
pub const MAX_EXACT_FLOAT_INT: u64 = 1 << 53;

/// Converts an integer to a float, refusing values that would be rounded.
///
/// Integers with a magnitude of at most `2^53` are returned as `Some`; anything
/// larger yields `None` even if that particular value happens to be
/// representable.
///
/// # Example
/// ```
/// use pisc::util::num::{MAX_EXACT_FLOAT_INT, exact_float};
///
/// assert_eq!(exact_float(-42), Some(-42.0));
///
/// let limit = i64::try_from(MAX_EXACT_FLOAT_INT).unwrap();
/// assert_eq!(exact_float(limit), Some(9_007_199_254_740_992.0));
/// assert_eq!(exact_float(limit + 1), None);
/// assert_eq!(exact_float(i64::MIN), None);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn exact_float(value: i64) -> Option<f64> {
    if value.unsigned_abs() > MAX_EXACT_FLOAT_INT {
        None
    } else {
        Some(value as f64)
    }
}
