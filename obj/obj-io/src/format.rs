//! Canonical decimal formatting for numeric fields.
//!
//! The interchange format carries numbers as plain decimal text: `.` as the
//! separator, no exponent, no locale influence. The canonical form is the
//! shortest text that round-trips to 6 fractional digits: render at fixed
//! 6-digit precision, strip trailing zeros, strip a bare trailing point.

use crate::error::FormatError;

/// Format a finite `f32` as canonical decimal text.
///
/// Renders with exactly 6 digits after the decimal point, then strips
/// trailing zeros and, if that leaves a bare trailing point, the point too.
/// Negative zero is normalized to `0`, as is any value that rounds to zero
/// at 6 fractional digits.
///
/// # Errors
///
/// Returns [`FormatError`] for NaN or infinite input. Formatting is defined
/// only for finite values.
///
/// # Example
///
/// ```
/// use obj_io::format_f32;
///
/// assert_eq!(format_f32(1.0).unwrap(), "1");
/// assert_eq!(format_f32(1.5).unwrap(), "1.5");
/// assert_eq!(format_f32(0.001).unwrap(), "0.001");
/// ```
pub fn format_f32(value: f32) -> Result<String, FormatError> {
    if value.is_nan() {
        return Err(FormatError::Nan);
    }
    if value.is_infinite() {
        return Err(FormatError::Infinite);
    }

    // Fixed precision always yields a decimal point, so the zero-trim
    // cannot eat digits of the integer part.
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    // Values that round to zero lose their sign, -0.0 included.
    if trimmed == "-0" {
        return Ok(String::from("0"));
    }
    Ok(trimmed.to_string())
}
