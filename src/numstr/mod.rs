//! Decimal-string arithmetic.
//!
//! Addition over base-10 digit strings of arbitrary length, for values
//! that do not fit native integers.

use crate::error::NumericStringError;

/// Adds two non-negative decimal numbers given as digit strings.
///
/// Both operands must be non-empty and consist only of ASCII digits.
/// Leading zeros are allowed and preserved in the padding sense only; the
/// result carries no length guarantee beyond the longer operand plus an
/// optional carry digit.
///
/// # Example
///
/// ```
/// use fileslice::numstr;
///
/// assert_eq!(numstr::add("123", "877")?, "1000");
/// assert_eq!(
///     numstr::add("90071992547409919", "1")?,
///     "90071992547409920",
/// );
/// # Ok::<(), fileslice::NumericStringError>(())
/// ```
pub fn add(a: &str, b: &str) -> Result<String, NumericStringError> {
    validate(a)?;
    validate(b)?;

    let a = a.as_bytes();
    let b = b.as_bytes();
    let len = a.len().max(b.len());

    let mut digits = Vec::with_capacity(len + 1);
    let mut carry = 0u8;
    for i in 0..len {
        let da = a.len().checked_sub(i + 1).map_or(0, |j| a[j] - b'0');
        let db = b.len().checked_sub(i + 1).map_or(0, |j| b[j] - b'0');
        let sum = da + db + carry;
        digits.push(b'0' + sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        digits.push(b'0' + carry);
    }
    digits.reverse();

    // Built from ASCII digits only.
    Ok(String::from_utf8_lossy(&digits).into_owned())
}

fn validate(s: &str) -> Result<(), NumericStringError> {
    if s.is_empty() {
        return Err(NumericStringError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericStringError::NonDigit);
    }
    Ok(())
}
