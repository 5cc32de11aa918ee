//! Calendar date-range computation.
//!
//! Computes the start and end of the last N calendar months, either as
//! whole months (first of the start month through the last day of the
//! current month) or anchored to today's day of month.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::DateRangeError;

/// Returns the date range covering the last `interval` months as
/// `(start, end)` strings in `YYYY-MM-DD` form, relative to today.
///
/// - `from_today == false`: whole months. The range starts on the first
///   day of the month `interval - 1` months ago and ends on the last day
///   of the current month, so `interval == 1` is exactly the current
///   month.
/// - `from_today == true`: anchored to today. The range ends today and
///   starts `interval` months earlier, with the day of month clamped to
///   the shorter target month when needed (e.g. March 31 minus one month
///   is the last day of February).
///
/// # Errors
///
/// [`DateRangeError::NonPositiveInterval`] when `interval` is zero.
///
/// # Example
///
/// ```
/// use fileslice::daterange;
///
/// let (start, end) = daterange::date_range(3, true)?;
/// assert!(start < end);
/// # Ok::<(), fileslice::DateRangeError>(())
/// ```
pub fn date_range(interval: u32, from_today: bool) -> Result<(String, String), DateRangeError> {
    date_range_from(Local::now().date_naive(), interval, from_today)
}

/// Same as [`date_range`], but relative to an explicit `today`.
pub fn date_range_from(
    today: NaiveDate,
    interval: u32,
    from_today: bool,
) -> Result<(String, String), DateRangeError> {
    if interval == 0 {
        return Err(DateRangeError::NonPositiveInterval);
    }

    let months_back = interval - if from_today { 0 } else { 1 };
    let anchor = today
        .checked_sub_months(Months::new(months_back))
        .ok_or(DateRangeError::OutOfRange)?;

    let (start, end) = if from_today {
        // checked_sub_months already clamps the day of month.
        (anchor, today)
    } else {
        let start = anchor.with_day(1).ok_or(DateRangeError::OutOfRange)?;
        (start, last_day_of_month(today)?)
    };

    Ok((
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    ))
}

fn last_day_of_month(date: NaiveDate) -> Result<NaiveDate, DateRangeError> {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next_month| next_month.pred_opt())
        .ok_or(DateRangeError::OutOfRange)
}
