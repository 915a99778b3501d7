use chrono::{Datelike, NaiveDate};
use rand::distributions::Uniform;
use rand::Rng;

use crate::error::GenError;

/// Draws `size` dates uniformly from `[start, end)` at day granularity.
///
/// Both bounds are converted to day counts since the start of the common era, the day
/// offsets are sampled, then mapped back to calendar dates.
///
/// # Errors
/// Errors with `InvalidRange` when `end` is not after `start`
pub fn random_dates<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
    size: usize,
) -> Result<Vec<NaiveDate>, GenError> {
    let start_days = start.num_days_from_ce();
    let end_days = end.num_days_from_ce();
    if end_days <= start_days {
        return Err(GenError::InvalidRange);
    }
    let days = Uniform::new(start_days, end_days);
    (0..size)
        .map(|_| {
            NaiveDate::from_num_days_from_ce_opt(rng.sample(days)).ok_or(GenError::InvalidRange)
        })
        .collect()
}
