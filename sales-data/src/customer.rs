use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::channel::random_acquisition_channels;
use crate::dates::random_dates;
use crate::error::GenError;
use crate::identifier::random_ids;

/// Number of digits in a customer id
pub const CUSTOMER_ID_ORDER: u32 = 5;

pub const CUSTOMER_HEADERS: [&str; 3] = ["customer_id", "birth_date", "acquisition_channel"];

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub customer_id: u64,
    pub birth_date: NaiveDate,
    pub acquisition_channel: String,
}

/// Draws `size` distinct customer ids, each paired positionally with an independently
/// drawn birth date from `[start, end)`.
///
/// # Errors
/// 1. `RangeExhausted` when `size` is greater than the number of 5 digit ids
/// 2. `InvalidRange` when `end` is not after `start`
pub fn random_customer_ids<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(Vec<u64>, Vec<NaiveDate>), GenError> {
    let ids = random_ids(rng, size, CUSTOMER_ID_ORDER)?;
    let birth_dates = random_dates(rng, start, end, size)?;
    Ok((ids, birth_dates))
}

/// # Errors
/// Any error from [`random_customer_ids`] or
/// [`random_acquisition_channels`](crate::channel::random_acquisition_channels)
pub fn generate_customers<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    birth_start: NaiveDate,
    birth_end: NaiveDate,
    channels: Option<&[&str]>,
) -> Result<Vec<CustomerRecord>, GenError> {
    debug!("Generating {} customers", size);
    let (ids, birth_dates) = random_customer_ids(rng, size, birth_start, birth_end)?;
    let channels = random_acquisition_channels(rng, size, channels)?;

    Ok(ids
        .into_iter()
        .zip(birth_dates)
        .zip(channels)
        .map(|((customer_id, birth_date), channel)| CustomerRecord {
            customer_id,
            birth_date,
            acquisition_channel: channel.to_owned(),
        })
        .collect())
}
