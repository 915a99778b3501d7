use rand::Rng;

use crate::error::GenError;

pub const DEFAULT_CHANNELS: &[&str] = &[
    "radio",
    "tv",
    "online",
    "billboard",
    "newspaper",
    "magazine",
    "friends",
];

/// Draws `size` acquisition channels uniformly, with replacement, from `entries`
/// (or [`DEFAULT_CHANNELS`] when `None`).
///
/// # Errors
/// Errors with `EmptyEntryList` when `entries` is supplied but empty
pub fn random_acquisition_channels<'a, R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    entries: Option<&[&'a str]>,
) -> Result<Vec<&'a str>, GenError> {
    let entries = entries.unwrap_or(DEFAULT_CHANNELS);
    if entries.is_empty() {
        return Err(GenError::EmptyEntryList);
    }
    Ok((0..size)
        .map(|_| entries[rng.gen_range(0..entries.len())])
        .collect())
}
