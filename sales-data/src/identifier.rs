use rand::seq::index;
use rand::Rng;

use crate::error::GenError;

/// Returns the half-open range `[10^(order-1), 10^order)` of identifiers with exactly `order` digits.
///
/// # Errors
/// Errors with `InvalidOrder` when `order` is 0 or `10^order` does not fit in a `u64`
pub fn order_bounds(order: u32) -> Result<(u64, u64), GenError> {
    let max = order
        .checked_sub(1)
        .and_then(|_| 10_u64.checked_pow(order))
        .ok_or(GenError::InvalidOrder(order))?;
    Ok((max / 10, max))
}

/// Draws `size` distinct identifiers with exactly `order` digits.
///
/// # Errors
/// 1. `InvalidOrder` when `order` has no valid bounds, see [`order_bounds`]
/// 2. `RangeExhausted` when `size` is greater than the number of identifiers with `order` digits
pub fn random_ids<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    order: u32,
) -> Result<Vec<u64>, GenError> {
    let (min, max) = order_bounds(order)?;
    let available = usize::try_from(max - min).map_err(|_| GenError::InvalidOrder(order))?;
    if size > available {
        return Err(GenError::RangeExhausted { size, available });
    }
    Ok(index::sample(rng, available, size)
        .into_iter()
        .map(|offset| min + offset as u64)
        .collect())
}
