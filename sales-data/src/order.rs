use chrono::NaiveDate;
use log::debug;
use rand::distributions::Uniform;
use rand::Rng;
use serde::Serialize;

use crate::customer::CustomerRecord;
use crate::dates::random_dates;
use crate::error::GenError;
use crate::identifier::random_ids;
use crate::product::{random_products, ProductOptions};

/// Number of digits in an order id
pub const ORDER_ID_ORDER: u32 = 7;

pub const ORDER_HEADERS: [&str; 6] = [
    "order_id",
    "transaction_date",
    "product",
    "price",
    "quantity",
    "customer_id",
];

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub order_id: u64,
    pub transaction_date: NaiveDate,
    pub product: String,
    pub price: u32,
    pub quantity: u32,
    pub customer_id: u64,
}

/// Draws `size` quantities uniformly from `[1, 10)`.
#[must_use]
pub fn random_quantities<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<u32> {
    let quantity = Uniform::new(1, 10);
    (0..size).map(|_| rng.sample(quantity)).collect()
}

/// Draws `size` values with replacement from an already generated key column.
///
/// # Errors
/// Errors with `EmptyEntryList` when `keys` is empty and `size` is not 0
pub fn sample_foreign_keys<R: Rng + ?Sized>(
    rng: &mut R,
    keys: &[u64],
    size: usize,
) -> Result<Vec<u64>, GenError> {
    if size == 0 {
        return Ok(Vec::new());
    }
    if keys.is_empty() {
        return Err(GenError::EmptyEntryList);
    }
    Ok((0..size)
        .map(|_| keys[rng.gen_range(0..keys.len())])
        .collect())
}

/// Builds the order table, every `customer_id` is taken from `customers`.
///
/// # Errors
/// Any error raised by one of the column generators
pub fn generate_orders<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    transaction_start: NaiveDate,
    transaction_end: NaiveDate,
    products: &ProductOptions,
    customers: &[CustomerRecord],
) -> Result<Vec<OrderRecord>, GenError> {
    debug!(
        "Generating {} orders for {} customers",
        size,
        customers.len()
    );
    let order_ids = random_ids(rng, size, ORDER_ID_ORDER)?;
    let dates = random_dates(rng, transaction_start, transaction_end, size)?;
    let (names, prices) = random_products(rng, size, products)?;
    let quantities = random_quantities(rng, size);
    let customer_ids: Vec<u64> = customers.iter().map(|c| c.customer_id).collect();
    let customer_ids = sample_foreign_keys(rng, &customer_ids, size)?;

    let mut orders = Vec::with_capacity(size);
    for (i, order_id) in order_ids.into_iter().enumerate() {
        orders.push(OrderRecord {
            order_id,
            transaction_date: dates[i],
            product: names[i].clone(),
            price: prices[i],
            quantity: quantities[i],
            customer_id: customer_ids[i],
        });
    }
    Ok(orders)
}
