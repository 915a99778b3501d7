use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::WriterBuilder;
use log::info;
use rand::Rng;
use serde::Serialize;

use crate::customer::{generate_customers, CustomerRecord, CUSTOMER_HEADERS};
use crate::error::GenError;
use crate::order::{generate_orders, OrderRecord, ORDER_HEADERS};
use crate::product::ProductOptions;

pub const CUSTOMER_FILE_NAME: &str = "customer_data.csv";
pub const ORDER_FILE_NAME: &str = "orders_data.csv";

/// Sizes and ranges for a single generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub customer_count: usize,
    /// Inclusive start of the birth date range
    pub birth_start: NaiveDate,
    /// Exclusive end of the birth date range
    pub birth_end: NaiveDate,
    /// Acquisition channels, the default list when `None`
    pub channels: Option<Vec<String>>,
    pub order_count: usize,
    /// Inclusive start of the transaction date range
    pub transaction_start: NaiveDate,
    /// Exclusive end of the transaction date range
    pub transaction_end: NaiveDate,
    pub products: ProductOptions,
}

fn january_first(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            customer_count: 100,
            birth_start: january_first(1940),
            birth_end: january_first(2008),
            channels: None,
            order_count: 10_000,
            transaction_start: january_first(2000),
            transaction_end: january_first(2021),
            products: ProductOptions::default(),
        }
    }
}

/// Both generated tables, held in memory until written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub customers: Vec<CustomerRecord>,
    pub orders: Vec<OrderRecord>,
}

impl Dataset {
    /// Generates the customer table, then the order table referencing it.
    /// Nothing is written, so a failure here leaves no partial output behind.
    ///
    /// # Errors
    /// Any error raised by one of the generators, all of them abort the run
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        config: &DatasetConfig,
    ) -> Result<Self, GenError> {
        let channels: Option<Vec<&str>> = config
            .channels
            .as_ref()
            .map(|entries| entries.iter().map(String::as_str).collect());
        let customers = generate_customers(
            rng,
            config.customer_count,
            config.birth_start,
            config.birth_end,
            channels.as_deref(),
        )?;
        let orders = generate_orders(
            rng,
            config.order_count,
            config.transaction_start,
            config.transaction_end,
            &config.products,
            &customers,
        )?;
        Ok(Dataset { customers, orders })
    }

    /// Writes `customer_data.csv` and `orders_data.csv` into the existing directory `dir`.
    /// Returns the paths of the customer and order files.
    ///
    /// # Errors
    /// Errors when a file cannot be created or a record fails to serialize
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<(PathBuf, PathBuf), GenError> {
        let customer_path = dir.as_ref().join(CUSTOMER_FILE_NAME);
        write_customers(File::create(&customer_path)?, &self.customers)?;
        info!(
            "Wrote {} customers to {}",
            self.customers.len(),
            customer_path.display()
        );

        let order_path = dir.as_ref().join(ORDER_FILE_NAME);
        write_orders(File::create(&order_path)?, &self.orders)?;
        info!(
            "Wrote {} orders to {}",
            self.orders.len(),
            order_path.display()
        );

        Ok((customer_path, order_path))
    }
}

/// # Errors
/// Errors when the header or a record cannot be written to `writer`
pub fn write_customers<W: io::Write>(
    writer: W,
    customers: &[CustomerRecord],
) -> Result<(), GenError> {
    write_table(writer, &CUSTOMER_HEADERS, customers)
}

/// # Errors
/// Errors when the header or a record cannot be written to `writer`
pub fn write_orders<W: io::Write>(writer: W, orders: &[OrderRecord]) -> Result<(), GenError> {
    write_table(writer, &ORDER_HEADERS, orders)
}

// headers are written by hand so an empty table still gets its header row
fn write_table<W: io::Write, T: Serialize>(
    writer: W,
    headers: &[&str],
    records: &[T],
) -> Result<(), GenError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(headers)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config() -> DatasetConfig {
        DatasetConfig {
            customer_count: 3,
            order_count: 5,
            ..DatasetConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = DatasetConfig::default();
        assert_eq!(config.customer_count, 100);
        assert_eq!(config.order_count, 10_000);
        assert_eq!(config.birth_start.to_string(), "1940-01-01");
        assert_eq!(config.birth_end.to_string(), "2008-01-01");
        assert_eq!(config.transaction_start.to_string(), "2000-01-01");
        assert_eq!(config.transaction_end.to_string(), "2021-01-01");
    }

    #[test]
    fn test_write_customers() {
        let customers = vec![CustomerRecord {
            customer_id: 12_345,
            birth_date: NaiveDate::from_ymd_opt(1987, 6, 5).unwrap(),
            acquisition_channel: "tv".to_owned(),
        }];
        let mut buf = Vec::new();
        write_customers(&mut buf, &customers).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "customer_id,birth_date,acquisition_channel\n12345,1987-06-05,tv\n"
        );
    }

    #[test]
    fn test_write_orders() {
        let orders = vec![OrderRecord {
            order_id: 1_234_567,
            transaction_date: NaiveDate::from_ymd_opt(2010, 12, 31).unwrap(),
            product: "Product3".to_owned(),
            price: 4_250,
            quantity: 2,
            customer_id: 54_321,
        }];
        let mut buf = Vec::new();
        write_orders(&mut buf, &orders).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "order_id,transaction_date,product,price,quantity,customer_id\n\
             1234567,2010-12-31,Product3,4250,2,54321\n"
        );
    }

    #[test]
    fn test_write_empty_tables() {
        let mut buf = Vec::new();
        write_orders(&mut buf, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "order_id,transaction_date,product,price,quantity,customer_id\n"
        );
    }

    #[test]
    fn test_generate_custom_channels() {
        let mut rng = StdRng::seed_from_u64(8);
        let config = DatasetConfig {
            channels: Some(vec!["email".to_owned(), "referral".to_owned()]),
            ..small_config()
        };
        let dataset = Dataset::generate(&mut rng, &config).unwrap();
        assert_eq!(dataset.customers.len(), 3);
        assert_eq!(dataset.orders.len(), 5);
        assert!(dataset
            .customers
            .iter()
            .all(|c| c.acquisition_channel == "email" || c.acquisition_channel == "referral"));
    }

    #[test]
    fn test_generate_aborts_on_error() {
        let mut rng = StdRng::seed_from_u64(8);
        let config = DatasetConfig {
            products: ProductOptions {
                max_prod: 0,
                ..ProductOptions::default()
            },
            ..small_config()
        };
        assert!(matches!(
            Dataset::generate(&mut rng, &config),
            Err(GenError::InvalidCatalogSize)
        ));
    }
}
