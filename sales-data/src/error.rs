use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("Unknown name category: {0}")]
    InvalidCategory(String),
    #[error("Probabilities must be 4 non-negative values summing to 1")]
    InvalidDistribution,
    #[error("The end of a date range must come after its start")]
    InvalidRange,
    #[error("Identifier order {0} is out of bounds")]
    InvalidOrder(u32),
    #[error("Cannot draw {size} distinct identifiers from {available} values")]
    RangeExhausted { size: usize, available: usize },
    #[error("Cannot sample from an empty list")]
    EmptyEntryList,
    #[error("Minimum price must be lower than maximum price")]
    InvalidPriceRange,
    #[error("Catalog must hold at least one product")]
    InvalidCatalogSize,
    #[error("Product name {0} appears more than once in the catalog")]
    DuplicateProductName(String),
}
