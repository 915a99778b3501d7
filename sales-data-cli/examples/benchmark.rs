use std::error::Error;
use std::io;
use std::time::Instant;

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sales_data::dataset::{write_customers, write_orders, Dataset, DatasetConfig};


fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(0);
    let start = Instant::now();
    let dataset = Dataset::generate(&mut rng, &DatasetConfig::default())?;
    let elapsed = start.elapsed();
    warn!("Generating took: {:.2?}", elapsed);

    let start_writing = Instant::now();
    write_customers(io::sink(), &dataset.customers)?;
    write_orders(io::sink(), &dataset.orders)?;
    let elapsed_writing = start_writing.elapsed();
    warn!("Writing took: {:.2?}", elapsed_writing);


    warn!("Total took: {:.2?}", start.elapsed());

    Ok(())
}
