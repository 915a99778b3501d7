use std::error::Error;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sales_data::dataset::{Dataset, DatasetConfig};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Existing directory to write customer_data.csv and orders_data.csv into
    #[clap(default_value = ".")]
    pub(crate) output_dir: String,
    /// Seed for the random generator, two runs with the same seed write identical files
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => {
            info!("Seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let dataset = Dataset::generate(&mut rng, &DatasetConfig::default())?;
    let (customer_path, order_path) = dataset.write_to_dir(&cli.output_dir)?;
    println!("{}", customer_path.display());
    println!("{}", order_path.display());

    Ok(())
}
