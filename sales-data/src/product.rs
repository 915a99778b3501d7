use std::collections::HashSet;

use log::debug;
use rand::distributions::Uniform;
use rand::Rng;
use serde::Serialize;

use crate::error::GenError;

pub const DEFAULT_PRODUCT_PREFIX: &str = "Product";

/// A single catalog entry, the price is bound to the name for the whole run
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: u32,
}

/// Options used to build a [ProductCatalog](crate::product::ProductCatalog)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductOptions {
    /// Base names cycled through when naming catalog entries
    pub prefixes: Vec<String>,
    /// Number of entries in the catalog
    pub max_prod: usize,
    /// Inclusive lower bound of a price
    pub min_price: u32,
    /// Exclusive upper bound of a price
    pub max_price: u32,
}

impl Default for ProductOptions {
    fn default() -> Self {
        ProductOptions {
            prefixes: vec![DEFAULT_PRODUCT_PREFIX.to_owned()],
            max_prod: 10,
            min_price: 100,
            max_price: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Prices are drawn first, then paired positionally with the generated names.
    ///
    /// # Errors
    /// 1. `InvalidCatalogSize` when `max_prod` is 0
    /// 2. `InvalidPriceRange` when `min_price` is not lower than `max_price`
    /// 3. `EmptyEntryList` when there are no prefixes
    /// 4. `DuplicateProductName` when two generated names are the same string
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        options: &ProductOptions,
    ) -> Result<Self, GenError> {
        if options.max_prod == 0 {
            return Err(GenError::InvalidCatalogSize);
        }
        if options.min_price >= options.max_price {
            return Err(GenError::InvalidPriceRange);
        }
        let price_dist = Uniform::new(options.min_price, options.max_price);
        let prices: Vec<u32> = (0..options.max_prod)
            .map(|_| rng.sample(price_dist))
            .collect();
        let names = product_names(&options.prefixes, options.max_prod)?;

        let products = names
            .into_iter()
            .zip(prices)
            .map(|(name, price)| Product { name, price })
            .collect();
        Ok(ProductCatalog { products })
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Picks `size` catalog entries uniformly, with replacement.
    #[must_use]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Vec<&Product> {
        if self.products.is_empty() {
            return Vec::new();
        }
        (0..size)
            .map(|_| &self.products[rng.gen_range(0..self.products.len())])
            .collect()
    }
}

/// Names `max_prod` products by cycling through `prefixes`, appending a counter that
/// increments once per full cycle: `A0, B0, A1, B1, A2`.
fn product_names(prefixes: &[String], max_prod: usize) -> Result<Vec<String>, GenError> {
    if prefixes.is_empty() {
        return Err(GenError::EmptyEntryList);
    }
    let names: Vec<String> = (0..max_prod)
        .map(|i| format!("{}{}", prefixes[i % prefixes.len()], i / prefixes.len()))
        .collect();

    let mut seen = HashSet::with_capacity(names.len());
    if let Some(duplicate) = names.iter().find(|name| !seen.insert(name.as_str())) {
        return Err(GenError::DuplicateProductName(duplicate.clone()));
    }
    Ok(names)
}

/// Builds a catalog from `options`, then samples `size` rows from it.
/// Returns the product names and their prices as two parallel columns.
///
/// # Errors
/// Any error raised while building the catalog, see [`ProductCatalog::generate`]
pub fn random_products<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    options: &ProductOptions,
) -> Result<(Vec<String>, Vec<u32>), GenError> {
    let catalog = ProductCatalog::generate(rng, options)?;
    debug!("Built a catalog of {} products", catalog.len());
    Ok(catalog
        .sample(rng, size)
        .into_iter()
        .map(|product| (product.name.clone(), product.price))
        .unzip())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn options_with_prefixes(prefixes: &[&str], max_prod: usize) -> ProductOptions {
        ProductOptions {
            prefixes: prefixes.iter().map(|&p| p.to_owned()).collect(),
            max_prod,
            ..ProductOptions::default()
        }
    }

    #[test]
    fn test_product_names() {
        let names = product_names(&["Product".to_owned()], 3).unwrap();
        assert_eq!(names, vec!["Product0", "Product1", "Product2"]);

        let prefixes = ["Shoe".to_owned(), "Hat".to_owned()];
        let names = product_names(&prefixes, 5).unwrap();
        assert_eq!(names, vec!["Shoe0", "Hat0", "Shoe1", "Hat1", "Shoe2"]);

        assert!(matches!(
            product_names(&[], 5),
            Err(GenError::EmptyEntryList)
        ));
    }

    #[test]
    fn test_duplicate_product_names() {
        let prefixes = ["Item".to_owned(), "Item".to_owned()];
        match product_names(&prefixes, 4) {
            Err(GenError::DuplicateProductName(name)) => assert_eq!(name, "Item0"),
            other => panic!("expected DuplicateProductName, got {:?}", other),
        }

        // "P" with counter 10 collides with "P1" with counter 0
        let prefixes = ["P".to_owned(), "P1".to_owned()];
        let res = product_names(&prefixes, 22);
        assert!(matches!(res, Err(GenError::DuplicateProductName(_))));
    }

    #[test]
    fn test_catalog_generate() {
        let mut rng = StdRng::seed_from_u64(9);
        let catalog = ProductCatalog::generate(&mut rng, &ProductOptions::default()).unwrap();
        assert_eq!(catalog.len(), 10);
        for (i, product) in catalog.products().iter().enumerate() {
            assert_eq!(product.name, format!("Product{}", i));
            assert!((100..10_000).contains(&product.price));
        }
    }

    #[test]
    fn test_catalog_invalid_options() {
        let mut rng = StdRng::seed_from_u64(9);
        let options = ProductOptions {
            max_prod: 0,
            ..ProductOptions::default()
        };
        assert!(matches!(
            ProductCatalog::generate(&mut rng, &options),
            Err(GenError::InvalidCatalogSize)
        ));

        let options = ProductOptions {
            min_price: 500,
            max_price: 500,
            ..ProductOptions::default()
        };
        assert!(matches!(
            ProductCatalog::generate(&mut rng, &options),
            Err(GenError::InvalidPriceRange)
        ));

        let options = options_with_prefixes(&[], 10);
        assert!(matches!(
            ProductCatalog::generate(&mut rng, &options),
            Err(GenError::EmptyEntryList)
        ));
    }

    #[test]
    fn test_random_products_consistent_pairing() {
        let mut rng = StdRng::seed_from_u64(9);
        let options = options_with_prefixes(&["Widget", "Gadget", "Gizmo"], 8);
        let (names, prices) = random_products(&mut rng, 5_000, &options).unwrap();
        assert_eq!(names.len(), 5_000);
        assert_eq!(prices.len(), 5_000);

        let mut price_by_name = HashMap::new();
        for (name, price) in names.iter().zip(&prices) {
            assert_eq!(*price_by_name.entry(name).or_insert(*price), *price);
            assert!((100..10_000).contains(price));
        }
        assert!(price_by_name.len() <= 8);
    }

    #[test]
    fn test_random_products_from_catalog() {
        let options = ProductOptions::default();
        let mut rng = StdRng::seed_from_u64(21);
        let catalog = ProductCatalog::generate(&mut rng, &options).unwrap();

        // same seed: the catalog built inside random_products is the one above
        let mut rng = StdRng::seed_from_u64(21);
        let (names, prices) = random_products(&mut rng, 1_000, &options).unwrap();
        for (name, price) in names.iter().zip(prices) {
            assert!(catalog
                .products()
                .contains(&Product {
                    name: name.clone(),
                    price
                }));
        }
    }
}
