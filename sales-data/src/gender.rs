use std::fmt;

use rand::distributions::WeightedIndex;
use rand::Rng;
use serde::Serialize;

use crate::error::GenError;

pub const DEFAULT_GENDER_WEIGHTS: &[f64] = &[0.49, 0.49, 0.01, 0.01];

/// Accepted distance between the sum of the supplied probabilities and 1
const PROBABILITY_TOLERANCE: f64 = 1e-8;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
    #[serde(rename = "")]
    Unspecified,
}

impl Gender {
    /// Categories in the order their probabilities are given
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::Unspecified,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
            Gender::Unspecified => "",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Errors
/// Errors with `InvalidDistribution` when `p` is supplied and
/// 1. does not hold exactly one probability per [Gender](crate::gender::Gender)
/// 2. holds a negative or non-finite probability
/// 3. does not sum to 1
pub fn random_genders<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    p: Option<&[f64]>,
) -> Result<Vec<Gender>, GenError> {
    let weights = p.unwrap_or(DEFAULT_GENDER_WEIGHTS);
    if weights.len() != Gender::ALL.len()
        || weights.iter().any(|w| !w.is_finite() || *w < 0.0)
        || (weights.iter().sum::<f64>() - 1.0).abs() > PROBABILITY_TOLERANCE
    {
        return Err(GenError::InvalidDistribution);
    }
    let dist = WeightedIndex::new(weights).map_err(|_| GenError::InvalidDistribution)?;
    Ok((0..size).map(|_| Gender::ALL[rng.sample(&dist)]).collect())
}
