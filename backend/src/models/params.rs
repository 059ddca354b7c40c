//! Generator parameters
//!
//! `GeneratorParameters` is the caller-facing record. Its fields are signed so
//! that out-of-range input (a negative increment, a zero modulus) reaches the
//! validator and is rejected with a descriptive error.
//!
//! `ValidatedParameters` is the unsigned form the engines run on. It can only
//! be produced by [`crate::validation::validate`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seed and coefficients of a congruential recurrence
///
/// # Example
/// ```
/// use congruential_rng_core::GeneratorParameters;
///
/// let params = GeneratorParameters::new(1234, 1103515245, 12348, 2_147_483_647);
/// assert_eq!(params.modulus, 2_147_483_647);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorParameters {
    /// Initial state (must be > 0)
    pub seed: i64,
    /// Multiplicative coefficient `a` (must be > 0, coprime with modulus)
    pub multiplier: i64,
    /// Additive coefficient `c` (must be >= 0)
    pub increment: i64,
    /// Modulus `m` (must be > 0)
    pub modulus: i64,
}

impl GeneratorParameters {
    pub fn new(seed: i64, multiplier: i64, increment: i64, modulus: i64) -> Self {
        Self {
            seed,
            multiplier,
            increment,
            modulus,
        }
    }
}

/// Which recurrence a parameter set is validated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Linear: `x' = (a*x + c) mod m`
    Lcg,
    /// Quadratic: `x' = (a*x^2 + c) mod m`
    Qcg,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Lcg => write!(f, "LCG"),
            GeneratorKind::Qcg => write!(f, "QCG"),
        }
    }
}

/// Parameters that passed validation for a specific [`GeneratorKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidatedParameters {
    kind: GeneratorKind,
    seed: u64,
    multiplier: u64,
    increment: u64,
    modulus: u64,
}

impl ValidatedParameters {
    /// Only called by the validator once every precondition holds
    pub(crate) fn new_unchecked(
        kind: GeneratorKind,
        seed: u64,
        multiplier: u64,
        increment: u64,
        modulus: u64,
    ) -> Self {
        Self {
            kind,
            seed,
            multiplier,
            increment,
            modulus,
        }
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl From<ValidatedParameters> for GeneratorParameters {
    fn from(params: ValidatedParameters) -> Self {
        // Every field came from a non-negative i64, so the casts are lossless
        GeneratorParameters {
            seed: params.seed as i64,
            multiplier: params.multiplier as i64,
            increment: params.increment as i64,
            modulus: params.modulus as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(GeneratorKind::Lcg.to_string(), "LCG");
        assert_eq!(GeneratorKind::Qcg.to_string(), "QCG");
    }

    #[test]
    fn test_validated_round_trips_to_parameters() {
        let validated = ValidatedParameters::new_unchecked(GeneratorKind::Lcg, 1, 5, 3, 16);
        assert_eq!(
            GeneratorParameters::from(validated),
            GeneratorParameters::new(1, 5, 3, 16)
        );
    }
}
