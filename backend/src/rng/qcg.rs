//! Quadratic congruential generator
//!
//! `x' = (a*x^2 + c) mod m`. `x^2` alone can exceed 64 bits, so the update is
//! evaluated as `((a mod m) * (x^2 mod m) + c) mod m` with each product taken
//! in 128 bits.

use crate::core::arith::mul_mod;
use crate::models::params::{GeneratorKind, GeneratorParameters, ValidatedParameters};
use crate::rng::CongruentialGenerator;
use crate::validation::{validate, ValidationError};

/// Quadratic congruential engine producing integers in [0, 100]
///
/// Construction additionally requires the multiplier to be a quadratic
/// residue modulo the modulus.
///
/// # Example
/// ```
/// use congruential_rng_core::make_qcg;
///
/// let mut qcg = make_qcg(123456789, 9301, 49297, 281_474_976_710_597).unwrap();
/// let first: Vec<u8> = qcg.by_ref().take(3).collect();
/// assert_eq!(first, vec![53, 46, 88]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QcgEngine {
    params: ValidatedParameters,
    current: u64,
}

impl QcgEngine {
    /// Validate `params` (including the residue check) and build an engine
    pub fn new(params: GeneratorParameters) -> Result<Self, ValidationError> {
        let params = validate(&params, GeneratorKind::Qcg)?;
        log::debug!(
            "QCG ready: seed={} a={} c={} m={}",
            params.seed(),
            params.multiplier(),
            params.increment(),
            params.modulus()
        );
        Ok(Self {
            current: params.seed(),
            params,
        })
    }

    /// Advance the recurrence and return the raw value in `[0, modulus)`
    pub fn advance_raw(&mut self) -> u64 {
        let m = self.params.modulus();
        let x = self.current % m;
        let x_squared = mul_mod(x, x, m);
        let ax2 = mul_mod(self.params.multiplier(), x_squared, m);
        let next = ((ax2 as u128 + self.params.increment() as u128) % m as u128) as u64;
        self.current = next;
        next
    }

    /// Advance the recurrence and return the next value in [0, 100]
    pub fn advance(&mut self) -> u8 {
        CongruentialGenerator::advance(self)
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn parameters(&self) -> &ValidatedParameters {
        &self.params
    }
}

impl CongruentialGenerator for QcgEngine {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Qcg
    }

    fn parameters(&self) -> &ValidatedParameters {
        QcgEngine::parameters(self)
    }

    fn current(&self) -> u64 {
        QcgEngine::current(self)
    }

    fn advance_raw(&mut self) -> u64 {
        QcgEngine::advance_raw(self)
    }
}

impl Iterator for QcgEngine {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.advance())
    }
}

/// Validate the parameters and build a [`QcgEngine`]
pub fn make_qcg(
    seed: i64,
    multiplier: i64,
    increment: i64,
    modulus: i64,
) -> Result<QcgEngine, ValidationError> {
    QcgEngine::new(GeneratorParameters::new(seed, multiplier, increment, modulus))
}
