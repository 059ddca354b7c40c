//! Linear congruential generator
//!
//! # Algorithm
//!
//! `x' = (a*x + c) mod m`, then `x'` is normalised onto [0, 100].
//!
//! # Determinism
//!
//! Same parameters → same sequence. The engine cannot be rewound; build a
//! new one from the original parameters to start over.

use crate::core::arith::mul_mod;
use crate::models::params::{GeneratorKind, GeneratorParameters, ValidatedParameters};
use crate::rng::CongruentialGenerator;
use crate::validation::{validate, ValidationError};

/// Linear congruential engine producing integers in [0, 100]
///
/// # Example
/// ```
/// use congruential_rng_core::{GeneratorParameters, LcgEngine};
///
/// let params = GeneratorParameters::new(1234, 1103515245, 12348, 2_147_483_647);
/// let mut lcg = LcgEngine::new(params).unwrap();
/// assert_eq!(lcg.advance(), 11);
/// assert_eq!(lcg.advance(), 45);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcgEngine {
    params: ValidatedParameters,
    /// Last raw value (the seed before the first advance)
    current: u64,
}

impl LcgEngine {
    /// Validate `params` and build an engine positioned at the seed
    pub fn new(params: GeneratorParameters) -> Result<Self, ValidationError> {
        let params = validate(&params, GeneratorKind::Lcg)?;
        log::debug!(
            "LCG ready: seed={} a={} c={} m={}",
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
        let ax = mul_mod(self.params.multiplier(), self.current, m);
        let next = ((ax as u128 + self.params.increment() as u128) % m as u128) as u64;
        self.current = next;
        next
    }

    /// Advance the recurrence and return the next value in [0, 100]
    pub fn advance(&mut self) -> u8 {
        CongruentialGenerator::advance(self)
    }

    /// Current raw state
    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn parameters(&self) -> &ValidatedParameters {
        &self.params
    }
}

impl CongruentialGenerator for LcgEngine {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Lcg
    }

    fn parameters(&self) -> &ValidatedParameters {
        LcgEngine::parameters(self)
    }

    fn current(&self) -> u64 {
        LcgEngine::current(self)
    }

    fn advance_raw(&mut self) -> u64 {
        LcgEngine::advance_raw(self)
    }
}

/// Never exhausts
impl Iterator for LcgEngine {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.advance())
    }
}

/// Validate the parameters and build an [`LcgEngine`]
pub fn make_lcg(
    seed: i64,
    multiplier: i64,
    increment: i64,
    modulus: i64,
) -> Result<LcgEngine, ValidationError> {
    LcgEngine::new(GeneratorParameters::new(seed, multiplier, increment, modulus))
}
