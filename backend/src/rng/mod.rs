//! Congruential random number generation
//!
//! Two independent engines share one capability: pull the next integer in
//! [0, 100] from a validated recurrence.
//!
//! - [`LcgEngine`]: `x' = (a*x + c) mod m`
//! - [`QcgEngine`]: `x' = (a*x^2 + c) mod m`
//!
//! Each engine owns its state exclusively. Wrap an engine in a mutex before
//! sharing it across threads.

mod lcg;
pub mod normalize;
mod qcg;

pub use lcg::{make_lcg, LcgEngine};
pub use normalize::{normalize, PERCENT_SCALE};
pub use qcg::{make_qcg, QcgEngine};

use crate::models::params::{GeneratorKind, GeneratorParameters, ValidatedParameters};
use crate::validation::ValidationError;

/// Common interface of the congruential engines
pub trait CongruentialGenerator {
    /// Which recurrence this engine runs
    fn kind(&self) -> GeneratorKind;

    /// Parameters the engine was validated with
    fn parameters(&self) -> &ValidatedParameters;

    /// Last raw value produced (the seed before the first advance)
    fn current(&self) -> u64;

    /// Advance one step and return the raw value in `[0, modulus)`
    fn advance_raw(&mut self) -> u64;

    /// Advance one step and return the value normalised onto [0, 100]
    fn advance(&mut self) -> u8 {
        let raw = self.advance_raw();
        normalize(raw, self.parameters().modulus())
    }
}

/// Build the engine for `kind` after validating `params`
///
/// # Example
/// ```
/// use congruential_rng_core::{make_generator, GeneratorKind, GeneratorParameters};
///
/// let params = GeneratorParameters::new(1234, 1103515245, 12348, 2_147_483_647);
/// let mut rng = make_generator(GeneratorKind::Lcg, params).unwrap();
/// assert_eq!(rng.advance(), 11);
/// ```
pub fn make_generator(
    kind: GeneratorKind,
    params: GeneratorParameters,
) -> Result<Box<dyn CongruentialGenerator>, ValidationError> {
    Ok(match kind {
        GeneratorKind::Lcg => Box::new(LcgEngine::new(params)?),
        GeneratorKind::Qcg => Box::new(QcgEngine::new(params)?),
    })
}
