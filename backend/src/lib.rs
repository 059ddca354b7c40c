//! Congruential RNG Core
//!
//! Deterministic pseudo-random integers in [0, 100] from linear and
//! quadratic congruential recurrences.
//!
//! # Architecture
//!
//! - **core**: Modular arithmetic (gcd, 128-bit mulmod, modpow, Euler's criterion)
//! - **models**: Parameter records
//! - **validation**: Number-theoretic preconditions, checked before construction
//! - **rng**: LCG and QCG engines plus the [0, 100] normaliser
//!
//! # Critical Invariants
//!
//! 1. Invalid parameters never produce an engine
//! 2. Same parameters → same sequence
//! 3. Every output lies in [0, 100]; `advance()` cannot fail
//!
//! # Example
//! ```
//! use congruential_rng_core::{make_lcg, make_qcg};
//!
//! let lcg: Vec<u8> = make_lcg(1234, 1103515245, 12348, (1 << 31) - 1)?
//!     .take(5)
//!     .collect();
//! assert_eq!(lcg, vec![11, 45, 79, 91, 92]);
//!
//! let mut qcg = make_qcg(123456789, 9301, 49297, 281_474_976_710_597)?;
//! assert_eq!(qcg.advance(), 53);
//! # Ok::<(), congruential_rng_core::ValidationError>(())
//! ```

// Module declarations
pub mod core;
pub mod models;
pub mod rng;
pub mod validation;

// Re-exports for convenience
pub use models::{GeneratorKind, GeneratorParameters, ValidatedParameters};
pub use rng::{
    make_generator, make_lcg, make_qcg, normalize, CongruentialGenerator, LcgEngine, QcgEngine,
    PERCENT_SCALE,
};
pub use validation::{collect_violations, validate, validate_lcg, validate_qcg, ValidationError};
