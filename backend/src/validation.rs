//! Parameter validation
//!
//! Preconditions checked before any generator is built, in this order:
//! - seed and multiplier are strictly positive
//! - modulus is strictly positive, then increment is non-negative
//!   (QCG checks the increment first)
//! - gcd(multiplier, modulus) == 1
//! - QCG only: multiplier^((modulus-1)/2) mod modulus == 1

use crate::core::arith::{gcd, legendre};
use crate::models::params::{GeneratorKind, GeneratorParameters, ValidatedParameters};
use thiserror::Error;

/// Validation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{parameter} must be positive (got {value})")]
    NonPositive { parameter: &'static str, value: i64 },

    #[error("increment must be non-negative (got {0})")]
    NegativeIncrement(i64),

    #[error("multiplier {multiplier} not coprime with modulus {modulus} (gcd {gcd})")]
    NotCoprime {
        multiplier: u64,
        modulus: u64,
        gcd: u64,
    },

    #[error("quadratic residue requirement not satisfied: legendre({multiplier}, {modulus}) = {legendre}")]
    QuadraticNonResidue {
        multiplier: u64,
        modulus: u64,
        legendre: u64,
    },
}

/// Validate `params` for the recurrence `kind`
///
/// Stops at the first violated precondition. On success returns the unsigned
/// form the engines run on.
///
/// # Example
/// ```
/// use congruential_rng_core::{validate, GeneratorKind, GeneratorParameters, ValidationError};
///
/// let params = GeneratorParameters::new(1, 4, 0, 8);
/// assert!(matches!(
///     validate(&params, GeneratorKind::Lcg),
///     Err(ValidationError::NotCoprime { gcd: 4, .. })
/// ));
/// ```
pub fn validate(
    params: &GeneratorParameters,
    kind: GeneratorKind,
) -> Result<ValidatedParameters, ValidationError> {
    let result = check_all(params, kind);
    if let Err(e) = &result {
        log::debug!("rejected {} parameters {:?}: {}", kind, params, e);
    }
    result
}

fn check_all(
    params: &GeneratorParameters,
    kind: GeneratorKind,
) -> Result<ValidatedParameters, ValidationError> {
    let seed = check_positive("seed", params.seed)?;
    let multiplier = check_positive("multiplier", params.multiplier)?;
    // QCG checks the increment before the modulus, LCG after it
    let (increment, modulus) = match kind {
        GeneratorKind::Lcg => {
            let modulus = check_positive("modulus", params.modulus)?;
            (check_non_negative_increment(params.increment)?, modulus)
        }
        GeneratorKind::Qcg => {
            let increment = check_non_negative_increment(params.increment)?;
            (increment, check_positive("modulus", params.modulus)?)
        }
    };

    check_coprime(multiplier, modulus)?;
    if kind == GeneratorKind::Qcg {
        check_quadratic_residue(multiplier, modulus)?;
    }

    Ok(ValidatedParameters::new_unchecked(
        kind, seed, multiplier, increment, modulus,
    ))
}

/// Check LCG preconditions
///
/// ```
/// use congruential_rng_core::validate_lcg;
///
/// assert!(validate_lcg(1234, 1103515245, 12348, 2_147_483_647).is_ok());
/// assert!(validate_lcg(1234, 4, 0, 8).is_err());
/// ```
pub fn validate_lcg(
    seed: i64,
    multiplier: i64,
    increment: i64,
    modulus: i64,
) -> Result<(), ValidationError> {
    let params = GeneratorParameters::new(seed, multiplier, increment, modulus);
    validate(&params, GeneratorKind::Lcg).map(|_| ())
}

/// Check QCG preconditions (LCG checks plus the quadratic residue condition)
pub fn validate_qcg(
    seed: i64,
    multiplier: i64,
    increment: i64,
    modulus: i64,
) -> Result<(), ValidationError> {
    let params = GeneratorParameters::new(seed, multiplier, increment, modulus);
    validate(&params, GeneratorKind::Qcg).map(|_| ())
}

/// Report every violated precondition instead of only the first
///
/// Coprimality needs a positive multiplier and modulus, and the residue
/// check needs coprimality, so a check is skipped when one it depends on
/// already failed. An empty vector means `validate` would succeed.
pub fn collect_violations(
    params: &GeneratorParameters,
    kind: GeneratorKind,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let _seed = record(&mut errors, check_positive("seed", params.seed));
    let multiplier = record(&mut errors, check_positive("multiplier", params.multiplier));
    let modulus = match kind {
        GeneratorKind::Lcg => {
            let modulus = record(&mut errors, check_positive("modulus", params.modulus));
            record(&mut errors, check_non_negative_increment(params.increment));
            modulus
        }
        GeneratorKind::Qcg => {
            record(&mut errors, check_non_negative_increment(params.increment));
            record(&mut errors, check_positive("modulus", params.modulus))
        }
    };

    if let (Some(multiplier), Some(modulus)) = (multiplier, modulus) {
        let coprime = record(&mut errors, check_coprime(multiplier, modulus));
        if coprime.is_some() && kind == GeneratorKind::Qcg {
            record(&mut errors, check_quadratic_residue(multiplier, modulus));
        }
    }

    errors
}

fn record<T>(errors: &mut Vec<ValidationError>, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn check_positive(parameter: &'static str, value: i64) -> Result<u64, ValidationError> {
    if value > 0 {
        Ok(value as u64)
    } else {
        Err(ValidationError::NonPositive { parameter, value })
    }
}

fn check_non_negative_increment(value: i64) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| ValidationError::NegativeIncrement(value))
}

fn check_coprime(multiplier: u64, modulus: u64) -> Result<(), ValidationError> {
    let gcd = gcd(multiplier, modulus);
    if gcd == 1 {
        Ok(())
    } else {
        Err(ValidationError::NotCoprime {
            multiplier,
            modulus,
            gcd,
        })
    }
}

fn check_quadratic_residue(multiplier: u64, modulus: u64) -> Result<(), ValidationError> {
    let legendre = legendre(multiplier, modulus);
    if legendre == 1 {
        Ok(())
    } else {
        Err(ValidationError::QuadraticNonResidue {
            multiplier,
            modulus,
            legendre,
        })
    }
}
