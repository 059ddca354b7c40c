//! Tests for the quadratic congruential engine

use congruential_rng_core::core::legendre;
use congruential_rng_core::{make_qcg, QcgEngine, GeneratorParameters, ValidationError};

const MODULUS: i64 = 281_474_976_710_597;

#[test]
fn test_reference_multiplier_is_residue() {
    assert_eq!(legendre(9301, MODULUS as u64), 1);
}

#[test]
fn test_reference_sequence() {
    let mut qcg = make_qcg(123456789, 9301, 49297, MODULUS).unwrap();
    let values: Vec<u8> = (0..10).map(|_| qcg.advance()).collect();
    assert_eq!(values, vec![53, 46, 88, 14, 24, 36, 6, 40, 19, 59]);
}

#[test]
fn test_reference_raw_sequence() {
    // 9301 * 123456789^2 exceeds 64 bits before reduction
    let mut qcg = make_qcg(123456789, 9301, 49297, MODULUS).unwrap();
    assert_eq!(qcg.advance_raw(), 148159973722635);
    assert_eq!(qcg.advance_raw(), 129868803692127);
    assert_eq!(qcg.advance_raw(), 249027289322948);
}

#[test]
fn test_outputs_within_range() {
    let mut qcg = make_qcg(123456789, 9301, 49297, MODULUS).unwrap();
    for _ in 0..10_000 {
        assert!(qcg.advance() <= 100);
        assert!(qcg.current() < MODULUS as u64);
    }
}

#[test]
fn test_non_residue_produces_no_engine() {
    let result = QcgEngine::new(GeneratorParameters::new(1, 2, 0, 11));
    assert!(matches!(
        result,
        Err(ValidationError::QuadraticNonResidue { .. })
    ));
}

#[test]
fn test_seed_beyond_modulus_reduces_first() {
    // seed 24 = 2 (mod 11); (3*4 + 1) mod 11 = 2
    let mut qcg = make_qcg(24, 3, 1, 11).unwrap();
    assert_eq!(qcg.advance_raw(), 2);
}
