//! Tests for deterministic sequences
//!
//! Same parameters MUST produce the same sequence.

use congruential_rng_core::{make_generator, make_lcg, make_qcg, GeneratorKind, GeneratorParameters};

#[test]
fn test_lcg_deterministic() {
    let mut lcg1 = make_lcg(1234, 1103515245, 12348, 2_147_483_647).unwrap();
    let mut lcg2 = make_lcg(1234, 1103515245, 12348, 2_147_483_647).unwrap();

    for _ in 0..1000 {
        assert_eq!(lcg1.advance(), lcg2.advance(), "LCG not deterministic!");
    }
}

#[test]
fn test_qcg_deterministic() {
    let mut qcg1 = make_qcg(123456789, 9301, 49297, 281_474_976_710_597).unwrap();
    let mut qcg2 = make_qcg(123456789, 9301, 49297, 281_474_976_710_597).unwrap();

    for i in 0..1000 {
        let val1 = qcg1.advance_raw();
        let val2 = qcg2.advance_raw();
        assert_eq!(
            val1, val2,
            "Determinism broken at iteration {}: {} != {}",
            i, val1, val2
        );
    }
}

#[test]
fn test_different_seeds_different_sequences() {
    let seq1: Vec<u8> = make_lcg(1234, 1103515245, 12348, 2_147_483_647)
        .unwrap()
        .take(20)
        .collect();
    let seq2: Vec<u8> = make_lcg(4321, 1103515245, 12348, 2_147_483_647)
        .unwrap()
        .take(20)
        .collect();

    assert_ne!(seq1, seq2, "Different seeds should produce different sequences");
}

#[test]
fn test_restart_requires_new_engine() {
    let params = GeneratorParameters::new(1234, 1103515245, 12348, 2_147_483_647);
    let mut engine = make_generator(GeneratorKind::Lcg, params).unwrap();
    let first: Vec<u8> = (0..5).map(|_| engine.advance()).collect();
    let next: Vec<u8> = (0..5).map(|_| engine.advance()).collect();
    assert_ne!(first, next, "engine must continue, not restart");

    let mut fresh = make_generator(GeneratorKind::Lcg, params).unwrap();
    let again: Vec<u8> = (0..5).map(|_| fresh.advance()).collect();
    assert_eq!(first, again);
}

#[test]
fn test_clone_forks_state() {
    let mut original = make_qcg(123456789, 9301, 49297, 281_474_976_710_597).unwrap();
    original.advance();
    let mut fork = original.clone();
    for _ in 0..100 {
        assert_eq!(original.advance(), fork.advance());
    }
}
