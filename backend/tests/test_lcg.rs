//! Tests for the linear congruential engine

use congruential_rng_core::{make_lcg, CongruentialGenerator, GeneratorKind, LcgEngine, GeneratorParameters};

const MODULUS: i64 = (1 << 31) - 1;

#[test]
fn test_reference_sequence() {
    let mut lcg = make_lcg(1234, 1103515245, 12348, MODULUS).unwrap();
    let values: Vec<u8> = (0..10).map(|_| lcg.advance()).collect();
    assert_eq!(values, vec![11, 45, 79, 91, 92, 76, 24, 83, 12, 53]);
}

#[test]
fn test_reference_raw_sequence() {
    let mut lcg = make_lcg(1234, 1103515245, 12348, MODULUS).unwrap();
    assert_eq!(lcg.advance_raw(), 233192480);
    assert_eq!(lcg.advance_raw(), 960363789);
    assert_eq!(lcg.advance_raw(), 1693912635);
    assert_eq!(lcg.current(), 1693912635);
}

#[test]
fn test_small_modulus_rounding() {
    // Raw values 8, 11, 10, 5, 12, 15, 14, 9 over m = 16
    // 10/16 -> 62.5 -> 62, 14/16 -> 87.5 -> 88 (halfway rounds to even)
    let lcg = make_lcg(1, 5, 3, 16).unwrap();
    let values: Vec<u8> = lcg.take(8).collect();
    assert_eq!(values, vec![50, 69, 62, 31, 75, 94, 88, 56]);
}

#[test]
fn test_outputs_within_range() {
    let mut lcg = make_lcg(42, 48271, 0, MODULUS).unwrap();
    for _ in 0..10_000 {
        let v = lcg.advance();
        assert!(v <= 100, "value {} out of range [0, 100]", v);
    }
}

#[test]
fn test_state_below_modulus_after_advance() {
    let mut lcg = make_lcg(1_000_000, 7, 999_999, 97).unwrap();
    assert_eq!(lcg.current(), 1_000_000);
    for _ in 0..200 {
        lcg.advance();
        assert!(lcg.current() < 97);
    }
}

#[test]
fn test_iterator_never_ends() {
    let lcg = make_lcg(3, 5, 1, 64).unwrap();
    assert_eq!(lcg.skip(1000).take(5).count(), 5);
}

#[test]
fn test_trait_object_view() {
    let params = GeneratorParameters::new(1234, 1103515245, 12348, MODULUS);
    let lcg = LcgEngine::new(params).unwrap();
    let generator: &dyn CongruentialGenerator = &lcg;
    assert_eq!(generator.kind(), GeneratorKind::Lcg);
    assert_eq!(generator.current(), 1234);
    assert_eq!(generator.parameters().modulus(), MODULUS as u64);
}

#[test]
fn test_invalid_parameters_produce_no_engine() {
    assert!(LcgEngine::new(GeneratorParameters::new(1, 4, 0, 8)).is_err());
}

#[test]
fn test_modulus_above_f64_mantissa() {
    // a = 1, c = 0: the first raw value is the seed itself
    let mut lcg = make_lcg(33508156010616339, 1, 0, 37439280458789209).unwrap();
    assert_eq!(lcg.advance_raw(), 33508156010616339);

    let mut lcg = make_lcg(33508156010616339, 1, 0, 37439280458789209).unwrap();
    assert_eq!(lcg.advance(), 89);
}
