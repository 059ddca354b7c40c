//! Mapping raw modular values onto [0, 100]

/// Upper bound of every normalised output
pub const PERCENT_SCALE: u64 = 100;

/// Scale `raw` in `[0, modulus)` to an integer in `[0, 100]`
///
/// Computes `round((raw / modulus) * 100)` in double precision, rounding
/// halfway cases to the nearest even integer. The quotient is the correctly
/// rounded `f64` of the exact ratio, even when either operand exceeds 2^53.
///
/// # Example
/// ```
/// use congruential_rng_core::normalize;
///
/// assert_eq!(normalize(0, 16), 0);
/// assert_eq!(normalize(8, 16), 50);
/// assert_eq!(normalize(10, 16), 62); // 62.5 rounds to even
/// assert_eq!(normalize(14, 16), 88); // 87.5 rounds to even
/// ```
pub fn normalize(raw: u64, modulus: u64) -> u8 {
    debug_assert!(modulus > 0, "modulus must be positive");
    let scaled = ratio(raw, modulus) * PERCENT_SCALE as f64;
    scaled.round_ties_even().clamp(0.0, PERCENT_SCALE as f64) as u8
}

/// Correctly rounded `f64` of `raw / modulus`
///
/// `raw as f64 / modulus as f64` rounds each operand to 53 bits first, which
/// can move the quotient by an ulp once the operands pass 2^53. Instead the
/// quotient is taken in 128-bit integer arithmetic with at least 64
/// significant bits, a nonzero remainder is folded into bit 0 as a sticky
/// bit, and the single `u128 -> f64` conversion performs the only rounding.
fn ratio(raw: u64, modulus: u64) -> f64 {
    if raw == 0 {
        return 0.0;
    }
    // Shift so the dividend's top bit is bit 127; the quotient then has >= 64 bits
    let k = raw.leading_zeros() + 64;
    let dividend = (raw as u128) << k;
    let mut quotient = dividend / modulus as u128;
    if dividend % modulus as u128 != 0 {
        quotient |= 1;
    }
    // 2^-k exactly; k <= 127 keeps it a normal f64
    let scale = f64::from_bits((1023 - k as u64) << 52);
    quotient as f64 * scale
}
