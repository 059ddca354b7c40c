//! Modular arithmetic on 64-bit operands
//!
//! Every product is formed in 128 bits before reduction, so no operation in
//! this module can silently wrap. Callers pass a modulus greater than zero.

/// Greatest common divisor by Euclid's algorithm
///
/// # Example
/// ```
/// use congruential_rng_core::core::gcd;
///
/// assert_eq!(gcd(4, 8), 4);
/// assert_eq!(gcd(1103515245, 2_147_483_647), 1);
/// ```
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Compute `(a * b) mod m` without overflow
///
/// # Panics
/// Panics if `m` is zero.
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    assert!(m > 0, "modulus must be positive");
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Compute `base^exp mod m` by square-and-multiply
///
/// `pow_mod(x, 0, 1)` is 0, since every value is congruent to 0 modulo 1.
///
/// # Panics
/// Panics if `m` is zero.
///
/// # Example
/// ```
/// use congruential_rng_core::core::pow_mod;
///
/// assert_eq!(pow_mod(3, 4, 5), 1); // 81 mod 5
/// assert_eq!(pow_mod(7, 0, 1), 0);
/// ```
pub fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    assert!(m > 0, "modulus must be positive");
    let mut result = 1 % m;
    let mut base = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Euler's criterion: `a^((m-1)/2) mod m`
///
/// For an odd prime `m` this is 1 when `a` is a quadratic residue and
/// `m - 1` when it is not.
pub fn legendre(a: u64, m: u64) -> u64 {
    pow_mod(a, (m - 1) / 2, m)
}
