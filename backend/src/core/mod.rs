//! Number-theoretic building blocks shared by the validator and the engines

pub mod arith;

pub use arith::{gcd, legendre, mul_mod, pow_mod};
