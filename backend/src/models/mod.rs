//! Parameter records for the congruential generators

pub mod params;

// Re-exports
pub use params::{GeneratorKind, GeneratorParameters, ValidatedParameters};
