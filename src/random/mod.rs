//! Deterministic randomness addressed by position rather than by sequence
//!
//! The generator is a pure function of its input words, so any pixel of a
//! pattern field can be computed independently and in any order. This is what
//! keeps row-parallel rendering free of shared state.

/// Infinite pseudo-random pattern fields
pub mod field;
/// Stateless PCG step with a 128-bit state pair
pub mod pcg;

pub use field::{RandomField, SymmetricField};
