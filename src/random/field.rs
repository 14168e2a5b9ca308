//! Infinite pattern fields colored by position-addressable randomness
//!
//! Both fields derive every pixel from a single PCG step seeded with the
//! coordinates, so sampling needs no shared generator and no locking. The
//! seed words mix coordinates by XOR rather than addition, keeping carries
//! from leaking between neighboring positions.

use crate::random::pcg;
use crate::spatial::rect::Rect;
use crate::spatial::source::PixelSource;
use image::Rgba;

const fn color_from(n: u64) -> Rgba<u8> {
    Rgba([n as u8, (n >> 8) as u8, (n >> 16) as u8, 255])
}

/// An unbounded field of deterministic random colors
///
/// Two fields with the same seed agree on every coordinate, and repeated
/// sampling of one coordinate always returns the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomField {
    seed: u64,
}

impl RandomField {
    /// Create a field from a seed
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PixelSource for RandomField {
    fn bounds(&self) -> Rect {
        Rect::boundless()
    }

    fn color_at(&self, x: i64, y: i64) -> Rgba<u8> {
        let (n, _, _) = pcg::next((x as u64) ^ self.seed, (y as u64) ^ self.seed);
        color_from(n)
    }
}

/// A [`RandomField`] variant that is symmetric across the main diagonal
///
/// Both seed words collapse to `x ^ y ^ seed`, so `color_at(a, b)` equals
/// `color_at(b, a)` everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetricField {
    seed: u64,
}

impl SymmetricField {
    /// Create a symmetric field from a seed
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PixelSource for SymmetricField {
    fn bounds(&self) -> Rect {
        Rect::boundless()
    }

    fn color_at(&self, x: i64, y: i64) -> Rgba<u8> {
        let word = (x as u64) ^ (y as u64) ^ self.seed;
        let (n, _, _) = pcg::next(word, word);
        color_from(n)
    }
}
