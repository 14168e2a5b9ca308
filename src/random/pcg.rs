//! Stateless PCG step over a 128-bit state held as two 64-bit words
//!
//! One call advances the state by a single 128-bit linear-congruential step
//! and permutes the result with the XSL-RR output function. There is no
//! generator object: callers thread the `(high, low)` pair themselves, or
//! derive it from coordinates for position-addressable sampling.

const MUL_HIGH: u64 = 0x2360_ed05_1fc6_5da4;
const MUL_LOW: u64 = 0x4385_df64_9fcc_f645;

const INC_HIGH: u64 = 0x5851_f42d_4c95_7f2d;
const INC_LOW: u64 = 0x1405_7b7e_f767_814f;

/// Advance the state pair one step and produce a 64-bit output
///
/// Identical inputs always yield identical results; the returned pair feeds
/// the next call. All arithmetic wraps, matching the reference PCG sequence
/// bit-for-bit.
#[must_use]
pub const fn next(high: u64, low: u64) -> (u64, u64, u64) {
    let (high, low) = multiply(high, low);
    let (high, low) = add(high, low);
    (rotate(high, low), high, low)
}

// 128-bit multiply by the fixed odd multiplier, keeping the low 128 bits
const fn multiply(high: u64, low: u64) -> (u64, u64) {
    let wide = (low as u128) * (MUL_LOW as u128);
    let carry = (wide >> 64) as u64;
    let new_low = wide as u64;
    let new_high = carry
        .wrapping_add(high.wrapping_mul(MUL_LOW))
        .wrapping_add(low.wrapping_mul(MUL_HIGH));
    (new_high, new_low)
}

// 128-bit add of the fixed increment, propagating the low-word carry
const fn add(high: u64, low: u64) -> (u64, u64) {
    let (new_low, overflow) = low.overflowing_add(INC_LOW);
    let new_high = high.wrapping_add(INC_HIGH).wrapping_add(overflow as u64);
    (new_high, new_low)
}

// XSL-RR output permutation: xor-fold the halves, rotate by the top bits
const fn rotate(high: u64, low: u64) -> u64 {
    (high ^ low).rotate_right((high >> 58) as u32)
}
