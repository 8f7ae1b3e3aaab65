//! Murmur3 32-bit hash engine and Bloom filter sizing math.
//!
//! The hash is the statistical foundation the filter rests on: its avalanche
//! and distribution quality decide how close the real false positive rate
//! lands to the theoretical one. The implementation follows the reference
//! Murmur3 x86 32-bit algorithm bit for bit, so output is interoperable with
//! other implementations of the same algorithm.

use std::f64::consts::LN_2;

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;
const R1: u32 = 15;
const R2: u32 = 13;
const M: u32 = 5;
const N: u32 = 0xe654_6b64;
const F1: u32 = 0x85eb_ca6b;
const F2: u32 = 0xc2b2_ae35;

#[inline]
fn mix_block(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(R1).wrapping_mul(C2)
}

/// Computes the Murmur3 32-bit hash of `data` under `seed`.
///
/// Deterministic and total: any byte slice (including an empty one) hashes
/// to a well-defined value. All arithmetic is wrapping; the returned bit
/// pattern matches the reference Murmur3 x86 32-bit implementation exactly.
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut hash = seed;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        hash ^= mix_block(k);
        hash = hash.rotate_left(R2);
        hash = hash.wrapping_mul(M).wrapping_add(N);
    }

    // Trailing 1-3 bytes form a partial little-endian word. They go through
    // the same c1/rotate/c2 transform as a full block but are XORed in
    // without the rotate/scale step; the reference algorithm requires this.
    let tail = blocks.remainder();
    if !tail.is_empty() {
        let mut k1 = 0u32;
        for (i, &byte) in tail.iter().enumerate() {
            k1 |= u32::from(byte) << (8 * i);
        }
        hash ^= mix_block(k1);
    }

    // Finalization: fold in the length, then three avalanche rounds.
    hash ^= data.len() as u32;
    hash ^= hash >> 16;
    hash = hash.wrapping_mul(F1);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(F2);
    hash ^= hash >> 16;

    hash
}

/// String convenience over [`murmur3_32`]. The key is hashed as its UTF-8
/// byte representation, so output matches `murmur3_32(key.as_bytes(), seed)`.
pub fn murmur3_32_str(key: &str, seed: u32) -> u32 {
    murmur3_32(key.as_bytes(), seed)
}

/// Derives the `num_hashes` bit positions for `item` in a bit vector of
/// `capacity` bits.
///
/// The i-th position comes from re-seeding the hash with `seed + i`, which
/// emulates `num_hashes` independent hash functions from a single primitive.
/// Reduction is `hash % capacity`; the slight non-uniformity when capacity
/// does not divide 2^32 is negligible at practical filter sizes.
pub fn probe_indices(
    item: &[u8],
    seed: u32,
    num_hashes: usize,
    capacity: usize,
) -> Vec<usize> {
    (0..num_hashes)
        .map(|i| {
            murmur3_32(item, seed.wrapping_add(i as u32)) as usize % capacity
        })
        .collect()
}

/// Optimal bit vector size for `n` expected elements at target false
/// positive rate `fpr`: `ceil(-n * ln(fpr) / ln(2)^2)`, clamped to at
/// least one bit so a degenerate result can never produce an empty filter.
pub fn optimal_bit_vector_size(n: usize, fpr: f64) -> usize {
    let size = ((-(n as f64) * fpr.ln()) / (LN_2 * LN_2)).ceil() as usize;
    size.max(1)
}

/// Optimal number of hash functions for `n` expected elements in `m` bits:
/// `round((m / n) * ln(2))`, clamped to at least one.
pub fn optimal_num_hashes(n: usize, m: usize) -> usize {
    let k = ((m as f64 / n as f64) * LN_2).round() as usize;
    k.max(1)
}
