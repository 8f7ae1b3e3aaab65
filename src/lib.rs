//! Bloom filter backed by a seeded Murmur3 32-bit hash.
//!
//! A Bloom filter answers "might this key be present?" with no false
//! negatives and a tunable false positive rate, using far less memory
//! than an exact set.
//!
//! HowTo:
//!    * Sizing: from an expected element count `n` and a target false
//!      positive rate `p`, the filter derives the bit vector size
//!      `m = ceil(-n * ln(p) / ln(2)^2)` and the hash function count
//!      `k = max(1, round((m / n) * ln(2)))`, once, at construction.
//!    * Probing: instead of `k` separate hash algorithms, one Murmur3
//!      primitive is re-seeded with `seed + i` for `i in 0..k`, giving `k`
//!      pseudo-independent hash functions from a single implementation.
//!    * Insert sets the `k` probe bits; query returns false on the first
//!      unset probe bit and true only when all `k` are set.
//!
//! Known limitations:
//!     * False positives: a `true` answer is probabilistic; the rate rises
//!       above the target once more than `n` elements are inserted, and the
//!       filter does not detect or warn about overload.
//!     * No deletion or resizing: bits are never cleared, so there is no
//!       remove operation and the filter cannot grow.
//!     * Single-threaded: bit operations are not atomic. Concurrent writers
//!       need external synchronization; Rust's `&mut self` on `insert`
//!       enforces this at compile time.
//!     * Murmur3 is not cryptographic: an adversary who knows the seed can
//!       construct colliding keys.

mod config;
mod error;
mod filter;
pub mod hash;

pub use config::{
    FilterConfig, FilterConfigBuilder, FilterConfigBuilderError, FilterParams,
};
pub use error::{FilterError, Result};
pub use filter::BloomFilter;
pub use hash::{
    murmur3_32, murmur3_32_str, optimal_bit_vector_size, optimal_num_hashes,
};
