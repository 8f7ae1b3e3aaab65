use crate::config::{FilterConfig, FilterConfigBuilder, FilterParams};
use crate::error::{FilterError, Result};
use crate::hash::probe_indices;
use bitvec::{bitvec, order::Lsb0, vec::BitVec};
use std::fmt;
use tracing::debug;

/// A fixed-size Bloom filter over a seeded Murmur3 hash.
///
/// The bit vector is allocated once at construction and only ever mutated
/// by setting bits; there is no clear, delete, or resize. Inserting more
/// elements than the configured capacity silently degrades the false
/// positive rate above the target; the filter does not detect overload.
pub struct BloomFilter {
    config: FilterConfig,
    params: FilterParams,
    bits: BitVec<usize, Lsb0>,
    insert_count: usize,
}

impl BloomFilter {
    /// Creates a filter from a validated configuration. This is the only
    /// fallible operation on the type.
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;

        let params = FilterParams::from(&config);
        debug!(
            capacity = config.capacity,
            false_positive_rate = config.false_positive_rate,
            bit_vector_size = params.bit_vector_size,
            num_hashes = params.num_hashes,
            "derived bloom filter parameters"
        );
        let bits = bitvec![0; params.bit_vector_size];

        Ok(Self {
            config,
            params,
            bits,
            insert_count: 0,
        })
    }

    /// Shorthand constructor for the common case of explicit sizing.
    pub fn with_params(
        capacity: usize,
        false_positive_rate: f64,
        seed: u32,
    ) -> Result<Self> {
        let config = FilterConfigBuilder::default()
            .capacity(capacity)
            .false_positive_rate(false_positive_rate)
            .seed(seed)
            .build()
            .map_err(|e| FilterError::InvalidConfig(e.to_string()))?;
        Self::new(config)
    }

    /// Inserts an item. Infallible and idempotent: re-inserting a key sets
    /// no new bits.
    pub fn insert(&mut self, item: &[u8]) {
        let indices = probe_indices(
            item,
            self.config.seed,
            self.params.num_hashes,
            self.params.bit_vector_size,
        );
        for idx in indices {
            self.bits.set(idx, true);
        }
        self.insert_count += 1;
    }

    /// Checks whether an item might have been inserted.
    ///
    /// Returns `false` only when at least one probe bit is unset, which is
    /// impossible for a previously inserted key: there are no false
    /// negatives. A `true` answer may be a false positive, with probability
    /// near the configured rate at design load.
    pub fn contains(&self, item: &[u8]) -> bool {
        let indices = probe_indices(
            item,
            self.config.seed,
            self.params.num_hashes,
            self.params.bit_vector_size,
        );
        for idx in indices {
            if !self.bits[idx] {
                return false;
            }
        }
        true
    }

    /// UTF-8 string convenience over [`BloomFilter::insert`].
    pub fn insert_str(&mut self, key: &str) {
        self.insert(key.as_bytes());
    }

    /// UTF-8 string convenience over [`BloomFilter::contains`].
    pub fn contains_str(&self, key: &str) -> bool {
        self.contains(key.as_bytes())
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn false_positive_rate(&self) -> f64 {
        self.config.false_positive_rate
    }

    pub fn seed(&self) -> u32 {
        self.config.seed
    }

    pub fn bit_vector_size(&self) -> usize {
        self.params.bit_vector_size
    }

    pub fn num_hashes(&self) -> usize {
        self.params.num_hashes
    }

    /// Number of `insert` calls so far (counts repeats, not distinct keys).
    pub fn insert_count(&self) -> usize {
        self.insert_count
    }

    /// Number of set bits in the bit vector.
    pub fn set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of the bit vector currently set, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        self.set_bits() as f64 / self.params.bit_vector_size as f64
    }

    /// Estimated false positive rate at the current fill: the probability
    /// that all `num_hashes` probes of an absent key land on set bits.
    pub fn estimated_current_fpr(&self) -> f64 {
        self.fill_ratio().powi(self.params.num_hashes as i32)
    }

    /// Bits allocated per element of configured capacity.
    pub fn bits_per_item(&self) -> f64 {
        self.params.bit_vector_size as f64 / self.config.capacity as f64
    }

    /// Approximate heap footprint of the bit vector in bytes.
    pub fn approx_memory_bytes(&self) -> usize {
        self.params.bit_vector_size.div_ceil(8)
    }
}

// Summarizes the filter instead of dumping the bit vector.
impl fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("capacity", &self.config.capacity)
            .field("false_positive_rate", &self.config.false_positive_rate)
            .field("seed", &self.config.seed)
            .field("bit_vector_size", &self.params.bit_vector_size)
            .field("num_hashes", &self.params.num_hashes)
            .field("insert_count", &self.insert_count)
            .field("set_bits", &self.set_bits())
            .finish()
    }
}
