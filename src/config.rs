use crate::error::{FilterError, Result};
use crate::hash::{optimal_bit_vector_size, optimal_num_hashes};
use derive_builder::Builder;

/// Configuration for a Bloom filter.
#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned")]
pub struct FilterConfig {
    /// Expected number of elements the filter is sized for
    #[builder(default = "1_000_000")]
    pub capacity: usize,

    /// Target false positive rate, strictly between 0 and 1
    #[builder(default = "0.01")]
    pub false_positive_rate: f64,

    /// Base hash seed; probe i re-seeds the hash with `seed + i`
    #[builder(default = "0")]
    pub seed: u32,
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(FilterError::ZeroCapacity);
        }
        // Negated range check so NaN is rejected as well.
        if !(self.false_positive_rate > 0.0 && self.false_positive_rate < 1.0)
        {
            return Err(FilterError::InvalidFalsePositiveRate {
                rate: self.false_positive_rate,
            });
        }
        Ok(())
    }
}

/// Parameters derived once from a [`FilterConfig`] at construction time.
#[derive(Debug, Clone)]
pub struct FilterParams {
    pub bit_vector_size: usize,
    pub num_hashes: usize,
}

impl From<&FilterConfig> for FilterParams {
    fn from(config: &FilterConfig) -> Self {
        let bit_vector_size = optimal_bit_vector_size(
            config.capacity,
            config.false_positive_rate,
        );
        let num_hashes =
            optimal_num_hashes(config.capacity, bit_vector_size);

        Self {
            bit_vector_size,
            num_hashes,
        }
    }
}
