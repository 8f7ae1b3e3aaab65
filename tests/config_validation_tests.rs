use seeded_bloom_rs::{
    BloomFilter, FilterConfigBuilder, FilterError, optimal_bit_vector_size,
    optimal_num_hashes,
};

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FilterConfigBuilder::default()
            .build()
            .expect("default config should build");
        assert_eq!(config.capacity, 1_000_000);
        assert_eq!(config.false_positive_rate, 0.01);
        assert_eq!(config.seed, 0);
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_explicit_values() {
        let config = FilterConfigBuilder::default()
            .capacity(1000)
            .false_positive_rate(0.05)
            .seed(42)
            .build()
            .expect("config should build");
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.false_positive_rate, 0.05);
        assert_eq!(config.seed, 42);
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    fn build_filter(capacity: usize, fpr: f64) -> Result<BloomFilter, FilterError> {
        BloomFilter::with_params(capacity, fpr, 42)
    }

    #[test]
    fn test_zero_capacity_rejected() {
        match build_filter(0, 0.01) {
            Err(FilterError::ZeroCapacity) => {}
            other => panic!("expected ZeroCapacity, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_fpr_rejected() {
        for fpr in [0.0, 1.0, 1.5, -0.5, f64::NAN] {
            match build_filter(100, fpr) {
                Err(FilterError::InvalidFalsePositiveRate { rate }) => {
                    if fpr.is_nan() {
                        assert!(rate.is_nan());
                    } else {
                        assert_eq!(rate, fpr);
                    }
                }
                other => {
                    panic!("fpr {fpr} should be rejected, got {other:?}")
                }
            }
        }
    }

    #[test]
    fn test_boundary_adjacent_fpr_accepted() {
        build_filter(100, 0.001).expect("small fpr should be accepted");
        build_filter(100, 0.999).expect("large fpr should be accepted");
    }

    #[test]
    fn test_error_messages() {
        let err = build_filter(0, 0.01).unwrap_err();
        assert_eq!(err.to_string(), "Capacity must be greater than 0");

        let err = build_filter(100, 1.5).unwrap_err();
        assert!(err.to_string().contains("between 0 and 1"));
    }
}

#[cfg(test)]
mod sizing_tests {
    use super::*;

    #[test]
    fn test_textbook_sizing() {
        // Standard worked example: n = 1000, p = 0.01 gives 9586 bits
        // and 7 hash functions.
        let m = optimal_bit_vector_size(1000, 0.01);
        assert_eq!(m, 9586);
        assert_eq!(optimal_num_hashes(1000, m), 7);
    }

    #[test]
    fn test_sizing_scales_with_capacity() {
        let small = optimal_bit_vector_size(1_000, 0.01);
        let large = optimal_bit_vector_size(10_000, 0.01);
        assert!(large > small * 9 && large < small * 11);
    }

    #[test]
    fn test_tighter_fpr_needs_more_bits() {
        assert!(
            optimal_bit_vector_size(1000, 0.001)
                > optimal_bit_vector_size(1000, 0.01)
        );
    }

    #[test]
    fn test_degenerate_sizing_clamped() {
        // A single element at a loose rate still gets at least one bit and
        // one hash function.
        let m = optimal_bit_vector_size(1, 0.99);
        assert!(m >= 1);
        assert!(optimal_num_hashes(1, m) >= 1);
    }

    #[test]
    fn test_derived_params_exposed_on_filter() {
        let filter = BloomFilter::with_params(1000, 0.01, 42)
            .expect("filter should build");
        assert_eq!(filter.bit_vector_size(), 9586);
        assert_eq!(filter.num_hashes(), 7);
        assert_eq!(filter.capacity(), 1000);
        assert_eq!(filter.seed(), 42);
        assert_eq!(filter.false_positive_rate(), 0.01);

        assert_eq!(filter.params().bit_vector_size, 9586);
        assert_eq!(filter.params().num_hashes, 7);
        assert_eq!(filter.config().capacity, 1000);
        assert_eq!(filter.bits_per_item(), 9.586);
        assert_eq!(filter.approx_memory_bytes(), 9586usize.div_ceil(8));
    }
}
