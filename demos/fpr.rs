#![allow(clippy::uninlined_format_args)]
//! Measures observed false positive rates against configured targets
//! across a range of filter sizings.
use seeded_bloom_rs::BloomFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 False Positive Rate Sweep");
    println!("=============================");
    println!(
        "{:>10} {:>8} {:>10} {:>6} {:>12} {:>12}",
        "capacity", "target", "bits", "k", "measured", "ratio"
    );

    for capacity in [1_000, 10_000, 100_000] {
        for target in [0.1, 0.01, 0.001] {
            let (measured, filter) = measure_fpr(capacity, target)?;
            println!(
                "{:>10} {:>8} {:>10} {:>6} {:>12.5} {:>11.2}x",
                capacity,
                target,
                filter.bit_vector_size(),
                filter.num_hashes(),
                measured,
                measured / target
            );
        }
    }

    Ok(())
}

fn measure_fpr(
    capacity: usize,
    target: f64,
) -> Result<(f64, BloomFilter), Box<dyn std::error::Error>> {
    let mut filter = BloomFilter::with_params(capacity, target, 42)?;

    // Fill to exactly the design load.
    for i in 0..capacity {
        filter.insert(format!("member_{:08}", i).as_bytes());
    }

    // Probe with keys that were never inserted.
    let probes = 100_000;
    let false_positives = (0..probes)
        .filter(|i| filter.contains(format!("absent_{:08}", i).as_bytes()))
        .count();

    Ok((false_positives as f64 / probes as f64, filter))
}
