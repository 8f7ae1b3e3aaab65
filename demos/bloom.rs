#![allow(clippy::uninlined_format_args)]
use seeded_bloom_rs::{BloomFilter, FilterConfigBuilder};
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🌸 Bloom Filter Basic Example");
    println!("==============================");

    basic_workflow_example()?;
    false_positive_rate_example()?;
    overload_example()?;

    Ok(())
}

fn basic_workflow_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n📝 Basic Workflow Example");
    println!("---------------------------");

    let config = FilterConfigBuilder::default()
        .capacity(1_000_000)
        .false_positive_rate(0.01) // 1%
        .seed(42)
        .build()?;

    let mut filter = BloomFilter::new(config)?;

    println!("Created bloom filter:");
    println!("  Capacity: {}", filter.capacity());
    println!("  Target FPR: {:.2}%", filter.false_positive_rate() * 100.0);
    println!("  Bit vector size: {} bits", filter.bit_vector_size());
    println!("  Memory: {} bytes", filter.approx_memory_bytes());
    println!("  Bits per item: {:.2}", filter.bits_per_item());
    println!("  Hash functions: {}", filter.num_hashes());

    let items = vec!["apple", "banana", "cherry", "date", "elderberry"];

    for item in &items {
        filter.insert_str(item);
        println!("  ✅ Inserted: {}", item);
    }

    println!("\nQuerying items:");
    for item in &items {
        let exists = filter.contains_str(item);
        println!("  {} exists: {}", item, if exists { "✅" } else { "❌" });
    }

    let test_items = vec!["grape", "kiwi", "mango"];
    for item in &test_items {
        let exists = filter.contains_str(item);
        println!(
            "  {} exists: {}",
            item,
            if exists {
                "🟡 (false positive?)"
            } else {
                "❌"
            }
        );
    }

    println!("  Elements inserted: {}", filter.insert_count());

    Ok(())
}

fn false_positive_rate_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n📊 False Positive Rate Measurement");
    println!("-----------------------------------");

    let mut filter = BloomFilter::with_params(1_000, 0.05, 42)?;

    // Insert 500 known items (50% capacity)
    let mut inserted_items = HashSet::new();
    for i in 0..500 {
        let item = format!("item_{:04}", i);
        filter.insert(item.as_bytes());
        inserted_items.insert(item);
    }

    println!("Inserted {} items into filter", inserted_items.len());

    // Test for false positives with 1000 never-inserted items
    let mut false_positives = 0;
    let test_count = 1000;

    for i in 1000..1000 + test_count {
        let test_item = format!("test_{:04}", i);
        if filter.contains(test_item.as_bytes())
            && !inserted_items.contains(&test_item)
        {
            false_positives += 1;
        }
    }

    let measured_fpr = false_positives as f64 / test_count as f64;
    let target_fpr = filter.false_positive_rate();

    println!("False positive rate analysis:");
    println!(
        "  Target FPR: {:.4}% ({:.4})",
        target_fpr * 100.0,
        target_fpr
    );
    println!(
        "  Measured FPR: {:.4}% ({:.4})",
        measured_fpr * 100.0,
        measured_fpr
    );
    println!(
        "  Estimated from fill: {:.4}",
        filter.estimated_current_fpr()
    );
    println!(
        "  False positives found: {}/{}",
        false_positives, test_count
    );

    Ok(())
}

fn overload_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n⚠️  Overload Behavior");
    println!("----------------------");

    let mut filter = BloomFilter::with_params(1_000, 0.01, 42)?;

    // Push the filter to 5x its design capacity and watch the estimated
    // false positive rate climb past the target.
    for multiple in 1..=5 {
        for i in 0..1_000 {
            let item = format!("load_{}_{:04}", multiple, i);
            filter.insert(item.as_bytes());
        }
        println!(
            "  {}x capacity: fill {:.1}%, estimated FPR {:.4}",
            multiple,
            filter.fill_ratio() * 100.0,
            filter.estimated_current_fpr()
        );
    }

    println!("  (no false negatives at any load; only more false positives)");

    Ok(())
}
