//! Criterion benchmarks for the tier converter.
//!
//! Two benchmark groups:
//! - `canonical`: inventories of base-3 digits, target one tier above
//! - `deep_targets`: empty inventories against targets whose unit value is
//!   far past 64 bits

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use num_bigint::BigUint;
use tierforge_core::{Inventory, Tier, compute};

// ===========================================================================
// Inventory builders
// ===========================================================================

/// Inventory of `tiers` slots cycling through 1, 2, 0.
fn digit_inventory(tiers: usize) -> Inventory {
    Inventory::new((0..tiers).map(|i| BigUint::from(((i + 1) % 3) as u32)).collect())
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical");
    group.sample_size(50);

    for tiers in [6, 64, 512] {
        let inventory = digit_inventory(tiers);
        let target = Tier::after(inventory.len());

        group.bench_function(format!("{tiers}_tiers"), |b| {
            b.iter(|| compute(black_box(target), black_box(&inventory)));
        });
    }

    group.finish();
}

fn bench_deep_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_targets");
    group.sample_size(30);

    let empty = Inventory::default();
    for level in [100u32, 1_000, 5_000] {
        let Ok(target) = Tier::new(level) else {
            continue;
        };

        group.bench_function(format!("tier_{level}"), |b| {
            b.iter(|| compute(black_box(target), black_box(&empty)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_canonical, bench_deep_targets);
criterion_main!(benches);
