//! Performance benchmarks for the smoothstep and the fragmentation blend
//!
//! # What We're Measuring
//!
//! 1. **Smoothstep on data**: element-wise evaluation through
//!    `PhysicalData::map`, sequential below the parallel threshold.
//! 2. **Full blend**: snow line search + interpolation + smoothstep +
//!    power, i.e. one call per host-simulation step.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench smoothstep_performance
//!
//! # With rayon above the threshold
//! cargo bench --bench smoothstep_performance --features parallel
//! ```
//!
//! The blend is dominated by the element-wise pass: the snow line search is
//! a single linear scan.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use snowline_rs::constants::AU;
use snowline_rs::models::smoothstep::smoothstep_data;
use snowline_rs::models::SmoothFragmentationVelocity;
use snowline_rs::physics::{PhysicalData, PhysicalModel, PhysicalState};

const GRID_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

fn power_law_disk(cells: usize) -> PhysicalState {
    let radius: Vec<f64> = (0..cells)
        .map(|i| (0.1 + 50.0 * i as f64 / cells as f64) * AU)
        .collect();
    let temperature: Vec<f64> = radius.iter().map(|r| 280.0 * (r / AU).powf(-0.5)).collect();
    PhysicalState::disk(radius, temperature)
}

fn benchmark_smoothstep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Smoothstep");

    for &cells in GRID_SIZES.iter() {
        let offsets = PhysicalData::from_vec(
            (0..cells).map(|i| (i as f64 / cells as f64 - 0.5) * 10.0 * AU).collect(),
        );

        group.throughput(Throughput::Elements(cells as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cells), &offsets, |b, offsets| {
            b.iter(|| smoothstep_data(black_box(offsets), black_box(0.25 * AU)))
        });
    }

    group.finish();
}

fn benchmark_fragmentation_velocity(c: &mut Criterion) {
    let mut group = c.benchmark_group("Smoothed fragmentation velocity");
    let model = SmoothFragmentationVelocity::default();

    for &cells in GRID_SIZES.iter() {
        let state = power_law_disk(cells);

        group.throughput(Throughput::Elements(cells as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cells), &state, |b, state| {
            b.iter(|| model.compute_physics(black_box(state)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_smoothstep, benchmark_fragmentation_velocity);
criterion_main!(benches);
