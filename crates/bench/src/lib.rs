use std::ops::{RangeInclusive, RangeTo};
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const SMALL_INPUT_MAX: usize = 4_096;
const MEDIUM_INPUT_MAX: usize = 65_536;
const RNG_SEED: u64 = 0x5EED_2026;

fn apply_runtime_config<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    sample_size: usize,
    warm_up_ms: u64,
    measure_ms: u64,
) {
    group.sample_size(sample_size);
    group.warm_up_time(Duration::from_millis(warm_up_ms));
    group.measurement_time(Duration::from_millis(measure_ms));
}

/// Picks a sample/warm-up/measurement preset from the input length `n`.
pub fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, n: usize) {
    if n <= SMALL_INPUT_MAX {
        apply_runtime_config(
            group,
            SMALL_RUNTIME_SAMPLE_SIZE,
            SMALL_RUNTIME_WARM_UP_MS,
            SMALL_RUNTIME_MEASURE_MS,
        );
    } else if n <= MEDIUM_INPUT_MAX {
        apply_runtime_config(
            group,
            MEDIUM_RUNTIME_SAMPLE_SIZE,
            MEDIUM_RUNTIME_WARM_UP_MS,
            MEDIUM_RUNTIME_MEASURE_MS,
        );
    } else {
        apply_runtime_config(
            group,
            LARGE_RUNTIME_SAMPLE_SIZE,
            LARGE_RUNTIME_WARM_UP_MS,
            LARGE_RUNTIME_MEASURE_MS,
        );
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}

/// Non-empty inclusive ranges `(l, r)` with `r < bound.end`.
pub fn random_inclusive_ranges<R: Rng + ?Sized>(
    rng: &mut R,
    bound: RangeTo<usize>,
    count: usize,
) -> Vec<(usize, usize)> {
    assert!(bound.end > 0, "cannot draw ranges from an empty sequence");
    (0..count)
        .map(|_| {
            let l = rng.random_range(0..bound.end);
            let r = rng.random_range(l..bound.end);
            (l, r)
        })
        .collect()
}
