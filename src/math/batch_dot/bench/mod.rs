//! Benchmark closures for the batched dot product.

use std::hint::black_box;

use super::code::{available_variants, BatchShape};
use crate::utils::bench::{measure, SeededRng};
use crate::utils::timer::Variant;

/// Floats per vector in benchmark batches. A multiple of 16, so the
/// unrolled variants never leave the 16-wide inner loop.
pub const BENCH_VECTOR_LENGTH: usize = 128;

/// Build one timed closure per variant over a batch of `num_pairs` random
/// pairs of [`BENCH_VECTOR_LENGTH`] floats.
///
/// Each closure reports the sum of its results as the sample value.
pub fn variant_closures(num_pairs: usize, seed: u64) -> Vec<Variant<'static>> {
    let shape = BatchShape::new(BENCH_VECTOR_LENGTH, num_pairs);
    let mut rng = SeededRng::new(seed);
    let a = rng.f32_buffer(BENCH_VECTOR_LENGTH * num_pairs);
    let b = rng.f32_buffer(BENCH_VECTOR_LENGTH * num_pairs);

    available_variants()
        .into_iter()
        .map(|v| {
            let a = a.clone();
            let b = b.clone();
            let mut results = vec![0.0f32; num_pairs];
            let func = v.function;
            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, status) = measure(|| {
                        func(
                            Some(black_box(a.as_slice())),
                            Some(black_box(b.as_slice())),
                            Some(results.as_mut_slice()),
                            shape,
                        )
                    });
                    let sample = status
                        .ok()
                        .map(|()| black_box(&results).iter().map(|&r| f64::from(r)).sum::<f64>());
                    (elapsed, sample)
                }),
            }
        })
        .collect()
}
