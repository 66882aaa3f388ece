//! Benchmark closures for the single dot product.

use std::hint::black_box;

use super::code::available_variants;
use crate::simd::LANES;
use crate::utils::bench::{measure, SeededRng};
use crate::utils::timer::Variant;

/// Build one timed closure per variant over two random vectors of about
/// `size` floats.
///
/// `size` is rounded down to a multiple of the lane count (minimum one
/// stride) so the lane variants accept the input.
pub fn variant_closures(size: usize, seed: u64) -> Vec<Variant<'static>> {
    let size = (size - size % LANES).max(LANES);
    let mut rng = SeededRng::new(seed);
    let a = rng.f32_buffer(size);
    let b = rng.f32_buffer(size);

    available_variants()
        .into_iter()
        .map(|v| {
            let a = a.clone();
            let b = b.clone();
            let func = v.function;
            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, result) = measure(|| func(black_box(&a), black_box(&b)));
                    (elapsed, black_box(result).ok().map(f64::from))
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_produce_results() {
        for mut variant in variant_closures(30, 5) {
            let (_, result) = (variant.run)();
            assert!(result.is_some(), "variant {} rejected its input", variant.name);
        }
    }
}
