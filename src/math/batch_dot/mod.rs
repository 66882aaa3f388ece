//! # Batched Dot Product
//!
//! Computes `results[i] = dot(a_i, b_i)` for `num_pairs` vector pairs packed
//! back to back in two flat buffers.
//!
//! ## Variants
//!
//! - **plain**: one sequential accumulator per pair; accepts any vector
//!   length and is the reference for everything else
//! - **unrolled** (per lane backend): four pairs in flight with independent
//!   accumulators, 16 floats per inner step, 4-float remainder, single-pair
//!   tail for the last 1-3 pairs
//!
//! Both treat an absent buffer as a silent no-op. The unrolled variants
//! reject vector lengths that are not a multiple of four instead of reading
//! past the end of a vector.

pub mod bench;
pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

/// Shapes every variant is verified on: empty, single, exact groups of
/// four, one/two/three-pair tails, and vectors that exercise the 16-wide
/// block, the 4-wide remainder, or both.
const VERIFY_SHAPES: [(usize, usize); 8] = [
    (4, 0),
    (4, 1),
    (4, 5),
    (16, 4),
    (20, 6),
    (36, 7),
    (128, 9),
    (252, 3),
];

/// Runner for the batched dot product
pub struct BatchDotRunner;

impl AlgorithmRunner for BatchDotRunner {
    fn name(&self) -> &'static str {
        "batch_dot_product"
    }

    fn description(&self) -> &'static str {
        "Dot products of packed vector pairs, 4x pair / 16x stride unrolled"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn size_label(&self) -> &'static str {
        "Pairs of 128"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = StdRng::seed_from_u64(0xba7c);
        let variants = code::available_variants();
        let reference = variants
            .iter()
            .find(|v| v.name == "plain")
            .ok_or("No 'plain' variant found for reference")?;

        for (vector_length, num_pairs) in VERIFY_SHAPES {
            let shape = BatchShape::new(vector_length, num_pairs);
            let len = vector_length * num_pairs;
            let a: Vec<f32> = (0..len).map(|_| rng.random_range(-1.0..1.0)).collect();
            let b: Vec<f32> = (0..len).map(|_| rng.random_range(-1.0..1.0)).collect();

            let mut expected = vec![0.0f32; num_pairs];
            (reference.function)(Some(&a[..]), Some(&b[..]), Some(&mut expected[..]), shape)
                .map_err(|e| e.to_string())?;

            for variant in &variants {
                if variant.name == reference.name {
                    continue;
                }

                let mut results = vec![f32::NAN; num_pairs];
                (variant.function)(Some(&a[..]), Some(&b[..]), Some(&mut results[..]), shape).map_err(
                    |e| format!("Variant '{}' rejected {:?}: {}", variant.name, shape, e),
                )?;

                for (i, (&got, &want)) in results.iter().zip(&expected).enumerate() {
                    let diff = (got - want).abs();
                    if diff.is_nan() || diff > 1e-4 * want.abs().max(1.0) {
                        return Err(format!(
                            "Variant '{}' failed verification on {:?} at pair {}. Expected {}, got {}, diff {}",
                            variant.name, shape, i, want, got, diff
                        ));
                    }
                }
            }
            tracing::trace!(?shape, "batch shape verified");
        }

        tracing::debug!(variants = variants.len(), "batch_dot_product verified");
        Ok(())
    }
}
