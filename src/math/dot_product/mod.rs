//! # Single Dot Product
//!
//! `dot(a, b) = Σ(a[i] * b[i])` over one pair of equal-length vectors.
//!
//! The lane variant keeps one 4-wide accumulator and walks the vectors in
//! strides of four, reducing the lanes once at the end. It requires the
//! length to be a multiple of four; the batched kernel reuses the same
//! accumulation pattern for its tail pairs.

pub mod bench;
pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

/// Runner for the single dot product
pub struct DotProductRunner;

impl AlgorithmRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    fn description(&self) -> &'static str {
        "Dot product of one vector pair, lane-strided accumulation"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn size_label(&self) -> &'static str {
        "Vector length"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        // 255 strides of four, large enough for the lane sums to drift
        let size = 1020;
        let a: Vec<f32> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
        let b: Vec<f32> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();

        let variants = code::available_variants();
        let original_variant = variants
            .iter()
            .find(|v| v.name == "original")
            .ok_or("No 'original' variant found for reference")?;

        let expected = (original_variant.function)(&a, &b).map_err(|e| e.to_string())?;

        for variant in &variants {
            if variant.name == "original" {
                continue;
            }

            let result = (variant.function)(&a, &b)
                .map_err(|e| format!("Variant '{}' rejected valid input: {}", variant.name, e))?;
            let diff = (result - expected).abs();

            // Lane-interleaved accumulation changes the low bits
            if diff > 1e-4 * expected.abs().max(1.0) {
                return Err(format!(
                    "Variant '{}' failed verification. Expected {}, got {}, diff {}",
                    variant.name, expected, result, diff
                ));
            }
        }

        tracing::debug!(variants = variants.len(), "dot_product verified");
        Ok(())
    }
}
