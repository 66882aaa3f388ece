//! Single dot product implementations.
//!
//! This module contains all implementation variants of the single dot product.

mod lanes;
mod original;

pub use lanes::{dot_product_lanes, dot_product_scalar_lanes, dot_product_simd};
pub use original::dot_product_original;

use crate::error::DotError;
use crate::simd::{F32x4, NativeLanes};
use crate::utils::VariantInfo;

/// Type alias for the single dot product function signature
pub type DotProductFn = fn(&[f32], &[f32]) -> Result<f32, DotError>;

/// Get all available variants for the current target
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Sequential left-to-right accumulation",
            function: dot_product_original,
        },
        VariantInfo {
            name: "scalar-lanes",
            description: "4-wide strides on the portable Float4 backend",
            function: dot_product_scalar_lanes,
        },
        VariantInfo {
            name: NativeLanes::NAME,
            description: "4-wide strides on the native SIMD backend",
            function: dot_product_simd,
        },
    ]
}
