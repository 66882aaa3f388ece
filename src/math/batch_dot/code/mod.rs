//! Batched dot product implementations.
//!
//! All variants share one signature so they can be listed, verified and
//! benchmarked side by side.

mod plain;
mod shape;
mod unrolled;

pub use plain::batch_dot_plain;
pub use shape::BatchShape;
pub use unrolled::{batch_dot_scalar_lanes, batch_dot_simd, batch_dot_unrolled};

use crate::error::DotError;
use crate::simd::{F32x4, NativeLanes};
use crate::utils::VariantInfo;

/// Type alias for the batched dot product function signature
pub type BatchDotFn =
    fn(Option<&[f32]>, Option<&[f32]>, Option<&mut [f32]>, BatchShape) -> Result<(), DotError>;

/// Get all available variants for the current target.
///
/// The first entry, `plain`, is the reference the others are checked
/// against. The lane variants require `vector_length % 4 == 0`.
pub fn available_variants() -> Vec<VariantInfo<BatchDotFn>> {
    vec![
        VariantInfo {
            name: "plain",
            description: "Serial sequential accumulation, no SIMD",
            function: batch_dot_plain,
        },
        VariantInfo {
            name: "scalar-lanes",
            description: "4x pair / 16x stride unrolling on the portable Float4 backend",
            function: batch_dot_scalar_lanes,
        },
        VariantInfo {
            name: NativeLanes::NAME,
            description: "4x pair / 16x stride unrolling on the native SIMD backend",
            function: batch_dot_simd,
        },
    ]
}
