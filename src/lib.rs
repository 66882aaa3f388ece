//! # batch-dot
//!
//! Batched `f32` dot products over packed vector buffers, with a 4-lane
//! SIMD kernel and the plain serial routine it is checked against.
//!
//! Every kernel is registered as an algorithm with named variants so the
//! `batch-dot` binary can verify and time them side by side.

pub mod error;
pub mod ffi;
pub mod math;
pub mod registry;
pub mod simd;
pub mod utils;

pub use error::{BufferRole, DotError};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{BufferRole, DotError};
    pub use crate::math::batch_dot::{
        batch_dot_plain, batch_dot_scalar_lanes, batch_dot_simd, batch_dot_unrolled, BatchShape,
    };
    pub use crate::math::dot_product::{
        dot_product_lanes, dot_product_original, dot_product_scalar_lanes, dot_product_simd,
    };
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::simd::{F32x4, Float4, NativeLanes};
}
