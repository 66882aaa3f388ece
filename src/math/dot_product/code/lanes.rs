//! Lane-based single dot product.
//!
//! One accumulator register, one 4-wide stride per iteration, lanes reduced
//! once at the end. Partial sums are kept per lane, so the result can differ
//! from [`dot_product_original`](super::dot_product_original) in the last
//! bits.

use crate::error::DotError;
use crate::simd::{F32x4, NativeLanes, LANES};

/// Compute the dot product of `a` and `b` with the lane backend `L`.
///
/// # Errors
/// - [`DotError::LengthMismatch`] if the vectors have different lengths
/// - [`DotError::UnalignedVectorLength`] if the length is not a multiple of 4
pub fn dot_product_lanes<L: F32x4>(a: &[f32], b: &[f32]) -> Result<f32, DotError> {
    if a.len() != b.len() {
        return Err(DotError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.len() % LANES != 0 {
        return Err(DotError::UnalignedVectorLength {
            vector_length: a.len(),
            lanes: LANES,
        });
    }

    let mut sum = L::zero();
    for (ca, cb) in a.chunks_exact(LANES).zip(b.chunks_exact(LANES)) {
        sum = sum.accumulate(ca, cb);
    }
    Ok(sum.horizontal_sum())
}

/// [`dot_product_lanes`] on the native backend of the target.
///
/// ```
/// use batch_dot::math::dot_product::dot_product_simd;
///
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let b = [5.0, 6.0, 7.0, 8.0];
/// assert_eq!(dot_product_simd(&a, &b).unwrap(), 70.0);
/// ```
pub fn dot_product_simd(a: &[f32], b: &[f32]) -> Result<f32, DotError> {
    dot_product_lanes::<NativeLanes>(a, b)
}

/// [`dot_product_lanes`] on the portable [`Float4`](crate::simd::Float4) backend.
pub fn dot_product_scalar_lanes(a: &[f32], b: &[f32]) -> Result<f32, DotError> {
    dot_product_lanes::<crate::simd::Float4>(a, b)
}
