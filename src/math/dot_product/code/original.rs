//! Original (reference) implementation of the single dot product.
//!
//! Strict left-to-right accumulation. This is the baseline the lane-based
//! variant is checked against.

use crate::error::DotError;

/// Compute the dot product of two vectors by sequential accumulation.
///
/// Works for any length, including lengths that are not a multiple of the
/// lane count.
///
/// # Errors
/// [`DotError::LengthMismatch`] if the vectors have different lengths.
///
/// # Example
/// ```
/// use batch_dot::math::dot_product::dot_product_original;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// let result = dot_product_original(&a, &b).unwrap();
/// assert!((result - 32.0).abs() < 1e-6);
/// ```
pub fn dot_product_original(a: &[f32], b: &[f32]) -> Result<f32, DotError> {
    if a.len() != b.len() {
        return Err(DotError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut sum = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        sum += x * y;
    }
    Ok(sum)
}
