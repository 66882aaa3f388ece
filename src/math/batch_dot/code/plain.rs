//! Plain serial batch: one sequential accumulator per pair, no SIMD.
//!
//! Correctness oracle for the unrolled variants and fallback for targets
//! without a SIMD backend.

use super::BatchShape;
use crate::error::DotError;

/// Compute `results[i] = a_i · b_i` for every pair in `shape`.
///
/// Any absent buffer makes the call a silent no-op. Works for every
/// `vector_length`.
///
/// # Errors
/// Buffer and shape errors from [`BatchShape::validate`]; nothing is written
/// on error.
///
/// # Example
/// ```
/// use batch_dot::math::batch_dot::{batch_dot_plain, BatchShape};
///
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let b = [5.0, 6.0, 7.0, 8.0];
/// let mut results = [0.0];
/// let shape = BatchShape::new(4, 1);
/// batch_dot_plain(Some(&a[..]), Some(&b[..]), Some(&mut results[..]), shape).unwrap();
/// assert_eq!(results, [70.0]);
/// ```
pub fn batch_dot_plain(
    a: Option<&[f32]>,
    b: Option<&[f32]>,
    results: Option<&mut [f32]>,
    shape: BatchShape,
) -> Result<(), DotError> {
    let (Some(a), Some(b), Some(results)) = (a, b, results) else {
        return Ok(());
    };
    shape.validate(a, b, results)?;

    for (i, result) in results[..shape.num_pairs].iter_mut().enumerate() {
        let range = shape.pair_range(i);
        let mut sum = 0.0f32;
        for (x, y) in a[range.clone()].iter().zip(&b[range]) {
            sum += x * y;
        }
        *result = sum;
    }
    Ok(())
}
