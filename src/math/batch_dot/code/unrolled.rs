//! Unrolled lane-based batch.
//!
//! Three tiers of unrolling:
//! - pairs are taken four at a time, each with its own accumulator, so the
//!   four dependency chains interleave and hide load latency
//! - inside a group every vector is consumed 16 floats per step (four loads),
//!   then 4 floats per step for the remainder
//! - the 1-3 pairs left after the last full group run one at a time through
//!   the same 16-then-4 pattern with a single accumulator
//!
//! Every accumulator only ever receives its own pair's products in stride
//! order, so each result is bit-identical to
//! [`dot_product_lanes`](crate::math::dot_product::dot_product_lanes) on that
//! pair.

use super::BatchShape;
use crate::error::DotError;
use crate::simd::{F32x4, Float4, NativeLanes, LANES};

const PAIR_UNROLL: usize = 4;
const BLOCK: usize = 4 * LANES;

/// Four strides of four floats into one accumulator.
#[inline(always)]
fn accumulate_block<L: F32x4>(acc: L, a: &[f32], b: &[f32]) -> L {
    let (a, b) = (&a[..BLOCK], &b[..BLOCK]);
    acc.accumulate(&a[0..], &b[0..])
        .accumulate(&a[4..], &b[4..])
        .accumulate(&a[8..], &b[8..])
        .accumulate(&a[12..], &b[12..])
}

/// Single-accumulator tail for one pair.
#[inline(always)]
fn dot_pair<L: F32x4>(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len();
    let mut sum = L::zero();
    let mut j = 0;
    while j + BLOCK <= len {
        sum = accumulate_block(sum, &a[j..], &b[j..]);
        j += BLOCK;
    }
    while j < len {
        sum = sum.accumulate(&a[j..], &b[j..]);
        j += LANES;
    }
    sum.horizontal_sum()
}

/// Compute `results[i] = a_i · b_i` for every pair with lane backend `L`.
///
/// Any absent buffer makes the call a silent no-op, as does an empty batch.
///
/// # Errors
/// - [`DotError::UnalignedVectorLength`] if `vector_length % 4 != 0`; use
///   [`batch_dot_plain`](super::batch_dot_plain) for such shapes
/// - buffer and shape errors from [`BatchShape::validate`]
///
/// Nothing is written on error.
pub fn batch_dot_unrolled<L: F32x4>(
    a: Option<&[f32]>,
    b: Option<&[f32]>,
    results: Option<&mut [f32]>,
    shape: BatchShape,
) -> Result<(), DotError> {
    let (Some(a), Some(b), Some(results)) = (a, b, results) else {
        return Ok(());
    };
    if shape.num_pairs == 0 {
        return Ok(());
    }
    shape.validate_lanes()?;
    shape.validate(a, b, results)?;

    let len = shape.vector_length;
    let num_pairs = shape.num_pairs;

    let mut i = 0;
    while i + PAIR_UNROLL <= num_pairs {
        let (a0, b0) = (&a[shape.pair_range(i)], &b[shape.pair_range(i)]);
        let (a1, b1) = (&a[shape.pair_range(i + 1)], &b[shape.pair_range(i + 1)]);
        let (a2, b2) = (&a[shape.pair_range(i + 2)], &b[shape.pair_range(i + 2)]);
        let (a3, b3) = (&a[shape.pair_range(i + 3)], &b[shape.pair_range(i + 3)]);

        let mut sum0 = L::zero();
        let mut sum1 = L::zero();
        let mut sum2 = L::zero();
        let mut sum3 = L::zero();

        let mut j = 0;
        while j + BLOCK <= len {
            sum0 = accumulate_block(sum0, &a0[j..], &b0[j..]);
            sum1 = accumulate_block(sum1, &a1[j..], &b1[j..]);
            sum2 = accumulate_block(sum2, &a2[j..], &b2[j..]);
            sum3 = accumulate_block(sum3, &a3[j..], &b3[j..]);
            j += BLOCK;
        }
        while j < len {
            sum0 = sum0.accumulate(&a0[j..], &b0[j..]);
            sum1 = sum1.accumulate(&a1[j..], &b1[j..]);
            sum2 = sum2.accumulate(&a2[j..], &b2[j..]);
            sum3 = sum3.accumulate(&a3[j..], &b3[j..]);
            j += LANES;
        }

        results[i] = sum0.horizontal_sum();
        results[i + 1] = sum1.horizontal_sum();
        results[i + 2] = sum2.horizontal_sum();
        results[i + 3] = sum3.horizontal_sum();
        i += PAIR_UNROLL;
    }

    while i < num_pairs {
        let range = shape.pair_range(i);
        results[i] = dot_pair::<L>(&a[range.clone()], &b[range]);
        i += 1;
    }

    Ok(())
}

/// [`batch_dot_unrolled`] on the native SIMD backend of the target.
///
/// ```
/// use batch_dot::math::batch_dot::{batch_dot_simd, BatchShape};
///
/// let a = [1.0; 20];
/// let b = [1.0; 20];
/// let mut results = [0.0];
/// let shape = BatchShape::new(20, 1);
/// batch_dot_simd(Some(&a[..]), Some(&b[..]), Some(&mut results[..]), shape).unwrap();
/// assert_eq!(results, [20.0]);
/// ```
pub fn batch_dot_simd(
    a: Option<&[f32]>,
    b: Option<&[f32]>,
    results: Option<&mut [f32]>,
    shape: BatchShape,
) -> Result<(), DotError> {
    batch_dot_unrolled::<NativeLanes>(a, b, results, shape)
}

/// [`batch_dot_unrolled`] on the portable [`Float4`] backend.
pub fn batch_dot_scalar_lanes(
    a: Option<&[f32]>,
    b: Option<&[f32]>,
    results: Option<&mut [f32]>,
    shape: BatchShape,
) -> Result<(), DotError> {
    batch_dot_unrolled::<Float4>(a, b, results, shape)
}
