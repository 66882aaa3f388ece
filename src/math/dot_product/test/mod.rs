//! Tests for the single dot product implementations.

use crate::error::DotError;
use crate::math::dot_product::code::*;
use crate::simd::{Float4, NativeLanes};

const EPSILON: f32 = 1e-5;

fn assert_close(a: f32, b: f32, msg: &str) {
    let diff = (a - b).abs();
    assert!(
        diff < EPSILON,
        "{}: expected {}, got {}, diff = {}",
        msg,
        b,
        a,
        diff
    );
}

#[test]
fn test_original_basic() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [5.0, 6.0, 7.0, 8.0];
    // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
    assert_close(dot_product_original(&a, &b).unwrap(), 70.0, "original basic");
}

#[test]
fn test_original_empty() {
    let a: [f32; 0] = [];
    let b: [f32; 0] = [];
    assert_close(dot_product_original(&a, &b).unwrap(), 0.0, "original empty");
}

#[test]
fn test_original_odd_length() {
    let a = [3.0, 1.0, 2.0];
    let b = [4.0, 1.0, 0.5];
    assert_close(dot_product_original(&a, &b).unwrap(), 14.0, "original odd");
}

#[test]
fn test_lanes_basic() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [5.0, 6.0, 7.0, 8.0];
    assert_eq!(dot_product_simd(&a, &b).unwrap(), 70.0);
    assert_eq!(dot_product_scalar_lanes(&a, &b).unwrap(), 70.0);
}

#[test]
fn test_lanes_empty() {
    assert_eq!(dot_product_simd(&[], &[]).unwrap(), 0.0);
}

#[test]
fn test_lanes_zero_vector() {
    let a: Vec<f32> = (0..32).map(|i| i as f32 - 7.5).collect();
    let zero = vec![0.0f32; 32];
    assert_eq!(dot_product_simd(&a, &zero).unwrap(), 0.0);
}

#[test]
fn test_lanes_rejects_unaligned_length() {
    let a = [1.0; 6];
    assert_eq!(
        dot_product_simd(&a, &a),
        Err(DotError::UnalignedVectorLength {
            vector_length: 6,
            lanes: 4,
        })
    );
}

#[test]
fn test_length_mismatch() {
    let a = [1.0; 8];
    let b = [1.0; 4];
    let expected = Err(DotError::LengthMismatch { left: 8, right: 4 });
    assert_eq!(dot_product_original(&a, &b), expected);
    assert_eq!(dot_product_simd(&a, &b), expected);
}

#[test]
fn test_lane_order_is_interleaved() {
    // Lane 0 sees 1e8 then -1e8, so the 1.0 in lane 1 survives. A strict
    // left-to-right sum loses it to rounding at 1e8 before cancelling.
    let a = [1.0e8, 1.0, 0.0, 0.0, -1.0e8, 0.0, 0.0, 0.0];
    let b = [1.0; 8];
    assert_eq!(dot_product_simd(&a, &b).unwrap(), 1.0);
    assert_eq!(dot_product_original(&a, &b).unwrap(), 0.0);
}

#[test]
fn test_native_bit_identical_to_scalar() {
    let a: Vec<f32> = (0..64).map(|i| (i as f32 * 0.37).sin()).collect();
    let b: Vec<f32> = (0..64).map(|i| (i as f32 * 1.91).cos()).collect();
    let native = dot_product_lanes::<NativeLanes>(&a, &b).unwrap();
    let scalar = dot_product_lanes::<Float4>(&a, &b).unwrap();
    assert_eq!(native.to_bits(), scalar.to_bits());
}

#[test]
fn test_nan_propagates() {
    let mut a = [1.0f32; 8];
    a[5] = f32::NAN;
    let b = [1.0f32; 8];
    assert!(dot_product_simd(&a, &b).unwrap().is_nan());
    assert!(dot_product_original(&a, &b).unwrap().is_nan());
}
