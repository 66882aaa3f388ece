//! Tests for the batched dot product implementations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{BufferRole, DotError};
use crate::math::batch_dot::code::*;
use crate::math::dot_product::dot_product_lanes;
use crate::simd::{Float4, NativeLanes};

const SENTINEL: f32 = -12345.0;
const EMPTY: &[f32] = &[];

fn random_batch(shape: BatchShape, seed: u64) -> (Vec<f32>, Vec<f32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = shape.vector_length * shape.num_pairs;
    let a: Vec<f32> = (0..len).map(|_| rng.random_range(-1.0..1.0)).collect();
    let b: Vec<f32> = (0..len).map(|_| rng.random_range(-1.0..1.0)).collect();
    (a, b)
}

/// Run `func` over owned buffers and return the result buffer.
fn run(func: BatchDotFn, a: &[f32], b: &[f32], shape: BatchShape) -> Result<Vec<f32>, DotError> {
    let mut results = vec![SENTINEL; shape.num_pairs];
    func(Some(a), Some(b), Some(&mut results[..]), shape)?;
    Ok(results)
}

fn every_variant() -> Vec<(&'static str, BatchDotFn)> {
    available_variants()
        .into_iter()
        .map(|v| (v.name, v.function))
        .collect()
}

#[test]
fn test_single_pair() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [5.0, 6.0, 7.0, 8.0];
    for (name, func) in every_variant() {
        let results = run(func, &a, &b, BatchShape::new(4, 1)).unwrap();
        assert_eq!(results, vec![70.0], "variant {}", name);
    }
}

#[test]
fn test_orthogonal_to_zero_vector() {
    let shape = BatchShape::new(24, 6);
    let (a, _) = random_batch(shape, 1);
    let zero = vec![0.0f32; a.len()];
    for (name, func) in every_variant() {
        let results = run(func, &a, &zero, shape).unwrap();
        assert!(results.iter().all(|&r| r == 0.0), "variant {}: {:?}", name, results);
    }
}

#[test]
fn test_batch_of_five() {
    // One full group of four plus a one-pair tail
    let shape = BatchShape::new(4, 5);
    let a: Vec<f32> = (0..5).flat_map(|i| [(i + 1) as f32; 4]).collect();
    let b = vec![1.0f32; 20];
    for (name, func) in every_variant() {
        let results = run(func, &a, &b, shape).unwrap();
        assert_eq!(results, vec![4.0, 8.0, 12.0, 16.0, 20.0], "variant {}", name);
    }
}

#[test]
fn test_large_vector_tail() {
    // 20 = one 16-float block + one 4-float remainder
    for num_pairs in 1..=9 {
        let shape = BatchShape::new(20, num_pairs);
        let ones = vec![1.0f32; 20 * num_pairs];
        for (name, func) in every_variant() {
            let results = run(func, &ones, &ones, shape).unwrap();
            assert!(
                results.iter().all(|&r| r == 20.0),
                "variant {} with {} pairs: {:?}",
                name,
                num_pairs,
                results
            );
        }
    }
}

#[test]
fn test_zero_vector_length() {
    let shape = BatchShape::new(0, 6);
    for (name, func) in every_variant() {
        let results = run(func, &[], &[], shape).unwrap();
        assert_eq!(results, vec![0.0; 6], "variant {}", name);
    }
}

#[test]
fn test_zero_pairs_writes_nothing() {
    for vector_length in [0, 3, 4, 17] {
        let shape = BatchShape::new(vector_length, 0);
        for (name, func) in every_variant() {
            let mut results = [SENTINEL; 2];
            func(Some(EMPTY), Some(EMPTY), Some(&mut results[..]), shape).unwrap();
            assert_eq!(results, [SENTINEL; 2], "variant {}", name);
        }
    }
}

#[test]
fn test_null_buffers_are_noops() {
    let shape = BatchShape::new(4, 2);
    let a = [1.0f32; 8];
    let b = [1.0f32; 8];
    for (name, func) in every_variant() {
        let mut results = [SENTINEL; 2];
        assert_eq!(func(None, Some(&b[..]), Some(&mut results[..]), shape), Ok(()));
        assert_eq!(func(Some(&a[..]), None, Some(&mut results[..]), shape), Ok(()));
        assert_eq!(results, [SENTINEL; 2], "variant {}", name);
        assert_eq!(func(Some(&a[..]), Some(&b[..]), None, shape), Ok(()));
    }
}

#[test]
fn test_null_guard_precedes_validation() {
    // A mis-sized call with an absent buffer is still a silent no-op
    let shape = BatchShape::new(6, 100);
    for (_, func) in every_variant() {
        assert_eq!(func(None, Some(&[1.0][..]), None, shape), Ok(()));
    }
}

#[test]
fn test_matches_plain_within_tolerance() {
    for (seed, (vector_length, num_pairs)) in [(4, 3), (16, 4), (32, 11), (68, 13), (512, 6)]
        .into_iter()
        .enumerate()
    {
        let shape = BatchShape::new(vector_length, num_pairs);
        let (a, b) = random_batch(shape, seed as u64);
        let expected = run(batch_dot_plain, &a, &b, shape).unwrap();
        for (name, func) in every_variant() {
            let results = run(func, &a, &b, shape).unwrap();
            for (i, (got, want)) in results.iter().zip(&expected).enumerate() {
                let tolerance = 1e-4 * want.abs().max(1.0);
                assert!(
                    (got - want).abs() <= tolerance,
                    "variant {} on {:?}, pair {}: expected {}, got {}",
                    name,
                    shape,
                    i,
                    want,
                    got
                );
            }
        }
    }
}

#[test]
fn test_unrolled_matches_single_per_pair() {
    // Each accumulator sees exactly its own pair's strides, so the batch
    // result equals the single-pair kernel bit for bit.
    let shape = BatchShape::new(52, 7);
    let (a, b) = random_batch(shape, 77);
    let results = run(batch_dot_simd, &a, &b, shape).unwrap();
    for (i, &got) in results.iter().enumerate() {
        let range = shape.pair_range(i);
        let single = dot_product_lanes::<NativeLanes>(&a[range.clone()], &b[range]).unwrap();
        assert_eq!(got.to_bits(), single.to_bits(), "pair {}", i);
    }
}

#[test]
fn test_native_bit_identical_to_scalar_backend() {
    let shape = BatchShape::new(100, 10);
    let (a, b) = random_batch(shape, 3);
    let native = run(batch_dot_unrolled::<NativeLanes>, &a, &b, shape).unwrap();
    let scalar = run(batch_dot_unrolled::<Float4>, &a, &b, shape).unwrap();
    let native_bits: Vec<u32> = native.iter().map(|r| r.to_bits()).collect();
    let scalar_bits: Vec<u32> = scalar.iter().map(|r| r.to_bits()).collect();
    assert_eq!(native_bits, scalar_bits);
}

#[test]
fn test_unaligned_length_rejected_by_unrolled() {
    let shape = BatchShape::new(6, 3);
    let a = vec![1.0f32; 18];
    let mut results = [SENTINEL; 3];
    assert_eq!(
        batch_dot_simd(Some(&a[..]), Some(&a[..]), Some(&mut results[..]), shape),
        Err(DotError::UnalignedVectorLength {
            vector_length: 6,
            lanes: 4,
        })
    );
    assert_eq!(results, [SENTINEL; 3]);

    // The plain path handles the same shape
    batch_dot_plain(Some(&a[..]), Some(&a[..]), Some(&mut results[..]), shape).unwrap();
    assert_eq!(results, [6.0; 3]);
}

#[test]
fn test_short_buffers_rejected_without_writes() {
    let shape = BatchShape::new(4, 3);
    let full = vec![1.0f32; 12];
    let short = vec![1.0f32; 11];
    for (name, func) in every_variant() {
        let mut results = [SENTINEL; 3];
        assert_eq!(
            func(Some(&short[..]), Some(&full[..]), Some(&mut results[..]), shape),
            Err(DotError::BufferTooShort {
                buffer: BufferRole::A,
                required: 12,
                actual: 11,
            }),
            "variant {}",
            name
        );
        assert_eq!(results, [SENTINEL; 3], "variant {}", name);

        let mut results = [SENTINEL; 2];
        assert!(matches!(
            func(Some(&full[..]), Some(&full[..]), Some(&mut results[..]), shape),
            Err(DotError::BufferTooShort {
                buffer: BufferRole::Results,
                ..
            })
        ));
        assert_eq!(results, [SENTINEL; 2], "variant {}", name);
    }
}

#[test]
fn test_overflowing_shape_rejected() {
    let shape = BatchShape::new(usize::MAX - 3, 2);
    for (_, func) in every_variant() {
        let mut results = [SENTINEL; 2];
        assert!(matches!(
            func(Some(EMPTY), Some(EMPTY), Some(&mut results[..]), shape),
            Err(DotError::ShapeOverflow { .. })
        ));
    }
}

#[test]
fn test_extra_capacity_untouched() {
    let shape = BatchShape::new(4, 2);
    let a = vec![2.0f32; 12];
    let b = vec![3.0f32; 12];
    for (name, func) in every_variant() {
        let mut results = [SENTINEL; 4];
        func(Some(&a[..]), Some(&b[..]), Some(&mut results[..]), shape).unwrap();
        assert_eq!(results, [24.0, 24.0, SENTINEL, SENTINEL], "variant {}", name);
    }
}

#[test]
fn test_infinity_and_nan_propagate() {
    let shape = BatchShape::new(4, 5);
    let mut a = vec![1.0f32; 20];
    a[1] = f32::INFINITY;
    a[18] = f32::NAN;
    let b = vec![1.0f32; 20];
    for (name, func) in every_variant() {
        let results = run(func, &a, &b, shape).unwrap();
        assert_eq!(results[0], f32::INFINITY, "variant {}", name);
        assert_eq!(results[1..4], [4.0, 4.0, 4.0], "variant {}", name);
        assert!(results[4].is_nan(), "variant {}", name);
    }
}
