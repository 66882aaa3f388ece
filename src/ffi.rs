//! C ABI entry points.
//!
//! Raw-pointer versions of the kernels for hosts that hand over packed
//! buffers (a WASM linear memory, a C caller). A null pointer turns the call
//! into a silent no-op. There is no status code: shapes the optimized kernel
//! cannot take are routed to the plain kernel, and a shape whose element
//! count overflows leaves the results untouched.

use std::os::raw::c_float;
use std::slice;

use libc::size_t;

use crate::math::batch_dot::{batch_dot_plain, batch_dot_simd, BatchShape};
use crate::math::dot_product::{dot_product_original, dot_product_simd};

/// Borrow the three caller buffers for `shape`, or `None` if any pointer is
/// null or the shape overflows.
///
/// # Safety
/// See [`batch_dot_product_plain`].
unsafe fn borrow_buffers<'a>(
    a: *const c_float,
    b: *const c_float,
    results: *mut c_float,
    shape: BatchShape,
) -> Option<(&'a [f32], &'a [f32], &'a mut [f32])> {
    if a.is_null() || b.is_null() || results.is_null() {
        return None;
    }
    let len = shape.element_count().ok()?;
    if len == 0 && shape.num_pairs == 0 {
        return None;
    }
    // A zero-length slice still needs a non-null, aligned pointer.
    let (a, b) = if len == 0 {
        (&[][..], &[][..])
    } else {
        (slice::from_raw_parts(a, len), slice::from_raw_parts(b, len))
    };
    let results = slice::from_raw_parts_mut(results, shape.num_pairs);
    Some((a, b, results))
}

/// Plain serial batch over raw buffers.
///
/// Writes `results[i] = a_i · b_i` for `i` in `0..num_pairs`.
///
/// # Safety
/// Unless null, `a` and `b` must be valid for reads of
/// `vector_length * num_pairs` floats and `results` for writes of
/// `num_pairs` floats, properly aligned for `f32`, and `results` must not
/// overlap `a` or `b` or be written concurrently by anyone else.
#[no_mangle]
pub unsafe extern "C" fn batch_dot_product_plain(
    a: *const c_float,
    b: *const c_float,
    results: *mut c_float,
    vector_length: size_t,
    num_pairs: size_t,
) {
    let shape = BatchShape::new(vector_length, num_pairs);
    if let Some((a, b, results)) = borrow_buffers(a, b, results, shape) {
        // Buffers were sized from the shape, so validation cannot fail.
        let _ = batch_dot_plain(Some(a), Some(b), Some(results), shape);
    }
}

/// SIMD batch over raw buffers.
///
/// Vector lengths that are not a multiple of four take the plain path.
///
/// # Safety
/// Same contract as [`batch_dot_product_plain`]. 16-byte alignment of `a`
/// and `b` helps throughput but is not required.
#[no_mangle]
pub unsafe extern "C" fn batch_dot_product_simd(
    a: *const c_float,
    b: *const c_float,
    results: *mut c_float,
    vector_length: size_t,
    num_pairs: size_t,
) {
    let shape = BatchShape::new(vector_length, num_pairs);
    let Some((a, b, results)) = borrow_buffers(a, b, results, shape) else {
        return;
    };
    if shape.validate_lanes().is_ok() {
        let _ = batch_dot_simd(Some(a), Some(b), Some(results), shape);
    } else {
        let _ = batch_dot_plain(Some(a), Some(b), Some(results), shape);
    }
}

/// Dot product of one pair of `dims` floats; 0.0 for null pointers.
///
/// Lengths that are not a multiple of four are summed sequentially.
///
/// # Safety
/// Unless null, `a` and `b` must be valid for reads of `dims` floats.
#[no_mangle]
pub unsafe extern "C" fn dot_product_single(
    a: *const c_float,
    b: *const c_float,
    dims: size_t,
) -> c_float {
    if a.is_null() || b.is_null() || dims == 0 {
        return 0.0;
    }
    let a = slice::from_raw_parts(a, dims);
    let b = slice::from_raw_parts(b, dims);
    dot_product_simd(a, b)
        .or_else(|_| dot_product_original(a, b))
        .unwrap_or(0.0)
}
