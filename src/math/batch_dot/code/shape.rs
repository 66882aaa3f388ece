//! Batch shape and buffer contract.
//!
//! `a` and `b` are tightly packed: pair `i` occupies
//! `[i * vector_length, (i + 1) * vector_length)` in both buffers, and its
//! result lands in `results[i]`. Buffers may be longer than the shape needs;
//! the extra tail is never touched.

use std::ops::Range;

use crate::error::{BufferRole, DotError};
use crate::simd::LANES;

/// Dimensions of one batched call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BatchShape {
    /// Floats per vector.
    pub vector_length: usize,
    /// Number of vector pairs, and of results.
    pub num_pairs: usize,
}

impl BatchShape {
    pub const fn new(vector_length: usize, num_pairs: usize) -> Self {
        Self {
            vector_length,
            num_pairs,
        }
    }

    /// Floats required in each of `a` and `b`.
    pub fn element_count(&self) -> Result<usize, DotError> {
        self.vector_length
            .checked_mul(self.num_pairs)
            .ok_or(DotError::ShapeOverflow {
                vector_length: self.vector_length,
                num_pairs: self.num_pairs,
            })
    }

    /// Check that every buffer is large enough for this shape.
    pub fn validate(&self, a: &[f32], b: &[f32], results: &[f32]) -> Result<(), DotError> {
        let required = self.element_count()?;
        let checks = [
            (BufferRole::A, a.len(), required),
            (BufferRole::B, b.len(), required),
            (BufferRole::Results, results.len(), self.num_pairs),
        ];
        for (buffer, actual, required) in checks {
            if actual < required {
                return Err(DotError::BufferTooShort {
                    buffer,
                    required,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Check that vectors split evenly into 4-float lanes.
    pub fn validate_lanes(&self) -> Result<(), DotError> {
        if self.vector_length % LANES != 0 {
            return Err(DotError::UnalignedVectorLength {
                vector_length: self.vector_length,
                lanes: LANES,
            });
        }
        Ok(())
    }

    /// Element range of pair `index` inside `a` and `b`.
    #[inline(always)]
    pub fn pair_range(&self, index: usize) -> Range<usize> {
        let start = index * self.vector_length;
        start..start + self.vector_length
    }
}
