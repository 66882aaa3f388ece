//! Error types for the dot product kernels.

use std::fmt;

/// Which caller buffer a validation error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferRole {
    A,
    B,
    Results,
}

impl fmt::Display for BufferRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BufferRole::A => "a",
            BufferRole::B => "b",
            BufferRole::Results => "results",
        };
        f.write_str(name)
    }
}

/// Errors reported by the dot product kernels.
///
/// Validation always finishes before the first write, so a call that
/// returns an error leaves the result buffer untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DotError {
    /// The two input vectors of a single dot product differ in length.
    #[error("vectors must have the same length ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },

    /// A buffer holds fewer floats than the batch shape requires.
    #[error("buffer `{buffer}` is too short: {required} floats required, {actual} provided")]
    BufferTooShort {
        buffer: BufferRole,
        required: usize,
        actual: usize,
    },

    /// The lane-based kernels need a vector length that is a multiple of the lane count.
    #[error("vector length {vector_length} is not a multiple of {lanes} lanes")]
    UnalignedVectorLength { vector_length: usize, lanes: usize },

    /// `vector_length * num_pairs` does not fit in `usize`.
    #[error("batch shape {vector_length} x {num_pairs} overflows the address space")]
    ShapeOverflow {
        vector_length: usize,
        num_pairs: usize,
    },
}
