//! Portable 4-wide f32 backend.
//!
//! Plain array arithmetic with 16-byte alignment, so LLVM is free to map it
//! onto whatever 128-bit registers the target has. Also the fallback for
//! targets without a dedicated backend.

use super::F32x4;

/// Four f32 lanes held in an aligned array.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(16))]
pub struct Float4(pub [f32; 4]);

impl Float4 {
    /// Creates a `Float4` from four values.
    ///
    /// # Example
    /// ```
    /// use batch_dot::simd::{F32x4, Float4};
    /// let v = Float4::new([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(v.horizontal_sum(), 10.0);
    /// ```
    #[inline(always)]
    pub const fn new(arr: [f32; 4]) -> Self {
        Self(arr)
    }

    #[inline(always)]
    pub const fn to_array(self) -> [f32; 4] {
        self.0
    }
}

impl F32x4 for Float4 {
    const NAME: &'static str = "scalar";

    #[inline(always)]
    fn zero() -> Self {
        Self([0.0; 4])
    }

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        let src = &src[..4];
        Self([src[0], src[1], src[2], src[3]])
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self([
            self.0[0] * rhs.0[0],
            self.0[1] * rhs.0[1],
            self.0[2] * rhs.0[2],
            self.0[3] * rhs.0[3],
        ])
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        self.0[0] + self.0[1] + self.0[2] + self.0[3]
    }
}
