//! WebAssembly simd128 backend.
//!
//! Only compiled when the module is built with `-C target-feature=+simd128`.

use std::arch::wasm32::*;

use super::F32x4;

#[derive(Clone, Copy, Debug)]
pub struct Simd128Lanes(v128);

impl F32x4 for Simd128Lanes {
    const NAME: &'static str = "wasm32-simd128";

    #[inline(always)]
    fn zero() -> Self {
        Self(f32x4_splat(0.0))
    }

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        let src = &src[..4];
        // SAFETY: `src` holds exactly 16 bytes; v128_load accepts unaligned pointers.
        unsafe { Self(v128_load(src.as_ptr() as *const v128)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(f32x4_mul(self.0, rhs.0))
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(f32x4_add(self.0, rhs.0))
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        f32x4_extract_lane::<0>(self.0)
            + f32x4_extract_lane::<1>(self.0)
            + f32x4_extract_lane::<2>(self.0)
            + f32x4_extract_lane::<3>(self.0)
    }
}
