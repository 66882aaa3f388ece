//! x86_64 SSE2 backend.
//!
//! SSE2 is part of the x86_64 baseline, so no runtime detection is needed.

use std::arch::x86_64::*;

use super::F32x4;

/// Four f32 lanes in an `__m128` register.
#[derive(Clone, Copy, Debug)]
pub struct Sse2Lanes(__m128);

impl F32x4 for Sse2Lanes {
    const NAME: &'static str = "x86_64-sse2";

    #[inline(always)]
    fn zero() -> Self {
        unsafe { Self(_mm_setzero_ps()) }
    }

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        let src = &src[..4];
        // SAFETY: `src` holds exactly four floats and the load is unaligned.
        unsafe { Self(_mm_loadu_ps(src.as_ptr())) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm_mul_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_add_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        // A shuffle tree would pair lanes as (0+1)+(2+3); spill instead so
        // the order matches every other backend.
        let mut lanes = [0.0f32; 4];
        unsafe { _mm_storeu_ps(lanes.as_mut_ptr(), self.0) };
        lanes[0] + lanes[1] + lanes[2] + lanes[3]
    }
}
