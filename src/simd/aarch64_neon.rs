//! aarch64 NEON backend.

use std::arch::aarch64::*;

use super::F32x4;

/// Four f32 lanes in a NEON Q register.
#[derive(Clone, Copy, Debug)]
pub struct NeonLanes(float32x4_t);

impl F32x4 for NeonLanes {
    const NAME: &'static str = "aarch64-neon";

    #[inline(always)]
    fn zero() -> Self {
        unsafe { Self(vdupq_n_f32(0.0)) }
    }

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        let src = &src[..4];
        // SAFETY: `src` holds exactly four floats; vld1q has no alignment requirement.
        unsafe { Self(vld1q_f32(src.as_ptr())) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(vmulq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(vaddq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        // vaddvq_f32 pairs lanes differently; keep the 0..3 order.
        unsafe {
            vgetq_lane_f32::<0>(self.0)
                + vgetq_lane_f32::<1>(self.0)
                + vgetq_lane_f32::<2>(self.0)
                + vgetq_lane_f32::<3>(self.0)
        }
    }
}
