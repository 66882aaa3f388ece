//! Fixed-width 4 x f32 lane capability.
//!
//! The batched kernels are written once against [`F32x4`] and instantiated
//! per backend:
//!
//! | Backend | Target | Load | Mul | Add |
//! |---------|--------|------|-----|-----|
//! | [`Float4`] | any | array copy | scalar | scalar |
//! | `Sse2Lanes` | x86_64 | `_mm_loadu_ps` | `_mm_mul_ps` | `_mm_add_ps` |
//! | `NeonLanes` | aarch64 | `vld1q_f32` | `vmulq_f32` | `vaddq_f32` |
//! | `Simd128Lanes` | wasm32 + simd128 | `v128_load` | `f32x4_mul` | `f32x4_add` |
//!
//! No backend fuses the multiply and the add, and every horizontal sum adds
//! lanes 0..3 left to right. Given the same inputs all backends therefore
//! return bit-identical results.

mod scalar;

#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

#[cfg(target_arch = "aarch64")]
mod aarch64_neon;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
mod wasm32_simd128;

pub use scalar::Float4;

#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::Sse2Lanes;

#[cfg(target_arch = "aarch64")]
pub use aarch64_neon::NeonLanes;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
pub use wasm32_simd128::Simd128Lanes;

/// Number of f32 lanes in a 128-bit register.
pub const LANES: usize = 4;

/// Best lane backend for the compilation target.
#[cfg(target_arch = "x86_64")]
pub type NativeLanes = Sse2Lanes;

#[cfg(target_arch = "aarch64")]
pub type NativeLanes = NeonLanes;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
pub type NativeLanes = Simd128Lanes;

#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    all(target_arch = "wasm32", target_feature = "simd128")
)))]
pub type NativeLanes = Float4;

/// A register of four f32 lanes.
pub trait F32x4: Copy {
    /// Short backend name, used in variant listings.
    const NAME: &'static str;

    /// All lanes zero.
    fn zero() -> Self;

    /// Unaligned load of `src[..4]`.
    ///
    /// # Panics
    /// Panics if `src` holds fewer than four floats.
    fn load(src: &[f32]) -> Self;

    /// Lane-wise product.
    fn mul(self, rhs: Self) -> Self;

    /// Lane-wise sum.
    fn add(self, rhs: Self) -> Self;

    /// `lane0 + lane1 + lane2 + lane3`, in that order.
    fn horizontal_sum(self) -> f32;

    /// `self + a[..4] * b[..4]`
    #[inline(always)]
    fn accumulate(self, a: &[f32], b: &[f32]) -> Self {
        self.add(Self::load(a).mul(Self::load(b)))
    }
}
