//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod runner;
pub mod timer;
pub mod tui;

pub use bench::{measure, shuffle, shuffle_with_rng, time_seed, SeededRng};
pub use timer::{measure_variants, TimingConfig, Variant, VariantResult};

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "plain", "x86_64-sse2")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
