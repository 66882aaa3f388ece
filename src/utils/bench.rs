//! Shared benchmark utilities.
//!
//! Measurement primitives, the seeded PRNG used to build benchmark inputs,
//! and the shuffle used to randomize sample order.

use std::time::{Duration, Instant};

/// Measurement value type
pub type Measurement = Duration;

/// Read the current instant
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Measurement elapsed since `start`
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    start.elapsed()
}

/// Time one call of `f`, returning the measurement and the call's value.
#[inline(always)]
pub fn measure<R>(f: impl FnOnce() -> R) -> (Measurement, R) {
    let start = now();
    let result = f();
    (elapsed(start), result)
}

/// Format a measurement for table display
pub fn format_measurement(m: Measurement) -> String {
    format!("{:?}", m)
}

/// Simple fast random shuffle using Fisher-Yates algorithm
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = SeededRng::new(seed);
    shuffle_with_rng(slice, &mut rng);
}

/// Shuffle using an existing RNG (allows sequential shuffles with state preserved)
pub fn shuffle_with_rng<T>(slice: &mut [T], rng: &mut SeededRng) {
    for i in (1..slice.len()).rev() {
        let j = (rng.next_u64() >> 33) as usize % (i + 1);
        slice.swap(i, j);
    }
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Simple seeded PRNG for reproducible benchmark inputs
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    /// Generate f32 in range [-1.0, 1.0)
    pub fn next_f32_range(&mut self) -> f32 {
        let n = self.next_u64();
        (n >> 40) as f32 / (1u64 << 24) as f32 * 2.0 - 1.0
    }

    /// A packed buffer of `len` floats in [-1.0, 1.0)
    pub fn f32_buffer(&mut self, len: usize) -> Vec<f32> {
        (0..len).map(|_| self.next_f32_range()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_reproducible() {
        let a = SeededRng::new(42).f32_buffer(16);
        let b = SeededRng::new(42).f32_buffer(16);
        assert_eq!(a, b);
        assert!(a.iter().all(|x| (-1.0..1.0).contains(x)));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut v: Vec<usize> = (0..50).collect();
        shuffle(&mut v, 7);
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }
}
