//! Algorithm registry for dynamic discovery, verification and benchmarking.
//!
//! Every algorithm exposes its variants through [`AlgorithmRunner`], so the
//! CLI and the test suite can treat the single and batched kernels the same
//! way.

use crate::utils::timer::{Variant, VariantResult};

/// Result from running a variant benchmark
pub type BenchmarkResult = VariantResult;

/// Trait that all algorithm runners must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "batch_dot_product")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "math")
    fn category(&self) -> &'static str;

    /// What `size` counts in [`AlgorithmRunner::get_variant_closures`]
    fn size_label(&self) -> &'static str {
        "Size"
    }

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get one closure per variant, ready to be measured.
    /// Each closure does ONE timed execution over inputs of `size`,
    /// generated from `seed`.
    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), String>;
}

/// Registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::math::dot_product::DotProductRunner);
    registry.register(crate::math::batch_dot::BatchDotRunner);

    registry
}
