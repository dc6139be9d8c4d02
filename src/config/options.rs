//! Numerical options shared by the tolerance-sensitive operations.
//!
//! This module provides the `LinalgOptions` struct, which carries the epsilon
//! used for near-zero tests during elimination, the singularity guard of
//! `inv`/`normalized`, and approximate equality via `near_with`.

/// Default absolute tolerance for near-zero and near-equal checks.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Tolerance parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinalgOptions {
    /// Absolute tolerance: `|a - b| < epsilon` counts as equal
    pub epsilon: f64,
}

impl LinalgOptions {
    pub fn new() -> Self {
        Self { epsilon: DEFAULT_EPSILON }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl Default for LinalgOptions {
    fn default() -> Self {
        Self::new()
    }
}
