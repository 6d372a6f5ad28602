//! Zipf rank table
//!
//! Power-law ranks where a handful of small ranks take most of the mass:
//! P(k) = k^(-s) / H(K,s), with H(K,s) = sum of i^(-s) for i = 1..=K.
//!
//! # Characteristics
//!
//! - Small s (0.5): close to uniform over ranks
//! - Large s (2.0): rank 1 dominates
//! - Default s (1.3): a steep but visible tail
//!
//! # Performance
//!
//! The cumulative table is built once; each sample is one uniform draw plus a
//! binary search, O(log K).
//!
//! # Example
//!
//! ```
//! use bytesynth::distribution::zipf::ZipfTable;
//! use bytesynth::rng::DeterministicRng;
//!
//! let table = ZipfTable::new(1.3, 64);
//! let mut rng = DeterministicRng::with_seed(42);
//! let rank = table.sample_rank(&mut rng);
//! assert!((1..=64).contains(&rank));
//! ```

use crate::rng::DeterministicRng;

/// Cumulative probability table over ranks 1..=K
///
/// Non-decreasing, and the final entry is forced to exactly 1.0 so that
/// floating-point drift in the prefix sum can never leave a uniform draw
/// without a matching rank.
#[derive(Debug, Clone)]
pub struct ZipfTable {
    cdf: Vec<f64>,
}

impl ZipfTable {
    /// Build the table for exponent `s` and max rank `k_max`
    ///
    /// A degenerate weight total (not a positive number) yields the
    /// single-entry table `[1.0]`, which always samples rank 1.
    pub fn new(s: f64, k_max: usize) -> Self {
        let weights: Vec<f64> = (1..=k_max).map(|k| 1.0 / (k as f64).powf(s)).collect();
        let total: f64 = weights.iter().sum();

        if total.is_nan() || total <= 0.0 {
            return Self { cdf: vec![1.0] };
        }

        let mut cdf = Vec::with_capacity(k_max);
        let mut cumulative = 0.0;
        for w in &weights {
            cumulative += w / total;
            cdf.push(cumulative);
        }
        if let Some(last) = cdf.last_mut() {
            *last = 1.0;
        }

        Self { cdf }
    }

    /// Number of ranks (K)
    pub fn len(&self) -> usize {
        self.cdf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cdf.is_empty()
    }

    /// Cumulative entries, index i holding P(rank <= i + 1)
    pub fn cumulative(&self) -> &[f64] {
        &self.cdf
    }

    /// Draw a rank in [1, K]
    ///
    /// One uniform draw `r`; the rank is one past the index of the first
    /// cumulative entry `>= r`.
    pub fn sample_rank(&self, rng: &mut DeterministicRng) -> usize {
        let r = rng.uniform();
        let index = self.cdf.partition_point(|&c| c < r);
        // r < 1.0 == cdf[K-1], so index < K; min() guards an empty table
        index.min(self.cdf.len().saturating_sub(1)) + 1
    }
}
