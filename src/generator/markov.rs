//! Markov bucket chain
//!
//! A single bucket state persists from one position to the next with
//! probability `stay_prob`; otherwise it is re-drawn from the initial weights.
//! A re-draw can land on the same bucket, so the effective self-transition
//! probability is slightly above `stay_prob`.

use crate::bucket::{sample_byte_from_bucket, weighted_choice_index, Bucket};
use crate::rng::DeterministicRng;
use log::debug;

/// Markov chain parameters
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovSpec {
    /// Probability of keeping the current bucket at each step
    pub stay_prob: f64,
    /// Bucket weights (zero, low, ascii, high) for the first state and every re-draw
    pub init_weights: [f64; 4],
}

/// Generate `size` bytes from the chain
///
/// The first position uses the initial state directly. Every later position
/// draws once to decide whether to re-draw the state, then emits one bucket
/// sample.
pub fn generate_markov(rng: &mut DeterministicRng, size: usize, spec: &MarkovSpec) -> Vec<u8> {
    let mut out = Vec::with_capacity(size);
    let mut state = Bucket::from_index(weighted_choice_index(rng, &spec.init_weights));
    let mut switches = 0usize;

    for i in 0..size {
        if i > 0 && rng.uniform() >= spec.stay_prob {
            state = Bucket::from_index(weighted_choice_index(rng, &spec.init_weights));
            switches += 1;
        }
        out.push(sample_byte_from_bucket(rng, state));
    }

    debug!("markov: {} re-draws over {} bytes", switches, size);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(stay_prob: f64, init_weights: [f64; 4]) -> MarkovSpec {
        MarkovSpec { stay_prob, init_weights }
    }

    #[test]
    fn test_length() {
        let mut rng = DeterministicRng::with_seed(42);
        let data = generate_markov(&mut rng, 12_345, &spec(0.965, [0.55, 0.05, 0.30, 0.10]));
        assert_eq!(data.len(), 12_345);
    }

    #[test]
    fn test_stay_one_keeps_single_bucket() {
        for seed in 0..20 {
            let mut rng = DeterministicRng::with_seed(seed);
            let data = generate_markov(&mut rng, 50_000, &spec(1.0, [0.25, 0.25, 0.25, 0.25]));
            let first = Bucket::classify(data[0]);
            assert!(data.iter().all(|&b| Bucket::classify(b) == first),
                "seed {}: bucket changed with stay probability 1.0", seed);
        }
    }

    #[test]
    fn test_single_weight_pins_bucket() {
        let mut rng = DeterministicRng::with_seed(42);
        let data = generate_markov(&mut rng, 10_000, &spec(0.5, [0.0, 0.0, 1.0, 0.0]));
        assert!(data.iter().all(|&b| Bucket::classify(b) == Bucket::Ascii));
    }

    #[test]
    fn test_stay_zero_redraws_every_step() {
        let mut rng = DeterministicRng::with_seed(42);
        let data = generate_markov(&mut rng, 100_000, &spec(0.0, [0.5, 0.0, 0.0, 0.5]));
        let zeros = data.iter().filter(|&&b| b == 0).count() as f64 / data.len() as f64;
        assert!((zeros - 0.5).abs() < 0.01, "zero share {}", zeros);
    }

    #[test]
    fn test_high_stay_produces_long_spans() {
        let mut rng = DeterministicRng::with_seed(42);
        let data = generate_markov(&mut rng, 200_000, &spec(0.99, [0.25, 0.25, 0.25, 0.25]));
        let changes = data
            .windows(2)
            .filter(|w| Bucket::classify(w[0]) != Bucket::classify(w[1]))
            .count();
        // Expected ~0.01 * 0.75 * 200000 = 1500 bucket changes
        assert!(changes < 3000, "too many bucket changes: {}", changes);
    }
}
