//! Byte bucket model
//!
//! Partitions the byte domain into four coarse categories and samples a
//! concrete byte from a category. The composite generators work in terms of
//! buckets: a clustered run or a Markov state is a bucket, and each emitted
//! byte is one draw from it.
//!
//! | Bucket       | Range          |
//! |--------------|----------------|
//! | `Zero`       | `0x00`         |
//! | `LowControl` | `0x01..=0x1F`  |
//! | `Ascii`      | `0x20..=0x7E`  |
//! | `High`       | `0x7F..=0xFF`  |

use crate::rng::DeterministicRng;

/// Coarse byte category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Zero,
    LowControl,
    Ascii,
    High,
}

impl Bucket {
    /// Buckets in weight-table order (zero, low, ascii, high)
    pub const ALL: [Bucket; 4] = [Bucket::Zero, Bucket::LowControl, Bucket::Ascii, Bucket::High];

    /// Bucket for a weight-table index; anything past the end is `High`
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Bucket::Zero,
            1 => Bucket::LowControl,
            2 => Bucket::Ascii,
            _ => Bucket::High,
        }
    }

    /// Classify a byte
    pub fn classify(byte: u8) -> Self {
        match byte {
            0x00 => Bucket::Zero,
            0x01..=0x1F => Bucket::LowControl,
            0x20..=0x7E => Bucket::Ascii,
            0x7F..=0xFF => Bucket::High,
        }
    }

    /// Inclusive byte range covered by this bucket
    pub fn range(self) -> (u8, u8) {
        match self {
            Bucket::Zero => (0x00, 0x00),
            Bucket::LowControl => (0x01, 0x1F),
            Bucket::Ascii => (0x20, 0x7E),
            Bucket::High => (0x7F, 0xFF),
        }
    }
}

/// Draw one byte from a bucket
///
/// `Zero` returns `0x00` without touching the RNG; every other bucket
/// consumes exactly one integer draw. Reproducibility depends on this
/// asymmetry, so a zero run never advances the stream.
#[inline]
pub fn sample_byte_from_bucket(rng: &mut DeterministicRng, bucket: Bucket) -> u8 {
    match bucket {
        Bucket::Zero => 0x00,
        other => {
            let (lo, hi) = other.range();
            rng.uniform_int(lo as u32, hi as u32) as u8
        }
    }
}

/// Pick an index with probability proportional to its weight
///
/// Draws `r` uniformly in `[0, total)` and returns the first index whose
/// running sum strictly exceeds `r`. A non-positive total returns the last
/// index without drawing. `weights` must not be empty.
pub fn weighted_choice_index(rng: &mut DeterministicRng, weights: &[f64]) -> usize {
    let last = weights.len() - 1;
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return last;
    }

    let r = rng.uniform() * total;
    let mut acc = 0.0;
    for (i, w) in weights.iter().enumerate() {
        acc += w;
        if r < acc {
            return i;
        }
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_partition() {
        let mut counts = [0usize; 4];
        for b in 0..=255u8 {
            let idx = Bucket::ALL.iter().position(|&x| x == Bucket::classify(b)).unwrap();
            counts[idx] += 1;
        }
        assert_eq!(counts, [1, 31, 95, 129]);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Bucket::classify(0x00), Bucket::Zero);
        assert_eq!(Bucket::classify(0x01), Bucket::LowControl);
        assert_eq!(Bucket::classify(0x1F), Bucket::LowControl);
        assert_eq!(Bucket::classify(0x20), Bucket::Ascii);
        assert_eq!(Bucket::classify(0x7E), Bucket::Ascii);
        assert_eq!(Bucket::classify(0x7F), Bucket::High);
        assert_eq!(Bucket::classify(0xFF), Bucket::High);
    }

    #[test]
    fn test_sample_stays_in_bucket() {
        let mut rng = DeterministicRng::with_seed(42);
        for bucket in Bucket::ALL {
            for _ in 0..2000 {
                let b = sample_byte_from_bucket(&mut rng, bucket);
                assert_eq!(Bucket::classify(b), bucket);
            }
        }
    }

    #[test]
    fn test_zero_bucket_consumes_no_draw() {
        let mut a = DeterministicRng::with_seed(9);
        let mut b = DeterministicRng::with_seed(9);

        for _ in 0..10 {
            sample_byte_from_bucket(&mut a, Bucket::Zero);
        }

        assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
    }

    #[test]
    fn test_weighted_choice_zero_total_returns_last() {
        let mut a = DeterministicRng::with_seed(1);
        let mut b = DeterministicRng::with_seed(1);

        assert_eq!(weighted_choice_index(&mut a, &[0.0, 0.0, 0.0]), 2);
        // No draw on the fallback path
        assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
    }

    #[test]
    fn test_weighted_choice_boundary_goes_to_next_index() {
        // Seed 42 opens with u0 ~ 0.814, so 1 - u0 is exact and the total is 1.0
        let u0 = DeterministicRng::with_seed(42).uniform();
        assert!(u0 > 0.5);

        // r == u0 equals the first running sum, which is not a strict exceedance
        let mut rng = DeterministicRng::with_seed(42);
        assert_eq!(weighted_choice_index(&mut rng, &[u0, 1.0 - u0]), 1);

        let mut rng = DeterministicRng::with_seed(42);
        assert_eq!(weighted_choice_index(&mut rng, &[0.0, u0, 1.0 - u0]), 2);

        // Just past the boundary the first index wins
        let mut rng = DeterministicRng::with_seed(42);
        let above = f64::from_bits(u0.to_bits() + 1);
        assert_eq!(weighted_choice_index(&mut rng, &[above, 1.0 - u0]), 0);
    }

    #[test]
    fn test_weighted_choice_skips_zero_weights() {
        let mut rng = DeterministicRng::with_seed(3);
        for _ in 0..1000 {
            let i = weighted_choice_index(&mut rng, &[0.0, 1.0, 0.0, 2.0]);
            assert!(i == 1 || i == 3);
        }
    }

    #[test]
    fn test_weighted_choice_proportions() {
        let mut rng = DeterministicRng::with_seed(11);
        let weights = [0.65, 0.02, 0.25, 0.08];
        let mut counts = [0usize; 4];
        let n = 100_000;

        for _ in 0..n {
            counts[weighted_choice_index(&mut rng, &weights)] += 1;
        }

        for (i, &w) in weights.iter().enumerate() {
            let observed = counts[i] as f64 / n as f64;
            assert!((observed - w).abs() < 0.01, "index {}: {} vs {}", i, observed, w);
        }
    }
}
