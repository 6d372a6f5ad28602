//! Clustered bucket runs
//!
//! Emits contiguous runs drawn from a single bucket so the output shows
//! visible regions: long stretches of zeros, text-like spans, high-entropy
//! blocks. Most runs are short; about one in seven is long.

use crate::bucket::{sample_byte_from_bucket, weighted_choice_index, Bucket};
use crate::rng::DeterministicRng;
use log::debug;

/// Run bucket weights (zero, low, ascii, high)
pub const CLUSTER_BUCKET_WEIGHTS: [f64; 4] = [0.55, 0.05, 0.30, 0.10];

/// Probability that a run is long
pub const LONG_RUN_PROBABILITY: f64 = 0.15;

/// Inclusive length bounds for long runs
pub const LONG_RUN: (u32, u32) = (4096, 16384);

/// Inclusive length bounds for short runs
pub const SHORT_RUN: (u32, u32) = (64, 2048);

/// Generate exactly `size` bytes of bucket runs
///
/// Per run: pick a bucket, pick a length (long with probability 0.15), cut it
/// to what is left of the budget, then fill. Zero runs are written without
/// drawing; other runs draw one bucket sample per byte.
pub fn generate_clustered(rng: &mut DeterministicRng, size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size);
    let mut runs = 0usize;

    while out.len() < size {
        let bucket = Bucket::from_index(weighted_choice_index(rng, &CLUSTER_BUCKET_WEIGHTS));

        let (lo, hi) = if rng.uniform() < LONG_RUN_PROBABILITY {
            LONG_RUN
        } else {
            SHORT_RUN
        };
        let run = (rng.uniform_int(lo, hi) as usize).min(size - out.len());

        if bucket == Bucket::Zero {
            out.resize(out.len() + run, 0x00);
        } else {
            for _ in 0..run {
                out.push(sample_byte_from_bucket(rng, bucket));
            }
        }
        runs += 1;
    }

    debug!("clustered: {} runs over {} bytes", runs, size);
    out
}
