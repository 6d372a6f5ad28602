//! Composite generators and stream assembly
//!
//! A [`GenerationPlan`] names a seed, an output size and a [`GenerationMode`].
//! [`generate`] seeds one [`DeterministicRng`], runs the generator the mode
//! selects, and returns the fully materialized stream of exactly `size`
//! bytes.
//!
//! # Generators
//!
//! - **Independent**: one sampler call per position, no state between them
//! - **Clustered**: runs of bytes from a single bucket ([`clustered`])
//! - **Markov**: a bucket state that persists with a stay probability
//!   ([`markov`])
//! - **Mixture**: per-position weighted choice among independent samplers
//!   ([`mixture`])
//!
//! Only the Markov generator carries state across positions; the others share
//! nothing but the RNG stream.

pub mod clustered;
pub mod markov;
pub mod mixture;

pub use markov::MarkovSpec;
pub use mixture::{MixtureComponent, MixtureSpec};

use crate::distribution::{ByteDistribution, DistributionSpec, Sampler};
use crate::error::SynthResult;
use crate::rng::DeterministicRng;
use log::debug;

/// Which composite generator runs
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationMode {
    Independent(DistributionSpec),
    Clustered,
    Markov(MarkovSpec),
    Mixture(MixtureSpec),
}

impl GenerationMode {
    pub fn name(&self) -> &'static str {
        match self {
            GenerationMode::Independent(spec) => spec.name(),
            GenerationMode::Clustered => "clustered",
            GenerationMode::Markov(_) => "markov",
            GenerationMode::Mixture(_) => "mixture",
        }
    }
}

/// Complete input to a generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPlan {
    pub seed: u64,
    pub size: usize,
    pub mode: GenerationMode,
}

/// Run a plan and return its byte stream
///
/// The output is a pure function of the plan: two calls with equal plans
/// return identical bytes.
pub fn generate(plan: &GenerationPlan) -> SynthResult<Vec<u8>> {
    let mut rng = DeterministicRng::with_seed(plan.seed);
    debug!(
        "generating {} bytes (mode={}, seed={})",
        plan.size,
        plan.mode.name(),
        plan.seed
    );

    let data = match &plan.mode {
        GenerationMode::Independent(spec) => {
            let mut sampler = Sampler::new(spec)?;
            generate_independent(&mut sampler, &mut rng, plan.size)
        }
        GenerationMode::Clustered => clustered::generate_clustered(&mut rng, plan.size),
        GenerationMode::Markov(spec) => markov::generate_markov(&mut rng, plan.size, spec),
        GenerationMode::Mixture(spec) => {
            let mut sampler = mixture::MixtureSampler::new(spec)?;
            generate_independent(&mut sampler, &mut rng, plan.size)
        }
    };

    debug_assert_eq!(data.len(), plan.size);
    Ok(data)
}

/// Fill `size` positions with one independent draw each
pub fn generate_independent<D: ByteDistribution + ?Sized>(
    dist: &mut D,
    rng: &mut DeterministicRng,
    size: usize,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(size);
    for _ in 0..size {
        out.push(dist.next_byte(rng));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::AffineMap;

    fn plan(mode: GenerationMode, size: usize) -> GenerationPlan {
        GenerationPlan { seed: 42, size, mode }
    }

    #[test]
    fn test_bernoulli_seed_42_is_stable() {
        let mode = GenerationMode::Independent(DistributionSpec::Bernoulli {
            p: 0.12,
            zero: 0x00,
            one: 0xFF,
        });

        let first = generate(&plan(mode.clone(), 10)).unwrap();
        let second = generate(&plan(mode.clone(), 10)).unwrap();

        // Seed 42 opens with uniforms 0.814, 0.319, 0.984, ... none below 0.12
        assert_eq!(first, vec![0x00; 10]);
        assert_eq!(first, second);

        let longer = generate(&plan(mode, 40)).unwrap();
        assert_eq!(&longer[..10], &first[..]);
        let ones: Vec<usize> = longer
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == 0xFF)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(ones, vec![13, 17, 30]);
        assert!(longer.iter().all(|&b| b == 0x00 || b == 0xFF));
    }

    #[test]
    fn test_independent_length() {
        let mode = GenerationMode::Independent(DistributionSpec::Normal {
            mu: 128.0,
            sigma: 35.0,
            map: AffineMap::IDENTITY,
        });
        for size in [1, 2, 1000, 65_537] {
            assert_eq!(generate(&plan(mode.clone(), size)).unwrap().len(), size);
        }
    }

    #[test]
    fn test_seed_changes_output() {
        let a = generate(&GenerationPlan { seed: 1, size: 4096, mode: GenerationMode::Clustered }).unwrap();
        let b = generate(&GenerationPlan { seed: 2, size: 4096, mode: GenerationMode::Clustered }).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_component_surfaces_error() {
        let mode = GenerationMode::Independent(DistributionSpec::Gamma {
            shape: -1.0,
            theta: 1.0,
            map: AffineMap::IDENTITY,
        });
        assert!(generate(&plan(mode, 16)).is_err());
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(GenerationMode::Clustered.name(), "clustered");
        assert_eq!(GenerationMode::Independent(DistributionSpec::MixedBucket).name(), "mixed");
    }
}
