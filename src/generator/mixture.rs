//! Weighted mixture of independent samplers
//!
//! Components are [`DistributionSpec`]s, so a mixture can only blend
//! independent modes; clustered, markov and nested mixtures are not
//! representable as components.

use crate::bucket::weighted_choice_index;
use crate::distribution::{ByteDistribution, DistributionSpec, Sampler};
use crate::error::SynthResult;
use crate::rng::DeterministicRng;

/// One weighted mixture component
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureComponent {
    pub spec: DistributionSpec,
    pub weight: f64,
}

/// Ordered list of weighted components
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureSpec {
    pub components: Vec<MixtureComponent>,
}

impl MixtureSpec {
    pub fn new(components: Vec<MixtureComponent>) -> Self {
        Self { components }
    }
}

/// Prepared mixture: one sampler per component plus the weight table
pub struct MixtureSampler {
    samplers: Vec<Sampler>,
    weights: Vec<f64>,
}

impl MixtureSampler {
    pub fn new(spec: &MixtureSpec) -> SynthResult<Self> {
        let samplers = spec
            .components
            .iter()
            .map(|c| Sampler::new(&c.spec))
            .collect::<SynthResult<Vec<_>>>()?;
        let weights = spec.components.iter().map(|c| c.weight).collect();

        Ok(Self { samplers, weights })
    }
}

impl ByteDistribution for MixtureSampler {
    /// Choose a component by weight, then draw from it
    fn next_byte(&mut self, rng: &mut DeterministicRng) -> u8 {
        let index = weighted_choice_index(rng, &self.weights);
        self.samplers[index].sample(rng)
    }
}
