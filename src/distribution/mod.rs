//! Per-byte distribution samplers
//!
//! Each independent mode turns one or more RNG draws into a single byte.
//! Bernoulli, uniform and mixed-bucket produce the byte directly; every other
//! mode produces a raw real-valued sample that goes through an
//! [`AffineMap`].
//!
//! # Modes
//!
//! - **Uniform**: one integer draw in [0, 255]
//! - **Mixed-bucket**: weighted bucket choice, then a bucket sample
//! - **Bernoulli**: one of two configured bytes
//! - **Poisson / Binomial / Geometric / Negative binomial**: counts
//! - **Normal / Lognormal / Exponential / Beta / Gamma**: continuous draws
//! - **Zipf**: power-law rank
//!
//! # Parameters vs. sampler
//!
//! A [`DistributionSpec`] is the resolved, immutable parameter set for one
//! mode. [`Sampler::new`] prepares it for sampling once per run (builds the
//! Zipf table, constructs the beta and gamma handles) and is the only step
//! that can fail.
//!
//! # Example
//!
//! ```
//! use bytesynth::distribution::{ByteDistribution, DistributionSpec, Sampler};
//! use bytesynth::rng::DeterministicRng;
//!
//! let spec = DistributionSpec::Bernoulli { p: 1.0, zero: 0x00, one: 0xFF };
//! let mut sampler = Sampler::new(&spec).unwrap();
//! let mut rng = DeterministicRng::with_seed(42);
//! assert_eq!(sampler.next_byte(&mut rng), 0xFF);
//! ```

pub mod affine;
pub mod discrete;
pub mod zipf;

pub use affine::AffineMap;

use crate::bucket::{sample_byte_from_bucket, weighted_choice_index, Bucket};
use crate::error::{SynthError, SynthResult};
use crate::rng::DeterministicRng;
use discrete::{binomial_sample, geometric_failures, negative_binomial_failures, poisson_sample};
use zipf::ZipfTable;

/// Bucket weights for mixed-bucket mode (zero, low, ascii, high)
pub const MIXED_BUCKET_WEIGHTS: [f64; 4] = [0.65, 0.02, 0.25, 0.08];

/// Source of one byte per call
///
/// Implemented by every sampler the independent and mixture generators can
/// drive. The RNG is passed in rather than owned so that a whole run shares
/// one stream.
pub trait ByteDistribution {
    /// Produce the next byte, advancing `rng`
    fn next_byte(&mut self, rng: &mut DeterministicRng) -> u8;
}

/// Resolved parameters for one independent mode
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionSpec {
    Uniform,
    MixedBucket,
    Bernoulli { p: f64, zero: u8, one: u8 },
    Poisson { lambda: f64, map: AffineMap },
    Binomial { n: u32, p: f64, map: AffineMap },
    Geometric { p: f64, map: AffineMap },
    NegativeBinomial { r: u32, p: f64, map: AffineMap },
    Normal { mu: f64, sigma: f64, map: AffineMap },
    Lognormal { mu: f64, sigma: f64, map: AffineMap },
    Exponential { lambda: f64, map: AffineMap },
    Zipf { s: f64, k_max: usize, map: AffineMap },
    Beta { a: f64, b: f64, map: AffineMap },
    Gamma { shape: f64, theta: f64, map: AffineMap },
}

impl DistributionSpec {
    /// Mode name as used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::MixedBucket => "mixed",
            Self::Bernoulli { .. } => "bernoulli",
            Self::Poisson { .. } => "poisson",
            Self::Binomial { .. } => "binomial",
            Self::Geometric { .. } => "geometric",
            Self::NegativeBinomial { .. } => "negative_binomial",
            Self::Normal { .. } => "normal",
            Self::Lognormal { .. } => "lognormal",
            Self::Exponential { .. } => "exponential",
            Self::Zipf { .. } => "zipf",
            Self::Beta { .. } => "beta",
            Self::Gamma { .. } => "gamma",
        }
    }
}

/// A [`DistributionSpec`] prepared for sampling
///
/// Most modes sample straight from their parameters. Zipf, beta and gamma
/// carry state built once in [`Sampler::new`].
#[derive(Debug, Clone)]
pub struct Sampler {
    spec: DistributionSpec,
    prepared: Prepared,
}

#[derive(Debug, Clone)]
enum Prepared {
    Direct,
    Zipf(ZipfTable),
    Beta(rand_distr::Beta<f64>),
    Gamma(rand_distr::Gamma<f64>),
}

impl Sampler {
    /// Prepare a spec for sampling
    pub fn new(spec: &DistributionSpec) -> SynthResult<Self> {
        let prepared = match *spec {
            DistributionSpec::Zipf { s, k_max, .. } => Prepared::Zipf(ZipfTable::new(s, k_max)),
            DistributionSpec::Beta { a, b, .. } => {
                let dist = rand_distr::Beta::new(a, b).map_err(|e| SynthError::InvalidParameter {
                    distribution: "beta",
                    reason: e.to_string(),
                })?;
                Prepared::Beta(dist)
            }
            DistributionSpec::Gamma { shape, theta, .. } => {
                let dist =
                    rand_distr::Gamma::new(shape, theta).map_err(|e| SynthError::InvalidParameter {
                        distribution: "gamma",
                        reason: e.to_string(),
                    })?;
                Prepared::Gamma(dist)
            }
            _ => Prepared::Direct,
        };

        Ok(Self {
            spec: spec.clone(),
            prepared,
        })
    }

    /// Draw one byte
    pub fn sample(&self, rng: &mut DeterministicRng) -> u8 {
        match (&self.spec, &self.prepared) {
            (DistributionSpec::Uniform, _) => rng.uniform_int(0x00, 0xFF) as u8,
            (DistributionSpec::MixedBucket, _) => {
                let index = weighted_choice_index(rng, &MIXED_BUCKET_WEIGHTS);
                sample_byte_from_bucket(rng, Bucket::from_index(index))
            }
            (DistributionSpec::Bernoulli { p, zero, one }, _) => {
                if rng.uniform() < *p {
                    *one
                } else {
                    *zero
                }
            }
            (DistributionSpec::Poisson { lambda, map }, _) => map.apply(poisson_sample(rng, *lambda)),
            (DistributionSpec::Binomial { n, p, map }, _) => map.apply(binomial_sample(rng, *n, *p)),
            (DistributionSpec::Geometric { p, map }, _) => map.apply(geometric_failures(rng, *p)),
            (DistributionSpec::NegativeBinomial { r, p, map }, _) => {
                map.apply(negative_binomial_failures(rng, *r, *p))
            }
            (DistributionSpec::Normal { mu, sigma, map }, _) => map.apply(rng.gaussian(*mu, *sigma)),
            (DistributionSpec::Lognormal { mu, sigma, map }, _) => {
                map.apply(rng.lognormal(*mu, *sigma))
            }
            (DistributionSpec::Exponential { lambda, map }, _) => {
                map.apply(rng.exponential(*lambda))
            }
            (DistributionSpec::Zipf { map, .. }, Prepared::Zipf(table)) => {
                map.apply(table.sample_rank(rng) as f64)
            }
            (DistributionSpec::Beta { map, .. }, Prepared::Beta(dist)) => map.apply(rng.beta(dist)),
            (DistributionSpec::Gamma { map, .. }, Prepared::Gamma(dist)) => {
                map.apply(rng.gamma(dist))
            }
            // Fields are private and `new` always pairs these specs with their state
            (
                DistributionSpec::Zipf { .. }
                | DistributionSpec::Beta { .. }
                | DistributionSpec::Gamma { .. },
                _,
            ) => unreachable!("{} sampler without prepared state", self.spec.name()),
        }
    }
}

impl ByteDistribution for Sampler {
    #[inline]
    fn next_byte(&mut self, rng: &mut DeterministicRng) -> u8 {
        self.sample(rng)
    }
}
