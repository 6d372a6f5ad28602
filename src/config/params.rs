//! Per-mode parameter tables
//!
//! Every mode gets its own table with the defaults the generator ships with.
//! A profile or the command line can override any field; only the tables for
//! the selected mode (and mixture components) are resolved into a
//! [`DistributionSpec`].

use crate::distribution::{AffineMap, DistributionSpec};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generation mode as named on the command line and in profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ModeName {
    /// One uniform byte per position
    Uniform,
    /// Weighted bucket choice per position (65% zero, 2% low, 25% ascii, 8% high)
    #[serde(alias = "mixed_bucket")]
    #[value(alias = "mixed-bucket")]
    Mixed,
    /// Runs of bytes from one bucket
    Clustered,
    /// Two-valued bytes
    Bernoulli,
    /// Poisson counts
    Poisson,
    /// Binomial counts
    Binomial,
    /// Failures before the first success
    Geometric,
    /// Failures before the r-th success
    #[value(name = "negative_binomial", alias = "negative-binomial")]
    NegativeBinomial,
    /// Normal variates
    Normal,
    /// Log-normal variates
    Lognormal,
    /// Exponential variates
    Exponential,
    /// Power-law ranks
    Zipf,
    /// Beta variates
    Beta,
    /// Gamma variates
    Gamma,
    /// Bucket chain with a stay probability
    Markov,
    /// Weighted blend of independent modes
    Mixture,
}

impl ModeName {
    pub const ALL: [ModeName; 16] = [
        ModeName::Uniform,
        ModeName::Mixed,
        ModeName::Clustered,
        ModeName::Bernoulli,
        ModeName::Poisson,
        ModeName::Binomial,
        ModeName::Geometric,
        ModeName::NegativeBinomial,
        ModeName::Normal,
        ModeName::Lognormal,
        ModeName::Exponential,
        ModeName::Zipf,
        ModeName::Beta,
        ModeName::Gamma,
        ModeName::Markov,
        ModeName::Mixture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeName::Uniform => "uniform",
            ModeName::Mixed => "mixed",
            ModeName::Clustered => "clustered",
            ModeName::Bernoulli => "bernoulli",
            ModeName::Poisson => "poisson",
            ModeName::Binomial => "binomial",
            ModeName::Geometric => "geometric",
            ModeName::NegativeBinomial => "negative_binomial",
            ModeName::Normal => "normal",
            ModeName::Lognormal => "lognormal",
            ModeName::Exponential => "exponential",
            ModeName::Zipf => "zipf",
            ModeName::Beta => "beta",
            ModeName::Gamma => "gamma",
            ModeName::Markov => "markov",
            ModeName::Mixture => "mixture",
        }
    }

    /// True for modes that sample each byte on their own (valid mixture components)
    pub fn is_independent(&self) -> bool {
        !matches!(self, ModeName::Clustered | ModeName::Markov | ModeName::Mixture)
    }
}

impl fmt::Display for ModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "mixed_bucket" => return Ok(ModeName::Mixed),
            other => {
                if let Some(mode) = ModeName::ALL.iter().find(|m| m.as_str() == other) {
                    return Ok(*mode);
                }
            }
        }
        anyhow::bail!("unknown mode '{}'", s)
    }
}

/// Bernoulli: `one` with probability `p`, else `zero`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BernoulliParams {
    pub p: f64,
    pub zero: u8,
    pub one: u8,
}

impl Default for BernoulliParams {
    fn default() -> Self {
        Self { p: 0.12, zero: 0x00, one: 0xFF }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoissonParams {
    pub lambda: f64,
    pub scale: f64,
    pub offset: f64,
}

impl Default for PoissonParams {
    fn default() -> Self {
        Self { lambda: 24.0, scale: 1.0, offset: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BinomialParams {
    pub n: u32,
    pub p: f64,
    pub scale: f64,
    pub offset: f64,
}

impl Default for BinomialParams {
    fn default() -> Self {
        Self { n: 32, p: 0.3, scale: 6.0, offset: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometricParams {
    pub p: f64,
    pub scale: f64,
    pub offset: f64,
}

impl Default for GeometricParams {
    fn default() -> Self {
        Self { p: 0.08, scale: 6.0, offset: 0.0 }
    }
}

/// Negative binomial: failures before `r` successes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NegativeBinomialParams {
    pub r: u32,
    pub p: f64,
    pub scale: f64,
    pub offset: f64,
}

impl Default for NegativeBinomialParams {
    fn default() -> Self {
        Self { r: 4, p: 0.15, scale: 3.0, offset: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalParams {
    pub mu: f64,
    pub sigma: f64,
    pub scale: f64,
    pub offset: f64,
}

impl Default for NormalParams {
    fn default() -> Self {
        Self { mu: 128.0, sigma: 35.0, scale: 1.0, offset: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LognormalParams {
    pub mu: f64,
    pub sigma: f64,
    pub scale: f64,
    pub offset: f64,
}

impl Default for LognormalParams {
    fn default() -> Self {
        Self { mu: 3.2, sigma: 0.9, scale: 10.0, offset: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExponentialParams {
    pub lambda: f64,
    pub scale: f64,
    pub offset: f64,
}

impl Default for ExponentialParams {
    fn default() -> Self {
        Self { lambda: 0.08, scale: 16.0, offset: 0.0 }
    }
}

/// Zipf: exponent `s` over ranks 1..=`k_max`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZipfParams {
    pub s: f64,
    pub k_max: usize,
    pub scale: f64,
    pub offset: f64,
}

impl Default for ZipfParams {
    fn default() -> Self {
        Self { s: 1.3, k_max: 64, scale: 4.0, offset: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BetaParams {
    pub a: f64,
    pub b: f64,
    pub scale: f64,
    pub offset: f64,
}

impl Default for BetaParams {
    fn default() -> Self {
        Self { a: 0.8, b: 2.8, scale: 255.0, offset: 0.0 }
    }
}

/// Gamma: shape `k` and scale `theta`; `scale`/`offset` are the byte mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GammaParams {
    pub shape: f64,
    pub theta: f64,
    pub scale: f64,
    pub offset: f64,
}

impl Default for GammaParams {
    fn default() -> Self {
        Self { shape: 2.0, theta: 18.0, scale: 1.0, offset: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkovParams {
    pub stay: f64,
    /// Bucket weights: zero, low, ascii, high
    pub init_weights: Vec<f64>,
}

impl Default for MarkovParams {
    fn default() -> Self {
        Self {
            stay: 0.965,
            init_weights: vec![0.55, 0.05, 0.30, 0.10],
        }
    }
}

/// Mixture components by mode name, with parallel weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MixtureParams {
    pub components: Vec<ModeName>,
    pub weights: Vec<f64>,
}

impl Default for MixtureParams {
    fn default() -> Self {
        Self {
            components: vec![ModeName::Normal, ModeName::Zipf, ModeName::Bernoulli],
            weights: vec![0.5, 0.3, 0.2],
        }
    }
}

/// All per-mode tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeParams {
    pub bernoulli: BernoulliParams,
    pub poisson: PoissonParams,
    pub binomial: BinomialParams,
    pub geometric: GeometricParams,
    pub negative_binomial: NegativeBinomialParams,
    pub normal: NormalParams,
    pub lognormal: LognormalParams,
    pub exponential: ExponentialParams,
    pub zipf: ZipfParams,
    pub beta: BetaParams,
    pub gamma: GammaParams,
    pub markov: MarkovParams,
    pub mixture: MixtureParams,
}

impl ModeParams {
    /// Resolve an independent mode into its tagged spec
    ///
    /// Returns `None` for clustered, markov and mixture.
    pub fn distribution_spec(&self, mode: ModeName) -> Option<DistributionSpec> {
        let spec = match mode {
            ModeName::Uniform => DistributionSpec::Uniform,
            ModeName::Mixed => DistributionSpec::MixedBucket,
            ModeName::Bernoulli => DistributionSpec::Bernoulli {
                p: self.bernoulli.p,
                zero: self.bernoulli.zero,
                one: self.bernoulli.one,
            },
            ModeName::Poisson => DistributionSpec::Poisson {
                lambda: self.poisson.lambda,
                map: AffineMap::new(self.poisson.scale, self.poisson.offset),
            },
            ModeName::Binomial => DistributionSpec::Binomial {
                n: self.binomial.n,
                p: self.binomial.p,
                map: AffineMap::new(self.binomial.scale, self.binomial.offset),
            },
            ModeName::Geometric => DistributionSpec::Geometric {
                p: self.geometric.p,
                map: AffineMap::new(self.geometric.scale, self.geometric.offset),
            },
            ModeName::NegativeBinomial => DistributionSpec::NegativeBinomial {
                r: self.negative_binomial.r,
                p: self.negative_binomial.p,
                map: AffineMap::new(self.negative_binomial.scale, self.negative_binomial.offset),
            },
            ModeName::Normal => DistributionSpec::Normal {
                mu: self.normal.mu,
                sigma: self.normal.sigma,
                map: AffineMap::new(self.normal.scale, self.normal.offset),
            },
            ModeName::Lognormal => DistributionSpec::Lognormal {
                mu: self.lognormal.mu,
                sigma: self.lognormal.sigma,
                map: AffineMap::new(self.lognormal.scale, self.lognormal.offset),
            },
            ModeName::Exponential => DistributionSpec::Exponential {
                lambda: self.exponential.lambda,
                map: AffineMap::new(self.exponential.scale, self.exponential.offset),
            },
            ModeName::Zipf => DistributionSpec::Zipf {
                s: self.zipf.s,
                k_max: self.zipf.k_max,
                map: AffineMap::new(self.zipf.scale, self.zipf.offset),
            },
            ModeName::Beta => DistributionSpec::Beta {
                a: self.beta.a,
                b: self.beta.b,
                map: AffineMap::new(self.beta.scale, self.beta.offset),
            },
            ModeName::Gamma => DistributionSpec::Gamma {
                shape: self.gamma.shape,
                theta: self.gamma.theta,
                map: AffineMap::new(self.gamma.scale, self.gamma.offset),
            },
            ModeName::Clustered | ModeName::Markov | ModeName::Mixture => return None,
        };
        Some(spec)
    }
}
