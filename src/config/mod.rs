//! Configuration module
//!
//! Handles CLI argument parsing, TOML profiles, validation, and resolution of
//! the per-mode parameter tables into a [`GenerationPlan`].
//!
//! The flat shape (every mode's table present at once) lives only here. The
//! engine receives a tagged [`GenerationMode`] carrying just the parameters
//! the selected mode uses.

pub mod cli;
pub mod cli_convert;
pub mod params;
pub mod toml;
pub mod validator;

use crate::generator::{GenerationMode, GenerationPlan, MarkovSpec, MixtureComponent, MixtureSpec};
use anyhow::{Context, Result};
use params::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// RNG seed; negative values wrap to their two's-complement `u64`
    pub seed: i64,
    /// Output size in bytes
    pub size: ByteSize,
    /// Generation mode
    pub mode: ModeName,
    pub output: OutputConfig,
    /// Per-mode parameter tables (`[bernoulli]`, `[zipf]`, ...)
    #[serde(flatten)]
    pub params: ModeParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 42,
            size: ByteSize(1024 * 1024),
            mode: ModeName::Clustered,
            output: OutputConfig::default(),
            params: ModeParams::default(),
        }
    }
}

/// Output and reporting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output file path
    pub path: PathBuf,
    /// Replace an existing output file
    pub overwrite: bool,
    /// Print the text summary after writing
    pub stats: bool,
    /// Optional JSON summary path
    pub stats_json: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("synthetic.bin"),
            overwrite: false,
            stats: true,
            stats_json: None,
        }
    }
}

/// Byte count that deserializes from an integer or a suffixed string ("1m")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ByteSize(pub u64);

impl ByteSize {
    pub fn bytes(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ByteSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bytes(u64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bytes(n) => Ok(ByteSize(n)),
            Repr::Text(s) => cli_convert::parse_size(&s)
                .map(ByteSize)
                .map_err(serde::de::Error::custom),
        }
    }
}

impl Config {
    /// Resolve into the plan the engine runs
    ///
    /// Expects a validated config; structural problems (wrong markov weight
    /// count, composite mixture component) are still reported as errors.
    pub fn generation_plan(&self) -> Result<GenerationPlan> {
        let size = usize::try_from(self.size.bytes())
            .context("size does not fit in memory on this platform")?;

        let mode = match self.mode {
            ModeName::Clustered => GenerationMode::Clustered,
            ModeName::Markov => {
                let init_weights: [f64; 4] = self
                    .params
                    .markov
                    .init_weights
                    .as_slice()
                    .try_into()
                    .map_err(|_| anyhow::anyhow!("markov init_weights must have 4 values"))?;
                GenerationMode::Markov(MarkovSpec {
                    stay_prob: self.params.markov.stay,
                    init_weights,
                })
            }
            ModeName::Mixture => {
                let mixture = &self.params.mixture;
                if mixture.components.len() != mixture.weights.len() {
                    anyhow::bail!("mixture components and weights must have the same length");
                }
                let components = mixture
                    .components
                    .iter()
                    .zip(&mixture.weights)
                    .map(|(&name, &weight)| {
                        let spec = self
                            .params
                            .distribution_spec(name)
                            .ok_or_else(|| anyhow::anyhow!("unsupported mixture component '{}'", name))?;
                        Ok(MixtureComponent { spec, weight })
                    })
                    .collect::<Result<Vec<_>>>()?;
                GenerationMode::Mixture(MixtureSpec::new(components))
            }
            independent => {
                let spec = self
                    .params
                    .distribution_spec(independent)
                    .ok_or_else(|| anyhow::anyhow!("mode '{}' is not an independent mode", independent))?;
                GenerationMode::Independent(spec)
            }
        };

        Ok(GenerationPlan {
            seed: self.seed as u64,
            size,
            mode,
        })
    }

    /// Parameter lines for the selected mode, for display
    pub fn mode_parameter_lines(&self) -> Vec<String> {
        let p = &self.params;
        match self.mode {
            ModeName::Uniform | ModeName::Mixed | ModeName::Clustered => vec![],
            ModeName::Bernoulli => vec![format!(
                "p={} zero=0x{:02X} one=0x{:02X}",
                p.bernoulli.p, p.bernoulli.zero, p.bernoulli.one
            )],
            ModeName::Poisson => vec![format!(
                "lambda={} scale={} offset={}",
                p.poisson.lambda, p.poisson.scale, p.poisson.offset
            )],
            ModeName::Binomial => vec![format!(
                "n={} p={} scale={} offset={}",
                p.binomial.n, p.binomial.p, p.binomial.scale, p.binomial.offset
            )],
            ModeName::Geometric => vec![format!(
                "p={} scale={} offset={}",
                p.geometric.p, p.geometric.scale, p.geometric.offset
            )],
            ModeName::NegativeBinomial => vec![format!(
                "r={} p={} scale={} offset={}",
                p.negative_binomial.r,
                p.negative_binomial.p,
                p.negative_binomial.scale,
                p.negative_binomial.offset
            )],
            ModeName::Normal => vec![format!(
                "mu={} sigma={} scale={} offset={}",
                p.normal.mu, p.normal.sigma, p.normal.scale, p.normal.offset
            )],
            ModeName::Lognormal => vec![format!(
                "mu={} sigma={} scale={} offset={}",
                p.lognormal.mu, p.lognormal.sigma, p.lognormal.scale, p.lognormal.offset
            )],
            ModeName::Exponential => vec![format!(
                "lambda={} scale={} offset={}",
                p.exponential.lambda, p.exponential.scale, p.exponential.offset
            )],
            ModeName::Zipf => vec![format!(
                "s={} k_max={} scale={} offset={}",
                p.zipf.s, p.zipf.k_max, p.zipf.scale, p.zipf.offset
            )],
            ModeName::Beta => vec![format!(
                "a={} b={} scale={} offset={}",
                p.beta.a, p.beta.b, p.beta.scale, p.beta.offset
            )],
            ModeName::Gamma => vec![format!(
                "shape={} theta={} scale={} offset={}",
                p.gamma.shape, p.gamma.theta, p.gamma.scale, p.gamma.offset
            )],
            ModeName::Markov => vec![format!(
                "stay={} init_weights={:?}",
                p.markov.stay, p.markov.init_weights
            )],
            ModeName::Mixture => p
                .mixture
                .components
                .iter()
                .zip(&p.mixture.weights)
                .map(|(name, weight)| format!("{} weight={}", name, weight))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::DistributionSpec;

    #[test]
    fn test_negative_seed_wraps() {
        let config = Config { seed: -1, ..Default::default() };
        assert_eq!(config.generation_plan().unwrap().seed, u64::MAX);

        let config = Config { seed: i64::MIN, ..Default::default() };
        assert_eq!(config.generation_plan().unwrap().seed, 1 << 63);
    }

    #[test]
    fn test_default_plan_is_clustered() {
        let plan = Config::default().generation_plan().unwrap();
        assert_eq!(plan.seed, 42);
        assert_eq!(plan.size, 1024 * 1024);
        assert_eq!(plan.mode, GenerationMode::Clustered);
    }

    #[test]
    fn test_independent_plan() {
        let config = Config { mode: ModeName::Bernoulli, ..Default::default() };
        match config.generation_plan().unwrap().mode {
            GenerationMode::Independent(DistributionSpec::Bernoulli { p, zero, one }) => {
                assert_eq!(p, 0.12);
                assert_eq!(zero, 0x00);
                assert_eq!(one, 0xFF);
            }
            other => panic!("Expected bernoulli, got {:?}", other),
        }
    }

    #[test]
    fn test_markov_plan() {
        let config = Config { mode: ModeName::Markov, ..Default::default() };
        match config.generation_plan().unwrap().mode {
            GenerationMode::Markov(spec) => {
                assert_eq!(spec.stay_prob, 0.965);
                assert_eq!(spec.init_weights, [0.55, 0.05, 0.30, 0.10]);
            }
            other => panic!("Expected markov, got {:?}", other),
        }
    }

    #[test]
    fn test_markov_wrong_weight_count() {
        let mut config = Config { mode: ModeName::Markov, ..Default::default() };
        config.params.markov.init_weights = vec![1.0, 1.0];
        assert!(config.generation_plan().is_err());
    }

    #[test]
    fn test_mixture_plan_uses_component_tables() {
        let mut config = Config { mode: ModeName::Mixture, ..Default::default() };
        config.params.normal.mu = 10.0;

        match config.generation_plan().unwrap().mode {
            GenerationMode::Mixture(mixture) => {
                assert_eq!(mixture.components.len(), 3);
                assert_eq!(mixture.components[0].weight, 0.5);
                match &mixture.components[0].spec {
                    DistributionSpec::Normal { mu, .. } => assert_eq!(*mu, 10.0),
                    other => panic!("Expected normal component, got {:?}", other),
                }
                assert_eq!(mixture.components[2].spec.name(), "bernoulli");
            }
            other => panic!("Expected mixture, got {:?}", other),
        }
    }

    #[test]
    fn test_mixture_rejects_composite_component() {
        let mut config = Config { mode: ModeName::Mixture, ..Default::default() };
        config.params.mixture.components = vec![ModeName::Normal, ModeName::Markov];
        config.params.mixture.weights = vec![0.5, 0.5];

        let err = config.generation_plan().unwrap_err();
        assert!(err.to_string().contains("unsupported mixture component 'markov'"));
    }

    #[test]
    fn test_mode_parameter_lines() {
        let config = Config { mode: ModeName::Zipf, ..Default::default() };
        assert_eq!(config.mode_parameter_lines(), vec!["s=1.3 k_max=64 scale=4 offset=0"]);

        let config = Config { mode: ModeName::Mixture, ..Default::default() };
        assert_eq!(config.mode_parameter_lines().len(), 3);
    }
}
