//! Configuration validation
//!
//! Runs before any sampling. Only the tables the selected mode actually uses
//! are checked, so an odd value in an unused table never blocks a run.

use super::params::*;
use super::*;
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.size.bytes() == 0 {
        anyhow::bail!("size must be greater than 0");
    }
    if usize::try_from(config.size.bytes()).is_err() {
        anyhow::bail!("size {} does not fit in memory on this platform", config.size);
    }

    validate_mode(config.mode, &config.params)
}

/// Validate the parameters used by one mode
pub fn validate_mode(mode: ModeName, params: &ModeParams) -> Result<()> {
    match mode {
        ModeName::Uniform | ModeName::Mixed | ModeName::Clustered => Ok(()),
        ModeName::Bernoulli => validate_probability("bernoulli p", params.bernoulli.p),
        ModeName::Poisson => {
            let p = &params.poisson;
            if !p.lambda.is_finite() || p.lambda < 0.0 {
                anyhow::bail!("poisson lambda must be >= 0, got {}", p.lambda);
            }
            validate_mapping("poisson", p.scale, p.offset)
        }
        ModeName::Binomial => {
            let p = &params.binomial;
            if p.n == 0 {
                anyhow::bail!("binomial n must be > 0");
            }
            validate_probability("binomial p", p.p)?;
            validate_mapping("binomial", p.scale, p.offset)
        }
        ModeName::Geometric => {
            let p = &params.geometric;
            validate_probability("geometric p", p.p)?;
            if p.p == 0.0 {
                anyhow::bail!("geometric p must be > 0");
            }
            validate_mapping("geometric", p.scale, p.offset)
        }
        ModeName::NegativeBinomial => {
            let p = &params.negative_binomial;
            if p.r == 0 {
                anyhow::bail!("negative_binomial r must be > 0");
            }
            validate_probability("negative_binomial p", p.p)?;
            if p.p == 0.0 {
                anyhow::bail!("negative_binomial p must be > 0");
            }
            validate_mapping("negative_binomial", p.scale, p.offset)
        }
        ModeName::Normal => {
            let p = &params.normal;
            validate_finite("normal mu", p.mu)?;
            validate_positive("normal sigma", p.sigma)?;
            validate_mapping("normal", p.scale, p.offset)
        }
        ModeName::Lognormal => {
            let p = &params.lognormal;
            validate_finite("lognormal mu", p.mu)?;
            validate_positive("lognormal sigma", p.sigma)?;
            validate_mapping("lognormal", p.scale, p.offset)
        }
        ModeName::Exponential => {
            let p = &params.exponential;
            validate_positive("exponential lambda", p.lambda)?;
            validate_mapping("exponential", p.scale, p.offset)
        }
        ModeName::Zipf => {
            let p = &params.zipf;
            validate_positive("zipf s", p.s)?;
            if p.k_max == 0 {
                anyhow::bail!("zipf k_max must be > 0");
            }
            validate_mapping("zipf", p.scale, p.offset)
        }
        ModeName::Beta => {
            let p = &params.beta;
            validate_positive("beta a", p.a)?;
            validate_positive("beta b", p.b)?;
            validate_mapping("beta", p.scale, p.offset)
        }
        ModeName::Gamma => {
            let p = &params.gamma;
            validate_positive("gamma shape", p.shape)?;
            validate_positive("gamma theta", p.theta)?;
            validate_mapping("gamma", p.scale, p.offset)
        }
        ModeName::Markov => {
            let p = &params.markov;
            validate_probability("markov stay", p.stay)?;
            if p.init_weights.len() != 4 {
                anyhow::bail!(
                    "markov init_weights must have 4 values (zero, low, ascii, high), got {}",
                    p.init_weights.len()
                );
            }
            validate_weights("markov init_weights", &p.init_weights)
        }
        ModeName::Mixture => validate_mixture(params),
    }
}

fn validate_mixture(params: &ModeParams) -> Result<()> {
    let mixture = &params.mixture;

    if mixture.components.is_empty() {
        anyhow::bail!("mixture needs at least one component");
    }
    if mixture.components.len() != mixture.weights.len() {
        anyhow::bail!(
            "mixture has {} components but {} weights",
            mixture.components.len(),
            mixture.weights.len()
        );
    }
    validate_weights("mixture weights", &mixture.weights)?;

    for &component in &mixture.components {
        if !component.is_independent() {
            anyhow::bail!("unsupported mixture component '{}'", component);
        }
        validate_mode(component, params)?;
    }

    Ok(())
}

fn validate_probability(name: &str, p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        anyhow::bail!("{} must be between 0.0 and 1.0, got {}", name, p);
    }
    Ok(())
}

fn validate_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        anyhow::bail!("{} must be > 0, got {}", name, value);
    }
    Ok(())
}

fn validate_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        anyhow::bail!("{} must be finite, got {}", name, value);
    }
    Ok(())
}

fn validate_mapping(mode: &str, scale: f64, offset: f64) -> Result<()> {
    if !scale.is_finite() || !offset.is_finite() {
        anyhow::bail!("{} scale and offset must be finite, got scale={} offset={}", mode, scale, offset);
    }
    Ok(())
}

fn validate_weights(name: &str, weights: &[f64]) -> Result<()> {
    if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        anyhow::bail!("{} must be finite and >= 0, got {}", name, w);
    }
    if weights.iter().sum::<f64>() <= 0.0 {
        anyhow::bail!("{} must not sum to zero", name);
    }
    Ok(())
}
