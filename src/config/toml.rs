//! TOML profile parsing and CLI merging

use super::cli_convert::{parse_byte, parse_csv_floats, parse_csv_modes, parse_size};
use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML profile
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML profile from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with a profile (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(size) = &cli.size {
        config.size = ByteSize(parse_size(size)?);
    }
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    // Output
    if let Some(path) = &cli.output {
        config.output.path = path.clone();
    }
    if cli.overwrite {
        config.output.overwrite = true;
    }
    if cli.no_stats {
        config.output.stats = false;
    }
    if let Some(path) = &cli.stats_json {
        config.output.stats_json = Some(path.clone());
    }

    apply_cli_mode_overrides(&mut config.params, cli)?;

    Ok(config)
}

/// Copy any per-mode flag that was given into its table
fn apply_cli_mode_overrides(params: &mut ModeParams, cli: &Cli) -> Result<()> {
    fn set<T: Copy>(slot: &mut T, value: Option<T>) {
        if let Some(v) = value {
            *slot = v;
        }
    }

    set(&mut params.bernoulli.p, cli.bernoulli_p);
    if let Some(s) = &cli.bernoulli_zero {
        params.bernoulli.zero = parse_byte(s).context("--bernoulli-zero")?;
    }
    if let Some(s) = &cli.bernoulli_one {
        params.bernoulli.one = parse_byte(s).context("--bernoulli-one")?;
    }

    set(&mut params.poisson.lambda, cli.poisson_lambda);
    set(&mut params.poisson.scale, cli.poisson_scale);
    set(&mut params.poisson.offset, cli.poisson_offset);

    set(&mut params.binomial.n, cli.binomial_n);
    set(&mut params.binomial.p, cli.binomial_p);
    set(&mut params.binomial.scale, cli.binomial_scale);
    set(&mut params.binomial.offset, cli.binomial_offset);

    set(&mut params.geometric.p, cli.geometric_p);
    set(&mut params.geometric.scale, cli.geometric_scale);
    set(&mut params.geometric.offset, cli.geometric_offset);

    set(&mut params.negative_binomial.r, cli.negbin_r);
    set(&mut params.negative_binomial.p, cli.negbin_p);
    set(&mut params.negative_binomial.scale, cli.negbin_scale);
    set(&mut params.negative_binomial.offset, cli.negbin_offset);

    set(&mut params.normal.mu, cli.normal_mu);
    set(&mut params.normal.sigma, cli.normal_sigma);
    set(&mut params.normal.scale, cli.normal_scale);
    set(&mut params.normal.offset, cli.normal_offset);

    set(&mut params.lognormal.mu, cli.lognormal_mu);
    set(&mut params.lognormal.sigma, cli.lognormal_sigma);
    set(&mut params.lognormal.scale, cli.lognormal_scale);
    set(&mut params.lognormal.offset, cli.lognormal_offset);

    set(&mut params.exponential.lambda, cli.exponential_lambda);
    set(&mut params.exponential.scale, cli.exponential_scale);
    set(&mut params.exponential.offset, cli.exponential_offset);

    set(&mut params.zipf.s, cli.zipf_s);
    set(&mut params.zipf.k_max, cli.zipf_k_max);
    set(&mut params.zipf.scale, cli.zipf_scale);
    set(&mut params.zipf.offset, cli.zipf_offset);

    set(&mut params.beta.a, cli.beta_a);
    set(&mut params.beta.b, cli.beta_b);
    set(&mut params.beta.scale, cli.beta_scale);
    set(&mut params.beta.offset, cli.beta_offset);

    set(&mut params.gamma.shape, cli.gamma_shape);
    set(&mut params.gamma.theta, cli.gamma_theta);
    set(&mut params.gamma.scale, cli.gamma_byte_scale);
    set(&mut params.gamma.offset, cli.gamma_offset);

    set(&mut params.markov.stay, cli.markov_stay);
    if let Some(s) = &cli.markov_init_weights {
        params.markov.init_weights = parse_csv_floats(s).context("--markov-init-weights")?;
    }

    if let Some(s) = &cli.mixture_components {
        params.mixture.components = parse_csv_modes(s).context("--mixture-components")?;
    }
    if let Some(s) = &cli.mixture_weights {
        params.mixture.weights = parse_csv_floats(s).context("--mixture-weights")?;
    }

    Ok(())
}
