//! CLI argument parsing using clap
//!
//! Every value flag is optional so a TOML profile can supply it; anything
//! left unset falls back to the profile, then to the built-in defaults.

use super::params::ModeName;
use clap::Parser;
use std::path::PathBuf;

/// bytesynth - deterministic synthetic byte-stream generator
#[derive(Parser, Debug, Default)]
#[command(name = "bytesynth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Basic Options ===
    /// Output file path [default: synthetic.bin]
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Number of bytes to generate (e.g., 4096, 64k, 1m, 2g) [default: 1m]
    #[arg(short = 's', long)]
    pub size: Option<String>,

    /// RNG seed, any 64-bit signed integer [default: 42]
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Generation mode [default: clustered]
    #[arg(long, value_enum)]
    pub mode: Option<ModeName>,

    /// Replace the output file if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Do not print the byte summary
    #[arg(long)]
    pub no_stats: bool,

    /// Also write the byte summary as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub stats_json: Option<PathBuf>,

    // === Bernoulli ===
    /// Probability of emitting the "one" byte [default: 0.12]
    #[arg(long)]
    pub bernoulli_p: Option<f64>,

    /// Byte emitted on failure; decimal, 0x, 0o or 0b [default: 0x00]
    #[arg(long)]
    pub bernoulli_zero: Option<String>,

    /// Byte emitted on success; decimal, 0x, 0o or 0b [default: 0xFF]
    #[arg(long)]
    pub bernoulli_one: Option<String>,

    // === Poisson ===
    /// Poisson rate [default: 24]
    #[arg(long)]
    pub poisson_lambda: Option<f64>,

    #[arg(long)]
    pub poisson_scale: Option<f64>,

    #[arg(long)]
    pub poisson_offset: Option<f64>,

    // === Binomial ===
    /// Number of trials [default: 32]
    #[arg(long)]
    pub binomial_n: Option<u32>,

    /// Success probability per trial [default: 0.3]
    #[arg(long)]
    pub binomial_p: Option<f64>,

    #[arg(long)]
    pub binomial_scale: Option<f64>,

    #[arg(long)]
    pub binomial_offset: Option<f64>,

    // === Geometric ===
    /// Success probability [default: 0.08]
    #[arg(long)]
    pub geometric_p: Option<f64>,

    #[arg(long)]
    pub geometric_scale: Option<f64>,

    #[arg(long)]
    pub geometric_offset: Option<f64>,

    // === Negative binomial ===
    /// Number of successes [default: 4]
    #[arg(long)]
    pub negbin_r: Option<u32>,

    /// Success probability [default: 0.15]
    #[arg(long)]
    pub negbin_p: Option<f64>,

    #[arg(long)]
    pub negbin_scale: Option<f64>,

    #[arg(long)]
    pub negbin_offset: Option<f64>,

    // === Normal ===
    /// Mean [default: 128]
    #[arg(long)]
    pub normal_mu: Option<f64>,

    /// Standard deviation [default: 35]
    #[arg(long)]
    pub normal_sigma: Option<f64>,

    #[arg(long)]
    pub normal_scale: Option<f64>,

    #[arg(long)]
    pub normal_offset: Option<f64>,

    // === Log-normal ===
    /// Mean of the underlying normal [default: 3.2]
    #[arg(long)]
    pub lognormal_mu: Option<f64>,

    /// Standard deviation of the underlying normal [default: 0.9]
    #[arg(long)]
    pub lognormal_sigma: Option<f64>,

    #[arg(long)]
    pub lognormal_scale: Option<f64>,

    #[arg(long)]
    pub lognormal_offset: Option<f64>,

    // === Exponential ===
    /// Rate [default: 0.08]
    #[arg(long)]
    pub exponential_lambda: Option<f64>,

    #[arg(long)]
    pub exponential_scale: Option<f64>,

    #[arg(long)]
    pub exponential_offset: Option<f64>,

    // === Zipf ===
    /// Exponent [default: 1.3]
    #[arg(long)]
    pub zipf_s: Option<f64>,

    /// Largest rank [default: 64]
    #[arg(long)]
    pub zipf_k_max: Option<usize>,

    #[arg(long)]
    pub zipf_scale: Option<f64>,

    #[arg(long)]
    pub zipf_offset: Option<f64>,

    // === Beta ===
    /// Alpha [default: 0.8]
    #[arg(long)]
    pub beta_a: Option<f64>,

    /// Beta [default: 2.8]
    #[arg(long)]
    pub beta_b: Option<f64>,

    #[arg(long)]
    pub beta_scale: Option<f64>,

    #[arg(long)]
    pub beta_offset: Option<f64>,

    // === Gamma ===
    /// Shape k [default: 2]
    #[arg(long)]
    pub gamma_shape: Option<f64>,

    /// Scale theta [default: 18]
    #[arg(long)]
    pub gamma_theta: Option<f64>,

    /// Byte mapping scale [default: 1]
    #[arg(long)]
    pub gamma_byte_scale: Option<f64>,

    #[arg(long)]
    pub gamma_offset: Option<f64>,

    // === Markov ===
    /// Probability of staying in the current bucket [default: 0.965]
    #[arg(long)]
    pub markov_stay: Option<f64>,

    /// Initial bucket weights zero,low,ascii,high [default: 0.55,0.05,0.30,0.10]
    #[arg(long)]
    pub markov_init_weights: Option<String>,

    // === Mixture ===
    /// Comma-separated component modes [default: normal,zipf,bernoulli]
    #[arg(long)]
    pub mixture_components: Option<String>,

    /// Comma-separated component weights [default: 0.5,0.3,0.2]
    #[arg(long)]
    pub mixture_weights: Option<String>,

    // === Configuration File ===
    /// TOML profile; flags given on the command line override it
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dry run - validate and print the configuration without generating
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
