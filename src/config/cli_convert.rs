//! CLI to Config conversion utilities

use super::params::ModeName;
use super::{toml, Config};
use crate::config::cli::Cli;
use anyhow::{Context, Result};

/// Parse a size string (e.g., "4096", "64k", "1M", "2gb") to bytes
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("kb").or_else(|| s.strip_suffix('k')) {
        (n, 1024u64)
    } else if let Some(n) = s.strip_suffix("mb").or_else(|| s.strip_suffix('m')) {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("gb").or_else(|| s.strip_suffix('g')) {
        (n, 1024 * 1024 * 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid size format: {}", s))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| anyhow::anyhow!("Size too large: {}", s))
}

/// Parse a byte value written as decimal, 0x.., 0o.. or 0b..
pub fn parse_byte(s: &str) -> Result<u8> {
    let t = s.trim().to_lowercase();

    let value = if let Some(hex) = t.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else if let Some(oct) = t.strip_prefix("0o") {
        u32::from_str_radix(oct, 8)
    } else if let Some(bin) = t.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        t.parse::<u32>()
    }
    .with_context(|| format!("Invalid byte value: {}", s))?;

    u8::try_from(value).map_err(|_| anyhow::anyhow!("Byte value out of range 0..=255: {}", s))
}

/// Parse a comma-separated list of floats ("0.5,0.3,0.2")
///
/// Every entry must be present: "1,,2" is an error rather than two values,
/// since the position of a weight decides which bucket or component it
/// belongs to.
pub fn parse_csv_floats(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .map(|part| {
            if part.is_empty() {
                anyhow::bail!("empty entry in comma-separated float list: '{}'", s);
            }
            part.parse::<f64>()
                .with_context(|| format!("Invalid number in list: {}", part))
        })
        .collect()
}

/// Parse a comma-separated list of mode names ("normal,zipf,bernoulli")
pub fn parse_csv_modes(s: &str) -> Result<Vec<ModeName>> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<ModeName>())
        .collect()
}

/// Build the run configuration: TOML profile (if any) with CLI flags on top
pub fn build_config_from_cli(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => toml::parse_toml_file(path)?,
        None => Config::default(),
    };

    toml::merge_cli_with_config(cli, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_bytes() {
        assert_eq!(parse_size("1024").unwrap(), 1024);
        assert_eq!(parse_size(" 512 ").unwrap(), 512);
    }

    #[test]
    fn test_parse_size_kb() {
        assert_eq!(parse_size("4k").unwrap(), 4096);
        assert_eq!(parse_size("4K").unwrap(), 4096);
        assert_eq!(parse_size("4kb").unwrap(), 4096);
        assert_eq!(parse_size("4KB").unwrap(), 4096);
    }

    #[test]
    fn test_parse_size_mb() {
        assert_eq!(parse_size("1m").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("100M").unwrap(), 100 * 1024 * 1024);
        assert_eq!(parse_size("1mb").unwrap(), 1024 * 1024);
    }

    #[test]
    fn test_parse_size_gb() {
        assert_eq!(parse_size("1g").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_size("2GB").unwrap(), 2 * 1024 * 1024 * 1024);
    }

    #[test]
    fn test_parse_size_invalid() {
        assert!(parse_size("").is_err());
        assert!(parse_size("12q").is_err());
        assert!(parse_size("-1k").is_err());
        assert!(parse_size("99999999999999999999g").is_err());
    }

    #[test]
    fn test_parse_byte() {
        assert_eq!(parse_byte("0").unwrap(), 0);
        assert_eq!(parse_byte("255").unwrap(), 255);
        assert_eq!(parse_byte("0xFF").unwrap(), 255);
        assert_eq!(parse_byte("0x41").unwrap(), b'A');
        assert_eq!(parse_byte("0o17").unwrap(), 15);
        assert_eq!(parse_byte("0b101").unwrap(), 5);
        assert!(parse_byte("256").is_err());
        assert!(parse_byte("0x100").is_err());
        assert!(parse_byte("abc").is_err());
    }

    #[test]
    fn test_parse_csv_floats() {
        assert_eq!(parse_csv_floats("0.5,0.3,0.2").unwrap(), vec![0.5, 0.3, 0.2]);
        assert_eq!(parse_csv_floats(" 1 , 2 ").unwrap(), vec![1.0, 2.0]);
        assert!(parse_csv_floats("0.5,x").is_err());
    }

    #[test]
    fn test_parse_csv_floats_rejects_empty_entries() {
        for input in ["", "1,,2,3,4", "0.5,", ",0.5", " , "] {
            let err = parse_csv_floats(input).unwrap_err();
            assert!(err.to_string().contains("empty entry"), "input {:?}: {}", input, err);
        }
    }

    #[test]
    fn test_build_config_rejects_gapped_markov_weights() {
        let cli = Cli {
            mode: Some(ModeName::Markov),
            markov_init_weights: Some("1,,2,3,4".to_string()),
            ..Default::default()
        };
        let err = build_config_from_cli(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("empty entry"));
    }

    #[test]
    fn test_parse_csv_modes() {
        assert_eq!(
            parse_csv_modes("normal, zipf,negative-binomial").unwrap(),
            vec![ModeName::Normal, ModeName::Zipf, ModeName::NegativeBinomial]
        );
        assert!(parse_csv_modes("normal,pareto").is_err());
    }

    #[test]
    fn test_build_config_without_profile() {
        let cli = Cli {
            seed: Some(7),
            ..Default::default()
        };
        let config = build_config_from_cli(&cli).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.mode, ModeName::Clustered);
    }
}
