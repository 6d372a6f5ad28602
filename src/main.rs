//! bytesynth CLI entry point

use anyhow::{Context, Result};
use bytesynth::config::{cli::Cli, cli_convert, validator, Config};
use bytesynth::output::{file, json, text};
use bytesynth::stats::ByteStats;
use log::debug;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let config = cli_convert::build_config_from_cli(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;
    debug!("resolved configuration: {:?}", config);

    if cli.dry_run {
        text::print_configuration(&config);
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    run(&config)
}

/// Generate, write and report one stream
fn run(config: &Config) -> Result<()> {
    let plan = config.generation_plan()?;
    let data = bytesynth::generate(&plan).context("Generation failed")?;

    file::write_output(&config.output.path, &data, config.output.overwrite)?;
    println!("{}", text::format_written(data.len(), &config.output.path, config));

    if !config.output.stats && config.output.stats_json.is_none() {
        return Ok(());
    }

    let stats = ByteStats::from_bytes(&data);
    if config.output.stats {
        text::print_stats(&stats);
    }
    if let Some(path) = &config.output.stats_json {
        json::write_json_summary(path, &json::JsonSummary::new(config, &stats))?;
        debug!("wrote JSON summary to {}", path.display());
    }

    Ok(())
}

/// `--debug` lowers the default filter; an explicit RUST_LOG still wins
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
