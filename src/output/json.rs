//! JSON summary output
//!
//! Writes the run parameters and byte statistics as a single JSON document so
//! corpus generation can be tracked alongside the corpus itself.

use crate::config::Config;
use crate::stats::ByteStats;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Per-bucket count with its share of the stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonBucket {
    pub count: u64,
    pub percent: f64,
}

/// Complete JSON summary for one generated file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    pub output: PathBuf,
    pub mode: String,
    pub seed: i64,
    pub bytes: u64,
    pub mean: f64,
    pub zero: JsonBucket,
    pub low_control: JsonBucket,
    pub ascii: JsonBucket,
    pub high: JsonBucket,
}

impl JsonSummary {
    pub fn new(config: &Config, stats: &ByteStats) -> Self {
        use crate::bucket::Bucket;

        let bucket = |b: Bucket| JsonBucket {
            count: stats.count(b),
            percent: stats.percent(b),
        };

        Self {
            output: config.output.path.clone(),
            mode: config.mode.to_string(),
            seed: config.seed,
            bytes: stats.total,
            mean: stats.mean,
            zero: bucket(Bucket::Zero),
            low_control: bucket(Bucket::LowControl),
            ascii: bucket(Bucket::Ascii),
            high: bucket(Bucket::High),
        }
    }
}

/// Write the summary as pretty-printed JSON
pub fn write_json_summary(path: &Path, summary: &JsonSummary) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON summary: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary)
        .with_context(|| format!("Failed to write JSON summary: {}", path.display()))?;
    Ok(())
}
