//! Human-readable text output

use crate::bucket::Bucket;
use crate::config::Config;
use crate::stats::ByteStats;
use std::path::Path;

/// One-line confirmation printed after the stream is written
pub fn format_written(len: usize, path: &Path, config: &Config) -> String {
    format!(
        "wrote {} bytes to {} (mode={}, seed={})",
        len,
        path.display(),
        config.mode,
        config.seed
    )
}

/// Render the distribution summary
///
/// ```text
/// bytes: 1048576
/// mean byte value:           42.000
/// zero [0x00]:              1000 ( 50.00%)
/// ```
pub fn format_stats(stats: &ByteStats) -> String {
    let rows = [
        ("zero [0x00]:       ", Bucket::Zero),
        ("low  [0x01..0x1F]: ", Bucket::LowControl),
        ("ascii[0x20..0x7E]: ", Bucket::Ascii),
        ("high [0x7F..0xFF]: ", Bucket::High),
    ];

    let mut out = String::new();
    out.push_str(&format!("bytes: {}\n", stats.total));
    out.push_str(&format!("mean byte value:       {:10.3}\n", stats.mean));
    for (label, bucket) in rows {
        out.push_str(&format!(
            "{}   {:10} ({:6.2}%)\n",
            label,
            stats.count(bucket),
            stats.percent(bucket)
        ));
    }
    out
}

/// Print the distribution summary to stdout
pub fn print_stats(stats: &ByteStats) {
    print!("{}", format_stats(stats));
}

/// Print the resolved configuration (used before generation and by `--dry-run`)
pub fn print_configuration(config: &Config) {
    println!("Configuration:");
    println!("  Output: {}", config.output.path.display());
    println!("  Size:   {} ({})", format_bytes(config.size.bytes()), config.size.bytes());
    println!("  Seed:   {}", config.seed);
    println!("  Mode:   {}", config.mode);
    for line in config.mode_parameter_lines() {
        println!("    {}", line);
    }
}

/// Format bytes with appropriate units
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
