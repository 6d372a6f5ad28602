//! Byte-stream summary statistics
//!
//! Pure aggregation over a finished stream: how many bytes fell in each
//! bucket, and the mean byte value. Used by the text and JSON reporters.

use crate::bucket::Bucket;
use serde::{Deserialize, Serialize};

/// Bucket counts and mean over a byte stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ByteStats {
    pub total: u64,
    pub zero: u64,
    pub low_control: u64,
    pub ascii: u64,
    pub high: u64,
    pub mean: f64,
}

impl ByteStats {
    /// Aggregate a stream
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut histogram = [0u64; 256];
        for &b in data {
            histogram[b as usize] += 1;
        }

        let mut stats = ByteStats {
            total: data.len() as u64,
            ..Default::default()
        };
        let mut sum: u64 = 0;

        for (value, &count) in histogram.iter().enumerate() {
            sum += value as u64 * count;
            match Bucket::classify(value as u8) {
                Bucket::Zero => stats.zero += count,
                Bucket::LowControl => stats.low_control += count,
                Bucket::Ascii => stats.ascii += count,
                Bucket::High => stats.high += count,
            }
        }

        if stats.total > 0 {
            stats.mean = sum as f64 / stats.total as f64;
        }
        stats
    }

    /// Count for one bucket
    pub fn count(&self, bucket: Bucket) -> u64 {
        match bucket {
            Bucket::Zero => self.zero,
            Bucket::LowControl => self.low_control,
            Bucket::Ascii => self.ascii,
            Bucket::High => self.high,
        }
    }

    /// Share of the stream in a bucket, as a percentage
    pub fn percent(&self, bucket: Bucket) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.count(bucket) as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stream() {
        let stats = ByteStats::from_bytes(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.percent(Bucket::Zero), 0.0);
    }

    #[test]
    fn test_bucket_counts() {
        let data = [0x00, 0x00, 0x01, 0x1F, 0x20, 0x41, 0x7E, 0x7F, 0xFF, 0x80];
        let stats = ByteStats::from_bytes(&data);

        assert_eq!(stats.total, 10);
        assert_eq!(stats.zero, 2);
        assert_eq!(stats.low_control, 2);
        assert_eq!(stats.ascii, 3);
        assert_eq!(stats.high, 3);
        assert_eq!(stats.zero + stats.low_control + stats.ascii + stats.high, stats.total);
    }

    #[test]
    fn test_mean_and_percent() {
        let stats = ByteStats::from_bytes(&[0x00, 0xFF, 0x00, 0xFF]);
        assert!((stats.mean - 127.5).abs() < 1e-12);
        assert!((stats.percent(Bucket::Zero) - 50.0).abs() < 1e-12);
        assert!((stats.percent(Bucket::High) - 50.0).abs() < 1e-12);
    }
}
