//! bytesynth - deterministic synthetic byte-stream generator
//!
//! Produces byte buffers whose value distribution follows a chosen statistical
//! model, for exercising compressors, parsers, entropy estimators and storage
//! paths with reproducible input. The same seed and parameters always yield
//! the same bytes.
//!
//! # Architecture
//!
//! - **Core engine**: seeded RNG, byte buckets, weighted choice, Zipf tables,
//!   per-byte samplers and the affine byte mapping
//! - **Composite generators**: clustered runs, bucket Markov chain, weighted
//!   mixtures of independent modes
//! - **Config layer**: CLI flags, TOML profiles, validation, plan resolution
//! - **Output**: file sink with overwrite protection, text and JSON summaries
//!
//! ```
//! use bytesynth::generator::{generate, GenerationMode, GenerationPlan};
//!
//! let plan = GenerationPlan { seed: 42, size: 4096, mode: GenerationMode::Clustered };
//! let bytes = generate(&plan).unwrap();
//! assert_eq!(bytes.len(), 4096);
//! assert_eq!(bytes, generate(&plan).unwrap());
//! ```

pub mod bucket;
pub mod config;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod output;
pub mod rng;
pub mod stats;

// Re-export commonly used types
pub use config::Config;
pub use error::{SynthError, SynthResult};
pub use generator::{generate, GenerationMode, GenerationPlan};
pub use rng::DeterministicRng;

/// Result type used throughout bytesynth
pub type Result<T> = anyhow::Result<T>;
