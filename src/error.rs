//! Error type for the sampling engine

use thiserror::Error;

/// Errors raised by the sampling engine
///
/// Parameters are validated by the configuration layer before generation
/// starts, so the only failure left for the engine is a distribution handle
/// that `rand_distr` refuses to construct.
#[derive(Error, Debug)]
pub enum SynthError {
    #[error("Invalid {distribution} parameters: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        reason: String,
    },
}

pub type SynthResult<T> = Result<T, SynthError>;
