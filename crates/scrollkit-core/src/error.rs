//! Error types surfaced by the core.

use thiserror::Error;

/// Rejected configuration. Produced by [`Config::validate`](crate::Config::validate)
/// before a coordinator is built; nothing else in the core fails.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("wave.frame_skip must be at least 1")]
    ZeroFrameSkip,
}
