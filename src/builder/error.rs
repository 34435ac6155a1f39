//! Build errors for the engine builder.

use thiserror::Error;

/// A single invalid configuration setting.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("Error message must not be empty")]
    EmptyErrorMessage,

    #[error("Result precision of {decimals} decimals exceeds the maximum of {max}")]
    ResultDecimalsTooLarge { decimals: u32, max: u32 },

    #[error("Scientific threshold must be a positive finite number, got {0}")]
    InvalidScientificThreshold(f64),

    #[error("Input digit limit must be at least 1")]
    ZeroInputDigits,
}

/// Errors that can occur when building a calculator engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid engine configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
