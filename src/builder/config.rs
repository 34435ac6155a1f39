//! Engine configuration and its validation.

use crate::builder::error::ConfigViolation;
use crate::core::{DisplayFormat, DEFAULT_HISTORY_CAPACITY, DEFAULT_RESULT_DECIMALS};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Delay before an error message is replaced by a cleared display.
pub const DEFAULT_ERROR_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Message shown after a division by zero.
pub const DEFAULT_ERROR_MESSAGE: &str = "Cannot divide by zero";

/// Largest supported rounding precision; `10^15` is still exact in `f64`.
pub const MAX_RESULT_DECIMALS: u32 = 15;

/// Tunable engine behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of results kept in history
    pub history_capacity: usize,

    /// How long the error message stays up before the display resets
    pub error_reset_delay: Duration,

    /// Localised message rendered on division by zero
    pub error_message: String,

    /// Display formatting rules
    pub display: DisplayFormat,

    /// Decimal places results and memory are rounded to
    pub result_decimals: u32,

    /// Maximum digits accepted in the entry buffer, unlimited if `None`
    pub max_input_digits: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            error_reset_delay: DEFAULT_ERROR_RESET_DELAY,
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            display: DisplayFormat::default(),
            result_decimals: DEFAULT_RESULT_DECIMALS,
            max_input_digits: None,
        }
    }
}

impl EngineConfig {
    /// Check every setting, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.history_capacity == 0 {
            Validation::fail(ConfigViolation::ZeroHistoryCapacity)
        } else {
            Validation::success(())
        });

        checks.push(if self.error_message.trim().is_empty() {
            Validation::fail(ConfigViolation::EmptyErrorMessage)
        } else {
            Validation::success(())
        });

        checks.push(if self.result_decimals > MAX_RESULT_DECIMALS {
            Validation::fail(ConfigViolation::ResultDecimalsTooLarge {
                decimals: self.result_decimals,
                max: MAX_RESULT_DECIMALS,
            })
        } else {
            Validation::success(())
        });

        let threshold = self.display.scientific_threshold;
        checks.push(if !threshold.is_finite() || threshold <= 0.0 {
            Validation::fail(ConfigViolation::InvalidScientificThreshold(threshold))
        } else {
            Validation::success(())
        });

        if let Some(max) = self.max_input_digits {
            checks.push(if max == 0 {
                Validation::fail(ConfigViolation::ZeroInputDigits)
            } else {
                Validation::success(())
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
