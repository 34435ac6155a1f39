//! Binary operations and result arithmetic.
//!
//! Everything here is pure: operations take two operands and return a
//! rounded result or an error, without touching engine state.

use super::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places results are rounded to by default.
pub const DEFAULT_RESULT_DECIMALS: u32 = 8;

/// One of the four binary operations.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operation;
///
/// assert_eq!(Operation::Multiply.apply(3.0, 4.0), Ok(12.0));
/// assert!(Operation::Divide.apply(5.0, 0.0).is_err());
/// assert_eq!(Operation::Divide.symbol(), "÷");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Symbol used in history expressions.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Division fails with [`CalcError::DivisionByZero`] when `rhs` is
    /// exactly zero. No rounding is applied here; see [`round_result`].
    pub fn apply(&self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Round a result to `decimals` places to hide binary floating-point noise.
///
/// Non-finite values are returned unchanged.
pub fn round_result(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() || value.fract() == 0.0 {
        return value + 0.0;
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    // Past 2^52 the scaled value has no fractional bits left to round.
    if scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    let rounded = scaled.round() / factor;
    // Avoid rendering "-0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Parse an entry string into a number.
///
/// In-progress values such as `"12."` parse as `12`. Anything unparseable
/// yields `0.0`, which cannot occur for values produced by the engine.
pub fn parse_value(value: &str) -> f64 {
    let trimmed = value.strip_suffix('.').unwrap_or(value);
    match trimmed {
        "Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => trimmed.parse::<f64>().unwrap_or(0.0),
    }
}

/// Render a number the way it is stored in the entry buffer.
///
/// Whole numbers have no trailing `.0`, negative zero is normalised and
/// non-finite values use `Infinity`/`NaN`.
pub fn stringify_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
