//! Numeric entry state.
//!
//! `EntryState` holds the number being typed, the pending left operand and
//! operator, and whether the next digit starts a fresh number. The methods
//! here only edit the entry buffer; folding operations is the engine's job.

use super::digit::Digit;
use super::operation::{parse_value, stringify_value, Operation};
use serde::{Deserialize, Serialize};

/// Entry buffer and pending operation.
///
/// `current_value` is never empty and contains at most one decimal point.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Digit, EntryState};
///
/// let mut entry = EntryState::new();
/// entry.push_digit(Digit::try_from(1u8).unwrap(), None);
/// entry.push_decimal();
/// entry.push_digit(Digit::try_from(5u8).unwrap(), None);
/// entry.push_decimal();
/// assert_eq!(entry.current_value(), "1.5");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntryState {
    current_value: String,
    #[serde(with = "crate::core::number::option", default)]
    previous_value: Option<f64>,
    operation: Option<Operation>,
    awaiting_new_entry: bool,
}

impl Default for EntryState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryState {
    pub fn new() -> Self {
        Self {
            current_value: "0".to_string(),
            previous_value: None,
            operation: None,
            awaiting_new_entry: false,
        }
    }

    pub fn current_value(&self) -> &str {
        &self.current_value
    }

    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Numeric value of the entry buffer.
    pub fn current_number(&self) -> f64 {
        parse_value(&self.current_value)
    }

    /// Whether a left operand and operator are waiting for a right operand.
    pub fn has_pending_operation(&self) -> bool {
        self.previous_value.is_some() && self.operation.is_some()
    }

    /// Append a digit, or start a fresh number if awaiting one.
    ///
    /// With `max_digits` set, digits beyond that count are dropped.
    /// Returns `false` when the digit was dropped.
    pub fn push_digit(&mut self, digit: Digit, max_digits: Option<usize>) -> bool {
        if self.awaiting_new_entry {
            self.current_value = digit.to_string();
            self.awaiting_new_entry = false;
            return true;
        }

        if self.current_value == "0" || self.shows_non_finite() {
            self.current_value = digit.to_string();
            return true;
        }

        if let Some(max) = max_digits {
            let digits = self
                .current_value
                .chars()
                .filter(char::is_ascii_digit)
                .count();
            if digits >= max {
                return false;
            }
        }

        self.current_value.push(digit.as_char());
        true
    }

    /// Add a decimal point unless one is already present.
    pub fn push_decimal(&mut self) {
        if self.awaiting_new_entry || self.shows_non_finite() {
            self.current_value = "0.".to_string();
            self.awaiting_new_entry = false;
        } else if !self.current_value.contains('.') {
            self.current_value.push('.');
        }
    }

    /// Store the current number as the left operand of `operation`.
    pub fn begin_operation(&mut self, operation: Operation) {
        self.previous_value = Some(self.current_number());
        self.operation = Some(operation);
        self.awaiting_new_entry = true;
    }

    /// Replace the pending operator without touching the operands.
    pub fn replace_operation(&mut self, operation: Operation) {
        self.operation = Some(operation);
    }

    /// Take the pending operation, leaving none behind.
    pub fn take_pending(&mut self) -> Option<(f64, Operation)> {
        match (self.previous_value, self.operation) {
            (Some(previous), Some(operation)) => {
                self.previous_value = None;
                self.operation = None;
                Some((previous, operation))
            }
            _ => None,
        }
    }

    /// Show a computed result; the next digit starts a fresh number.
    pub fn show_result(&mut self, result: f64) {
        self.current_value = stringify_value(result);
        self.awaiting_new_entry = true;
    }

    /// Load a recalled value so that further digits extend it.
    pub fn load_value(&mut self, value: f64) {
        self.current_value = stringify_value(value);
        self.awaiting_new_entry = false;
    }

    /// Reset everything to the power-on state.
    pub fn clear(&mut self) {
        self.current_value = "0".to_string();
        self.previous_value = None;
        self.operation = None;
        self.awaiting_new_entry = false;
    }

    /// Reset only the entry buffer; the pending operation survives.
    pub fn clear_entry(&mut self) {
        self.current_value = "0".to_string();
        self.awaiting_new_entry = false;
    }

    /// `Infinity` or `NaN` from an overflowing result cannot be extended.
    fn shows_non_finite(&self) -> bool {
        !self.current_number().is_finite()
    }

    /// Check that the entry buffer is a well-formed number in progress.
    pub fn is_well_formed(&self) -> bool {
        is_well_formed_value(&self.current_value)
    }
}

/// Whether `value` could have been produced by typing or by a computation.
fn is_well_formed_value(value: &str) -> bool {
    if matches!(value, "Infinity" | "-Infinity" | "NaN") {
        return true;
    }
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    if unsigned.is_empty() || unsigned.starts_with('.') {
        return false;
    }
    let mut points = 0;
    for c in unsigned.chars() {
        match c {
            '.' => points += 1,
            c if c.is_ascii_digit() => {}
            _ => return false,
        }
    }
    points <= 1
}
