//! Input events and dispatch results.

use crate::core::{CalcError, Digit, MemoryCommand, Operation};
use serde::{Deserialize, Serialize};

/// A discrete event from the host's keypad.
///
/// Every button maps to exactly one variant, so a session can be replayed
/// by feeding the same sequence to [`crate::effects::CalculatorEngine::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Digit(Digit),
    Decimal,
    Operator(Operation),
    Equals,
    Clear,
    ClearEntry,
    Memory(MemoryCommand),
    /// Index into the history list, 0 being the newest entry
    SelectHistory(usize),
    ClearHistory,
    ToggleHistoryPanel,
}

impl Input {
    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "Digit",
            Self::Decimal => "Decimal",
            Self::Operator(_) => "Operator",
            Self::Equals => "Equals",
            Self::Clear => "Clear",
            Self::ClearEntry => "ClearEntry",
            Self::Memory(_) => "Memory",
            Self::SelectHistory(_) => "SelectHistory",
            Self::ClearHistory => "ClearHistory",
            Self::ToggleHistoryPanel => "ToggleHistoryPanel",
        }
    }
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operation> for Input {
    fn from(operation: Operation) -> Self {
        Self::Operator(operation)
    }
}

impl From<MemoryCommand> for Input {
    fn from(command: MemoryCommand) -> Self {
        Self::Memory(command)
    }
}

/// Outcome of handling one input.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// State changed (or was re-rendered) as requested
    Applied,

    /// Input had nothing to act on, e.g. equals without a pending operation
    Ignored,

    /// Input was rejected or the calculation failed
    Failed(CalcError),
}

impl StepResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
