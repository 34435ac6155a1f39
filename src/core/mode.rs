//! Observable engine modes.

use serde::{Deserialize, Serialize};

/// Where the engine sits in its input cycle.
///
/// - `Entry`: building or showing a number
/// - `AwaitingOperand`: an operator is set and the next digit starts the
///   right operand
/// - `Error`: an error message is on the display until the reset fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Entry,
    AwaitingOperand,
    Error,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_name_returns_correct_value() {
        assert_eq!(Mode::Entry.name(), "Entry");
        assert_eq!(Mode::AwaitingOperand.name(), "AwaitingOperand");
        assert_eq!(Mode::Error.name(), "Error");
    }

    #[test]
    fn only_error_mode_is_error() {
        assert!(!Mode::Entry.is_error());
        assert!(!Mode::AwaitingOperand.is_error());
        assert!(Mode::Error.is_error());
    }
}
