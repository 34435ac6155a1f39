//! Memory accumulator.

use super::operation::round_result;
use serde::{Deserialize, Serialize};

/// Commands addressed to the memory cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryCommand {
    Clear,
    Recall,
    Add,
    Subtract,
}

/// Single numeric accumulator that outlives entry clears.
///
/// # Example
///
/// ```rust
/// use abacus::core::MemoryCell;
///
/// let mut memory = MemoryCell::default();
/// memory.add(5.0, 8);
/// memory.subtract(2.0, 8);
/// assert_eq!(memory.value(), 3.0);
/// assert!(memory.is_active());
///
/// memory.clear();
/// assert!(!memory.is_active());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryCell {
    #[serde(with = "crate::core::number")]
    value: f64,
}

impl MemoryCell {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether the memory indicator should be lit.
    pub fn is_active(&self) -> bool {
        self.value != 0.0
    }

    pub fn add(&mut self, amount: f64, decimals: u32) {
        self.value = round_result(self.value + amount, decimals);
    }

    pub fn subtract(&mut self, amount: f64, decimals: u32) {
        self.value = round_result(self.value - amount, decimals);
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}
