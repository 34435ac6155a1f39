//! Pure calculator core.
//!
//! This module contains the side-effect free parts of the calculator:
//! - Digits, operations and result rounding
//! - The entry buffer and pending operation
//! - The memory cell and the bounded result history
//! - Display formatting
//!
//! Nothing here renders or reads the clock; the engine in
//! [`crate::effects`] drives these types and talks to the host.

mod digit;
mod entry;
mod error;
mod format;
mod history;
mod memory;
mod mode;
mod number;
mod operation;

pub use digit::Digit;
pub use entry::EntryState;
pub use error::{CalcError, CalcResult};
pub use format::{format_for_display, DisplayFormat};
pub use history::{HistoryEntry, HistoryStore, DEFAULT_HISTORY_CAPACITY};
pub use memory::{MemoryCell, MemoryCommand};
pub use mode::Mode;
pub use operation::{
    parse_value, round_result, stringify_value, Operation, DEFAULT_RESULT_DECIMALS,
};
