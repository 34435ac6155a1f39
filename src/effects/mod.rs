//! The imperative shell around the pure core.
//!
//! This module owns everything with side effects: rendering to the host's
//! display, reading the clock and the cancellable error-reset timer.
//!
//! # Key Concepts
//!
//! - **Engine**: [`CalculatorEngine`] consumes [`Input`] events one at a time
//! - **Surface**: the host implements [`DisplaySurface`] to receive output
//! - **Clock**: reset deadlines are checked against a [`Clock`] in
//!   [`CalculatorEngine::poll`], so tests can drive time by hand

mod engine;
mod input;
mod surface;
mod timer;

pub use engine::CalculatorEngine;
pub use input::{Input, StepResult};
pub use surface::{DisplaySurface, HistoryItem, RecordingSurface};
pub use timer::{Clock, ManualClock, PendingReset, SystemClock};
