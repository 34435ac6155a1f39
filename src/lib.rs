//! Abacus: a state-machine calculator engine
//!
//! Abacus implements the logic behind a button-driven calculator widget:
//! numeric entry, the four binary operations with left-to-right chaining,
//! a memory cell and a short history of results. The host supplies input
//! events and a display; the engine does the rest.
//!
//! Abacus follows a "pure core, imperative shell" split. The [`core`]
//! module holds side-effect free types (entry buffer, operations, memory,
//! history, formatting). The [`effects`] module wraps them in an engine that
//! renders through a [`effects::DisplaySurface`] and owns the error-reset
//! timer.
//!
//! # Core Concepts
//!
//! - **Input**: every keypad button is one [`effects::Input`] variant
//! - **Engine**: [`effects::CalculatorEngine::handle`] processes one input
//!   at a time and re-renders
//! - **Builder**: [`builder::EngineBuilder`] validates configuration up front
//! - **Snapshot**: [`snapshot::Snapshot`] captures state for re-mounting
//!
//! # Example
//!
//! ```rust
//! use abacus::builder::EngineBuilder;
//! use abacus::core::{Digit, Operation};
//! use abacus::effects::{Input, RecordingSurface};
//!
//! let mut engine = EngineBuilder::new()
//!     .surface(RecordingSurface::new())
//!     .build()
//!     .unwrap();
//!
//! let digit = |n: u8| Input::Digit(Digit::try_from(n).unwrap());
//! for input in [
//!     digit(3),
//!     Input::Operator(Operation::Add),
//!     digit(4),
//!     Input::Operator(Operation::Multiply),
//!     digit(2),
//!     Input::Equals,
//! ] {
//!     engine.handle(input);
//! }
//!
//! assert_eq!(engine.surface().text(), "14");
//! assert_eq!(engine.history().get(1).map(|e| e.expression()), Some("3 + 4"));
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{EngineBuilder, EngineConfig};
pub use crate::core::{CalcError, Digit, MemoryCommand, Mode, Operation};
pub use effects::{CalculatorEngine, DisplaySurface, Input, StepResult};
