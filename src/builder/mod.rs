//! Configuration and builder API for calculator engines.
//!
//! [`EngineBuilder`] collects settings fluently, validates them all at once
//! and hands back a ready engine that has already rendered its initial
//! state.

pub mod config;
pub mod engine;
pub mod error;

pub use config::{EngineConfig, DEFAULT_ERROR_MESSAGE, DEFAULT_ERROR_RESET_DELAY};
pub use engine::EngineBuilder;
pub use error::{BuildError, ConfigViolation};
