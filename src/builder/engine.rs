//! Builder for constructing calculator engines.

use crate::builder::config::EngineConfig;
use crate::builder::error::BuildError;
use crate::effects::{CalculatorEngine, Clock, DisplaySurface, SystemClock};
use std::time::Duration;
use stillwater::validation::Validation;

/// Builder for constructing calculator engines with a fluent API.
///
/// # Example
///
/// ```rust
/// use abacus::builder::EngineBuilder;
/// use abacus::effects::RecordingSurface;
/// use std::time::Duration;
///
/// let engine = EngineBuilder::new()
///     .history_capacity(10)
///     .error_reset_delay(Duration::from_millis(1500))
///     .error_message("Tidak bisa dibagi nol")
///     .surface(RecordingSurface::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.surface().text(), "0");
/// assert_eq!(engine.history().capacity(), 10);
/// ```
pub struct EngineBuilder<D: DisplaySurface = (), C: Clock = SystemClock> {
    config: EngineConfig,
    surface: D,
    clock: C,
}

impl EngineBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            surface: (),
            clock: SystemClock,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DisplaySurface, C: Clock> EngineBuilder<D, C> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    pub fn error_reset_delay(mut self, delay: Duration) -> Self {
        self.config.error_reset_delay = delay;
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.config.error_message = message.into();
        self
    }

    pub fn max_fraction_digits(mut self, digits: usize) -> Self {
        self.config.display.max_fraction_digits = digits;
        self
    }

    pub fn scientific_threshold(mut self, threshold: f64) -> Self {
        self.config.display.scientific_threshold = threshold;
        self
    }

    pub fn scientific_digits(mut self, digits: usize) -> Self {
        self.config.display.scientific_digits = digits;
        self
    }

    pub fn result_decimals(mut self, decimals: u32) -> Self {
        self.config.result_decimals = decimals;
        self
    }

    /// Cap the number of digits in the entry buffer.
    pub fn max_input_digits(mut self, digits: usize) -> Self {
        self.config.max_input_digits = Some(digits);
        self
    }

    /// Set the display surface the engine renders to.
    pub fn surface<D2: DisplaySurface>(self, surface: D2) -> EngineBuilder<D2, C> {
        EngineBuilder {
            config: self.config,
            surface,
            clock: self.clock,
        }
    }

    /// Set the clock used for reset deadlines and history timestamps.
    pub fn clock<C2: Clock>(self, clock: C2) -> EngineBuilder<D, C2> {
        EngineBuilder {
            config: self.config,
            surface: self.surface,
            clock,
        }
    }

    /// Build the engine.
    /// Returns an error listing every invalid setting.
    pub fn build(self) -> Result<CalculatorEngine<D, C>, BuildError> {
        if let Validation::Failure(violations) = self.config.validate() {
            return Err(BuildError::InvalidConfig(
                violations.iter().cloned().collect(),
            ));
        }

        tracing::debug!(
            history_capacity = self.config.history_capacity,
            reset_delay_ms = self.config.error_reset_delay.as_millis() as u64,
            "building calculator engine"
        );
        Ok(CalculatorEngine::from_parts(
            self.config,
            self.surface,
            self.clock,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::error::ConfigViolation;
    use crate::effects::{ManualClock, RecordingSurface};

    #[test]
    fn builder_uses_defaults() {
        let engine = EngineBuilder::new().build().unwrap();

        assert_eq!(engine.config(), &EngineConfig::default());
        assert_eq!(engine.current_value(), "0");
    }

    #[test]
    fn builder_validates_config() {
        let result = EngineBuilder::new()
            .history_capacity(0)
            .error_message("")
            .build();

        match result {
            Err(BuildError::InvalidConfig(violations)) => {
                assert_eq!(
                    violations,
                    vec![
                        ConfigViolation::ZeroHistoryCapacity,
                        ConfigViolation::EmptyErrorMessage
                    ]
                );
            }
            Ok(_) => panic!("Expected invalid config"),
        }
    }

    #[test]
    fn build_error_lists_violations() {
        let error = EngineBuilder::new()
            .max_input_digits(0)
            .build()
            .err()
            .unwrap();

        assert_eq!(
            error.to_string(),
            "Invalid engine configuration: Input digit limit must be at least 1"
        );
    }

    #[test]
    fn fluent_api_builds_engine() {
        let clock = ManualClock::starting_now();
        let engine = EngineBuilder::new()
            .history_capacity(3)
            .max_fraction_digits(4)
            .scientific_threshold(1e9)
            .scientific_digits(2)
            .result_decimals(4)
            .surface(RecordingSurface::new())
            .clock(clock)
            .build()
            .unwrap();

        assert_eq!(engine.history().capacity(), 3);
        assert_eq!(engine.config().display.max_fraction_digits, 4);
        assert_eq!(engine.format_for_display("1234567890"), "1.23e+9");
        assert_eq!(engine.surface().frames(), ["0"]);
        assert!(!engine.surface().memory_active());
        assert!(!engine.surface().history_panel_visible());
    }

    #[test]
    fn whole_config_can_be_supplied() {
        let config = EngineConfig {
            error_message: "Math error".to_string(),
            ..EngineConfig::default()
        };
        let engine = EngineBuilder::new().config(config.clone()).build().unwrap();
        assert_eq!(engine.config(), &config);
    }
}
