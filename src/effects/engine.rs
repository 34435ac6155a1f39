//! Calculator engine that drives the pure core and renders to the host.

use crate::builder::EngineConfig;
use crate::core::{
    round_result, stringify_value, CalcError, CalcResult, Digit, EntryState, HistoryEntry,
    HistoryStore, MemoryCell, MemoryCommand, Mode, Operation,
};
use crate::effects::input::{Input, StepResult};
use crate::effects::surface::{DisplaySurface, HistoryItem};
use crate::effects::timer::{Clock, PendingReset, ResetTimer, SystemClock};
use crate::snapshot::{Snapshot, SnapshotError};
use std::time::Duration;

/// Calculator state machine.
///
/// Owns the entry buffer, memory, history and the error-reset timer, and
/// pushes every visible change to its [`DisplaySurface`].
///
/// # Example
///
/// ```rust
/// use abacus::core::{Digit, Operation};
/// use abacus::effects::{CalculatorEngine, Input};
///
/// let mut engine = CalculatorEngine::new();
/// for input in [
///     Input::Digit(Digit::try_from(3u8).unwrap()),
///     Input::Operator(Operation::Add),
///     Input::Digit(Digit::try_from(4u8).unwrap()),
///     Input::Equals,
/// ] {
///     engine.handle(input);
/// }
/// assert_eq!(engine.current_value(), "7");
/// assert_eq!(engine.history().len(), 1);
/// ```
pub struct CalculatorEngine<D: DisplaySurface = (), C: Clock = SystemClock> {
    entry: EntryState,
    memory: MemoryCell,
    history: HistoryStore,
    config: EngineConfig,
    timer: ResetTimer,
    showing_error: bool,
    history_panel_visible: bool,
    surface: D,
    clock: C,
}

impl CalculatorEngine {
    /// Engine with default settings, no display and the system clock.
    pub fn new() -> Self {
        Self::from_parts(EngineConfig::default(), (), SystemClock)
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DisplaySurface, C: Clock> CalculatorEngine<D, C> {
    /// Assemble an engine and push its initial state to the surface.
    ///
    /// The configuration is assumed valid; [`crate::builder::EngineBuilder`]
    /// checks it first.
    pub(crate) fn from_parts(config: EngineConfig, surface: D, clock: C) -> Self {
        let mut engine = Self {
            entry: EntryState::new(),
            memory: MemoryCell::default(),
            history: HistoryStore::with_capacity(config.history_capacity),
            config,
            timer: ResetTimer::default(),
            showing_error: false,
            history_panel_visible: false,
            surface,
            clock,
        };
        engine.sync_surface();
        engine
    }

    pub fn entry(&self) -> &EntryState {
        &self.entry
    }

    /// Raw entry buffer, e.g. `"12."`.
    pub fn current_value(&self) -> &str {
        self.entry.current_value()
    }

    pub fn memory(&self) -> &MemoryCell {
        &self.memory
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_history_panel_visible(&self) -> bool {
        self.history_panel_visible
    }

    /// Current mode, derived from the entry state and error display.
    pub fn mode(&self) -> Mode {
        if self.showing_error {
            Mode::Error
        } else if self.entry.has_pending_operation() && self.entry.awaiting_new_entry() {
            Mode::AwaitingOperand
        } else {
            Mode::Entry
        }
    }

    /// Text the display currently shows.
    pub fn display_text(&self) -> String {
        if self.showing_error {
            self.config.error_message.clone()
        } else {
            self.format_for_display(self.entry.current_value())
        }
    }

    /// Format an entry value with this engine's display rules.
    pub fn format_for_display(&self, value: &str) -> String {
        self.config.display.format(value)
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, input: Input) -> StepResult {
        tracing::debug!(input = input.name(), mode = self.mode().name(), "handling input");

        match input {
            Input::Digit(digit) => applied_if(self.input_digit(digit)),
            Input::Decimal => {
                self.input_decimal();
                StepResult::Applied
            }
            Input::Operator(operation) => match self.set_operation(operation) {
                Ok(()) => StepResult::Applied,
                Err(error) => StepResult::Failed(error),
            },
            Input::Equals => match self.calculate() {
                Ok(Some(_)) => StepResult::Applied,
                Ok(None) => StepResult::Ignored,
                Err(error) => StepResult::Failed(error),
            },
            Input::Clear => {
                self.clear();
                StepResult::Applied
            }
            Input::ClearEntry => {
                self.clear_entry();
                StepResult::Applied
            }
            Input::Memory(command) => {
                self.memory_command(command);
                StepResult::Applied
            }
            Input::SelectHistory(index) => match self.select_history_entry(index) {
                Ok(()) => StepResult::Applied,
                Err(error) => StepResult::Failed(error),
            },
            Input::ClearHistory => {
                self.clear_history();
                StepResult::Applied
            }
            Input::ToggleHistoryPanel => {
                self.toggle_history_panel();
                StepResult::Applied
            }
        }
    }

    /// Type a digit. Returns `false` if the input digit limit dropped it.
    pub fn input_digit(&mut self, digit: Digit) -> bool {
        self.interrupt_error();
        let accepted = self.entry.push_digit(digit, self.config.max_input_digits);
        if !accepted {
            tracing::debug!(limit = ?self.config.max_input_digits, "digit limit reached");
        }
        self.render_entry();
        accepted
    }

    pub fn input_decimal(&mut self) {
        self.interrupt_error();
        self.entry.push_decimal();
        self.render_entry();
    }

    /// Set the pending operator, folding an already complete operation first.
    ///
    /// Pressing an operator again before typing an operand only swaps the
    /// operator. A failed fold leaves the engine in the error display.
    pub fn set_operation(&mut self, operation: Operation) -> CalcResult<()> {
        self.interrupt_error();

        if self.entry.has_pending_operation() {
            if self.entry.awaiting_new_entry() {
                self.entry.replace_operation(operation);
                self.render_entry();
                return Ok(());
            }
            self.evaluate_pending()?;
        }

        self.entry.begin_operation(operation);
        self.render_entry();
        Ok(())
    }

    /// Evaluate the pending operation.
    ///
    /// Returns `Ok(None)` when there is nothing to evaluate.
    pub fn calculate(&mut self) -> CalcResult<Option<f64>> {
        self.interrupt_error();
        let result = self.evaluate_pending()?;
        self.render_entry();
        Ok(result)
    }

    /// Reset the entry and pending operation. Memory and history survive.
    pub fn clear(&mut self) {
        self.interrupt_error();
        self.entry.clear();
        self.render_entry();
    }

    /// Reset only the number being typed.
    pub fn clear_entry(&mut self) {
        self.interrupt_error();
        self.entry.clear_entry();
        self.render_entry();
    }

    pub fn memory_command(&mut self, command: MemoryCommand) {
        match command {
            MemoryCommand::Clear => self.memory_clear(),
            MemoryCommand::Recall => self.memory_recall(),
            MemoryCommand::Add => self.memory_add(),
            MemoryCommand::Subtract => self.memory_subtract(),
        }
    }

    pub fn memory_clear(&mut self) {
        self.interrupt_error();
        self.memory.clear();
        tracing::info!("memory cleared");
        self.push_memory_indicator();
    }

    /// Load the memory value into the entry buffer.
    pub fn memory_recall(&mut self) {
        self.interrupt_error();
        self.entry.load_value(self.memory.value());
        self.render_entry();
        self.push_memory_indicator();
    }

    pub fn memory_add(&mut self) {
        self.interrupt_error();
        self.memory
            .add(self.entry.current_number(), self.config.result_decimals);
        self.push_memory_indicator();
    }

    pub fn memory_subtract(&mut self) {
        self.interrupt_error();
        self.memory
            .subtract(self.entry.current_number(), self.config.result_decimals);
        self.push_memory_indicator();
    }

    /// Load a history result into the entry buffer; 0 is the newest entry.
    pub fn select_history_entry(&mut self, index: usize) -> CalcResult<()> {
        self.interrupt_error();

        let Some(result) = self.history.get(index).map(HistoryEntry::result) else {
            let error = CalcError::HistoryIndexOutOfRange {
                index,
                len: self.history.len(),
            };
            tracing::warn!(%error, "history selection rejected");
            return Err(error);
        };

        self.entry.load_value(result);
        self.render_entry();
        Ok(())
    }

    pub fn clear_history(&mut self) {
        self.interrupt_error();
        self.history.clear();
        tracing::info!("history cleared");
        self.push_history();
    }

    pub fn toggle_history_panel(&mut self) {
        self.set_history_panel_visible(!self.history_panel_visible);
    }

    pub fn set_history_panel_visible(&mut self, visible: bool) {
        self.interrupt_error();
        self.history_panel_visible = visible;
        self.surface.set_history_panel_visible(visible);
    }

    /// Schedule the return from the error display after `delay`.
    pub fn schedule_reset(&mut self, delay: Duration) -> PendingReset {
        let pending = self.timer.schedule(self.clock.now(), delay);
        tracing::debug!(due_at = %pending.due_at, "reset scheduled");
        pending
    }

    /// Cancel the pending reset. Returns whether one was pending.
    pub fn cancel_pending_reset(&mut self) -> bool {
        self.timer.cancel()
    }

    pub fn pending_reset(&self) -> Option<&PendingReset> {
        self.timer.pending()
    }

    /// Fire the pending reset if its deadline has passed.
    ///
    /// Hosts call this from their event loop or a timer callback. Returns
    /// whether a reset fired.
    pub fn poll(&mut self) -> bool {
        if !self.timer.fire_if_due(self.clock.now()) {
            return false;
        }
        tracing::debug!("error display reset");
        self.showing_error = false;
        self.render_entry();
        true
    }

    /// Push the complete visible state to the surface.
    pub fn sync_surface(&mut self) {
        let text = self.display_text();
        self.surface.render(&text);
        self.push_memory_indicator();
        self.push_history();
        self.surface
            .set_history_panel_visible(self.history_panel_visible);
    }

    /// Capture the engine state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.clock.now(),
            self.entry.clone(),
            self.memory,
            self.history.clone(),
            self.history_panel_visible,
        )
    }

    /// Replace the engine state with a validated snapshot.
    ///
    /// History is re-fitted to this engine's capacity, keeping the newest
    /// entries. Any error display and pending reset are discarded.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;

        let mut history = HistoryStore::with_capacity(self.config.history_capacity);
        for entry in snapshot.history.iter().rev() {
            history.record(entry.clone());
        }

        self.entry = snapshot.entry;
        self.memory = snapshot.memory;
        self.history = history;
        self.history_panel_visible = snapshot.history_panel_visible;
        self.timer.cancel();
        self.showing_error = false;

        tracing::info!(taken_at = %snapshot.taken_at, "engine restored from snapshot");
        self.sync_surface();
        Ok(())
    }

    fn evaluate_pending(&mut self) -> CalcResult<Option<f64>> {
        let Some((previous, operation)) = self.entry.take_pending() else {
            return Ok(None);
        };
        let operand = self.entry.current_number();

        match operation.apply(previous, operand) {
            Ok(raw) => {
                let result = round_result(raw, self.config.result_decimals);
                let expression = format!(
                    "{} {} {}",
                    stringify_value(previous),
                    operation.symbol(),
                    stringify_value(operand)
                );
                tracing::debug!(%expression, result, "calculated");

                self.history
                    .record(HistoryEntry::new(expression, result, self.clock.now()));
                self.entry.show_result(result);
                self.push_history();
                Ok(Some(result))
            }
            Err(error) => {
                self.enter_error(&error);
                Err(error)
            }
        }
    }

    fn enter_error(&mut self, error: &CalcError) {
        tracing::warn!(%error, "calculation failed, entry reset");
        self.entry.clear();
        self.showing_error = true;
        self.surface.render(&self.config.error_message);
        self.schedule_reset(self.config.error_reset_delay);
    }

    /// New input wins over a pending reset.
    fn interrupt_error(&mut self) {
        self.timer.cancel();
        if self.showing_error {
            self.showing_error = false;
            self.render_entry();
        }
    }

    fn render_entry(&mut self) {
        let text = self.format_for_display(self.entry.current_value());
        self.surface.render(&text);
    }

    fn push_memory_indicator(&mut self) {
        self.surface
            .set_memory_indicator_active(self.memory.is_active());
    }

    fn push_history(&mut self) {
        let items: Vec<HistoryItem> = self
            .history
            .iter()
            .map(|entry| HistoryItem {
                display_text: format!(
                    "{} = {}",
                    entry.expression(),
                    self.format_for_display(&stringify_value(entry.result()))
                ),
            })
            .collect();
        self.surface.render_history(&items);
    }
}

fn applied_if(changed: bool) -> StepResult {
    if changed {
        StepResult::Applied
    } else {
        StepResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::EngineBuilder;
    use crate::effects::{ManualClock, RecordingSurface};

    fn engine() -> (CalculatorEngine<RecordingSurface, ManualClock>, ManualClock) {
        let clock = ManualClock::starting_now();
        let engine = EngineBuilder::new()
            .surface(RecordingSurface::new())
            .clock(clock.clone())
            .build()
            .unwrap();
        (engine, clock)
    }

    fn d(n: u8) -> Digit {
        Digit::try_from(n).unwrap()
    }

    fn type_number(engine: &mut CalculatorEngine<RecordingSurface, ManualClock>, text: &str) {
        for c in text.chars() {
            if c == '.' {
                engine.input_decimal();
            } else {
                engine.input_digit(Digit::try_from(c).unwrap());
            }
        }
    }

    #[test]
    fn initial_state_renders_zero() {
        let (engine, _) = engine();
        assert_eq!(engine.surface().text(), "0");
        assert_eq!(engine.mode(), Mode::Entry);
        assert!(engine.pending_reset().is_none());
    }

    #[test]
    fn digits_render_as_typed() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "12.50");
        assert_eq!(engine.current_value(), "12.50");
        assert_eq!(engine.surface().text(), "12.50");
    }

    #[test]
    fn operator_moves_to_awaiting_operand() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "3");
        engine.set_operation(Operation::Add).unwrap();

        assert_eq!(engine.mode(), Mode::AwaitingOperand);
        assert_eq!(engine.entry().previous_value(), Some(3.0));

        engine.input_digit(d(4));
        assert_eq!(engine.mode(), Mode::Entry);
        assert_eq!(engine.current_value(), "4");
    }

    #[test]
    fn equals_records_history() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "3");
        engine.set_operation(Operation::Add).unwrap();
        type_number(&mut engine, "4");

        assert_eq!(engine.calculate(), Ok(Some(7.0)));
        assert_eq!(engine.current_value(), "7");
        assert!(engine.entry().awaiting_new_entry());
        assert!(!engine.entry().has_pending_operation());
        assert_eq!(engine.history().get(0).map(|e| e.expression()), Some("3 + 4"));
        assert_eq!(engine.surface().history()[0].display_text, "3 + 4 = 7");
    }

    #[test]
    fn equals_without_pending_operation_is_ignored() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "9");

        assert_eq!(engine.handle(Input::Equals), StepResult::Ignored);
        assert_eq!(engine.current_value(), "9");
        assert!(engine.history().is_empty());
    }

    #[test]
    fn second_operator_only_replaces_symbol() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "6");
        engine.set_operation(Operation::Add).unwrap();
        engine.set_operation(Operation::Multiply).unwrap();

        assert_eq!(engine.entry().operation(), Some(Operation::Multiply));
        assert_eq!(engine.entry().previous_value(), Some(6.0));
        assert!(engine.history().is_empty());

        type_number(&mut engine, "7");
        assert_eq!(engine.calculate(), Ok(Some(42.0)));
    }

    #[test]
    fn operator_after_result_chains_from_result() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "2");
        engine.set_operation(Operation::Multiply).unwrap();
        type_number(&mut engine, "5");
        engine.calculate().unwrap();

        engine.set_operation(Operation::Subtract).unwrap();
        type_number(&mut engine, "12");
        assert_eq!(engine.calculate(), Ok(Some(-2.0)));
        assert_eq!(engine.surface().text(), "-2");
        assert_eq!(engine.history().get(0).map(|e| e.expression()), Some("10 − 12"));
    }

    #[test]
    fn division_by_zero_shows_error_and_resets_immediately() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "5");
        engine.set_operation(Operation::Divide).unwrap();
        type_number(&mut engine, "0");

        assert_eq!(engine.calculate(), Err(CalcError::DivisionByZero));
        assert_eq!(engine.mode(), Mode::Error);
        assert_eq!(engine.surface().text(), "Cannot divide by zero");
        assert_eq!(engine.display_text(), "Cannot divide by zero");
        assert_eq!(engine.entry(), &EntryState::new());
        assert!(engine.history().is_empty());
        assert!(engine.pending_reset().is_some());
    }

    #[test]
    fn error_clears_after_delay() {
        let (mut engine, clock) = engine();
        type_number(&mut engine, "5");
        engine.set_operation(Operation::Divide).unwrap();
        type_number(&mut engine, "0");
        let _ = engine.calculate();

        clock.advance(Duration::from_millis(2999));
        assert!(!engine.poll());
        assert_eq!(engine.surface().text(), "Cannot divide by zero");

        clock.advance(Duration::from_millis(1));
        assert!(engine.poll());
        assert_eq!(engine.mode(), Mode::Entry);
        assert_eq!(engine.surface().text(), "0");
        assert!(engine.pending_reset().is_none());
    }

    #[test]
    fn new_input_cancels_pending_reset() {
        let (mut engine, clock) = engine();
        type_number(&mut engine, "1");
        engine.set_operation(Operation::Divide).unwrap();
        type_number(&mut engine, "0");
        let _ = engine.calculate();

        type_number(&mut engine, "8");
        assert!(engine.pending_reset().is_none());
        assert_eq!(engine.mode(), Mode::Entry);

        clock.advance(Duration::from_millis(5000));
        assert!(!engine.poll());
        assert_eq!(engine.surface().text(), "8");
    }

    #[test]
    fn failed_fold_stops_operator() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "4");
        engine.set_operation(Operation::Divide).unwrap();
        type_number(&mut engine, "0");

        assert_eq!(
            engine.handle(Input::Operator(Operation::Add)),
            StepResult::Failed(CalcError::DivisionByZero)
        );
        assert_eq!(engine.mode(), Mode::Error);
        assert!(!engine.entry().has_pending_operation());
    }

    #[test]
    fn clear_entry_keeps_pending_operation() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "9");
        engine.set_operation(Operation::Subtract).unwrap();
        type_number(&mut engine, "5");
        engine.clear_entry();
        type_number(&mut engine, "2");

        assert_eq!(engine.calculate(), Ok(Some(7.0)));
    }

    #[test]
    fn clear_keeps_memory_and_history() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "2");
        engine.memory_add();
        engine.set_operation(Operation::Add).unwrap();
        type_number(&mut engine, "2");
        engine.calculate().unwrap();

        engine.clear();

        assert_eq!(engine.entry(), &EntryState::new());
        assert_eq!(engine.memory().value(), 2.0);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn memory_indicator_follows_value() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "5");

        engine.memory_add();
        assert!(engine.surface().memory_active());

        engine.memory_subtract();
        assert!(!engine.surface().memory_active());

        engine.memory_subtract();
        assert_eq!(engine.memory().value(), -5.0);
        assert!(engine.surface().memory_active());

        engine.memory_clear();
        assert!(!engine.surface().memory_active());
    }

    #[test]
    fn memory_recall_allows_appending() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "5");
        engine.memory_add();
        engine.clear();

        engine.memory_recall();
        assert_eq!(engine.current_value(), "5");
        assert!(!engine.entry().awaiting_new_entry());

        type_number(&mut engine, "0");
        assert_eq!(engine.current_value(), "50");
    }

    #[test]
    fn select_history_loads_result() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "1.5");
        engine.set_operation(Operation::Multiply).unwrap();
        type_number(&mut engine, "4");
        engine.calculate().unwrap();
        engine.clear();

        assert_eq!(engine.handle(Input::SelectHistory(0)), StepResult::Applied);
        assert_eq!(engine.current_value(), "6");
        assert!(!engine.entry().awaiting_new_entry());
    }

    #[test]
    fn select_missing_history_entry_fails() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "3");

        assert_eq!(
            engine.select_history_entry(2),
            Err(CalcError::HistoryIndexOutOfRange { index: 2, len: 0 })
        );
        assert_eq!(engine.current_value(), "3");
    }

    #[test]
    fn clear_history_empties_panel() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "1");
        engine.set_operation(Operation::Add).unwrap();
        type_number(&mut engine, "1");
        engine.calculate().unwrap();
        assert_eq!(engine.surface().history().len(), 1);

        engine.handle(Input::ClearHistory);

        assert!(engine.history().is_empty());
        assert!(engine.surface().history().is_empty());
    }

    #[test]
    fn toggle_history_panel_flips_visibility() {
        let (mut engine, _) = engine();

        engine.handle(Input::ToggleHistoryPanel);
        assert!(engine.is_history_panel_visible());
        assert!(engine.surface().history_panel_visible());

        engine.handle(Input::ToggleHistoryPanel);
        assert!(!engine.surface().history_panel_visible());
    }

    #[test]
    fn digit_limit_drops_extra_digits() {
        let mut engine = EngineBuilder::new()
            .max_input_digits(3)
            .surface(RecordingSurface::new())
            .build()
            .unwrap();

        for n in [1, 2, 3] {
            assert_eq!(engine.handle(Input::Digit(d(n))), StepResult::Applied);
        }
        assert_eq!(engine.handle(Input::Digit(d(4))), StepResult::Ignored);
        assert_eq!(engine.current_value(), "123");
    }

    #[test]
    fn history_uses_clock_time() {
        let (mut engine, clock) = engine();
        let at = clock.now();
        type_number(&mut engine, "2");
        engine.set_operation(Operation::Add).unwrap();
        type_number(&mut engine, "2");
        engine.calculate().unwrap();

        assert_eq!(engine.history().get(0).map(|e| e.recorded_at()), Some(at));
    }

    #[test]
    fn manual_schedule_and_cancel() {
        let (mut engine, clock) = engine();
        engine.schedule_reset(Duration::from_millis(100));
        assert!(engine.cancel_pending_reset());
        assert!(!engine.cancel_pending_reset());

        clock.advance(Duration::from_millis(200));
        assert!(!engine.poll());
    }

    #[test]
    fn snapshot_restores_into_fresh_engine() {
        let (mut engine, _) = engine();
        type_number(&mut engine, "8");
        engine.memory_add();
        engine.set_operation(Operation::Divide).unwrap();
        type_number(&mut engine, "2");
        engine.calculate().unwrap();
        engine.set_operation(Operation::Add).unwrap();
        engine.toggle_history_panel();

        let json = engine.snapshot().to_json().unwrap();

        let (mut fresh, _) = self::engine();
        fresh.restore(Snapshot::from_json(&json).unwrap()).unwrap();

        assert_eq!(fresh.entry(), engine.entry());
        assert_eq!(fresh.memory(), engine.memory());
        assert_eq!(fresh.history(), engine.history());
        assert_eq!(fresh.mode(), Mode::AwaitingOperand);
        assert_eq!(fresh.surface().text(), "4");
        assert!(fresh.surface().memory_active());
        assert!(fresh.surface().history_panel_visible());
        assert_eq!(fresh.surface().history()[0].display_text, "8 ÷ 2 = 4");
    }

    #[test]
    fn restore_fits_history_to_capacity() {
        let (mut engine, _) = engine();
        for n in 1..=5u8 {
            engine.input_digit(d(n));
            engine.set_operation(Operation::Add).unwrap();
            engine.input_digit(d(0));
            engine.calculate().unwrap();
        }
        let snapshot = engine.snapshot();

        let mut small = EngineBuilder::new().history_capacity(2).build().unwrap();
        small.restore(snapshot).unwrap();

        let results: Vec<f64> = small.history().iter().map(HistoryEntry::result).collect();
        assert_eq!(results, vec![5.0, 4.0]);
        assert_eq!(small.history().capacity(), 2);
    }
}
