//! Host-facing display port.

use serde::{Deserialize, Serialize};

/// One line of the rendered history panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub display_text: String,
}

/// Output side of the host environment (DOM, terminal, test harness).
///
/// The engine pushes every visible change through this trait. `()` is a
/// surface that discards everything.
pub trait DisplaySurface {
    /// Replace the main display text.
    fn render(&mut self, text: &str);

    /// Light or dim the memory indicator.
    fn set_memory_indicator_active(&mut self, active: bool);

    /// Replace the history list, newest first.
    fn render_history(&mut self, items: &[HistoryItem]);

    /// Show or hide the history panel.
    fn set_history_panel_visible(&mut self, visible: bool);
}

impl DisplaySurface for () {
    fn render(&mut self, _text: &str) {}

    fn set_memory_indicator_active(&mut self, _active: bool) {}

    fn render_history(&mut self, _items: &[HistoryItem]) {}

    fn set_history_panel_visible(&mut self, _visible: bool) {}
}

/// Surface that remembers what was pushed to it, for tests and demos.
///
/// Every render is kept unless a frame limit is set, in which case only
/// the latest `limit` frames are retained.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    frames: Vec<String>,
    frame_limit: Option<usize>,
    memory_active: bool,
    history: Vec<HistoryItem>,
    history_panel_visible: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` frames (at least one), dropping the oldest.
    pub fn with_frame_limit(limit: usize) -> Self {
        Self {
            frame_limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    /// Latest display text.
    pub fn text(&self) -> &str {
        self.frames.last().map(String::as_str).unwrap_or_default()
    }

    /// Retained display texts, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn memory_active(&self) -> bool {
        self.memory_active
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn history_panel_visible(&self) -> bool {
        self.history_panel_visible
    }
}

impl DisplaySurface for RecordingSurface {
    fn render(&mut self, text: &str) {
        self.frames.push(text.to_string());
        if let Some(limit) = self.frame_limit {
            if self.frames.len() > limit {
                let excess = self.frames.len() - limit;
                self.frames.drain(..excess);
            }
        }
    }

    fn set_memory_indicator_active(&mut self, active: bool) {
        self.memory_active = active;
    }

    fn render_history(&mut self, items: &[HistoryItem]) {
        self.history = items.to_vec();
    }

    fn set_history_panel_visible(&mut self, visible: bool) {
        self.history_panel_visible = visible;
    }
}
