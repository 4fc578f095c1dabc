//! Filter text and debounce state.
//!
//! The text box writes into the buffer on every keystroke; the debouncer
//! decides when the buffer content is applied to the session.

use rtreefilter::Debouncer;
use std::time::{Duration, Instant};

/// State of the filter input.
///
/// Responsibilities:
/// - Owning the editable filter text
/// - Debouncing edits before they reach the engine
/// - Tracking which predicate was last applied
pub struct FilterState {
    text: String,
    applied: String,
    debouncer: Debouncer<String>,
}

impl FilterState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            text: String::new(),
            applied: String::new(),
            debouncer: Debouncer::new(debounce),
        }
    }

    // ===== Queries =====

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Predicate currently shown in the graph.
    pub fn applied(&self) -> &str {
        &self.applied
    }

    /// Returns true while an edit is waiting for its debounce window.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    // ===== Mutations =====

    /// Mutable buffer for the text edit widget.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Records that the buffer changed at `now`.
    pub fn signal_edit(&mut self, now: Instant) {
        self.debouncer.signal(self.text.clone(), now);
    }

    /// Takes the debounced predicate once its window has elapsed.
    pub fn poll_due(&mut self, now: Instant) -> Option<String> {
        self.debouncer.poll(now)
    }

    /// Replaces the text immediately (click-to-filter, clear), dropping any pending edit.
    pub fn set_text(&mut self, text: &str) {
        self.debouncer.cancel();
        self.text = text.to_string();
    }

    pub fn mark_applied(&mut self, predicate: &str) {
        self.applied = predicate.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_is_applied_after_delay() {
        let t0 = Instant::now();
        let mut state = FilterState::new(Duration::from_millis(100));
        state.text_mut().push_str("gr");
        state.signal_edit(t0);
        state.text_mut().push_str("and");
        state.signal_edit(t0 + Duration::from_millis(50));

        assert_eq!(state.poll_due(t0 + Duration::from_millis(100)), None);
        assert_eq!(state.poll_due(t0 + Duration::from_millis(150)).as_deref(), Some("grand"));
    }

    #[test]
    fn test_set_text_drops_pending_edit() {
        let t0 = Instant::now();
        let mut state = FilterState::new(Duration::from_millis(100));
        state.text_mut().push_str("x");
        state.signal_edit(t0);
        state.set_text("child-a");
        assert!(!state.is_pending());
        assert_eq!(state.poll_due(t0 + Duration::from_secs(1)), None);
        assert_eq!(state.text(), "child-a");
    }
}
