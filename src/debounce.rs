//! Trailing-edge debounce for filter input.
//!
//! Signals arriving within `delay` of each other collapse into one: only the
//! last value survives, and it becomes due `delay` after the last signal.
//! Time is passed in explicitly so the owner (a UI frame loop, a test)
//! decides when to poll.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::trace;

/// Handle returned for every signal; cancelling it drops that pending value.
///
/// A newer signal supersedes the previous one, which also marks the previous
/// handle as cancelled.
#[derive(Debug, Clone)]
pub struct DebounceHandle {
    cancelled: Arc<AtomicBool>,
}

impl DebounceHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

struct Pending<T> {
    value: T,
    deadline: Instant,
    handle: DebounceHandle,
}

pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records a new value, restarting the window.
    ///
    /// # Arguments
    /// * `value` - Latest value; replaces any value still pending
    /// * `now` - Time of the signal
    pub fn signal(&mut self, value: T, now: Instant) -> DebounceHandle {
        if let Some(previous) = self.pending.take() {
            previous.handle.cancel();
        }

        let handle = DebounceHandle {
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
            handle: handle.clone(),
        });
        trace!(delay_ms = self.delay.as_millis() as u64, "debounce window restarted");
        handle
    }

    /// Returns true if a value is waiting and has not been cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| !p.handle.is_cancelled())
    }

    /// Time left until the pending value is due, if any.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .filter(|p| !p.handle.is_cancelled())
            .map(|p| p.deadline.saturating_duration_since(now))
    }

    /// Takes the pending value once its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let pending = self.pending.take()?;
        if pending.handle.is_cancelled() {
            return None;
        }
        if now < pending.deadline {
            self.pending = Some(pending);
            return None;
        }
        Some(pending.value)
    }

    /// Polls and, when a value is due, hands it to `callback`.
    ///
    /// # Returns
    /// `true` if the callback ran.
    pub fn poll_with<F>(&mut self, now: Instant, callback: F) -> bool
    where
        F: FnOnce(T),
    {
        match self.poll(now) {
            Some(value) => {
                callback(value);
                true
            }
            None => false,
        }
    }

    /// Takes the pending value immediately, ignoring the window.
    pub fn flush(&mut self) -> Option<T> {
        let pending = self.pending.take()?;
        (!pending.handle.is_cancelled()).then_some(pending.value)
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_value_is_not_due_before_delay() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.signal("a", t0);
        assert_eq!(d.poll(t0 + Duration::from_millis(299)), None);
        assert!(d.is_pending());
        assert_eq!(d.poll(t0 + DELAY), Some("a"));
        assert!(!d.is_pending());
        assert_eq!(d.poll(t0 + DELAY * 2), None);
    }

    #[test]
    fn test_burst_collapses_to_last_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.signal("c", t0);
        d.signal("ch", t0 + Duration::from_millis(100));
        d.signal("chi", t0 + Duration::from_millis(200));

        // The window restarted at the last signal
        assert_eq!(d.poll(t0 + Duration::from_millis(350)), None);
        assert_eq!(
            d.time_until_due(t0 + Duration::from_millis(350)),
            Some(Duration::from_millis(150))
        );
        assert_eq!(d.poll(t0 + Duration::from_millis(500)), Some("chi"));
    }

    #[test]
    fn test_handle_cancel_drops_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        let handle = d.signal(1, t0);
        handle.cancel();
        assert!(!d.is_pending());
        assert_eq!(d.time_until_due(t0), None);
        assert_eq!(d.poll(t0 + DELAY), None);
    }

    #[test]
    fn test_new_signal_cancels_previous_handle() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        let first = d.signal(1, t0);
        let second = d.signal(2, t0);
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        // Cancelling the stale handle has no effect on the newer value
        first.cancel();
        assert_eq!(d.poll(t0 + DELAY), Some(2));
    }

    #[test]
    fn test_poll_with_runs_callback_once() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        let mut seen = Vec::new();
        d.signal("x".to_string(), t0);
        assert!(!d.poll_with(t0, |v| seen.push(v)));
        assert!(d.poll_with(t0 + DELAY, |v| seen.push(v)));
        assert!(!d.poll_with(t0 + DELAY * 3, |v| seen.push(v)));
        assert_eq!(seen, vec!["x".to_string()]);
    }

    #[test]
    fn test_flush_and_cancel() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.signal(5, t0);
        assert_eq!(d.flush(), Some(5));
        assert_eq!(d.flush(), None);

        let handle = d.signal(6, t0);
        d.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(d.poll(t0 + DELAY), None);
    }
}
