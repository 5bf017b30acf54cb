//! Trailing-edge debouncer for the search query.
//!
//! The event loop already wakes on a poll timeout, so the debouncer is
//! poll-driven rather than timer-driven: `update` records raw input and
//! (re)arms the deadline, `deadline` tells the loop how long it may sleep,
//! and `poll` hands over the settled value once the quiet interval has
//! passed with no further change. No leading edge, no max-wait cap.
//!
//! Every method takes `now` explicitly, which keeps the tests free of real
//! sleeps.

use std::time::{Duration, Instant};

pub struct Debouncer {
    quiet: Duration,
    /// Last raw value seen, settled or not. Repeats of it don't re-arm.
    last_input: Option<String>,
    /// Value waiting to settle and the instant it becomes settled.
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            last_input: None,
            pending: None,
        }
    }

    /// Records a new raw input value. A changed value cancels any pending
    /// emission and restarts the quiet interval from `now`. An unchanged
    /// value is a no-op so held-down key repeats of the same text don't
    /// postpone settling. Empty strings are valid input (they settle into
    /// "clear results").
    pub fn update(&mut self, value: &str, now: Instant) {
        if self.last_input.as_deref() == Some(value) {
            return;
        }
        self.last_input = Some(value.to_string());
        self.pending = Some((value.to_string(), now + self.quiet));
    }

    /// Returns the settled value if its quiet interval has elapsed.
    /// At most one value is ever pending, so this never skips emissions.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, due)) if *due <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// The instant the pending value settles, if any. The event loop uses
    /// this to bound its poll timeout so settling isn't delayed by the
    /// idle sleep.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Drops any pending emission. Called on teardown so a stale timer can
    /// never fire into a consumer that stopped listening.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(500);

    fn debouncer() -> (Debouncer, Instant) {
        (Debouncer::new(QUIET), Instant::now())
    }

    #[test]
    fn test_settles_after_quiet_interval() {
        let (mut d, t0) = debouncer();
        d.update("react", t0);

        assert_eq!(d.poll(t0 + QUIET - Duration::from_millis(1)), None);
        assert_eq!(d.poll(t0 + QUIET), Some("react".to_string()));
        // Settled value is emitted exactly once.
        assert_eq!(d.poll(t0 + QUIET * 2), None);
    }

    #[test]
    fn test_rapid_changes_produce_no_intermediate_emissions() {
        let (mut d, t0) = debouncer();
        let step = Duration::from_millis(100);

        for (i, value) in ["r", "re", "rea", "reac", "react"].iter().enumerate() {
            let now = t0 + step * i as u32;
            d.update(value, now);
            assert_eq!(d.poll(now), None);
        }

        let last_change = t0 + step * 4;
        assert_eq!(d.poll(last_change + QUIET - Duration::from_millis(1)), None);
        assert_eq!(d.poll(last_change + QUIET), Some("react".to_string()));
    }

    #[test]
    fn test_change_restarts_interval_from_last_edit() {
        let (mut d, t0) = debouncer();
        d.update("a", t0);
        // Edit arrives just before "a" would have settled.
        let edit = t0 + QUIET - Duration::from_millis(1);
        d.update("ab", edit);

        assert_eq!(d.poll(t0 + QUIET), None);
        assert_eq!(d.poll(edit + QUIET), Some("ab".to_string()));
    }

    #[test]
    fn test_unchanged_value_does_not_rearm() {
        let (mut d, t0) = debouncer();
        d.update("rust", t0);
        // Same text again halfway through the interval.
        d.update("rust", t0 + QUIET / 2);

        assert_eq!(d.poll(t0 + QUIET), Some("rust".to_string()));
    }

    #[test]
    fn test_empty_string_is_a_valid_settled_value() {
        let (mut d, t0) = debouncer();
        d.update("rust", t0);
        let _ = d.poll(t0 + QUIET);

        d.update("", t0 + QUIET);
        assert_eq!(d.poll(t0 + QUIET * 2), Some(String::new()));
    }

    #[test]
    fn test_cancel_drops_pending_emission() {
        let (mut d, t0) = debouncer();
        d.update("rust", t0);
        d.cancel();

        assert_eq!(d.poll(t0 + QUIET * 2), None);
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn test_deadline_tracks_pending_value() {
        let (mut d, t0) = debouncer();
        assert_eq!(d.deadline(), None);

        d.update("a", t0);
        assert_eq!(d.deadline(), Some(t0 + QUIET));

        let edit = t0 + Duration::from_millis(200);
        d.update("ab", edit);
        assert_eq!(d.deadline(), Some(edit + QUIET));

        let _ = d.poll(edit + QUIET);
        assert_eq!(d.deadline(), None);
    }
}
