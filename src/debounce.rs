//! Debounced edge trigger.
//!
//! A bouncing push button produces a burst of falling edges for one press.
//! The trigger turns that burst into a single activation: it fires at most
//! once per quiet window and remembers when it last fired.
//!
//! Per trigger there are two states:
//!
//! - **Armed** - more than `window_ms` since the last fire; the next edge fires.
//! - **Cooling** - within the window; edges are ignored.
//!
//! There is no timer driving Cooling → Armed. The window is re-evaluated
//! lazily each time an edge arrives.

use crate::config::DEBOUNCE_MS;

/// Pure debounce guard.
///
/// Returns `(should_fire, new_last_ms)`. Fires iff
/// `current_ms - last_ms > window_ms`; on fire the new last time is
/// `current_ms`, otherwise `last_ms` is handed back unchanged.
///
/// A `current_ms` earlier than `last_ms` never fires.
pub fn trigger(current_ms: u64, last_ms: u64, window_ms: u64) -> (bool, u64) {
    if current_ms.saturating_sub(last_ms) > window_ms {
        (true, current_ms)
    } else {
        (false, last_ms)
    }
}

/// Edge trigger owning its own last-fire timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeTrigger {
    last_fire_ms: u64,
    window_ms: u64,
}

impl EdgeTrigger {
    /// Create a trigger with the given quiet window.
    ///
    /// The timestamp starts at 0, so edges within the first `window_ms`
    /// after boot are suppressed.
    pub const fn new(window_ms: u64) -> Self {
        Self {
            last_fire_ms: 0,
            window_ms,
        }
    }

    /// Feed one edge observed at `now_ms`. Returns `true` if it counts as a
    /// press; the caller then applies its state mutation.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        let (fired, last) = trigger(now_ms, self.last_fire_ms, self.window_ms);
        self.last_fire_ms = last;
        fired
    }

    /// Whether an edge at `now_ms` would fire, without recording it.
    pub fn is_armed(&self, now_ms: u64) -> bool {
        trigger(now_ms, self.last_fire_ms, self.window_ms).0
    }

    /// Time of the last accepted edge (ms since boot).
    pub fn last_fire_ms(&self) -> u64 {
        self.last_fire_ms
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}

impl Default for EdgeTrigger {
    fn default() -> Self {
        Self::new(DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_is_noop_inside_window() {
        for delta in 0..=200 {
            let (fired, last) = trigger(1_000 + delta, 1_000, 200);
            assert!(!fired, "fired at delta {}", delta);
            assert_eq!(last, 1_000);
        }
    }

    #[test]
    fn guard_fires_past_window() {
        for delta in [201u64, 202, 500, 10_000] {
            let (fired, last) = trigger(1_000 + delta, 1_000, 200);
            assert!(fired);
            assert_eq!(last, 1_000 + delta);
        }
    }

    #[test]
    fn guard_ignores_time_going_backwards() {
        assert_eq!(trigger(500, 1_000, 200), (false, 1_000));
    }

    #[test]
    fn first_press_after_boot_needs_full_window() {
        let mut t = EdgeTrigger::default();
        assert!(!t.fire(150));
        assert!(!t.fire(200));
        assert!(t.fire(201));
        assert_eq!(t.last_fire_ms(), 201);
    }

    #[test]
    fn bounce_burst_fires_once() {
        let mut t = EdgeTrigger::new(200);
        let edges = [1_000u64, 1_002, 1_005, 1_030, 1_120, 1_200];
        let fired = edges.iter().filter(|&&ms| t.fire(ms)).count();
        assert_eq!(fired, 1);
        assert_eq!(t.last_fire_ms(), 1_000);
    }

    #[test]
    fn suppressed_edges_do_not_extend_cooling() {
        let mut t = EdgeTrigger::new(200);
        assert!(t.fire(1_000));
        assert!(!t.fire(1_150));
        // Measured from the accepted edge, not the ignored one.
        assert!(t.fire(1_201));
    }

    #[test]
    fn is_armed_matches_fire_without_mutating() {
        let mut t = EdgeTrigger::new(200);
        assert!(t.fire(1_000));

        assert!(!t.is_armed(1_100));
        assert_eq!(t.last_fire_ms(), 1_000);
        assert!(t.is_armed(1_201));
        assert_eq!(t.last_fire_ms(), 1_000);

        let mut probe = t;
        assert_eq!(t.is_armed(1_300), probe.fire(1_300));
    }

    #[test]
    fn default_window_is_configured_debounce() {
        assert_eq!(EdgeTrigger::default().window_ms(), DEBOUNCE_MS);
    }
}
