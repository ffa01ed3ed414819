//! Repaint coalescing for widgets with animated state.
//!
//! Transition ticks can fire at a rate decoupled from the display refresh
//! rate. Without coalescing, every tick would trigger a full widget repaint
//! (background blit, pointer, text) far more often than the display can show.
//! The gate collapses any number of repaint requests within one frame into a
//! single scheduled repaint.
//!
//! # State Machine
//!
//! One boolean per widget, two states:
//!
//! | State     | Event                 | Next      | Effect                      |
//! |-----------|-----------------------|-----------|-----------------------------|
//! | `idle`    | `request()`           | `pending` | returns true: schedule once |
//! | `pending` | `request()`           | `pending` | returns false: coalesced    |
//! | `pending` | `begin()` (repaint)   | `idle`    | repaint reads latest state  |
//!
//! The flag is cleared on ENTRY to the repaint, not on completion. A request
//! arriving while the repaint is still executing therefore opens a fresh
//! frame instead of being dropped or causing a re-entrant repaint.
//!
//! The pending repaint always reads current widget state when it runs, so
//! coalescing loses nothing: ten value ticks within one frame produce one
//! repaint showing the tenth value.

/// Per-widget repaint gate.
///
/// Widgets embed one of these; setters and transition ticks call
/// [`RepaintGate::request`], and the widget's draw entry point calls
/// [`RepaintGate::begin`] as its first action.
#[derive(Debug, Clone, Default)]
pub struct RepaintGate {
    pending: bool,
}

impl RepaintGate {
    /// Create an idle gate.
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Request a repaint.
    ///
    /// Returns `true` if this request opened the gate (the caller should
    /// hand the repaint to the host's next-frame slot), `false` if a repaint
    /// is already pending and this request was coalesced into it.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Mark repaint execution as started.
    ///
    /// Must be the FIRST action of the repaint: it clears the flag so a
    /// request arriving during the repaint schedules the next frame. Returns
    /// whether a repaint was actually pending (false for an unsolicited
    /// draw, which is still allowed).
    pub fn begin(&mut self) -> bool {
        let was_pending = self.pending;
        self.pending = false;
        was_pending
    }

    /// True while a repaint is scheduled but not yet started.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::tween::AnimatedValue;
    use std::time::{Duration, Instant};

    #[test]
    fn test_first_request_opens_gate() {
        let mut gate = RepaintGate::new();
        assert!(!gate.is_pending());
        assert!(gate.request());
        assert!(gate.is_pending());
    }

    #[test]
    fn test_requests_within_one_frame_coalesce() {
        let mut gate = RepaintGate::new();

        let mut scheduled = 0;
        for _ in 0..10 {
            if gate.request() {
                scheduled += 1;
            }
        }

        assert_eq!(scheduled, 1, "ten requests must schedule exactly one repaint");
        assert!(gate.is_pending());
    }

    #[test]
    fn test_begin_clears_and_reports_pending() {
        let mut gate = RepaintGate::new();
        gate.request();

        assert!(gate.begin());
        assert!(!gate.is_pending());
        assert!(!gate.begin(), "second begin sees no pending repaint");
    }

    #[test]
    fn test_request_during_repaint_schedules_next_frame() {
        let mut gate = RepaintGate::new();
        gate.request();

        // Repaint starts: flag cleared on entry
        gate.begin();

        // A transition tick fires while the repaint is still executing:
        // it must open a fresh frame, not be dropped
        assert!(gate.request());
        assert!(gate.is_pending());
    }

    #[test]
    fn test_coalesced_repaint_uses_latest_value() {
        // Ten transition ticks inside one frame: one repaint, showing the
        // value of the tenth tick
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        let mut gate = RepaintGate::new();
        value.animate_to(100.0, Easing::Linear, 1.0, t0);

        let mut scheduled = 0;
        let mut latest = value.get();
        for i in 1..=10 {
            let upd = value.update(t0 + Duration::from_millis(i * 50));
            if upd.changed && gate.request() {
                scheduled += 1;
            }
            latest = value.get();
        }

        assert_eq!(scheduled, 1);

        // The frame arrives: the repaint reads current, not snapshotted state
        assert!(gate.begin());
        let painted = value.get();
        assert_eq!(painted, latest);
        assert!((painted - 50.0).abs() < 0.1, "tenth tick is at 500 ms: {painted}");
    }
}
