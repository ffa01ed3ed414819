//! Animated value transitions for smooth gauge movement.
//!
//! This module provides the two pieces every animated widget builds on:
//! - **[`Tween`]**: a single scalar transition from a begin to an end value
//!   over a fixed duration, shaped by an easing curve
//! - **[`AnimatedValue`]**: a widget property that owns its current value and
//!   at most one in-flight tween, enforcing the stop-then-replace rule at one
//!   place instead of at every call site
//!
//! # Tick Model
//!
//! The host drives animation by calling `update()` once per frame with the
//! current timestamp. Each call is one tick: the tween computes its elapsed
//! time, evaluates the easing curve, and reports the interpolated value. When
//! elapsed time reaches the duration, the reported value is the end value
//! EXACTLY (not the curve's output), so transitions always land on their
//! target despite floating-point drift. The finishing tick is reported
//! exactly once; after that, `update()` reports nothing.
//!
//! Ticks never overlap and execute strictly in call order: everything runs
//! on the host's single thread of control, and `update()` checks the running
//! state first, so a tick arriving after `stop()` is a no-op even if the
//! host had already queued it.
//!
//! # Stopping
//!
//! `stop()` cancels without finishing: the value stays wherever the
//! interpolation had reached (no snap to either endpoint) and no finishing
//! tick is ever reported for that transition.

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// Upper bound on transition duration in seconds. Inputs beyond this are
/// clamped so the stored `Duration` stays well inside its representable range.
const MAX_DURATION_SECS: f32 = 86_400.0;

// =============================================================================
// Tween
// =============================================================================

/// Lifecycle state of a [`Tween`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    /// Created but not yet started.
    Idle,
    /// Advancing; `update()` produces ticks.
    Running,
    /// Cancelled mid-flight; the value keeps its last interpolated position.
    Stopped,
    /// Reached the end value; the finishing tick has been reported.
    Finished,
}

/// One progress report from [`Tween::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Current interpolated value. Equals the end value exactly on the
    /// finishing tick.
    pub value: f32,
    /// True on the finishing tick only.
    pub finished: bool,
}

/// A time-bounded interpolation of one scalar value.
///
/// Construct with [`Tween::new`], call [`Tween::start`] with the current
/// timestamp, then feed timestamps to [`Tween::update`] each frame.
#[derive(Debug, Clone)]
pub struct Tween {
    easing: Easing,
    begin: f32,
    end: f32,
    duration: Duration,
    state: TweenState,
    started_at: Option<Instant>,
    value: f32,
}

impl Tween {
    /// Create an idle transition.
    ///
    /// A non-finite or non-positive `duration_secs` is treated as zero: the
    /// first tick after `start()` lands on the end value and finishes.
    pub fn new(easing: Easing, begin: f32, end: f32, duration_secs: f32) -> Self {
        let duration = if duration_secs.is_finite() && duration_secs > 0.0 {
            Duration::from_secs_f32(duration_secs.min(MAX_DURATION_SECS))
        } else {
            Duration::ZERO
        };

        Self {
            easing,
            begin,
            end,
            duration,
            state: TweenState::Idle,
            started_at: None,
            value: begin,
        }
    }

    /// Begin advancing from `now`. No-op while already running; starting
    /// from any other state resets the elapsed time to zero.
    pub fn start(&mut self, now: Instant) {
        if self.state == TweenState::Running {
            return;
        }
        self.state = TweenState::Running;
        self.started_at = Some(now);
    }

    /// Cancel a running transition. The value keeps its last interpolated
    /// position and no finishing tick will be reported. No-op in any other
    /// state.
    pub fn stop(&mut self) {
        if self.state == TweenState::Running {
            self.state = TweenState::Stopped;
        }
    }

    /// True while the transition is advancing.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == TweenState::Running
    }

    /// Current lifecycle state.
    #[inline]
    pub const fn state(&self) -> TweenState {
        self.state
    }

    /// Last interpolated value (the begin value until the first tick).
    #[inline]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Interpolation endpoints as `(begin, end)`.
    #[inline]
    pub const fn endpoints(&self) -> (f32, f32) {
        (self.begin, self.end)
    }

    /// Advance one tick. Returns `None` unless running, which also guards
    /// against a host callback that was queued before `stop()` took effect.
    ///
    /// A timestamp earlier than the start (a host handing back a stale
    /// timestamp) counts as zero elapsed time, keeping elapsed time
    /// monotonically non-decreasing.
    pub fn update(&mut self, now: Instant) -> Option<Tick> {
        if self.state != TweenState::Running {
            return None;
        }
        let started = self.started_at?;

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            self.value = self.end;
            self.state = TweenState::Finished;
            return Some(Tick { value: self.end, finished: true });
        }

        self.value = self.easing.ease(
            elapsed.as_secs_f32(),
            self.begin,
            self.end - self.begin,
            self.duration.as_secs_f32(),
        );
        Some(Tick { value: self.value, finished: false })
    }
}

// =============================================================================
// Animated Value
// =============================================================================

/// Result of one [`AnimatedValue::update`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueUpdate {
    /// The stored value changed this tick (the widget should repaint).
    pub changed: bool,
    /// The transition reached its target this tick. Reported exactly once
    /// per transition; never reported for a replaced or stopped one.
    pub just_finished: bool,
}

/// A widget property with at most one in-flight transition.
///
/// Starting a new transition while one is running stops the old one first,
/// so transitions for the same property never run concurrently. The new
/// transition departs from the current interpolated value, not from the old
/// target, which keeps rapid successive updates visually continuous.
///
/// A transition that gets replaced before finishing never reports
/// `just_finished`; only the last surviving transition's finish is reported.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    current: f32,
    tween: Option<Tween>,
}

impl AnimatedValue {
    /// Create with an initial value and no transition.
    pub const fn new(initial: f32) -> Self {
        Self { current: initial, tween: None }
    }

    /// Current value (interpolated while a transition is in flight).
    #[inline]
    pub const fn get(&self) -> f32 {
        self.current
    }

    /// True while a transition is advancing.
    pub fn is_animating(&self) -> bool {
        self.tween.as_ref().is_some_and(Tween::is_playing)
    }

    /// Set the value immediately, cancelling any in-flight transition.
    ///
    /// A NaN value is silently ignored. Setting the value it already has
    /// changes nothing (and leaves a running transition alone). Returns
    /// whether the value changed.
    pub fn set(&mut self, value: f32) -> bool {
        if value.is_nan() || value == self.current {
            return false;
        }
        self.tween = None;
        self.current = value;
        true
    }

    /// Start a transition from the current value toward `target`.
    ///
    /// A NaN target is silently ignored, as is a target equal to the current
    /// value. Any in-flight transition is stopped and replaced. Returns
    /// whether a transition was started.
    pub fn animate_to(&mut self, target: f32, easing: Easing, duration_secs: f32, now: Instant) -> bool {
        if target.is_nan() || target == self.current {
            return false;
        }
        if let Some(tween) = &mut self.tween {
            tween.stop();
        }
        let mut tween = Tween::new(easing, self.current, target, duration_secs);
        tween.start(now);
        self.tween = Some(tween);
        true
    }

    /// Cancel any in-flight transition, keeping the current value.
    pub fn stop(&mut self) {
        if let Some(tween) = &mut self.tween {
            tween.stop();
        }
        self.tween = None;
    }

    /// Advance the in-flight transition by one tick, if any.
    pub fn update(&mut self, now: Instant) -> ValueUpdate {
        let Some(tween) = &mut self.tween else {
            return ValueUpdate::default();
        };
        let Some(tick) = tween.update(now) else {
            return ValueUpdate::default();
        };

        let changed = tick.value != self.current;
        self.current = tick.value;
        if tick.finished {
            self.tween = None;
        }
        ValueUpdate { changed, just_finished: tick.finished }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
