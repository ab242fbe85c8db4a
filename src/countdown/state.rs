//! Countdown state and its tick/reconciliation rules.
//!
//! [`CountdownState`] owns the remaining-seconds value and decides, for each
//! tick, whether to decrement, finish, or hold. It is deliberately free of
//! scheduling and rendering concerns so the transition rules can be tested
//! on their own; [`crate::countdown::Model`] wraps it with the tick schedule
//! and callback dispatch.

use std::time::SystemTime;

/// Outcome of evaluating one tick against the current state.
///
/// The state machine reports what happened; the caller owns the resulting
/// notifications, so a skipped tick can never leak a callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The value is unchanged since the last processed tick, or the running
    /// gate is closed. Nothing was mutated.
    Skipped,
    /// The countdown was already at zero and settled into its stable
    /// finished form.
    Settled {
        /// Whether a completion notification is due. True only when zero
        /// was reached without passing through one (a timer started at or
        /// fast-forwarded to zero).
        finish: bool,
    },
    /// One second was consumed.
    Advanced {
        /// The remaining value before this tick's subtraction. This is the
        /// progress-notification value.
        before: f64,
        /// Whether a completion notification is due: this tick consumed the
        /// final second.
        finish: bool,
    },
}

/// The owned state of one logical countdown.
///
/// Created on mount or identity change, mutated by tick events and host
/// lifecycle transitions, and discarded on unmount or superseded on
/// identity change. `remaining` never goes below zero.
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::countdown::state::{CountdownState, TickOutcome};
///
/// let mut state = CountdownState::new(3.0);
/// assert_eq!(
///     state.tick(true),
///     TickOutcome::Advanced { before: 3.0, finish: false }
/// );
/// assert_eq!(state.remaining(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct CountdownState {
    remaining: f64,
    previous: Option<f64>,
    suspended_at: Option<SystemTime>,
}

impl CountdownState {
    /// Creates state for a countdown of `initial` seconds, clamped to be
    /// non-negative.
    pub fn new(initial: f64) -> Self {
        Self {
            remaining: initial.max(0.0),
            previous: None,
            suspended_at: None,
        }
    }

    /// Seconds left in the countdown.
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// The value observed at the last processed (not skipped) tick.
    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    /// Whether the host is currently recorded as backgrounded.
    pub fn suspended(&self) -> bool {
        self.suspended_at.is_some()
    }

    /// Whether the countdown has reached zero.
    pub fn finished(&self) -> bool {
        self.remaining == 0.0
    }

    /// Evaluates one tick.
    ///
    /// A tick that finds the value unchanged since the last processed tick
    /// is a no-op; this is how a paused countdown stays stable under a
    /// schedule that keeps firing. The `running` gate independently blocks
    /// any advance.
    ///
    /// On an accepted tick the final second triggers the completion flag
    /// while the progress value reported is the value at the *start* of the
    /// second being consumed, not the remainder after it. That pre-decrement
    /// value is a load-bearing contract for existing observers.
    pub fn tick(&mut self, running: bool) -> TickOutcome {
        if self.previous == Some(self.remaining) || !running {
            return TickOutcome::Skipped;
        }

        let finish =
            self.remaining == 1.0 || (self.remaining == 0.0 && self.previous != Some(1.0));

        if self.remaining == 0.0 {
            self.previous = Some(0.0);
            return TickOutcome::Settled { finish };
        }

        let before = self.remaining;
        self.previous = Some(before);
        self.remaining = (before - 1.0).max(0.0);
        TickOutcome::Advanced { before, finish }
    }

    /// Records the host entering the background at `at`.
    pub fn suspend(&mut self, at: SystemTime) {
        self.suspended_at = Some(at);
    }

    /// Applies the foreground transition at `at`.
    ///
    /// If a suspension was recorded and the countdown is running, the time
    /// spent backgrounded is subtracted from `remaining` in fractional
    /// seconds, clamped at zero. Clock skew that would make the elapsed
    /// time negative is clamped too, so `remaining` never increases. The
    /// pre-correction value is snapshotted into `previous` so the next
    /// tick's unchanged-value check does not skip the corrected value.
    ///
    /// The suspension mark is cleared in every case.
    pub fn resume(&mut self, at: SystemTime, running: bool) {
        if let Some(went_background) = self.suspended_at.take() {
            if running {
                let elapsed = at
                    .duration_since(went_background)
                    .map(|d| d.as_secs_f64())
                    .unwrap_or(0.0);
                self.previous = Some(self.remaining);
                self.remaining = (self.remaining - elapsed).max(0.0);
            }
        }
    }

    /// Applies the teardown/identity-change rule: snapshot the current value
    /// into `previous`, then reset `remaining` to `initial` clamped to be
    /// non-negative.
    pub fn reset_to(&mut self, initial: f64) {
        self.previous = Some(self.remaining);
        self.remaining = initial.max(0.0);
    }
}
