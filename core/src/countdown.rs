//! Single-armed countdown over whole seconds
//!
//! A `Countdown` is a synchronous value type driven by clock ticks; it does
//! no I/O and owns no task. The session runtime holds at most one in its
//! countdown slot and feeds it one tick per logical second.
//!
//! # Lifecycle
//!
//! 1. `arm(n)` creates the countdown with `n` seconds remaining
//! 2. Each tick decrements it; the tick that leaves 6 seconds remaining
//!    reports the one-shot ending threshold (a fixed 5-second lead on zero)
//! 3. The tick that consumes the final second reports `Expired`; after that
//!    the countdown is done and further ticks are inert
//!
//! Cancellation is dropping it: the owner clears its slot and no further
//! events exist.

/// Remaining-seconds value at which the ending threshold fires.
/// Firing while leaving this value gives a 5-second lead before zero.
const ENDING_THRESHOLD_SECS: u32 = 6;

/// Outcome of feeding one tick to a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Still counting. `threshold` is true on the one tick that crosses the
    /// ending threshold.
    Running { remaining: u32, threshold: bool },

    /// The countdown just reached zero. Reported exactly once; the countdown
    /// self-cancels afterwards.
    Expired,

    /// The countdown already expired; the tick changed nothing.
    Idle,
}

/// A cancellable countdown over an integer number of seconds.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: u32,
    threshold_fired: bool,
    done: bool,
}

impl Countdown {
    /// Arm a countdown with `initial_secs` seconds on it.
    pub fn arm(initial_secs: u32) -> Self {
        Self {
            remaining: initial_secs,
            threshold_fired: false,
            done: false,
        }
    }

    /// Seconds remaining. Never negative; 0 once expired.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown has fired its zero event.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Consume one logical second.
    pub fn tick(&mut self) -> CountdownTick {
        if self.done {
            return CountdownTick::Idle;
        }

        if self.remaining > 1 {
            let threshold =
                self.remaining == ENDING_THRESHOLD_SECS && !self.threshold_fired;
            if threshold {
                self.threshold_fired = true;
            }
            self.remaining -= 1;
            CountdownTick::Running {
                remaining: self.remaining,
                threshold,
            }
        } else {
            // Reaching 1 (or being armed with 0) expires on this tick.
            self.remaining = 0;
            self.done = true;
            CountdownTick::Expired
        }
    }

    /// Shift the remaining time by `delta_secs`, clamped at zero. There is
    /// no upper clamp; extending a rest past its original bound is allowed.
    pub fn adjust(&mut self, delta_secs: i32) {
        self.remaining = self.remaining.saturating_add_signed(delta_secs);
    }
}
