//! Session state and the read-only view handed to frontends

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// An exercise is in progress: rep-based awaiting manual completion,
    /// or duration-based running its countdown
    Active,
    /// A rest countdown is running
    Resting,
    /// Terminal; the completion statistic has been emitted
    Finished,
}

/// Mutable session progress, owned exclusively by the runtime.
///
/// Invariants (enforced by the runtime's transitions):
/// - `step_index` and `current_set` only move forward
/// - `elapsed_total_secs` only increases, and freezes at `Finished`
#[derive(Debug, Clone)]
pub(super) struct SessionState {
    pub step_index: usize,
    pub current_set: u32,
    pub phase: Phase,
    /// Remaining seconds of whichever countdown is live (exercise or rest)
    pub active_countdown_secs: u32,
    pub elapsed_total_secs: u64,
    pub audio_enabled: bool,
    pub speed_multiplier: u8,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            step_index: 0,
            current_set: 1,
            phase: Phase::Active,
            active_countdown_secs: 0,
            elapsed_total_secs: 0,
            audio_enabled: true,
            speed_multiplier: 1,
        }
    }
}

/// Read-only state for rendering, produced by `SessionRuntime::snapshot`.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub step_index: usize,
    pub current_set: u32,
    pub phase: Phase,
    pub active_countdown_secs: u32,
    pub elapsed_total_secs: u64,
    pub audio_enabled: bool,
    pub speed_multiplier: u8,

    /// True when the session sits on the last set of the last step with no
    /// rest pending; the frontend shows the "complete workout" prompt.
    pub last_unit: bool,

    // Display fields for the current step
    pub step_name: String,
    pub step_sets: u32,
    /// Formatted rep count ("12", "Max"); `None` for duration-based steps
    pub reps_label: Option<String>,
}
