//! The session state machine
//!
//! `SessionRuntime` drives a user through a plan's exercises, sets, and rest
//! intervals. It owns the single countdown slot: every transition that arms
//! a countdown cancels the previous one first, so two timers can never
//! decrement the same displayed value.
//!
//! Out-of-phase actions (skip outside rest, adjust with nothing armed,
//! completing the workout early, anything after `Finished`) are no-ops
//! rather than errors: they correspond to transient UI races like a
//! double-click, not programming errors.

use tracing::{debug, error, warn};

use cadence_types::{ExerciseStep, WorkoutPlan};

use crate::audio::{Cue, CueDispatcher};
use crate::clock::MAX_SPEED_MULTIPLIER;
use crate::countdown::{Countdown, CountdownTick};
use crate::plan::validate_plan;
use crate::stats::{CompletionRecord, StatisticsSink, StatsError};

use super::SessionError;
use super::state::{Phase, SessionSnapshot, SessionState};

/// Drives one workout session from entry to completion.
pub struct SessionRuntime<S: StatisticsSink> {
    plan: WorkoutPlan,
    state: SessionState,
    /// The single armed countdown, exercise or rest. `None` while a
    /// rep-based exercise awaits manual completion and once `Finished`.
    countdown: Option<Countdown>,
    audio: CueDispatcher,
    sink: S,
}

impl<S: StatisticsSink> SessionRuntime<S> {
    /// Enter a session for `plan`. Fails fast with `PlanInvalid` if the
    /// plan is empty or a step has neither reps nor a duration.
    pub fn new(plan: WorkoutPlan, audio: CueDispatcher, sink: S) -> Result<Self, SessionError> {
        validate_plan(&plan).map_err(SessionError::PlanInvalid)?;

        let mut state = SessionState::new();
        state.audio_enabled = !audio.is_muted();

        let mut runtime = Self {
            plan,
            state,
            countdown: None,
            audio,
            sink,
        };

        // Step 0 duration-based: its countdown starts immediately.
        let step = runtime.current_step();
        if step.is_duration_based() {
            let duration = step.duration_secs;
            runtime.arm_countdown(duration)?;
        }

        debug!(plan = %runtime.plan.id, "session entered");
        Ok(runtime)
    }

    // ─── Tick handling ──────────────────────────────────────────────────────

    /// Consume one logical second from the clock source. Advances the
    /// elapsed counter and whichever countdown is live.
    pub fn handle_tick(&mut self) {
        if self.state.phase == Phase::Finished {
            return;
        }

        self.state.elapsed_total_secs += 1;

        let Some(countdown) = self.countdown.as_mut() else {
            return;
        };

        match countdown.tick() {
            CountdownTick::Running {
                remaining,
                threshold,
            } => {
                self.state.active_countdown_secs = remaining;
                if threshold {
                    self.audio.play(Cue::Ending);
                }
            }
            CountdownTick::Expired => {
                self.countdown = None;
                self.state.active_countdown_secs = 0;
                self.audio.play(Cue::Complete);
                if let Err(err) = self.on_countdown_zero() {
                    error!(error = %err, "tick transition failed");
                }
            }
            CountdownTick::Idle => {}
        }
    }

    /// Phase-specific follow-up once a countdown hits zero.
    fn on_countdown_zero(&mut self) -> Result<(), SessionError> {
        match self.state.phase {
            // Rest over; the unit was already advanced when rest started.
            Phase::Resting => self.enter_active(),
            // Exercise countdown expired. Auto-advance only if the plan
            // says so; otherwise hold at zero awaiting manual completion.
            Phase::Active => {
                if self.plan.complete_duration_step_on_end {
                    self.advance_unit()
                } else {
                    Ok(())
                }
            }
            Phase::Finished => Ok(()),
        }
    }

    // ─── User actions ───────────────────────────────────────────────────────

    /// Complete the current set (or duration unit). The core transition:
    /// advances set/step counters and starts the rest countdown, attributing
    /// rest to the step just completed. On the last set of the last step this
    /// is a no-op; the terminal prompt awaits `complete_workout`.
    pub fn complete_current_unit(&mut self) -> Result<(), SessionError> {
        if self.state.phase != Phase::Active {
            return Ok(());
        }
        self.advance_unit()
    }

    /// Cancel the rest countdown and go straight to the next exercise.
    /// No-op outside `Resting`.
    pub fn skip_rest(&mut self) -> Result<(), SessionError> {
        if self.state.phase != Phase::Resting {
            return Ok(());
        }
        self.cancel_countdown();
        self.enter_active()
    }

    /// Finish the workout and emit the completion statistic exactly once.
    /// Only available on the last set of the last step with no rest pending;
    /// otherwise a no-op. A sink failure is returned as a warning but the
    /// session stays `Finished`.
    pub fn complete_workout(&mut self) -> Result<(), SessionError> {
        if self.state.phase != Phase::Active || !self.on_last_unit() {
            return Ok(());
        }

        self.cancel_countdown();
        self.audio.stop(Cue::Complete);
        self.state.phase = Phase::Finished;

        let record = CompletionRecord {
            workout_id: self.plan.id.clone(),
            completion_secs: self.state.elapsed_total_secs,
        };
        debug!(
            plan = %record.workout_id,
            secs = record.completion_secs,
            "workout finished"
        );

        if let Err(err) = self.record_statistic(&record) {
            warn!(error = %err, "failed to persist completion statistic");
            return Err(SessionError::Stats(err));
        }
        Ok(())
    }

    /// Shift whichever countdown is live by `delta_secs` (the UI passes
    /// ±10), clamped at zero. No-op when nothing is armed or once finished.
    pub fn adjust_active_countdown(&mut self, delta_secs: i32) {
        if self.state.phase == Phase::Finished {
            return;
        }
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.adjust(delta_secs);
            self.state.active_countdown_secs = countdown.remaining();
        }
    }

    /// Set the clock rate (1-4 logical seconds per real second). Values
    /// outside that range are ignored. The frontend restarts its clock
    /// source at the new rate; logical second counts are unaffected.
    pub fn set_speed_multiplier(&mut self, multiplier: u8) {
        if !(1..=MAX_SPEED_MULTIPLIER).contains(&multiplier) {
            return;
        }
        self.state.speed_multiplier = multiplier;
    }

    /// Toggle audio. Mutes future `play` calls only; a cue already started
    /// keeps playing until stopped.
    pub fn toggle_audio(&mut self) {
        self.state.audio_enabled = !self.state.audio_enabled;
        self.audio.set_muted(!self.state.audio_enabled);
    }

    /// Tear the session down without finishing it (navigation away,
    /// frontend shutdown). Cancels the live countdown and silences any
    /// playing cue so nothing outlives the session.
    pub fn teardown(&mut self) {
        self.cancel_countdown();
        self.audio.stop(Cue::Ending);
        self.audio.stop(Cue::Complete);
    }

    // ─── Read-only views ────────────────────────────────────────────────────

    pub fn snapshot(&self) -> SessionSnapshot {
        let step = self.current_step();
        SessionSnapshot {
            step_index: self.state.step_index,
            current_set: self.state.current_set,
            phase: self.state.phase,
            active_countdown_secs: self.state.active_countdown_secs,
            elapsed_total_secs: self.state.elapsed_total_secs,
            audio_enabled: self.state.audio_enabled,
            speed_multiplier: self.state.speed_multiplier,
            last_unit: self.state.phase == Phase::Active && self.on_last_unit(),
            step_name: step.name.clone(),
            step_sets: step.sets,
            reps_label: step.reps_label(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == Phase::Finished
    }

    pub fn plan(&self) -> &WorkoutPlan {
        &self.plan
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // ─── Transitions ────────────────────────────────────────────────────────

    /// The "complete current unit" rule. Rest is paid for the step just
    /// completed, so the step counters advance before the rest starts.
    fn advance_unit(&mut self) -> Result<(), SessionError> {
        if self.on_last_unit() {
            // Terminal prompt; only `complete_workout` leaves this state.
            return Ok(());
        }

        self.cancel_countdown();

        let completed = self.current_step();
        let rest = completed.rest_secs;

        if self.state.current_set < completed.sets {
            self.state.current_set += 1;
        } else {
            self.state.step_index += 1;
            self.state.current_set = 1;
        }
        debug!(
            step = self.state.step_index,
            set = self.state.current_set,
            rest,
            "unit completed"
        );

        if rest > 0 {
            self.state.phase = Phase::Resting;
            self.arm_countdown(rest)
        } else {
            // Zero rest skips the Resting phase entirely.
            self.enter_active()
        }
    }

    /// Enter `Active` for the current unit, arming the exercise countdown
    /// when the step is duration-based. The countdown slot must be empty.
    fn enter_active(&mut self) -> Result<(), SessionError> {
        self.state.phase = Phase::Active;
        let step = self.current_step();
        if step.is_duration_based() {
            let duration = step.duration_secs;
            self.arm_countdown(duration)
        } else {
            self.state.active_countdown_secs = 0;
            Ok(())
        }
    }

    fn arm_countdown(&mut self, secs: u32) -> Result<(), SessionError> {
        if self.countdown.is_some() {
            return Err(SessionError::TimerMisuse);
        }
        self.countdown = Some(Countdown::arm(secs));
        self.state.active_countdown_secs = secs;
        Ok(())
    }

    fn cancel_countdown(&mut self) {
        self.countdown = None;
        self.state.active_countdown_secs = 0;
    }

    fn record_statistic(&mut self, record: &CompletionRecord) -> Result<(), StatsError> {
        self.sink.record(record)
    }

    fn current_step(&self) -> &ExerciseStep {
        &self.plan.steps[self.state.step_index]
    }

    fn on_last_unit(&self) -> bool {
        self.state.step_index + 1 == self.plan.steps.len()
            && self.state.current_set == self.current_step().sets
    }
}
