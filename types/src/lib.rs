//! Shared plan and configuration types for cadence
//!
//! This crate contains the serializable workout plan model and the runtime
//! settings that are shared between the session runtime (cadence-core) and
//! its frontends. Persistence lives in cadence-core (`AppConfigExt`), which
//! carries the platform-specific dependencies.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Workout Plan Model
// ─────────────────────────────────────────────────────────────────────────────

/// Sentinel `reps` value meaning "unbounded / max reps".
///
/// Display-only: never used in arithmetic or set accounting.
pub const MAX_REPS_SENTINEL: u32 = 999;

/// A single exercise in a workout plan.
///
/// Exactly one of `reps` or `duration_secs` is expected to be non-zero;
/// plan editing tools validate this upstream and the session runtime
/// re-checks it once at session entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseStep {
    /// Display name of the exercise
    pub name: String,

    /// Number of sets (at least 1)
    pub sets: u32,

    /// Repetitions per set; 0 means the step is not rep-based
    #[serde(default)]
    pub reps: u32,

    /// Exercise duration in seconds; 0 means the step is not duration-based
    #[serde(default)]
    pub duration_secs: u32,

    /// Rest after each completed set/step, in seconds
    #[serde(default)]
    pub rest_secs: u32,

    /// Position within the plan; plan order is the iteration order
    #[serde(default)]
    pub order: u32,
}

impl ExerciseStep {
    /// Whether this step runs its own exercise countdown.
    pub fn is_duration_based(&self) -> bool {
        self.duration_secs > 0
    }

    /// Rep count formatted for display, honoring the max-reps sentinel.
    /// Returns `None` for steps that are not rep-based.
    pub fn reps_label(&self) -> Option<String> {
        match self.reps {
            0 => None,
            MAX_REPS_SENTINEL => Some("Max".to_string()),
            n => Some(n.to_string()),
        }
    }
}

/// An ordered workout plan, immutable for the duration of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Stable identifier, referenced by completion statistics
    pub id: String,

    /// Display name
    pub name: String,

    /// Ordered exercise steps (non-empty)
    pub steps: Vec<ExerciseStep>,

    /// If true, a duration-based step auto-advances when its countdown
    /// reaches zero; if false the user must still press "complete".
    #[serde(default)]
    pub complete_duration_step_on_end: bool,
}

impl WorkoutPlan {
    /// Total number of sets across all steps.
    pub fn total_sets(&self) -> u32 {
        self.steps.iter().map(|s| s.sets).sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

/// Audio settings for session cues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Master enable for all audio
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Volume level (0-100)
    #[serde(default = "default_audio_volume")]
    pub volume: u8,
}

fn default_true() -> bool {
    true
}

fn default_audio_volume() -> u8 {
    80
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 80,
        }
    }
}

/// Application configuration.
///
/// Note: persistence methods (load/save) are provided by cadence-core via
/// the `AppConfigExt` trait, as they require platform-specific dependencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory containing workout plan TOML files
    #[serde(default)]
    pub plans_directory: String,

    /// Directory containing cue sound files (ending.wav, complete.wav)
    #[serde(default)]
    pub sounds_directory: String,

    /// File the completion statistics log is appended to
    #[serde(default)]
    pub stats_file: String,

    /// Default clock rate for new sessions (1-4, logical seconds per real second)
    #[serde(default = "default_speed_multiplier")]
    pub speed_multiplier: u8,

    #[serde(default)]
    pub audio: AudioSettings,
}

fn default_speed_multiplier() -> u8 {
    1
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_plans_directory(String::new())
    }
}

impl AppConfig {
    /// Create a new AppConfig with the specified plans directory.
    /// Other fields use their default values.
    pub fn with_plans_directory(plans_directory: String) -> Self {
        Self {
            plans_directory,
            sounds_directory: String::new(),
            stats_file: String::new(),
            speed_multiplier: 1,
            audio: AudioSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(reps: u32) -> ExerciseStep {
        ExerciseStep {
            name: "Push-ups".to_string(),
            sets: 3,
            reps,
            duration_secs: 0,
            rest_secs: 60,
            order: 0,
        }
    }

    #[test]
    fn reps_label_formats_sentinel_as_max() {
        assert_eq!(step(12).reps_label().as_deref(), Some("12"));
        assert_eq!(step(MAX_REPS_SENTINEL).reps_label().as_deref(), Some("Max"));
        assert_eq!(step(0).reps_label(), None);
    }

    #[test]
    fn total_sets_sums_all_steps() {
        let plan = WorkoutPlan {
            id: "p1".to_string(),
            name: "Test".to_string(),
            steps: vec![step(10), step(8)],
            complete_duration_step_on_end: false,
        };
        assert_eq!(plan.total_sets(), 6);
    }
}
