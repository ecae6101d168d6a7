pub mod audio;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod plan;
pub mod session;
pub mod stats;

// Re-exports for convenience
pub use audio::{Cue, CueDispatcher, CueEvent};
pub use clock::{ClockSource, Tick, MAX_SPEED_MULTIPLIER};
pub use countdown::{Countdown, CountdownTick};
pub use plan::{PlanError, PlanLibrary, load_plan_from_file, load_plans_from_dir};
pub use session::{Phase, SessionError, SessionRuntime, SessionSnapshot};
pub use stats::{CompletionRecord, StatisticsSink, StatsError};
