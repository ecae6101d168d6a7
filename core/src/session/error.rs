//! Error types for session operations

use thiserror::Error;

use crate::plan::PlanError;
use crate::stats::StatsError;

/// Errors raised by the session runtime
#[derive(Debug, Error)]
pub enum SessionError {
    /// The supplied plan cannot start a session. Fatal at entry; the
    /// runtime never partially initializes.
    #[error("cannot start session: invalid plan")]
    PlanInvalid(#[source] PlanError),

    /// A transition tried to arm a countdown while one was live. Internal
    /// invariant violation; transitions always cancel before arming.
    #[error("attempted to arm a countdown while one is live")]
    TimerMisuse,

    /// The completion statistic could not be persisted. Non-fatal: the
    /// session is still `Finished` when this is returned.
    #[error("failed to record completion statistic")]
    Stats(#[from] StatsError),
}
