//! Completion statistics
//!
//! The session runtime emits a single completion record when a workout
//! finishes. Delivery is at-most-once: a sink failure is surfaced to the
//! caller as a warning but never rolls the session back out of `Finished`,
//! and the runtime does not retry.

use thiserror::Error;

/// The terminal record emitted once per finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRecord {
    /// Plan id the session was running
    pub workout_id: String,
    /// Total elapsed logical seconds from session entry to completion
    pub completion_secs: u64,
}

/// Errors while persisting a completion record.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to write completion record")]
    Write(#[from] std::io::Error),
}

/// Accepts completion records. Implementations own their retry/error policy;
/// the runtime calls `record` exactly once, at `Finished` entry.
pub trait StatisticsSink {
    fn record(&mut self, record: &CompletionRecord) -> Result<(), StatsError>;
}

/// Sink that keeps records in memory. Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<CompletionRecord>,
}

impl StatisticsSink for MemorySink {
    fn record(&mut self, record: &CompletionRecord) -> Result<(), StatsError> {
        self.records.push(record.clone());
        Ok(())
    }
}
