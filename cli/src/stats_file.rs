//! File-backed statistics sink
//!
//! Appends one line per finished workout to the configured statistics log:
//! timestamp, plan id, and completion time in seconds, tab-separated.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use cadence_core::stats::{CompletionRecord, StatisticsSink, StatsError};

pub struct FileStatisticsSink {
    path: PathBuf,
}

impl FileStatisticsSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl StatisticsSink for FileStatisticsSink {
    fn record(&mut self, record: &CompletionRecord) -> Result<(), StatsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(
            file,
            "{}\t{}\t{}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.workout_id,
            record.completion_secs
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_one_line_per_record() {
        let path = std::env::temp_dir().join(format!(
            "cadence-stats-test-{}.log",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let mut sink = FileStatisticsSink::new(path.clone());
        let record = CompletionRecord {
            workout_id: "full-body-a".to_string(),
            completion_secs: 1800,
        };
        sink.record(&record).unwrap();
        sink.record(&record).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("full-body-a\t1800"));

        let _ = fs::remove_file(&path);
    }
}
