//! Wall-clock tick generation
//!
//! A `ClockSource` emits one logical-second tick per `1/rate` real seconds,
//! where `rate` is the session's speed multiplier (1-4). Every countdown and
//! the elapsed-time counter are driven off the same tick stream, so raising
//! the multiplier accelerates all of them in lock-step.
//!
//! Ticks are delivered over a bounded channel. Stopping the clock aborts the
//! emitting task; at most one already-queued tick may still be delivered
//! before the stream ends.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Highest supported speed multiplier (logical seconds per real second).
pub const MAX_SPEED_MULTIPLIER: u8 = 4;

/// One elapsed logical second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Tick generator backed by a tokio interval task.
pub struct ClockSource {
    handle: Option<JoinHandle<()>>,
}

impl ClockSource {
    /// Start emitting ticks at `rate_per_real_sec` logical seconds per real
    /// second. Rates outside 1..=4 are clamped.
    ///
    /// Returns the clock handle and the receiving end of the tick stream.
    /// Dropping the receiver ends the emitting task on its next tick.
    pub fn start(rate_per_real_sec: u8) -> (Self, mpsc::Receiver<Tick>) {
        let rate = rate_per_real_sec.clamp(1, MAX_SPEED_MULTIPLIER);
        let period = Duration::from_millis(1000 / u64::from(rate));
        let (tx, rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first interval tick completes immediately; a logical second
            // has not elapsed yet, so skip it.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(Tick).await.is_err() {
                    break;
                }
            }
        });

        (
            Self {
                handle: Some(handle),
            },
            rx,
        )
    }

    /// Halt tick emission. The tick stream ends once any already-queued tick
    /// has been drained.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ClockSource {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn emits_one_tick_per_logical_second() {
        let start = tokio::time::Instant::now();
        let (_clock, mut rx) = ClockSource::start(1);

        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(Tick));
        }
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn rate_four_quarters_the_real_interval() {
        let start = tokio::time::Instant::now();
        let (_clock, mut rx) = ClockSource::start(4);

        for _ in 0..4 {
            assert_eq!(rx.recv().await, Some(Tick));
        }
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_the_tick_stream() {
        let (mut clock, mut rx) = ClockSource::start(2);

        assert_eq!(rx.recv().await, Some(Tick));
        clock.stop();

        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_range_rate_is_clamped() {
        let start = tokio::time::Instant::now();
        let (_clock, mut rx) = ClockSource::start(9);

        assert_eq!(rx.recv().await, Some(Tick));
        // Clamped to 4x: one tick per quarter second.
        assert_eq!(start.elapsed(), Duration::from_millis(250));
    }
}
