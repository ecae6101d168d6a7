//! Cue dispatch with session-owned mute state
//!
//! The dispatcher is held by the session runtime and lives exactly as long
//! as the session. Delivery is fire-and-forget over a bounded channel: the
//! tick path never blocks on audio, and a backed-up playback service loses
//! cues rather than stalling the session.

use tokio::sync::mpsc;
use tracing::debug;

use super::events::{Cue, CueEvent};

/// Dispatches cue events to a playback service.
pub struct CueDispatcher {
    tx: Option<mpsc::Sender<CueEvent>>,
    muted: bool,
}

impl CueDispatcher {
    /// Dispatcher wired to a playback service via `tx`.
    pub fn new(tx: mpsc::Sender<CueEvent>) -> Self {
        Self {
            tx: Some(tx),
            muted: false,
        }
    }

    /// Dispatcher with no playback service attached; every event is dropped.
    /// Used by headless sessions and tests that only care about state.
    pub fn detached() -> Self {
        Self {
            tx: None,
            muted: false,
        }
    }

    /// Start a cue. No-op while muted.
    pub fn play(&self, cue: Cue) {
        if self.muted {
            return;
        }
        self.send(CueEvent::Play(cue));
    }

    /// Stop a cue if it is playing. Goes through regardless of mute state.
    pub fn stop(&self, cue: Cue) {
        self.send(CueEvent::Stop(cue));
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn send(&self, event: CueEvent) {
        let Some(tx) = &self.tx else { return };
        if tx.try_send(event).is_err() {
            debug!(?event, "cue dropped, playback service not keeping up");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_delivers_when_unmuted() {
        let (tx, mut rx) = mpsc::channel(8);
        let dispatcher = CueDispatcher::new(tx);

        dispatcher.play(Cue::Ending);
        assert_eq!(rx.try_recv(), Ok(CueEvent::Play(Cue::Ending)));
    }

    #[test]
    fn muted_play_is_a_no_op() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut dispatcher = CueDispatcher::new(tx);
        dispatcher.set_muted(true);

        dispatcher.play(Cue::Ending);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn stop_goes_through_while_muted() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut dispatcher = CueDispatcher::new(tx);
        dispatcher.set_muted(true);

        dispatcher.stop(Cue::Complete);
        assert_eq!(rx.try_recv(), Ok(CueEvent::Stop(Cue::Complete)));
    }

    #[test]
    fn detached_dispatcher_swallows_events() {
        let dispatcher = CueDispatcher::detached();
        dispatcher.play(Cue::Complete);
        dispatcher.stop(Cue::Complete);
    }
}
