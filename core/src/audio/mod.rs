//! Audio cues for the session runtime
//!
//! The runtime never touches an audio device: it hands `CueEvent`s to a
//! `CueDispatcher`, which forwards them over a channel to whatever playback
//! service the frontend runs. Mute is applied at the dispatcher so a muted
//! session produces no play events at all, while stop events always go
//! through (a cue that started before muting still has to be stoppable).

mod dispatcher;
mod events;

pub use dispatcher::CueDispatcher;
pub use events::{Cue, CueEvent};
