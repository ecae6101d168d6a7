//! Cue event types for the playback service

/// Cue identifiers used by the session runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A countdown is 5 seconds from zero
    Ending,
    /// A countdown reached zero
    Complete,
}

impl Cue {
    /// File stem of the bundled sound for this cue.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Cue::Ending => "ending",
            Cue::Complete => "complete",
        }
    }
}

/// Events delivered to the playback service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueEvent {
    /// Start playing a cue
    Play(Cue),
    /// Stop a cue if it is currently playing
    Stop(Cue),
}
