//! Cue playback service backed by rodio
//!
//! Runs on its own thread (rodio's output stream is not `Send`), receiving
//! `CueEvent`s from the session's dispatcher. Sinks are kept per cue so a
//! `Stop` event can halt a sound that is still playing; playing a cue again
//! replaces its previous sink.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tokio::sync::{RwLock, mpsc};
use tracing::{debug, warn};

use cadence_core::audio::{Cue, CueEvent};
use cadence_types::AudioSettings;

const SOUND_EXTENSIONS: [&str; 3] = ["wav", "ogg", "mp3"];

/// Audio service that plays cue sounds from the configured sounds directory.
pub struct AudioService {
    event_rx: mpsc::Receiver<CueEvent>,
    settings: Arc<RwLock<AudioSettings>>,
    sounds_dir: PathBuf,
    /// Output stream; `None` if no audio device is available.
    stream: Option<(OutputStream, OutputStreamHandle)>,
    /// Live sinks by cue, so Stop can reach a playing sound.
    playing: HashMap<Cue, Sink>,
}

impl AudioService {
    /// Start the service on a dedicated thread.
    pub fn spawn(
        event_rx: mpsc::Receiver<CueEvent>,
        settings: Arc<RwLock<AudioSettings>>,
        sounds_dir: PathBuf,
    ) -> JoinHandle<()> {
        std::thread::spawn(move || {
            let stream = match OutputStream::try_default() {
                Ok(pair) => Some(pair),
                Err(err) => {
                    warn!(error = %err, "no audio output device, cues disabled");
                    None
                }
            };

            let service = Self {
                event_rx,
                settings,
                sounds_dir,
                stream,
                playing: HashMap::new(),
            };
            service.run();
        })
    }

    /// Blocking event loop; ends when the cue channel closes.
    fn run(mut self) {
        while let Some(event) = self.event_rx.blocking_recv() {
            match event {
                CueEvent::Play(cue) => self.play(cue),
                CueEvent::Stop(cue) => self.stop(cue),
            }
        }
    }

    fn play(&mut self, cue: Cue) {
        let (enabled, volume) = {
            let settings = self.settings.blocking_read();
            (settings.enabled, settings.volume)
        };
        if !enabled {
            return;
        }

        let Some((_, handle)) = &self.stream else {
            return;
        };
        let Some(path) = self.resolve_sound(cue) else {
            debug!(?cue, dir = %self.sounds_dir.display(), "no sound file for cue");
            return;
        };

        let Ok(file) = File::open(&path) else {
            warn!(path = %path.display(), "failed to open sound file");
            return;
        };
        let Ok(source) = Decoder::new(BufReader::new(file)) else {
            warn!(path = %path.display(), "failed to decode sound file");
            return;
        };
        let Ok(sink) = Sink::try_new(handle) else {
            return;
        };

        sink.set_volume(f32::from(volume) / 100.0);
        sink.append(source);
        // Replacing an entry drops the old sink, which stops its sound.
        self.playing.insert(cue, sink);
    }

    fn stop(&mut self, cue: Cue) {
        if let Some(sink) = self.playing.remove(&cue) {
            sink.stop();
        }
    }

    fn resolve_sound(&self, cue: Cue) -> Option<PathBuf> {
        SOUND_EXTENSIONS
            .iter()
            .map(|ext| self.sounds_dir.join(format!("{}.{ext}", cue.file_stem())))
            .find(|path| path.exists())
    }
}
