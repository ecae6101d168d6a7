use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};

use cadence_core::audio::CueEvent;
use cadence_core::config::AppConfigExt;
use cadence_core::plan::{PlanError, PlanLibrary};
use cadence_types::{AppConfig, AudioSettings};

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    pub library: Arc<RwLock<PlanLibrary>>,
    /// Read by the audio service whenever it plays a cue.
    pub audio_settings: Arc<RwLock<AudioSettings>>,
    /// Cloned into each session's cue dispatcher.
    pub cue_tx: mpsc::Sender<CueEvent>,
}

impl CliContext {
    /// Build the context and the receiving end of the cue channel the
    /// audio service consumes.
    pub fn new() -> (Self, mpsc::Receiver<CueEvent>) {
        let config = AppConfig::load();
        let audio_settings = Arc::new(RwLock::new(config.audio.clone()));
        let (cue_tx, cue_rx) = mpsc::channel(64);

        (
            Self {
                config: Arc::new(RwLock::new(config)),
                library: Arc::new(RwLock::new(PlanLibrary::new())),
                audio_settings,
                cue_tx,
            },
            cue_rx,
        )
    }

    /// Re-read every plan in the configured plans directory.
    /// Returns the number of plans loaded.
    pub async fn reload_library(&self) -> Result<usize, PlanError> {
        let dir = {
            let config = self.config.read().await;
            std::path::PathBuf::from(&config.plans_directory)
        };
        let mut library = self.library.write().await;
        library.load_dir(&dir)?;
        Ok(library.len())
    }
}
