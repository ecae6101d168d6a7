//! Application configuration persistence
//!
//! Re-exports the shared config types from cadence-types and provides
//! platform defaults plus confy-backed load/save for `AppConfig`.

use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

// Re-export shared types
pub use cadence_types::{AppConfig, AudioSettings};

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

// ─────────────────────────────────────────────────────────────────────────────
// Platform Defaults
// ─────────────────────────────────────────────────────────────────────────────

fn app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("cadence"))
}

fn default_plans_directory() -> String {
    app_dir()
        .map(|p| p.join("plans"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_default()
}

fn default_sounds_directory() -> String {
    app_dir()
        .map(|p| p.join("sounds"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_default()
}

fn default_stats_file() -> String {
    dirs::data_dir()
        .map(|p| p.join("cadence").join("statistics.log"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_default()
}

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    fn load() -> Self;
    fn load_with_defaults() -> Self;
    fn save(&self) -> Result<(), ConfigError>;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        let mut config: AppConfig = match confy::load("cadence", "config") {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "could not load config, using defaults");
                return Self::load_with_defaults();
            }
        };
        // Older config files may predate these fields.
        if config.plans_directory.is_empty() {
            config.plans_directory = default_plans_directory();
        }
        if config.sounds_directory.is_empty() {
            config.sounds_directory = default_sounds_directory();
        }
        if config.stats_file.is_empty() {
            config.stats_file = default_stats_file();
        }
        config
    }

    /// Platform-specific defaults (used when no config file exists)
    fn load_with_defaults() -> Self {
        let mut config = AppConfig::with_plans_directory(default_plans_directory());
        config.sounds_directory = default_sounds_directory();
        config.stats_file = default_stats_file();
        config
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store("cadence", "config", self).map_err(ConfigError::Save)
    }
}
