//! Configuration loading and management

mod io;
mod sections;

#[cfg(test)]
mod tests;

pub use sections::{AnnouncerConfig, KeyboardConfig, ServerConfig, SpeechConfig, VoiceConfig};

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// REST API listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Voice command recognition
    #[serde(default)]
    pub voice: VoiceConfig,

    /// Speech output
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Live region announcements
    #[serde(default)]
    pub announcer: AnnouncerConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keyboard: KeyboardConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration for a project directory.
    /// Looks for: <dir>/.voxlearn/config.toml, then ~/.voxlearn/config.toml,
    /// then falls back to defaults.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let project_path = Self::project_config_path(dir);
        if project_path.exists() {
            return Self::from_file(&project_path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            return Self::from_file(&global_path);
        }

        Ok(Self::with_defaults())
    }

    /// Create a config with sensible defaults
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("server.port must not be 0");
        }
        if self.server.bind.trim().is_empty() {
            bail!("server.bind must not be empty");
        }
        if self.voice.language.trim().is_empty() {
            bail!("voice.language must not be empty");
        }
        if !(0.0..=2.0).contains(&self.speech.pitch) {
            bail!("speech.pitch must be between 0.0 and 2.0");
        }
        Ok(())
    }

    pub fn announce_debounce(&self) -> Duration {
        Duration::from_millis(self.announcer.debounce_ms)
    }

    /// `host:port` the REST API binds to
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}
