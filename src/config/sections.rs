//! Configuration sections

use serde::{Deserialize, Serialize};

use crate::access::voice::{DEFAULT_LANGUAGE, Sensitivity};

/// REST API listener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

/// Voice command recognition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// BCP-47 recognition language
    #[serde(default = "default_language")]
    pub language: String,

    /// Used when the user has no stored preference (1 strict .. 5 permissive)
    #[serde(default)]
    pub sensitivity: Sensitivity,

    /// Start listening as soon as the layer is constructed
    #[serde(default = "default_true")]
    pub auto_start: bool,

    /// Remove "click" commands whose control is no longer visible
    #[serde(default = "default_true")]
    pub prune_stale_controls: bool,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            sensitivity: Sensitivity::default(),
            auto_start: true,
            prune_stale_controls: true,
        }
    }
}

/// Speech output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_pitch")]
    pub pitch: f32,

    /// Voice used when the user has no preference; empty picks the first
    /// English voice
    #[serde(default)]
    pub default_voice: String,
}

fn default_pitch() -> f32 {
    1.0
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            pitch: default_pitch(),
            default_voice: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncerConfig {
    /// Identical announcements within this window are spoken once
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    750
}

impl Default for AnnouncerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Alt+key shortcuts
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
