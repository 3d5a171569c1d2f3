//! Voice recognition state and sensitivity types.

use serde::{Deserialize, Serialize};

use crate::access::error::AccessError;

pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Recognition state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceState {
    /// Ready, not listening
    #[default]
    Idle,
    /// A recognition session is (logically) running
    Listening,
    /// The platform has no speech recognition; permanent
    Unsupported,
}

impl VoiceState {
    pub fn is_listening(&self) -> bool {
        matches!(self, VoiceState::Listening)
    }
}

impl std::fmt::Display for VoiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoiceState::Idle => write!(f, "Idle"),
            VoiceState::Listening => write!(f, "Listening"),
            VoiceState::Unsupported => write!(f, "Unsupported"),
        }
    }
}

/// How permissive the confidence gate is, from 1 (strict) to 5 (permissive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Sensitivity(u8);

impl Sensitivity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, AccessError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(AccessError::InvalidArgument(format!(
                "sensitivity must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                level
            )))
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// Minimum confidence a result needs: `0.5 + (5 - level) * 0.1`
    pub fn threshold(&self) -> f64 {
        // Computed in tenths so the thresholds are the exact decimal literals
        f64::from(5 + (Self::MAX - self.0)) / 10.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Sensitivity {
    type Error = AccessError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Sensitivity> for u8 {
    fn from(sensitivity: Sensitivity) -> Self {
        sensitivity.0
    }
}
