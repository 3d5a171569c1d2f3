//! Error taxonomy for the accessibility layer.
//!
//! None of these are raised as panics. They are reported through the
//! [`EventSink`](super::events::EventSink) so a failing recognizer or
//! synthesizer never takes the host down with it.

use thiserror::Error;

/// Platform feature that may be missing at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    SpeechRecognition,
    SpeechSynthesis,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::SpeechRecognition => write!(f, "speech recognition"),
            Capability::SpeechSynthesis => write!(f, "speech synthesis"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccessError {
    /// The platform lacks the feature; permanent for the session
    #[error("{0} is not supported on this platform")]
    UnsupportedCapability(Capability),

    /// The engine refused to activate (permission denied, busy, ...)
    #[error("could not start speech recognition: {0}")]
    StartFailure(String),

    /// Per-utterance engine error; the session keeps going
    #[error("error occurred in recognition: {0}")]
    RecognitionError(String),

    /// Rejected synchronously, state unchanged
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl AccessError {
    /// Transient errors are worth a dismissable notification; permanent ones
    /// should disable the corresponding control instead.
    pub fn is_transient(&self) -> bool {
        !matches!(self, AccessError::UnsupportedCapability(_))
    }
}
