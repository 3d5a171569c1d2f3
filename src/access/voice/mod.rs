//! Voice command recognition
//!
//! Architecture:
//! - VoiceState: what the manager is doing (idle, listening, unsupported)
//! - Sensitivity: the user's 1-5 dial and the confidence threshold it implies
//! - VoiceCommandManager: owns the recognition session, gates results by
//!   confidence and dispatches them through the CommandTable
//!
//! Recognition engines end sessions on their own after short silences. While
//! the user has not asked to stop, every such end is followed by a restart so
//! listening looks continuous from the outside.

mod manager;
mod types;


pub use manager::VoiceCommandManager;
pub use types::{DEFAULT_LANGUAGE, Sensitivity, VoiceState};
