//! Accessibility layer: voice commands, read-aloud, announcements and
//! keyboard shortcuts
//!
//! Architecture:
//! - platform: traits for everything the host provides (recognition engine,
//!   synthesizer, live region, router, page content, visible controls)
//! - voice: continuous recognition, confidence gate and command dispatch
//! - commands: the phrase table and the fixed vocabulary
//! - speech: read-aloud with interruption and voice selection
//! - announcer, keyboard, sync: live region messages, Alt shortcuts and
//!   "click <label>" commands derived from visible controls
//! - AccessLayer: owns all of the above for one host
//!
//! The layer is single-threaded. Hosts pump platform notifications into it
//! from their UI thread and receive [`AccessEvent`]s over a channel.

pub mod announcer;
pub mod commands;
pub mod error;
pub mod events;
pub mod keyboard;
mod layer;
pub mod platform;
pub mod speech;
pub mod sync;
pub mod voice;

#[cfg(test)]
mod test_support;

pub use error::{AccessError, Capability};
pub use events::{AccessEvent, EventSink};
pub use layer::{AccessLayer, HELP_PATH};
pub use platform::Platform;
