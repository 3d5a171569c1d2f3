//! Notifications emitted by the accessibility layer.

use std::sync::mpsc::Sender;

use tracing::{debug, warn};

use super::error::AccessError;

/// Something the host UI may want to show or log
#[derive(Debug, Clone, PartialEq)]
pub enum AccessEvent {
    /// A recognized utterance matched a command and its action ran
    Command { utterance: String },
    /// Listening intent changed
    ListeningChanged(bool),
    /// Best-effort failure, see [`AccessError::is_transient`]
    Error(AccessError),
    /// Text written to the live region
    Announced(String),
}

/// Caller-supplied channel for [`AccessEvent`]s.
///
/// Sending never fails from the caller's perspective: if the receiver has
/// been dropped the event is discarded.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: Option<Sender<AccessEvent>>,
}

impl EventSink {
    pub fn new(tx: Sender<AccessEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// A sink that drops everything (events are still traced)
    pub fn detached() -> Self {
        Self { tx: None }
    }

    pub fn report(&self, error: AccessError) {
        warn!("[voxlearn:access] {}", error);
        self.send(AccessEvent::Error(error));
    }

    pub fn command(&self, utterance: &str) {
        debug!("[voxlearn:access] command executed: {}", utterance);
        self.send(AccessEvent::Command {
            utterance: utterance.to_string(),
        });
    }

    pub fn listening(&self, listening: bool) {
        self.send(AccessEvent::ListeningChanged(listening));
    }

    pub fn announced(&self, message: &str) {
        self.send(AccessEvent::Announced(message.to_string()));
    }

    fn send(&self, event: AccessEvent) {
        if let Some(ref tx) = self.tx {
            let _ = tx.send(event);
        }
    }
}
