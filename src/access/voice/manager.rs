//! Voice command manager on top of a continuous recognition engine.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, info, trace, warn};

use super::types::{Sensitivity, VoiceState};
use crate::access::commands::{CommandTable, normalize_phrase};
use crate::access::error::{AccessError, Capability};
use crate::access::events::EventSink;
use crate::access::platform::{
    Action, RecognitionAlternative, RecognitionConfig, RecognitionEngine, RecognitionEvent,
};

/// Live managers in this process. The platform engines are process-wide, so
/// two managers would dispatch every utterance twice.
static LIVE_MANAGERS: AtomicUsize = AtomicUsize::new(0);

/// Owns the recognition session and dispatches recognized phrases.
///
/// Only one instance should be alive per process; construct it once at the
/// application root and pass it down.
pub struct VoiceCommandManager {
    engine: Option<Box<dyn RecognitionEngine>>,
    commands: Rc<RefCell<CommandTable>>,
    events: EventSink,
    sensitivity: Sensitivity,
    /// User intent; an engine "end" while this is set triggers a restart
    listening: bool,
}

impl VoiceCommandManager {
    /// Create a manager. A missing engine is reported immediately and leaves
    /// the manager permanently unsupported.
    pub fn new(
        engine: Option<Box<dyn RecognitionEngine>>,
        language: &str,
        sensitivity: Sensitivity,
        events: EventSink,
    ) -> Self {
        let live = LIVE_MANAGERS.fetch_add(1, Ordering::SeqCst) + 1;
        if live > 1 {
            warn!(
                "[voxlearn:voice] {} voice command managers alive; utterances will be dispatched more than once",
                live
            );
        }

        let mut engine = engine;
        match engine {
            Some(ref mut engine) => engine.configure(&RecognitionConfig::continuous(language)),
            None => {
                events.report(AccessError::UnsupportedCapability(
                    Capability::SpeechRecognition,
                ));
            }
        }

        Self {
            engine,
            commands: Rc::new(RefCell::new(CommandTable::new())),
            events,
            sensitivity,
            listening: false,
        }
    }

    pub fn state(&self) -> VoiceState {
        if self.engine.is_none() {
            VoiceState::Unsupported
        } else if self.listening {
            VoiceState::Listening
        } else {
            VoiceState::Idle
        }
    }

    pub fn is_supported(&self) -> bool {
        self.engine.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn start(&mut self) {
        let Some(ref mut engine) = self.engine else {
            self.events.report(AccessError::UnsupportedCapability(
                Capability::SpeechRecognition,
            ));
            return;
        };

        if self.listening {
            trace!("[voxlearn:voice] start ignored, already listening");
            return;
        }

        match engine.start() {
            Ok(()) => {
                self.listening = true;
                info!("[voxlearn:voice] listening");
                self.events.listening(true);
            }
            Err(e) => self.events.report(AccessError::StartFailure(e)),
        }
    }

    /// Stop listening. No restart happens on the engine's following "end".
    pub fn stop(&mut self) {
        let Some(ref mut engine) = self.engine else {
            return;
        };

        let was_listening = self.listening;
        // Clear the intent before the engine can deliver its "end"
        self.listening = false;

        if let Err(e) = engine.stop() {
            self.events.report(AccessError::RecognitionError(format!(
                "could not stop speech recognition: {}",
                e
            )));
        }

        if was_listening {
            info!("[voxlearn:voice] stopped listening");
            self.events.listening(false);
        }
    }

    pub fn toggle(&mut self) {
        if self.listening {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    /// Change the sensitivity; applies to the next result without a restart
    pub fn set_sensitivity(&mut self, level: u8) -> Result<(), AccessError> {
        match Sensitivity::new(level) {
            Ok(sensitivity) => {
                self.sensitivity = sensitivity;
                debug!(
                    "[voxlearn:voice] sensitivity {} (threshold {:.1})",
                    level,
                    sensitivity.threshold()
                );
                Ok(())
            }
            Err(e) => {
                self.events.report(e.clone());
                Err(e)
            }
        }
    }

    pub fn threshold(&self) -> f64 {
        self.sensitivity.threshold()
    }

    /// Shared handle to the command table
    pub fn commands(&self) -> Rc<RefCell<CommandTable>> {
        self.commands.clone()
    }

    pub fn register_command(&self, phrase: &str, action: Action) {
        self.commands.borrow_mut().register(phrase, action);
    }

    pub fn register_commands<'a, I>(&self, commands: I)
    where
        I: IntoIterator<Item = (&'a str, Action)>,
    {
        self.commands.borrow_mut().register_many(commands);
    }

    pub fn clear_commands(&self) {
        self.commands.borrow_mut().clear();
    }

    pub fn registered_commands(&self) -> Vec<String> {
        self.commands.borrow().list()
    }

    /// Feed one engine event, in the order the engine emitted them
    pub fn handle_event(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Result { alternatives } => {
                if let Some(top) = alternatives.into_iter().next() {
                    self.handle_result(top);
                }
            }
            RecognitionEvent::Error(message) => {
                // Not fatal: the engine follows up with "end" and the restart
                // logic keeps the session alive
                self.events.report(AccessError::RecognitionError(message));
            }
            RecognitionEvent::End => self.handle_end(),
        }
    }

    fn handle_result(&mut self, top: RecognitionAlternative) {
        if !self.listening {
            trace!("[voxlearn:voice] result after stop dropped");
            return;
        }

        let threshold = self.threshold();
        // NaN confidence never passes
        if !(top.confidence >= threshold) {
            trace!(
                "[voxlearn:voice] discarded '{}' (confidence {:.2} < {:.2})",
                top.transcript, top.confidence, threshold
            );
            return;
        }

        let utterance = normalize_phrase(&top.transcript);
        // Release the table before running the action: actions may register commands
        let matched = self.commands.borrow().resolve(&utterance);
        let Some(matched) = matched else {
            debug!("[voxlearn:voice] no command for '{}'", utterance);
            return;
        };

        debug!(
            "[voxlearn:voice] '{}' -> '{}' ({:?})",
            utterance, matched.phrase, matched.kind
        );
        (matched.action)();
        self.events.command(&utterance);
    }

    fn handle_end(&mut self) {
        if !self.listening {
            trace!("[voxlearn:voice] session ended");
            return;
        }

        let Some(ref mut engine) = self.engine else {
            return;
        };

        match engine.start() {
            Ok(()) => debug!("[voxlearn:voice] session ended, restarted"),
            Err(e) => {
                self.listening = false;
                self.events.report(AccessError::StartFailure(e));
                self.events.listening(false);
            }
        }
    }
}

impl Drop for VoiceCommandManager {
    fn drop(&mut self) {
        LIVE_MANAGERS.fetch_sub(1, Ordering::SeqCst);
        if self.listening {
            self.listening = false;
            if let Some(ref mut engine) = self.engine {
                let _ = engine.stop();
            }
        }
    }
}
