//! Root composition of the accessibility layer

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use super::announcer::Announcer;
use super::commands::{CommandContext, builtin_actions};
use super::error::AccessError;
use super::events::EventSink;
use super::keyboard::{KeyEvent, KeyOutcome, KeyboardDispatcher};
use super::platform::{Action, Navigator, Platform, RecognitionEvent, Voice};
use super::speech::{SpeechOutput, reading_rate};
use super::sync::ControlSynchronizer;
use super::voice::{Sensitivity, VoiceCommandManager, VoiceState};
use crate::config::{Config, SpeechConfig};
use crate::domain::AccessibilitySettings;

/// Page the "help" command and Alt+H lead to
pub const HELP_PATH: &str = "/voice-commands-help";

/// Owns every accessibility component for one host.
///
/// Build exactly one per process at the application root and route platform
/// notifications (recognition events, key presses, page mutations, voice
/// catalogue changes) into it.
pub struct AccessLayer {
    voice: VoiceCommandManager,
    speech: Rc<RefCell<SpeechOutput>>,
    announcer: Rc<RefCell<Announcer>>,
    keyboard: KeyboardDispatcher,
    sync: ControlSynchronizer,
    settings: Rc<RefCell<AccessibilitySettings>>,
    speech_config: SpeechConfig,
    keyboard_allowed: bool,
}

impl AccessLayer {
    pub fn new(
        platform: Platform,
        settings: AccessibilitySettings,
        config: &Config,
        events: EventSink,
    ) -> Self {
        let Platform {
            recognizer,
            synthesizer,
            live_region,
            navigator,
            signals,
            content,
            controls,
        } = platform;

        let sensitivity =
            Sensitivity::new(settings.voice_sensitivity).unwrap_or(config.voice.sensitivity);
        let keyboard_allowed = config.keyboard.enabled;
        let keyboard_enabled = keyboard_allowed && settings.keyboard_navigation;
        let settings = Rc::new(RefCell::new(settings));

        let announcer = Rc::new(RefCell::new(Announcer::new(
            live_region,
            config.announce_debounce(),
            events.clone(),
        )));
        let speech = Rc::new(RefCell::new(SpeechOutput::new(synthesizer, events.clone())));

        let voice = VoiceCommandManager::new(recognizer, &config.voice.language, sensitivity, events);

        let ctx = CommandContext {
            navigator: navigator.clone(),
            signals: signals.clone(),
            content,
            speech: speech.clone(),
            settings: settings.clone(),
            on_help: help_action(navigator.clone()),
        };
        voice.register_commands(builtin_actions(&ctx));

        let mut keyboard = KeyboardDispatcher::new(navigator, signals, announcer.clone());
        keyboard.set_enabled(keyboard_enabled);

        let mut sync = ControlSynchronizer::new(
            voice.commands(),
            controls,
            config.voice.prune_stale_controls,
        );
        sync.on_structure_changed();

        let mut layer = Self {
            voice,
            speech,
            announcer,
            keyboard,
            sync,
            settings,
            speech_config: config.speech.clone(),
            keyboard_allowed,
        };

        info!(
            "[voxlearn:layer] ready: voice {}, speech {}, keyboard {}",
            layer.voice.state(),
            if layer.speech.borrow().is_supported() { "available" } else { "unavailable" },
            if keyboard_enabled { "on" } else { "off" }
        );

        if config.voice.auto_start && layer.voice.is_supported() {
            layer.voice.start();
        }

        layer
    }

    // Voice

    pub fn voice_state(&self) -> VoiceState {
        self.voice.state()
    }

    pub fn is_listening(&self) -> bool {
        self.voice.is_listening()
    }

    pub fn start_listening(&mut self) {
        self.voice.start();
    }

    pub fn stop_listening(&mut self) {
        self.voice.stop();
    }

    pub fn toggle_listening(&mut self) {
        self.voice.toggle();
    }

    /// Change the confidence dial; also stored in the user's settings
    pub fn set_sensitivity(&mut self, level: u8) -> Result<(), AccessError> {
        self.voice.set_sensitivity(level)?;
        self.settings.borrow_mut().voice_sensitivity = level;
        Ok(())
    }

    pub fn threshold(&self) -> f64 {
        self.voice.threshold()
    }

    pub fn register_command(&self, phrase: &str, action: Action) {
        self.voice.register_command(phrase, action);
    }

    pub fn registered_commands(&self) -> Vec<String> {
        self.voice.registered_commands()
    }

    /// Platform notification: recognition engine activity
    pub fn handle_recognition(&mut self, event: RecognitionEvent) {
        self.voice.handle_event(event);
    }

    // Keyboard

    /// Platform notification: a key went down somewhere in the page
    pub fn handle_key(&self, event: &KeyEvent) -> KeyOutcome {
        self.keyboard.handle_key(event)
    }

    pub fn keyboard_enabled(&self) -> bool {
        self.keyboard.is_enabled()
    }

    // Page structure

    /// Platform notification: nodes were inserted or removed
    pub fn on_structure_changed(&mut self) {
        self.sync.on_structure_changed();
    }

    pub fn click_commands(&self) -> Vec<String> {
        self.sync.derived_phrases()
    }

    // Speech and announcements

    /// Platform notification: the synthesizer's voice catalogue changed
    pub fn on_voices_changed(&self) {
        self.speech.borrow_mut().on_voices_changed();
    }

    /// Read `text` aloud with the user's speed and voice preference
    pub fn speak(&self, text: &str) {
        let (rate, hint) = {
            let settings = self.settings.borrow();
            let hint = if settings.preferred_voice.trim().is_empty() {
                self.speech_config.default_voice.clone()
            } else {
                settings.preferred_voice.clone()
            };
            (reading_rate(settings.reading_speed), hint)
        };
        self.speech
            .borrow_mut()
            .speak(text, rate, self.speech_config.pitch, &hint);
    }

    pub fn stop_speaking(&self) {
        self.speech.borrow_mut().stop_speaking();
    }

    pub fn available_voices(&self) -> Vec<Voice> {
        self.speech.borrow().available_voices()
    }

    pub fn announce(&self, message: &str) {
        self.announcer.borrow_mut().announce(message);
    }

    // Settings

    pub fn settings(&self) -> AccessibilitySettings {
        self.settings.borrow().clone()
    }

    /// Adopt updated user settings (e.g. after a settings page save)
    pub fn apply_settings(&mut self, settings: AccessibilitySettings) {
        if settings.voice_sensitivity != self.voice.sensitivity().level() {
            // Out-of-range levels are reported by the manager and leave the dial unchanged
            let _ = self.voice.set_sensitivity(settings.voice_sensitivity);
        }
        self.keyboard
            .set_enabled(self.keyboard_allowed && settings.keyboard_navigation);
        debug!("[voxlearn:layer] settings applied");
        *self.settings.borrow_mut() = settings;
    }
}

fn help_action(navigator: Rc<dyn Navigator>) -> Action {
    Rc::new(move || navigator.navigate_to(HELP_PATH))
}
