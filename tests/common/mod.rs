//! Shared test utilities: recording platform fakes and a session fixture

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};

use voxlearn::Config;
use voxlearn::access::platform::{
    ContentLocator, ControlCapability, ControlSource, LiveRegion, Navigator, PageSignal, Platform,
    Politeness, ReadableRegion, RecognitionConfig, RecognitionEngine, SignalBus,
    SpeechSynthesizer, Utterance, Voice,
};
use voxlearn::access::{AccessEvent, AccessLayer, EventSink};
use voxlearn::domain::AccessibilitySettings;

#[derive(Clone, Default)]
pub struct Recognizer {
    pub starts: Rc<Cell<usize>>,
    pub stops: Rc<Cell<usize>>,
    pub refuse: Rc<RefCell<Option<String>>>,
}

impl RecognitionEngine for Recognizer {
    fn configure(&mut self, _config: &RecognitionConfig) {}

    fn start(&mut self) -> Result<(), String> {
        if let Some(reason) = self.refuse.borrow().clone() {
            return Err(reason);
        }
        self.starts.set(self.starts.get() + 1);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), String> {
        self.stops.set(self.stops.get() + 1);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct Synthesizer {
    pub voices: Rc<RefCell<Vec<Voice>>>,
    pub spoken: Rc<RefCell<Vec<Utterance>>>,
    pub speaking: Rc<Cell<bool>>,
    pub cancels: Rc<Cell<usize>>,
}

impl Synthesizer {
    pub fn texts(&self) -> Vec<String> {
        self.spoken.borrow().iter().map(|u| u.text.clone()).collect()
    }
}

impl SpeechSynthesizer for Synthesizer {
    fn voices(&self) -> Vec<Voice> {
        self.voices.borrow().clone()
    }

    fn speak(&mut self, utterance: Utterance) {
        self.speaking.set(true);
        self.spoken.borrow_mut().push(utterance);
    }

    fn cancel(&mut self) {
        self.cancels.set(self.cancels.get() + 1);
        self.speaking.set(false);
    }

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    fn is_speaking(&self) -> bool {
        self.speaking.get()
    }
}

#[derive(Clone, Default)]
pub struct Live {
    pub messages: Rc<RefCell<Vec<(Politeness, String)>>>,
}

impl LiveRegion for Live {
    fn write(&mut self, politeness: Politeness, message: &str) {
        self.messages
            .borrow_mut()
            .push((politeness, message.to_string()));
    }
}

#[derive(Clone)]
pub struct Router {
    pub path: Rc<RefCell<String>>,
    pub visits: Rc<RefCell<Vec<String>>>,
    pub backs: Rc<Cell<usize>>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            path: Rc::new(RefCell::new("/".to_string())),
            visits: Rc::new(RefCell::new(Vec::new())),
            backs: Rc::new(Cell::new(0)),
        }
    }
}

impl Router {
    /// Move to `path` without recording a visit
    pub fn set_path(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for Router {
    fn navigate_to(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
        self.visits.borrow_mut().push(path.to_string());
    }

    fn navigate_back(&self) {
        self.backs.set(self.backs.get() + 1);
    }

    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }
}

#[derive(Clone, Default)]
pub struct Signals {
    pub emitted: Rc<RefCell<Vec<PageSignal>>>,
}

impl SignalBus for Signals {
    fn emit(&self, signal: PageSignal) {
        self.emitted.borrow_mut().push(signal);
    }
}

pub struct Content;

impl ContentLocator for Content {
    fn readable_text(&self, region: ReadableRegion) -> Option<String> {
        Some(match region {
            ReadableRegion::QuizQuestion => "What are functions in programming?".to_string(),
            ReadableRegion::LessonSection => "Functions are reusable blocks of code.".to_string(),
            ReadableRegion::PageHeading => "Dashboard".to_string(),
        })
    }
}

#[derive(Clone, Default)]
pub struct Controls {
    pub current: Rc<RefCell<Vec<ControlCapability>>>,
}

impl Controls {
    pub fn set(&self, controls: Vec<ControlCapability>) {
        *self.current.borrow_mut() = controls;
    }
}

impl ControlSource for Controls {
    fn visible_controls(&self) -> Vec<ControlCapability> {
        self.current.borrow().clone()
    }
}

/// A layer wired to recording fakes
pub struct Session {
    pub layer: AccessLayer,
    pub events: Receiver<AccessEvent>,
    pub recognizer: Recognizer,
    pub synthesizer: Synthesizer,
    pub live: Live,
    pub router: Router,
    pub signals: Signals,
    pub controls: Controls,
}

impl Session {
    pub fn drain(&self) -> Vec<AccessEvent> {
        self.events.try_iter().collect()
    }

    pub fn commands(&self) -> Vec<String> {
        self.drain()
            .into_iter()
            .filter_map(|e| match e {
                AccessEvent::Command { utterance } => Some(utterance),
                _ => None,
            })
            .collect()
    }
}

pub fn english_voices() -> Vec<Voice> {
    vec![
        Voice::new("Thomas", "fr-FR"),
        Voice::new("Daniel", "en-GB"),
        Voice::new("Samantha", "en-US"),
    ]
}

/// Session with default settings and the given config
pub fn session_with(config: &Config, settings: AccessibilitySettings) -> Session {
    let recognizer = Recognizer::default();
    let synthesizer = Synthesizer::default();
    let live = Live::default();
    let router = Router::default();
    let signals = Signals::default();
    let controls = Controls::default();

    let platform = Platform {
        recognizer: Some(Box::new(recognizer.clone())),
        synthesizer: Some(Box::new(synthesizer.clone())),
        live_region: Box::new(live.clone()),
        navigator: Rc::new(router.clone()),
        signals: Rc::new(signals.clone()),
        content: Rc::new(Content),
        controls: Rc::new(controls.clone()),
    };

    let (tx, rx) = mpsc::channel();
    let layer = AccessLayer::new(platform, settings, config, EventSink::new(tx));

    Session {
        layer,
        events: rx,
        recognizer,
        synthesizer,
        live,
        router,
        signals,
        controls,
    }
}

pub fn session() -> Session {
    session_with(&Config::with_defaults(), AccessibilitySettings::default())
}
