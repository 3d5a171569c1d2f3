//! Recording fakes of the platform traits for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::platform::{
    ContentLocator, ControlCapability, ControlSource, LiveRegion, Navigator, PageSignal,
    Politeness, ReadableRegion, RecognitionConfig, RecognitionEngine, SignalBus,
    SpeechSynthesizer, Utterance, Voice,
};

#[derive(Clone, Default)]
pub struct RecordingLiveRegion {
    writes: Rc<RefCell<Vec<(Politeness, String)>>>,
}

impl RecordingLiveRegion {
    pub fn messages(&self) -> Vec<String> {
        self.writes.borrow().iter().map(|(_, m)| m.clone()).collect()
    }

    pub fn politeness(&self) -> Vec<Politeness> {
        self.writes.borrow().iter().map(|(p, _)| *p).collect()
    }
}

impl LiveRegion for RecordingLiveRegion {
    fn write(&mut self, politeness: Politeness, message: &str) {
        self.writes
            .borrow_mut()
            .push((politeness, message.to_string()));
    }
}

#[derive(Clone, Default)]
pub struct FakeRecognizer {
    pub starts: Rc<Cell<usize>>,
    pub stops: Rc<Cell<usize>>,
    pub config: Rc<RefCell<Option<RecognitionConfig>>>,
    pub fail_start: Rc<RefCell<Option<String>>>,
}

impl FakeRecognizer {
    pub fn reject_start(&self, reason: &str) {
        *self.fail_start.borrow_mut() = Some(reason.to_string());
    }

    pub fn accept_start(&self) {
        *self.fail_start.borrow_mut() = None;
    }
}

impl RecognitionEngine for FakeRecognizer {
    fn configure(&mut self, config: &RecognitionConfig) {
        *self.config.borrow_mut() = Some(config.clone());
    }

    fn start(&mut self) -> Result<(), String> {
        if let Some(reason) = self.fail_start.borrow().clone() {
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

/// Synthesizer that tracks which utterance would currently be audible
#[derive(Clone, Default)]
pub struct FakeSynthesizer {
    pub voices: Rc<RefCell<Vec<Voice>>>,
    pub spoken: Rc<RefCell<Vec<Utterance>>>,
    pub active: Rc<RefCell<Option<Utterance>>>,
    pub interrupted: Rc<RefCell<Vec<String>>>,
    pub cancels: Rc<Cell<usize>>,
    pub paused: Rc<Cell<bool>>,
}

impl FakeSynthesizer {
    pub fn with_voices(voices: Vec<Voice>) -> Self {
        let synth = Self::default();
        *synth.voices.borrow_mut() = voices;
        synth
    }

    pub fn load_voices(&self, voices: Vec<Voice>) {
        *self.voices.borrow_mut() = voices;
    }

    pub fn spoken_texts(&self) -> Vec<String> {
        self.spoken.borrow().iter().map(|u| u.text.clone()).collect()
    }

    pub fn last(&self) -> Option<Utterance> {
        self.spoken.borrow().last().cloned()
    }
}

impl SpeechSynthesizer for FakeSynthesizer {
    fn voices(&self) -> Vec<Voice> {
        self.voices.borrow().clone()
    }

    fn speak(&mut self, utterance: Utterance) {
        if let Some(previous) = self.active.borrow_mut().replace(utterance.clone()) {
            self.interrupted.borrow_mut().push(previous.text);
        }
        self.spoken.borrow_mut().push(utterance);
    }

    fn cancel(&mut self) {
        self.cancels.set(self.cancels.get() + 1);
        if let Some(previous) = self.active.borrow_mut().take() {
            self.interrupted.borrow_mut().push(previous.text);
        }
    }

    fn pause(&mut self) {
        self.paused.set(true);
    }

    fn resume(&mut self) {
        self.paused.set(false);
    }

    fn is_speaking(&self) -> bool {
        self.active.borrow().is_some()
    }
}

#[derive(Clone)]
pub struct RecordingNavigator {
    pub path: Rc<RefCell<String>>,
    pub visits: Rc<RefCell<Vec<String>>>,
    pub backs: Rc<Cell<usize>>,
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self {
            path: Rc::new(RefCell::new("/".to_string())),
            visits: Rc::default(),
            backs: Rc::default(),
        }
    }
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        let navigator = Self::default();
        *navigator.path.borrow_mut() = path.to_string();
        navigator
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
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
pub struct RecordingSignals {
    pub emitted: Rc<RefCell<Vec<PageSignal>>>,
}

impl RecordingSignals {
    pub fn emitted(&self) -> Vec<PageSignal> {
        self.emitted.borrow().clone()
    }
}

impl SignalBus for RecordingSignals {
    fn emit(&self, signal: PageSignal) {
        self.emitted.borrow_mut().push(signal);
    }
}

#[derive(Clone, Default)]
pub struct StaticContent {
    pub regions: Rc<RefCell<HashMap<&'static str, String>>>,
}

impl StaticContent {
    pub fn with(self, region: ReadableRegion, text: &str) -> Self {
        self.regions
            .borrow_mut()
            .insert(region_key(region), text.to_string());
        self
    }
}

fn region_key(region: ReadableRegion) -> &'static str {
    match region {
        ReadableRegion::QuizQuestion => "quiz",
        ReadableRegion::LessonSection => "section",
        ReadableRegion::PageHeading => "heading",
    }
}

impl ContentLocator for StaticContent {
    fn readable_text(&self, region: ReadableRegion) -> Option<String> {
        self.regions.borrow().get(region_key(region)).cloned()
    }
}

/// Control list the test can swap out between syncs
#[derive(Clone, Default)]
pub struct SwappableControls {
    pub controls: Rc<RefCell<Vec<ControlCapability>>>,
}

impl SwappableControls {
    pub fn set(&self, controls: Vec<ControlCapability>) {
        *self.controls.borrow_mut() = controls;
    }
}

impl ControlSource for SwappableControls {
    fn visible_controls(&self) -> Vec<ControlCapability> {
        self.controls.borrow().clone()
    }
}

pub fn english_voices() -> Vec<Voice> {
    vec![
        Voice::new("Thomas", "fr-FR"),
        Voice::new("Daniel", "en-GB"),
        Voice::new("Samantha", "en-US"),
        Voice::new("Google US English Female", "en-US"),
    ]
}
