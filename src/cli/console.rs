//! Terminal stand-ins for the host platform, used by `voxlearn listen`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use voxlearn::access::platform::{
    ContentLocator, ControlCapability, ControlSource, LiveRegion, Navigator, PageSignal, Platform,
    Politeness, ReadableRegion, RecognitionConfig, RecognitionEngine, SignalBus,
    SpeechSynthesizer, Utterance, Voice,
};
use voxlearn::store::MemStore;

/// Recognizer whose results are typed in by the user
pub struct ConsoleRecognizer;

impl RecognitionEngine for ConsoleRecognizer {
    fn configure(&mut self, config: &RecognitionConfig) {
        println!("  [mic] language {}", config.language);
    }

    fn start(&mut self) -> Result<(), String> {
        println!("  [mic] on");
        Ok(())
    }

    fn stop(&mut self) -> Result<(), String> {
        println!("  [mic] off");
        Ok(())
    }
}

/// Synthesizer that prints what it would say. Its voice catalogue stays
/// empty until `voices` is entered, like a platform that loads voices late.
#[derive(Clone, Default)]
pub struct ConsoleSynthesizer {
    voices: Rc<RefCell<Vec<Voice>>>,
    speaking: Rc<Cell<bool>>,
}

impl ConsoleSynthesizer {
    pub fn load_voices(&self) {
        *self.voices.borrow_mut() = vec![
            Voice::new("Daniel", "en-GB"),
            Voice::new("Samantha", "en-US"),
            Voice::new("Thomas", "fr-FR"),
        ];
    }
}

impl SpeechSynthesizer for ConsoleSynthesizer {
    fn voices(&self) -> Vec<Voice> {
        self.voices.borrow().clone()
    }

    fn speak(&mut self, utterance: Utterance) {
        self.speaking.set(true);
        println!(
            "  [speech] ({}, rate {:.2}) {}",
            utterance
                .voice
                .as_ref()
                .map(|v| v.name.as_str())
                .unwrap_or("default voice"),
            utterance.rate,
            utterance.text
        );
    }

    fn cancel(&mut self) {
        if self.speaking.replace(false) {
            println!("  [speech] cancelled");
        }
    }

    fn pause(&mut self) {
        println!("  [speech] paused");
    }

    fn resume(&mut self) {
        println!("  [speech] resumed");
    }

    fn is_speaking(&self) -> bool {
        self.speaking.get()
    }
}

pub struct ConsoleLiveRegion;

impl LiveRegion for ConsoleLiveRegion {
    fn write(&mut self, politeness: Politeness, message: &str) {
        println!("  [live:{:?}] {}", politeness, message);
    }
}

/// Router with a history stack
#[derive(Clone)]
pub struct ConsoleNavigator {
    history: Rc<RefCell<Vec<String>>>,
}

impl Default for ConsoleNavigator {
    fn default() -> Self {
        Self {
            history: Rc::new(RefCell::new(vec!["/".to_string()])),
        }
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate_to(&self, path: &str) {
        self.history.borrow_mut().push(path.to_string());
        println!("  [route] {}", path);
    }

    fn navigate_back(&self) {
        let mut history = self.history.borrow_mut();
        if history.len() > 1 {
            history.pop();
        }
        println!("  [route] back to {}", history.last().map_or("/", |p| p.as_str()));
    }

    fn current_path(&self) -> String {
        self.history
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }
}

pub struct ConsoleSignals;

impl SignalBus for ConsoleSignals {
    fn emit(&self, signal: PageSignal) {
        println!("  [signal] {}", signal);
    }
}

/// Page text taken from the sample course
pub struct SampleContent {
    question: Option<String>,
    section: Option<String>,
}

impl SampleContent {
    pub fn from_store(store: &MemStore) -> Self {
        let lesson = store.lessons(1).into_iter().last();
        let section = lesson
            .as_ref()
            .and_then(|l| store.sections(l.id).into_iter().next())
            .map(|s| format!("{}. {}", s.title, s.content));
        let question = lesson
            .as_ref()
            .and_then(|l| store.quiz_for_lesson(l.id))
            .and_then(|quiz| store.questions(quiz.id).into_iter().next())
            .map(|q| q.question);
        Self { question, section }
    }
}

impl ContentLocator for SampleContent {
    fn readable_text(&self, region: ReadableRegion) -> Option<String> {
        match region {
            ReadableRegion::QuizQuestion => self.question.clone(),
            ReadableRegion::LessonSection => self.section.clone(),
            ReadableRegion::PageHeading => Some("Welcome to VoxLearn".to_string()),
        }
    }
}

/// Controls named with the `controls` console command
#[derive(Clone, Default)]
pub struct ConsoleControls {
    labels: Rc<RefCell<Vec<String>>>,
}

impl ConsoleControls {
    pub fn set(&self, labels: Vec<String>) {
        *self.labels.borrow_mut() = labels;
    }
}

impl ControlSource for ConsoleControls {
    fn visible_controls(&self) -> Vec<ControlCapability> {
        self.labels
            .borrow()
            .iter()
            .map(|label| {
                let shown = label.clone();
                ControlCapability::new(label.clone(), move || println!("  [click] {}", shown))
            })
            .collect()
    }
}

/// Handles the listen loop keeps to drive the console platform
pub struct ConsoleHandles {
    pub synthesizer: ConsoleSynthesizer,
    pub controls: ConsoleControls,
}

pub fn console_platform(store: &MemStore) -> (Platform, ConsoleHandles) {
    let synthesizer = ConsoleSynthesizer::default();
    let controls = ConsoleControls::default();

    let platform = Platform {
        recognizer: Some(Box::new(ConsoleRecognizer)),
        synthesizer: Some(Box::new(synthesizer.clone())),
        live_region: Box::new(ConsoleLiveRegion),
        navigator: Rc::new(ConsoleNavigator::default()),
        signals: Rc::new(ConsoleSignals),
        content: Rc::new(SampleContent::from_store(store)),
        controls: Rc::new(controls.clone()),
    };

    (
        platform,
        ConsoleHandles {
            synthesizer,
            controls,
        },
    )
}
