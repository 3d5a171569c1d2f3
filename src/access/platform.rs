//! Platform seams for the accessibility layer.
//!
//! Speech recognition, speech synthesis, the live region and the page the
//! user is looking at all belong to the host. The core only talks to them
//! through these traits, which keeps it independent of any particular UI
//! toolkit and lets tests drive it with recording fakes.

use std::rc::Rc;

/// Zero-argument action bound to a command or control
pub type Action = Rc<dyn Fn()>;

/// Recognition session parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    /// Keep the session open across phrases
    pub continuous: bool,
    /// Deliver partial transcripts while the user is still speaking
    pub interim_results: bool,
    /// BCP-47 language tag, e.g. `en-US`
    pub language: String,
}

impl RecognitionConfig {
    pub fn continuous(language: impl Into<String>) -> Self {
        Self {
            continuous: true,
            interim_results: false,
            language: language.into(),
        }
    }
}

/// One candidate transcript for a finished phrase
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionAlternative {
    pub transcript: String,
    /// Engine-reported probability in `0.0..=1.0`
    pub confidence: f64,
}

impl RecognitionAlternative {
    pub fn new(transcript: impl Into<String>, confidence: f64) -> Self {
        Self {
            transcript: transcript.into(),
            confidence,
        }
    }
}

/// Events delivered by the recognition engine, in emission order
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    /// A finalized phrase; alternatives are ordered best first
    Result {
        alternatives: Vec<RecognitionAlternative>,
    },
    /// Engine-level error (network, audio capture, ...)
    Error(String),
    /// The engine ended the session, possibly on its own after silence
    End,
}

impl RecognitionEvent {
    /// Shorthand for a single-alternative result
    pub fn result(transcript: impl Into<String>, confidence: f64) -> Self {
        RecognitionEvent::Result {
            alternatives: vec![RecognitionAlternative::new(transcript, confidence)],
        }
    }
}

/// Continuous speech recognizer provided by the host platform
pub trait RecognitionEngine {
    fn configure(&mut self, config: &RecognitionConfig);

    /// Begin a session. An `Err` means the engine refused to activate.
    fn start(&mut self) -> Result<(), String>;

    fn stop(&mut self) -> Result<(), String>;
}

/// A synthesis voice known to the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Display name, e.g. "Samantha"
    pub name: String,
    /// Stable identifier
    pub uri: String,
    /// BCP-47 language tag
    pub lang: String,
    pub default: bool,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            uri: name.clone(),
            name,
            lang: lang.into(),
            default: false,
        }
    }

    pub fn is_english(&self) -> bool {
        self.lang.to_lowercase().starts_with("en")
    }
}

/// A fully resolved request handed to the synthesizer
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    /// `None` means the platform default voice
    pub voice: Option<Voice>,
}

/// Text-to-speech provided by the host platform
pub trait SpeechSynthesizer {
    /// Current voice catalogue; may be empty until the platform has loaded it
    fn voices(&self) -> Vec<Voice>;

    fn speak(&mut self, utterance: Utterance);

    fn cancel(&mut self);

    fn pause(&mut self);

    fn resume(&mut self);

    fn is_speaking(&self) -> bool;
}

/// How urgently assistive technology should read an announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Politeness {
    /// Wait for the user to be idle
    Polite,
    /// Interrupt whatever is being read
    Assertive,
}

/// Accessibility-tree region watched by screen readers
pub trait LiveRegion {
    fn write(&mut self, politeness: Politeness, message: &str);
}

/// Router owned by the host application
pub trait Navigator {
    fn navigate_to(&self, path: &str);

    fn navigate_back(&self);

    fn current_path(&self) -> String;
}

/// Loose-coupling signals that page content listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSignal {
    StartReading,
    PauseReading,
    ReadFaster,
    ReadSlower,
    NavigateNext,
    NavigatePrevious,
}

impl PageSignal {
    /// Event name as seen by page collaborators
    pub fn name(&self) -> &'static str {
        match self {
            PageSignal::StartReading => "start-reading",
            PageSignal::PauseReading => "pause-reading",
            PageSignal::ReadFaster => "read-faster",
            PageSignal::ReadSlower => "read-slower",
            PageSignal::NavigateNext => "navigate-next",
            PageSignal::NavigatePrevious => "navigate-previous",
        }
    }
}

impl std::fmt::Display for PageSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub trait SignalBus {
    fn emit(&self, signal: PageSignal);
}

/// Part of the page worth reading aloud
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadableRegion {
    QuizQuestion,
    LessonSection,
    PageHeading,
}

impl ReadableRegion {
    /// Pick the region to read from the current route
    pub fn for_path(path: &str) -> Self {
        if path.contains("/quiz") {
            ReadableRegion::QuizQuestion
        } else if path.contains("/course") {
            ReadableRegion::LessonSection
        } else {
            ReadableRegion::PageHeading
        }
    }
}

pub trait ContentLocator {
    fn readable_text(&self, region: ReadableRegion) -> Option<String>;
}

/// An interactive control that can be driven by voice
#[derive(Clone)]
pub struct ControlCapability {
    /// Visible label, e.g. "Submit Answer"
    pub label: String,
    pub invoke: Action,
}

impl ControlCapability {
    pub fn new(label: impl Into<String>, invoke: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            invoke: Rc::new(invoke),
        }
    }
}

impl std::fmt::Debug for ControlCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlCapability")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Enumerates the controls currently visible on the page
pub trait ControlSource {
    fn visible_controls(&self) -> Vec<ControlCapability>;
}

/// Everything the host provides, assembled once at start-up.
///
/// `None` for recognizer or synthesizer means the platform lacks it.
pub struct Platform {
    pub recognizer: Option<Box<dyn RecognitionEngine>>,
    pub synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    pub live_region: Box<dyn LiveRegion>,
    pub navigator: Rc<dyn Navigator>,
    pub signals: Rc<dyn SignalBus>,
    pub content: Rc<dyn ContentLocator>,
    pub controls: Rc<dyn ControlSource>,
}
