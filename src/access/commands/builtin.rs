//! Fixed navigation and reading vocabulary registered at start-up

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::access::platform::{
    Action, ContentLocator, Navigator, PageSignal, ReadableRegion, SignalBus,
};
use crate::access::speech::{SpeechOutput, reading_rate};
use crate::domain::AccessibilitySettings;

/// Grouping used by the help pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Navigation,
    Course,
    Reading,
}

impl std::fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandCategory::Navigation => write!(f, "Navigation"),
            CommandCategory::Course => write!(f, "Course"),
            CommandCategory::Reading => write!(f, "Reading"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behavior {
    Navigate(&'static str),
    Back,
    Help,
    Signal(PageSignal),
    StartReading,
    PauseReading,
    ResumeReading,
    StopReading,
}

/// One entry of the static vocabulary
#[derive(Debug, Clone, Copy)]
pub struct BuiltinCommand {
    pub phrase: &'static str,
    pub category: CommandCategory,
    pub description: &'static str,
    behavior: Behavior,
}

const fn cmd(
    phrase: &'static str,
    category: CommandCategory,
    description: &'static str,
    behavior: Behavior,
) -> BuiltinCommand {
    BuiltinCommand {
        phrase,
        category,
        description,
        behavior,
    }
}

use Behavior::*;
use CommandCategory::*;

pub const BUILTIN_COMMANDS: &[BuiltinCommand] = &[
    cmd("go to dashboard", Navigation, "Open the dashboard", Navigate("/")),
    cmd("go home", Navigation, "Open the dashboard", Navigate("/")),
    cmd("open dashboard", Navigation, "Open the dashboard", Navigate("/")),
    cmd("show courses", Navigation, "List all courses", Navigate("/courses")),
    cmd("open courses", Navigation, "List all courses", Navigate("/courses")),
    cmd(
        "open settings",
        Navigation,
        "Open accessibility settings",
        Navigate("/accessibility-settings"),
    ),
    cmd(
        "accessibility settings",
        Navigation,
        "Open accessibility settings",
        Navigate("/accessibility-settings"),
    ),
    cmd("help", Navigation, "Show voice command help", Help),
    cmd("go back", Navigation, "Return to the previous page", Back),
    cmd(
        "open course introduction to programming",
        Course,
        "Open the Introduction to Programming course",
        Navigate("/course/1"),
    ),
    cmd(
        "next lesson",
        Course,
        "Move to the next section or lesson",
        Signal(PageSignal::NavigateNext),
    ),
    cmd(
        "previous lesson",
        Course,
        "Move to the previous section or lesson",
        Signal(PageSignal::NavigatePrevious),
    ),
    cmd("start reading", Reading, "Read the current page aloud", StartReading),
    cmd("pause reading", Reading, "Pause reading", PauseReading),
    cmd("pause", Reading, "Pause reading", PauseReading),
    cmd("resume", Reading, "Resume reading", ResumeReading),
    cmd("stop", Reading, "Stop reading", StopReading),
    cmd("read faster", Reading, "Increase the reading speed", Signal(PageSignal::ReadFaster)),
    cmd("read slower", Reading, "Decrease the reading speed", Signal(PageSignal::ReadSlower)),
];

/// Collaborators the static commands act on
#[derive(Clone)]
pub struct CommandContext {
    pub navigator: Rc<dyn Navigator>,
    pub signals: Rc<dyn SignalBus>,
    pub content: Rc<dyn ContentLocator>,
    pub speech: Rc<RefCell<SpeechOutput>>,
    pub settings: Rc<RefCell<AccessibilitySettings>>,
    pub on_help: Action,
}

/// Bind every builtin phrase to its action
pub fn builtin_actions(ctx: &CommandContext) -> Vec<(&'static str, Action)> {
    BUILTIN_COMMANDS
        .iter()
        .map(|command| (command.phrase, bind(command.behavior, ctx)))
        .collect()
}

fn bind(behavior: Behavior, ctx: &CommandContext) -> Action {
    match behavior {
        Navigate(path) => {
            let navigator = ctx.navigator.clone();
            Rc::new(move || navigator.navigate_to(path))
        }
        Back => {
            let navigator = ctx.navigator.clone();
            Rc::new(move || navigator.navigate_back())
        }
        Help => ctx.on_help.clone(),
        Signal(signal) => {
            let signals = ctx.signals.clone();
            Rc::new(move || signals.emit(signal))
        }
        StartReading => {
            let ctx = ctx.clone();
            Rc::new(move || start_reading(&ctx))
        }
        PauseReading => {
            let speech = ctx.speech.clone();
            Rc::new(move || speech.borrow_mut().pause())
        }
        ResumeReading => {
            let speech = ctx.speech.clone();
            Rc::new(move || speech.borrow_mut().resume())
        }
        StopReading => {
            let speech = ctx.speech.clone();
            Rc::new(move || speech.borrow_mut().stop_speaking())
        }
    }
}

fn start_reading(ctx: &CommandContext) {
    let path = ctx.navigator.current_path();
    let region = ReadableRegion::for_path(&path);

    let Some(text) = ctx.content.readable_text(region) else {
        debug!("[voxlearn:commands] nothing to read on {} ({:?})", path, region);
        return;
    };

    let (rate, voice) = {
        let settings = ctx.settings.borrow();
        (
            reading_rate(settings.reading_speed),
            settings.preferred_voice.clone(),
        )
    };
    ctx.speech.borrow_mut().speak(&text, rate, 1.0, &voice);
}

/// Static vocabulary grouped for help pages, in display order
pub fn commands_by_category() -> Vec<(CommandCategory, Vec<&'static BuiltinCommand>)> {
    [Navigation, Course, Reading]
        .into_iter()
        .map(|category| {
            let commands = BUILTIN_COMMANDS
                .iter()
                .filter(|c| c.category == category)
                .collect();
            (category, commands)
        })
        .collect()
}
