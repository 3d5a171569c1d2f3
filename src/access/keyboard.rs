//! Global keyboard shortcuts for navigation and reading control.
//!
//! Every shortcut is Alt plus one key. Shortcuts never fire while focus is in
//! a text-capable form control, so typed characters stay typed characters.

use std::cell::RefCell;
use std::rc::Rc;

use global_hotkey::hotkey::{Code, Modifiers};
use tracing::debug;

use super::announcer::Announcer;
use super::platform::{Navigator, PageSignal, SignalBus};

/// Modifier that must be held for every shortcut
pub const SHORTCUT_MODIFIER: Modifiers = Modifiers::ALT;

/// Kind of element holding focus when the key was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    TextInput,
    TextArea,
    Select,
    #[default]
    Other,
}

impl FocusTarget {
    pub fn is_form_control(&self) -> bool {
        matches!(
            self,
            FocusTarget::TextInput | FocusTarget::TextArea | FocusTarget::Select
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: Code,
    pub modifiers: Modifiers,
    pub target: FocusTarget,
}

impl KeyEvent {
    pub fn new(modifiers: Modifiers, code: Code, target: FocusTarget) -> Self {
        Self {
            code,
            modifiers,
            target,
        }
    }
}

/// What the host should do with the key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A shortcut ran; suppress the default behavior
    Handled,
    /// Not ours; let the default behavior happen
    PassThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Navigate(&'static str),
    Signal(PageSignal),
}

#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub code: Code,
    /// Label for help pages
    pub keys: &'static str,
    pub action: ShortcutAction,
    /// Read to the user when the shortcut fires
    pub announcement: &'static str,
}

const fn shortcut(
    code: Code,
    keys: &'static str,
    action: ShortcutAction,
    announcement: &'static str,
) -> Shortcut {
    Shortcut {
        code,
        keys,
        action,
        announcement,
    }
}

// Period and Comma cover '>' and '<' as well, which are the shifted keys
pub const SHORTCUTS: &[Shortcut] = &[
    shortcut(Code::KeyD, "Alt+D", ShortcutAction::Navigate("/"), "Going to dashboard"),
    shortcut(Code::KeyC, "Alt+C", ShortcutAction::Navigate("/courses"), "Going to courses page"),
    shortcut(Code::KeyP, "Alt+P", ShortcutAction::Navigate("/profile"), "Going to profile page"),
    shortcut(
        Code::KeyA,
        "Alt+A",
        ShortcutAction::Navigate("/accessibility-settings"),
        "Going to accessibility settings",
    ),
    shortcut(
        Code::KeyS,
        "Alt+S",
        ShortcutAction::Signal(PageSignal::StartReading),
        "Start reading content",
    ),
    shortcut(
        Code::KeyX,
        "Alt+X",
        ShortcutAction::Signal(PageSignal::PauseReading),
        "Pause reading",
    ),
    shortcut(
        Code::Period,
        "Alt+. or Alt+>",
        ShortcutAction::Signal(PageSignal::ReadFaster),
        "Reading faster",
    ),
    shortcut(
        Code::Comma,
        "Alt+, or Alt+<",
        ShortcutAction::Signal(PageSignal::ReadSlower),
        "Reading slower",
    ),
    shortcut(
        Code::KeyN,
        "Alt+N",
        ShortcutAction::Signal(PageSignal::NavigateNext),
        "Next section or lesson",
    ),
    shortcut(
        Code::KeyB,
        "Alt+B",
        ShortcutAction::Signal(PageSignal::NavigatePrevious),
        "Previous section or lesson",
    ),
    shortcut(
        Code::KeyH,
        "Alt+H",
        ShortcutAction::Navigate("/voice-commands-help"),
        "Voice commands help opened",
    ),
];

pub fn shortcut_for(code: Code) -> Option<&'static Shortcut> {
    SHORTCUTS.iter().find(|s| s.code == code)
}

/// Single global key listener
pub struct KeyboardDispatcher {
    navigator: Rc<dyn Navigator>,
    signals: Rc<dyn SignalBus>,
    announcer: Rc<RefCell<Announcer>>,
    enabled: bool,
}

impl KeyboardDispatcher {
    pub fn new(
        navigator: Rc<dyn Navigator>,
        signals: Rc<dyn SignalBus>,
        announcer: Rc<RefCell<Announcer>>,
    ) -> Self {
        Self {
            navigator,
            signals,
            announcer,
            enabled: true,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn handle_key(&self, event: &KeyEvent) -> KeyOutcome {
        if !self.enabled
            || event.target.is_form_control()
            || !event.modifiers.contains(SHORTCUT_MODIFIER)
        {
            return KeyOutcome::PassThrough;
        }

        let Some(shortcut) = shortcut_for(event.code) else {
            return KeyOutcome::PassThrough;
        };

        debug!("[voxlearn:keys] {} -> {:?}", shortcut.keys, shortcut.action);
        self.announcer.borrow_mut().announce(shortcut.announcement);
        match shortcut.action {
            ShortcutAction::Navigate(path) => self.navigator.navigate_to(path),
            ShortcutAction::Signal(signal) => self.signals.emit(signal),
        }

        KeyOutcome::Handled
    }
}

/// Parse a key combination like "alt+d" or "alt+>" into Modifiers and Code.
/// Returns None if the string is invalid.
pub fn parse_key_combo(combo: &str) -> Option<(Modifiers, Code)> {
    let combo = combo.trim().to_lowercase();
    let parts: Vec<&str> = combo.split('+').collect();
    let key_part = *parts.last()?;

    // "alt++" splits into an empty trailing part; treat it as the plus key
    let (mod_parts, key_part) = if key_part.is_empty() && parts.len() > 2 {
        (&parts[..parts.len() - 2], "+")
    } else {
        (&parts[..parts.len() - 1], key_part)
    };

    let mut modifiers = Modifiers::empty();
    for part in mod_parts {
        match *part {
            "cmd" | "command" | "super" | "win" => modifiers |= Modifiers::SUPER,
            "ctrl" | "control" => modifiers |= Modifiers::CONTROL,
            "alt" | "option" => modifiers |= Modifiers::ALT,
            "shift" => modifiers |= Modifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key_part {
        "a" => Code::KeyA,
        "b" => Code::KeyB,
        "c" => Code::KeyC,
        "d" => Code::KeyD,
        "e" => Code::KeyE,
        "f" => Code::KeyF,
        "g" => Code::KeyG,
        "h" => Code::KeyH,
        "i" => Code::KeyI,
        "j" => Code::KeyJ,
        "k" => Code::KeyK,
        "l" => Code::KeyL,
        "m" => Code::KeyM,
        "n" => Code::KeyN,
        "o" => Code::KeyO,
        "p" => Code::KeyP,
        "q" => Code::KeyQ,
        "r" => Code::KeyR,
        "s" => Code::KeyS,
        "t" => Code::KeyT,
        "u" => Code::KeyU,
        "v" => Code::KeyV,
        "w" => Code::KeyW,
        "x" => Code::KeyX,
        "y" => Code::KeyY,
        "z" => Code::KeyZ,
        "." | "period" => Code::Period,
        "," | "comma" => Code::Comma,
        ">" => {
            modifiers |= Modifiers::SHIFT;
            Code::Period
        }
        "<" => {
            modifiers |= Modifiers::SHIFT;
            Code::Comma
        }
        "+" | "=" => Code::Equal,
        "space" => Code::Space,
        "enter" | "return" => Code::Enter,
        "escape" | "esc" => Code::Escape,
        "tab" => Code::Tab,
        _ => return None,
    };

    Some((modifiers, code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::events::EventSink;
    use crate::access::test_support::{RecordingLiveRegion, RecordingNavigator, RecordingSignals};
    use std::time::Duration;

    struct Fixture {
        dispatcher: KeyboardDispatcher,
        navigator: RecordingNavigator,
        signals: RecordingSignals,
        region: RecordingLiveRegion,
    }

    fn fixture() -> Fixture {
        let navigator = RecordingNavigator::default();
        let signals = RecordingSignals::default();
        let region = RecordingLiveRegion::default();
        let announcer = Announcer::new(
            Box::new(region.clone()),
            Duration::from_millis(0),
            EventSink::detached(),
        );
        let dispatcher = KeyboardDispatcher::new(
            Rc::new(navigator.clone()),
            Rc::new(signals.clone()),
            Rc::new(RefCell::new(announcer)),
        );
        Fixture {
            dispatcher,
            navigator,
            signals,
            region,
        }
    }

    fn key(combo: &str, target: FocusTarget) -> KeyEvent {
        let (modifiers, code) = parse_key_combo(combo).unwrap();
        KeyEvent::new(modifiers, code, target)
    }

    #[test]
    fn test_alt_d_in_text_input_is_ignored() {
        let f = fixture();
        for target in [FocusTarget::TextInput, FocusTarget::TextArea, FocusTarget::Select] {
            let outcome = f.dispatcher.handle_key(&key("alt+d", target));
            assert_eq!(outcome, KeyOutcome::PassThrough);
        }
        assert!(f.navigator.visits().is_empty());
        assert!(f.region.messages().is_empty());
    }

    #[test]
    fn test_alt_d_navigates_home() {
        let f = fixture();
        *f.navigator.path.borrow_mut() = "/courses".to_string();
        let outcome = f.dispatcher.handle_key(&key("alt+d", FocusTarget::Other));
        assert_eq!(outcome, KeyOutcome::Handled);
        assert_eq!(f.navigator.visits(), vec!["/"]);
        assert_eq!(f.region.messages(), vec!["Going to dashboard"]);
    }

    #[test]
    fn test_reading_and_navigation_signals() {
        let f = fixture();
        for combo in ["alt+s", "alt+x", "alt+.", "alt+>", "alt+,", "alt+<", "alt+n", "alt+b"] {
            assert_eq!(
                f.dispatcher.handle_key(&key(combo, FocusTarget::Other)),
                KeyOutcome::Handled,
                "{}",
                combo
            );
        }
        assert_eq!(
            f.signals.emitted(),
            vec![
                PageSignal::StartReading,
                PageSignal::PauseReading,
                PageSignal::ReadFaster,
                PageSignal::ReadFaster,
                PageSignal::ReadSlower,
                PageSignal::ReadSlower,
                PageSignal::NavigateNext,
                PageSignal::NavigatePrevious,
            ]
        );
    }

    #[test]
    fn test_page_shortcuts() {
        let f = fixture();
        for combo in ["alt+c", "alt+p", "alt+a", "alt+h"] {
            f.dispatcher.handle_key(&key(combo, FocusTarget::Other));
        }
        assert_eq!(
            f.navigator.visits(),
            vec!["/courses", "/profile", "/accessibility-settings", "/voice-commands-help"]
        );
    }

    #[test]
    fn test_unmapped_or_unmodified_keys_pass_through() {
        let f = fixture();
        assert_eq!(
            f.dispatcher.handle_key(&key("alt+q", FocusTarget::Other)),
            KeyOutcome::PassThrough
        );
        assert_eq!(
            f.dispatcher.handle_key(&key("d", FocusTarget::Other)),
            KeyOutcome::PassThrough
        );
        assert_eq!(
            f.dispatcher.handle_key(&key("ctrl+d", FocusTarget::Other)),
            KeyOutcome::PassThrough
        );
        assert!(f.navigator.visits().is_empty());
    }

    #[test]
    fn test_disabled_dispatcher_passes_everything() {
        let mut f = fixture();
        f.dispatcher.set_enabled(false);
        assert_eq!(
            f.dispatcher.handle_key(&key("alt+d", FocusTarget::Other)),
            KeyOutcome::PassThrough
        );
    }

    #[test]
    fn test_parse_key_combo() {
        assert_eq!(parse_key_combo("Alt+D"), Some((Modifiers::ALT, Code::KeyD)));
        assert_eq!(
            parse_key_combo("alt+>"),
            Some((Modifiers::ALT | Modifiers::SHIFT, Code::Period))
        );
        assert_eq!(parse_key_combo("alt++"), Some((Modifiers::ALT, Code::Equal)));
        assert_eq!(parse_key_combo("hyper+d"), None);
        assert_eq!(parse_key_combo("alt+f13"), None);
    }

    #[test]
    fn test_every_shortcut_has_unique_code() {
        for (i, a) in SHORTCUTS.iter().enumerate() {
            for b in &SHORTCUTS[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }
}
