//! Voice selection policy.

use crate::access::platform::Voice;

/// Names of common female-coded system voices
const FEMALE_VOICE_NAMES: &[&str] = &["samantha", "victoria", "zira", "karen", "moira", "tessa"];

/// Pick a voice for `hint`, in priority order:
/// 1. a voice whose name or identifier equals the hint
/// 2. for hints mentioning "female"/"woman", the first English female-coded voice
/// 3. the first English voice
///
/// `None` means the platform default voice.
pub fn select_voice(voices: &[Voice], hint: &str) -> Option<Voice> {
    let hint = hint.trim();

    if !hint.is_empty() {
        if let Some(voice) = voices.iter().find(|v| v.name == hint || v.uri == hint) {
            return Some(voice.clone());
        }

        let hint_lower = hint.to_lowercase();
        if hint_lower.contains("female") || hint_lower.contains("woman") {
            if let Some(voice) = voices
                .iter()
                .find(|v| v.is_english() && is_female_coded(&v.name))
            {
                return Some(voice.clone());
            }
        }
    }

    voices.iter().find(|v| v.is_english()).cloned()
}

fn is_female_coded(name: &str) -> bool {
    let name = name.to_lowercase();
    name.contains("female")
        || name.contains("woman")
        || FEMALE_VOICE_NAMES.iter().any(|n| name.contains(n))
}
