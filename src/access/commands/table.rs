//! CommandTable - phrase to action registry with two-tier matching

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::access::platform::Action;

/// Where a command came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOrigin {
    /// Registered by the application (static vocabulary or explicit call)
    Registered,
    /// Derived from a visible control by the synchronizer
    Derived,
}

#[derive(Clone)]
struct CommandEntry {
    action: Action,
    origin: CommandOrigin,
    /// Registration sequence number, used as the secondary tie-break
    seq: u64,
}

/// How an utterance matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Contained,
}

/// Result of [`CommandTable::resolve`]
#[derive(Clone)]
pub struct CommandMatch {
    pub phrase: String,
    pub kind: MatchKind,
    pub action: Action,
}

impl std::fmt::Debug for CommandMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandMatch")
            .field("phrase", &self.phrase)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Trim, lowercase and collapse inner whitespace
pub fn normalize_phrase(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mutable mapping from phrase to action.
///
/// Phrases are unique; registering an existing phrase replaces its action.
/// When several registered phrases are contained in an utterance the longest
/// phrase wins, and among equally long phrases the most recently registered
/// one wins.
#[derive(Default)]
pub struct CommandTable {
    entries: HashMap<String, CommandEntry>,
    next_seq: u64,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, phrase: &str, action: Action) {
        self.insert(phrase, action, CommandOrigin::Registered);
    }

    pub fn register_many<'a, I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = (&'a str, Action)>,
    {
        for (phrase, action) in commands {
            self.register(phrase, action);
        }
    }

    /// Register a command derived from a visible control
    pub(crate) fn register_derived(&mut self, phrase: &str, action: Action) {
        self.insert(phrase, action, CommandOrigin::Derived);
    }

    fn insert(&mut self, phrase: &str, action: Action, origin: CommandOrigin) {
        let phrase = normalize_phrase(phrase);
        // An empty phrase would be contained in every utterance
        if phrase.is_empty() {
            warn!("[voxlearn:commands] ignoring command with empty phrase");
            return;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            phrase,
            CommandEntry {
                action,
                origin,
                seq,
            },
        );
    }

    /// Remove a phrase; returns whether it was present
    pub fn remove(&mut self, phrase: &str) -> bool {
        self.entries.remove(&normalize_phrase(phrase)).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All registered phrases, sorted for stable display
    pub fn list(&self) -> Vec<String> {
        let mut phrases: Vec<String> = self.entries.keys().cloned().collect();
        phrases.sort();
        phrases
    }

    pub fn origin(&self, phrase: &str) -> Option<CommandOrigin> {
        self.entries
            .get(&normalize_phrase(phrase))
            .map(|entry| entry.origin)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.contains_key(&normalize_phrase(phrase))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the action for an utterance.
    ///
    /// An exact phrase match is preferred; otherwise the best registered
    /// phrase contained in the utterance is returned.
    pub fn resolve(&self, utterance: &str) -> Option<CommandMatch> {
        let utterance = normalize_phrase(utterance);
        if utterance.is_empty() {
            return None;
        }

        if let Some(entry) = self.entries.get(&utterance) {
            return Some(CommandMatch {
                phrase: utterance,
                kind: MatchKind::Exact,
                action: entry.action.clone(),
            });
        }

        let best = self
            .entries
            .iter()
            .filter(|(phrase, _)| utterance.contains(phrase.as_str()))
            .max_by_key(|(phrase, entry)| (phrase.chars().count(), entry.seq))?;

        debug!(
            "[voxlearn:commands] '{}' matched contained phrase '{}'",
            utterance, best.0
        );

        Some(CommandMatch {
            phrase: best.0.clone(),
            kind: MatchKind::Contained,
            action: best.1.action.clone(),
        })
    }
}
