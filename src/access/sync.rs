//! Keeps "click <label>" voice commands in step with the visible controls.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::debug;

use super::commands::{CommandOrigin, CommandTable, normalize_phrase};
use super::platform::ControlSource;

pub const CLICK_PREFIX: &str = "click";

/// Phrase for a control label, or `None` for an unlabeled control
pub fn click_phrase(label: &str) -> Option<String> {
    let label = normalize_phrase(label);
    if label.is_empty() {
        None
    } else {
        Some(format!("{} {}", CLICK_PREFIX, label))
    }
}

/// Re-derives click commands whenever the page structure changes.
///
/// With pruning enabled, commands for controls that disappeared since the
/// previous sync are removed so they cannot fire a stale action.
pub struct ControlSynchronizer {
    table: Rc<RefCell<CommandTable>>,
    source: Rc<dyn ControlSource>,
    prune: bool,
    derived: HashSet<String>,
}

impl ControlSynchronizer {
    pub fn new(table: Rc<RefCell<CommandTable>>, source: Rc<dyn ControlSource>, prune: bool) -> Self {
        Self {
            table,
            source,
            prune,
            derived: HashSet::new(),
        }
    }

    /// Host notification: nodes were inserted or removed somewhere in the page
    pub fn on_structure_changed(&mut self) {
        let controls = self.source.visible_controls();
        let mut table = self.table.borrow_mut();

        let mut current = HashSet::new();
        for control in controls {
            let Some(phrase) = click_phrase(&control.label) else {
                continue;
            };
            // Explicit registrations take precedence over derived ones
            if table.origin(&phrase) == Some(CommandOrigin::Registered) {
                continue;
            }
            table.register_derived(&phrase, control.invoke.clone());
            current.insert(phrase);
        }

        if self.prune {
            for stale in self.derived.difference(&current) {
                if table.origin(stale) == Some(CommandOrigin::Derived) {
                    table.remove(stale);
                    debug!("[voxlearn:sync] pruned '{}'", stale);
                }
            }
            self.derived = current;
        } else {
            self.derived.extend(current);
        }

        debug!(
            "[voxlearn:sync] {} click commands, {} commands total",
            self.derived.len(),
            table.len()
        );
    }

    /// Phrases currently owned by the synchronizer
    pub fn derived_phrases(&self) -> Vec<String> {
        let mut phrases: Vec<String> = self.derived.iter().cloned().collect();
        phrases.sort();
        phrases
    }
}
