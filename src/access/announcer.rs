//! Single-slot bridge from status text to the live region.

use std::time::{Duration, Instant};

use tracing::trace;

use super::events::EventSink;
use super::platform::{LiveRegion, Politeness};

/// Writes polite announcements into the live region.
///
/// Only the latest announcement is kept. Repeating the same text within the
/// debounce window is dropped so one logical event observed by several
/// listeners is read once.
pub struct Announcer {
    region: Box<dyn LiveRegion>,
    events: EventSink,
    debounce: Duration,
    current: Option<(String, Instant)>,
}

impl Announcer {
    pub fn new(region: Box<dyn LiveRegion>, debounce: Duration, events: EventSink) -> Self {
        Self {
            region,
            events,
            debounce,
            current: None,
        }
    }

    pub fn announce(&mut self, message: &str) {
        self.announce_at(message, Instant::now());
    }

    pub(crate) fn announce_at(&mut self, message: &str, now: Instant) {
        let message = message.trim();
        if message.is_empty() {
            return;
        }

        if let Some((ref last, at)) = self.current {
            if last == message && now.saturating_duration_since(at) < self.debounce {
                trace!("[voxlearn:announce] debounced: {}", message);
                return;
            }
        }

        self.region.write(Politeness::Polite, message);
        self.current = Some((message.to_string(), now));
        self.events.announced(message);
    }

    /// The text currently occupying the slot
    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|(message, _)| message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::test_support::RecordingLiveRegion;

    fn announcer() -> (Announcer, RecordingLiveRegion) {
        let region = RecordingLiveRegion::default();
        let announcer = Announcer::new(
            Box::new(region.clone()),
            Duration::from_millis(500),
            EventSink::detached(),
        );
        (announcer, region)
    }

    #[test]
    fn test_empty_message_is_ignored() {
        let (mut announcer, region) = announcer();
        announcer.announce("");
        announcer.announce("   ");
        assert!(region.messages().is_empty());
        assert_eq!(announcer.current(), None);
    }

    #[test]
    fn test_identical_message_debounced_within_window() {
        let (mut announcer, region) = announcer();
        let start = Instant::now();
        announcer.announce_at("Going to dashboard", start);
        announcer.announce_at("Going to dashboard", start + Duration::from_millis(100));
        assert_eq!(region.messages(), vec!["Going to dashboard".to_string()]);

        announcer.announce_at("Going to dashboard", start + Duration::from_millis(600));
        assert_eq!(region.messages().len(), 2);
    }

    #[test]
    fn test_new_message_supersedes_slot() {
        let (mut announcer, region) = announcer();
        let start = Instant::now();
        announcer.announce_at("Going to dashboard", start);
        announcer.announce_at("Going to courses page", start);
        announcer.announce_at("Going to dashboard", start);
        assert_eq!(region.messages().len(), 3);
        assert_eq!(announcer.current(), Some("Going to dashboard"));
        assert!(region.politeness().iter().all(|p| *p == Politeness::Polite));
    }
}
