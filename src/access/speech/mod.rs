//! Speech output - read-aloud on top of the platform synthesizer
//!
//! At most one utterance is active: every request cancels whatever is being
//! spoken before it starts. Requests made before the platform has loaded its
//! voice catalogue are queued and replayed in arrival order once
//! [`SpeechOutput::on_voices_changed`] reports voices.

mod select;


use std::collections::VecDeque;

use tracing::debug;

use super::error::{AccessError, Capability};
use super::events::EventSink;
use super::platform::{SpeechSynthesizer, Utterance, Voice};

pub use select::select_voice;

/// Map the 1-5 reading speed setting to a synthesis rate (3 is normal)
pub fn reading_rate(speed: u8) -> f32 {
    f32::from(speed.clamp(1, 5)) / 3.0
}

#[derive(Debug, Clone)]
struct SpeechRequest {
    text: String,
    rate: f32,
    pitch: f32,
    voice_hint: String,
}

pub struct SpeechOutput {
    synth: Option<Box<dyn SpeechSynthesizer>>,
    events: EventSink,
    pending: VecDeque<SpeechRequest>,
    unsupported_reported: bool,
}

impl SpeechOutput {
    pub fn new(synth: Option<Box<dyn SpeechSynthesizer>>, events: EventSink) -> Self {
        Self {
            synth,
            events,
            pending: VecDeque::new(),
            unsupported_reported: false,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.synth.is_some()
    }

    /// Speak `text`, interrupting anything currently being spoken.
    ///
    /// `voice_hint` may name a voice exactly or ask for a "female" voice; an
    /// empty hint uses the first English voice.
    pub fn speak(&mut self, text: &str, rate: f32, pitch: f32, voice_hint: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let Some(ref synth) = self.synth else {
            self.report_unsupported();
            return;
        };

        let request = SpeechRequest {
            text: text.to_string(),
            rate,
            pitch,
            voice_hint: voice_hint.to_string(),
        };

        if synth.voices().is_empty() {
            debug!(
                "[voxlearn:speech] voices not loaded yet, queueing ({} pending)",
                self.pending.len() + 1
            );
            self.pending.push_back(request);
            return;
        }

        self.drain_pending();
        self.deliver(request);
    }

    /// Platform notification that the voice catalogue changed
    pub fn on_voices_changed(&mut self) {
        let loaded = self
            .synth
            .as_ref()
            .map(|s| !s.voices().is_empty())
            .unwrap_or(false);
        if loaded {
            self.drain_pending();
        }
    }

    /// Cancel the active utterance and anything still queued
    pub fn stop_speaking(&mut self) {
        self.pending.clear();
        if let Some(ref mut synth) = self.synth {
            if synth.is_speaking() {
                synth.cancel();
            }
        }
    }

    pub fn pause(&mut self) {
        if let Some(ref mut synth) = self.synth {
            synth.pause();
        }
    }

    pub fn resume(&mut self) {
        if let Some(ref mut synth) = self.synth {
            synth.resume();
        }
    }

    pub fn available_voices(&self) -> Vec<Voice> {
        self.synth
            .as_ref()
            .map(|s| s.voices())
            .unwrap_or_default()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn drain_pending(&mut self) {
        while let Some(request) = self.pending.pop_front() {
            self.deliver(request);
        }
    }

    fn deliver(&mut self, request: SpeechRequest) {
        let Some(ref mut synth) = self.synth else {
            return;
        };

        let voice = select_voice(&synth.voices(), &request.voice_hint);
        debug!(
            "[voxlearn:speech] speaking {} chars with {}",
            request.text.len(),
            voice.as_ref().map(|v| v.name.as_str()).unwrap_or("default voice")
        );

        synth.cancel();
        synth.speak(Utterance {
            text: request.text,
            rate: request.rate,
            pitch: request.pitch,
            voice,
        });
    }

    fn report_unsupported(&mut self) {
        if self.unsupported_reported {
            return;
        }
        self.unsupported_reported = true;
        self.events
            .report(AccessError::UnsupportedCapability(Capability::SpeechSynthesis));
    }
}
