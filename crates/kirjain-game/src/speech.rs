// Utterances and the speech output seam

use std::ops::Range;

use crate::scoring::Award;

/// Something to be spoken after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Utterance {
    /// Text to speak, lowercase.
    pub text: String,
    /// BCP 47 voice language, e.g. `fi-FI`.
    pub language: String,
    /// Characters of the buffer to highlight while speaking.
    pub highlight: Range<usize>,
    /// Points earned once the utterance has been spoken. `None` for letters.
    pub award: Option<Award>,
}

impl Utterance {
    pub fn is_word(&self) -> bool {
        self.award.is_some()
    }
}

/// Speech output.
///
/// Implementations receive utterances in the order they should be heard.
/// A speech synthesiser queues them; tests and command-line tools may just
/// record or print them.
pub trait Speaker {
    fn speak(&mut self, utterance: &Utterance);
}

impl<F> Speaker for F
where
    F: FnMut(&Utterance),
{
    fn speak(&mut self, utterance: &Utterance) {
        (*self)(utterance)
    }
}

/// A speaker that records every utterance instead of speaking it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript(pub Vec<Utterance>);

impl Transcript {
    /// Texts heard so far, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(|u| u.text.as_str()).collect()
    }
}

impl Speaker for Transcript {
    fn speak(&mut self, utterance: &Utterance) {
        self.0.push(utterance.clone());
    }
}
