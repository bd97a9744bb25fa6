// GameSession: key presses, typed buffer and score
//
// Every key press appends one letter to the buffer, produces an utterance
// for the letter, and one utterance per dictionary word the buffer now
// ends with, longest word first. Word utterances carry an award which is
// added to the score.
//
// The dictionary is shared read-only behind an `Arc`, so any number of
// sessions can use one loaded word list.

use std::sync::Arc;

use kirjain_core::character::{CharType, get_char_type, simple_lower, single_upper};
use kirjain_core::keyboard::key_for;

use crate::GameError;
use crate::dictionary::Dictionary;
use crate::scoring::{awards, total_points};
use crate::speech::{Speaker, Utterance};

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of characters kept in the buffer. The oldest characters are
    /// dropped beyond this. Never less than the longest dictionary word.
    pub max_buffer_len: usize,
    /// Reject characters that have no key on the on-screen keyboard.
    /// When off, any letter is accepted.
    pub strict_keyboard: bool,
    /// Voice language for utterances.
    pub language: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_buffer_len: 64,
            strict_keyboard: true,
            language: "fi-FI".to_string(),
        }
    }
}

/// Outcome of one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Turn {
    /// The key that was pressed, uppercase.
    pub key: char,
    /// The letter first, then matched words longest first.
    pub utterances: Vec<Utterance>,
    /// Points earned by this press.
    pub points: u64,
    /// Score after this press.
    pub score: u64,
    /// Buffer after this press.
    pub buffer: String,
}

impl Turn {
    /// Words matched by this press, longest first.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.utterances
            .iter()
            .filter(|u| u.is_word())
            .map(|u| u.text.as_str())
    }
}

/// State of one player's game.
#[derive(Debug, Clone)]
pub struct GameSession {
    dictionary: Arc<Dictionary>,
    options: GameOptions,
    buffer: Vec<char>,
    score: u64,
}

impl GameSession {
    pub fn new(dictionary: Arc<Dictionary>, options: GameOptions) -> Self {
        Self {
            dictionary,
            options,
            buffer: Vec::new(),
            score: 0,
        }
    }

    /// Press the key for character `c`.
    ///
    /// Lowercase input presses the matching uppercase key. Fails with
    /// [`GameError::UnknownKey`] if there is no such key; the buffer and
    /// score are unchanged in that case.
    pub fn press(&mut self, c: char) -> Result<Turn, GameError> {
        let key = self.resolve_key(c)?;
        self.buffer.push(key);
        self.trim_buffer();

        let buffer: String = self.buffer.iter().collect();
        let end = self.buffer.len();

        let mut utterances = vec![Utterance {
            text: simple_lower(key).to_string(),
            language: self.options.language.clone(),
            highlight: end - 1..end,
            award: None,
        }];

        // The dictionary reports shortest first; the longest word is spoken
        // right after the letter.
        let matches = self.dictionary.matches(&buffer);
        let awards = awards(&matches);
        let points = total_points(&awards);
        utterances.extend(matches.iter().zip(&awards).rev().map(|(m, award)| Utterance {
            text: m.word.clone(),
            language: self.options.language.clone(),
            highlight: m.range(),
            award: Some(*award),
        }));

        self.score += points;
        tracing::trace!(%key, matched = matches.len(), points, score = self.score, "key pressed");

        Ok(Turn {
            key,
            utterances,
            points,
            score: self.score,
            buffer,
        })
    }

    /// Press a key and speak the resulting utterances in order.
    pub fn play(&mut self, c: char, speaker: &mut dyn Speaker) -> Result<Turn, GameError> {
        let turn = self.press(c)?;
        for utterance in &turn.utterances {
            speaker.speak(utterance);
        }
        Ok(turn)
    }

    /// Remove the last typed character.
    pub fn backspace(&mut self) -> Option<char> {
        self.buffer.pop()
    }

    /// Empty the buffer. The score is kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn buffer(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn resolve_key(&self, c: char) -> Result<char, GameError> {
        if let Some(key) = key_for(c) {
            return Ok(key);
        }
        if !self.options.strict_keyboard && get_char_type(c) == CharType::Letter {
            if let Some(key) = single_upper(c) {
                return Ok(key);
            }
        }
        Err(GameError::UnknownKey(c))
    }

    /// Drop the oldest characters beyond the buffer limit.
    fn trim_buffer(&mut self) {
        let limit = self
            .options
            .max_buffer_len
            .max(self.dictionary.max_word_len())
            .max(1);
        if self.buffer.len() > limit {
            let excess = self.buffer.len() - limit;
            self.buffer.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Award;
    use crate::speech::Transcript;

    fn session(words: &[&str], options: GameOptions) -> GameSession {
        let dictionary = Dictionary::from_words(words).unwrap();
        GameSession::new(Arc::new(dictionary), options)
    }

    fn type_word(session: &mut GameSession, word: &str) -> Vec<Turn> {
        word.chars().map(|c| session.press(c).unwrap()).collect()
    }

    #[test]
    fn typing_auto_scores_both_words() {
        let mut s = session(&["auto", "to"], GameOptions::default());
        let turns = type_word(&mut s, "AUTO");

        assert!(turns[..3].iter().all(|t| t.points == 0));
        let last = &turns[3];
        assert_eq!(last.words().collect::<Vec<_>>(), ["auto", "to"]);
        assert_eq!(
            last.utterances[1].award,
            Some(Award { length: 4, multiplier: 2 })
        );
        assert_eq!(
            last.utterances[2].award,
            Some(Award { length: 2, multiplier: 2 })
        );
        assert_eq!(last.utterances[1].highlight, 0..4);
        assert_eq!(last.utterances[2].highlight, 2..4);
        assert_eq!(last.points, 12);
        assert_eq!(s.score(), 12);
        assert_eq!(last.buffer, "AUTO");
    }

    #[test]
    fn letter_utterance_comes_first() {
        let mut s = session(&["o"], GameOptions::default());
        let turn = s.press('o').unwrap();
        assert_eq!(turn.key, 'O');
        assert_eq!(turn.utterances.len(), 2);
        assert_eq!(turn.utterances[0].text, "o");
        assert_eq!(turn.utterances[0].award, None);
        assert_eq!(turn.utterances[0].highlight, 0..1);
        assert_eq!(turn.utterances[1].text, "o");
        assert_eq!(turn.utterances[0].language, "fi-FI");
    }

    #[test]
    fn highlights_cover_matched_word() {
        let mut s = session(&["talo", "auto"], GameOptions::default());
        let turns = type_word(&mut s, "taloauto");
        assert_eq!(turns[3].utterances[1].highlight, 0..4);
        assert_eq!(turns[7].utterances[1].highlight, 4..8);
        assert_eq!(s.score(), 8);
    }

    #[test]
    fn finnish_keys() {
        let mut s = session(&["\u{00E4}iti"], GameOptions::default()); // äiti
        let turns = type_word(&mut s, "\u{00E4}iti");
        assert_eq!(turns[0].key, '\u{00C4}');
        assert_eq!(turns[3].words().collect::<Vec<_>>(), ["\u{00E4}iti"]);
        assert_eq!(s.buffer(), "\u{00C4}ITI");
    }

    #[test]
    fn unknown_key_is_rejected_without_side_effects() {
        let mut s = session(&["auto"], GameOptions::default());
        s.press('a').unwrap();
        assert!(matches!(s.press('1'), Err(GameError::UnknownKey('1'))));
        assert!(matches!(s.press('\u{00FC}'), Err(GameError::UnknownKey(_)))); // ü
        assert_eq!(s.buffer(), "A");
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn sharp_s_has_no_key() {
        let mut s = session(&["ss"], GameOptions::default());
        s.press('s').unwrap();
        assert!(matches!(
            s.press('\u{00DF}'),
            Err(GameError::UnknownKey('\u{00DF}'))
        ));
        assert_eq!(s.buffer(), "S");
        assert_eq!(s.score(), 0);

        let options = GameOptions {
            strict_keyboard: false,
            ..GameOptions::default()
        };
        let mut lenient = session(&["ss"], options);
        assert!(matches!(
            lenient.press('\u{00DF}'),
            Err(GameError::UnknownKey('\u{00DF}'))
        ));
        assert_eq!(lenient.buffer(), "");
    }

    #[test]
    fn lenient_keyboard_accepts_other_letters() {
        let options = GameOptions {
            strict_keyboard: false,
            ..GameOptions::default()
        };
        let mut s = session(&["m\u{00FC}sli"], options); // müsli
        let turns = type_word(&mut s, "m\u{00FC}sli");
        assert_eq!(turns[4].points, 5);
        assert!(s.press('-').is_err());
    }

    #[test]
    fn buffer_is_trimmed_to_limit() {
        let options = GameOptions {
            max_buffer_len: 5,
            ..GameOptions::default()
        };
        let mut s = session(&["auto"], options);
        type_word(&mut s, "kissaauto");
        assert_eq!(s.buffer(), "AAUTO");
        assert_eq!(s.score(), 4);
    }

    #[test]
    fn buffer_limit_never_hides_longest_word() {
        let options = GameOptions {
            max_buffer_len: 2,
            ..GameOptions::default()
        };
        let mut s = session(&["oskari"], options);
        let turns = type_word(&mut s, "xoskari");
        assert_eq!(s.buffer(), "OSKARI");
        assert_eq!(turns[6].points, 6);
    }

    #[test]
    fn backspace_and_clear() {
        let mut s = session(&["to"], GameOptions::default());
        type_word(&mut s, "tx");
        assert_eq!(s.backspace(), Some('X'));
        let turn = s.press('o').unwrap();
        assert_eq!(turn.points, 2);
        s.clear();
        assert_eq!(s.buffer(), "");
        assert_eq!(s.backspace(), None);
        assert_eq!(s.score(), 2);
    }

    #[test]
    fn play_speaks_in_order() {
        let mut s = session(&["auto", "to"], GameOptions::default());
        let mut transcript = Transcript::default();
        for c in "auto".chars() {
            s.play(c, &mut transcript).unwrap();
        }
        assert_eq!(transcript.texts(), ["a", "u", "t", "o", "auto", "to"]);
    }

    #[test]
    fn sessions_share_one_dictionary() {
        let dictionary = Arc::new(Dictionary::from_words(["to"]).unwrap());
        let mut first = GameSession::new(Arc::clone(&dictionary), GameOptions::default());
        let mut second = GameSession::new(Arc::clone(&dictionary), GameOptions::default());
        type_word(&mut first, "to");
        type_word(&mut second, "t");
        assert_eq!(first.score(), 2);
        assert_eq!(second.score(), 0);
        assert_eq!(second.dictionary().len(), 1);
    }
}
