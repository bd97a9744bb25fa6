// Points for matched words
//
// Every word matched by a key press is worth its length multiplied by the
// number of words that press matched. Typing "auto" with both "to" and
// "auto" in the dictionary scores 2x2 + 2x4 = 12.

use std::fmt;

use crate::dictionary::WordMatch;

/// Points awarded for one matched word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Award {
    /// Length of the word in characters.
    pub length: usize,
    /// Number of words matched by the same key press.
    pub multiplier: usize,
}

impl Award {
    pub fn points(&self) -> u64 {
        (self.length as u64) * (self.multiplier as u64)
    }
}

impl fmt::Display for Award {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+ {}x{}", self.multiplier, self.length)
    }
}

/// Awards for the matches of one key press, in match order.
pub fn awards(matches: &[WordMatch]) -> Vec<Award> {
    let multiplier = matches.len();
    matches
        .iter()
        .map(|m| Award {
            length: m.len,
            multiplier,
        })
        .collect()
}

pub fn total_points(awards: &[Award]) -> u64 {
    awards.iter().map(Award::points).sum()
}
