// Capitalisation check for word-list entries

use crate::character::{is_lower, is_upper};

/// Check whether a word is written with a capital initial and nothing else
/// in upper case, as proper nouns are: "Oskari", "Helsinki".
///
/// All-caps words (including a lone capital letter) and words with inner
/// capitals are not capitalised.
pub fn is_capitalized(word: &[char]) -> bool {
    let Some((&first, rest)) = word.split_first() else {
        return false;
    };
    is_upper(first) && rest.iter().any(|&c| is_lower(c)) && !rest.iter().any(|&c| is_upper(c))
}
