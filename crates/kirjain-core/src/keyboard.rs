// On-screen keyboard layout

use crate::character::single_upper;

/// Key rows of the on-screen keyboard, top to bottom.
pub const KEY_ROWS: [&str; 6] = [
    "ABCDE",
    "FGHIJ",
    "KLMNO",
    "PQRST",
    "UVWXY",
    "Z\u{00C5}\u{00C4}\u{00D6}", // ZÅÄÖ
];

/// Iterate over every key of the keyboard in layout order.
pub fn keys() -> impl Iterator<Item = char> {
    KEY_ROWS.iter().flat_map(|row| row.chars())
}

/// Map a typed character to the keyboard key it corresponds to.
///
/// Lowercase input selects the same key as its uppercase form. Returns
/// `None` if no key carries the character, including characters whose
/// uppercase form is several characters (`ß`).
pub fn key_for(c: char) -> Option<char> {
    let upper = single_upper(c)?;
    keys().find(|&k| k == upper)
}

/// Locate a key as `(row, column)` in [`KEY_ROWS`].
pub fn position(key: char) -> Option<(usize, usize)> {
    KEY_ROWS
        .iter()
        .enumerate()
        .find_map(|(row, keys)| keys.chars().position(|k| k == key).map(|col| (row, col)))
}
