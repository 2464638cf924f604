/// Characters deleted from the input before splitting. Includes the backslash.
pub const STRIPPED_PUNCTUATION: &[char] = &[
    '!', '(', ')', '-', '[', ']', '{', '}', ';', ':', '\'', '"', '\\', ',', '<', '>', '.', '/',
    '?', '@', '#', '$', '%', '^', '&', '*', '_', '~',
];

pub fn is_stripped_punctuation(c: char) -> bool {
    STRIPPED_PUNCTUATION.contains(&c)
}

/// Delete punctuation in place of replacing it, so `well-known` fuses to `wellknown`.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|&c| !is_stripped_punctuation(c)).collect()
}

/// Normalized tokens of `text` in input order.
///
/// Splits on the single space character only. Tabs and newlines stay inside
/// tokens; empty pieces between adjacent spaces are dropped.
pub fn tokens(text: &str) -> Vec<String> {
    strip_punctuation(text)
        .split(' ')
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect()
}
