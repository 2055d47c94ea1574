//! Formatting utilities for terminal output

/// Circled number for a word length, the way the used-word list labels entries
///
/// Falls back to `(n)` beyond the circled digits Unicode provides.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        // ① is U+2460; the block runs through ⑳
        1..=20 => char::from_u32(0x2460 + len as u32 - 1)
            .map_or_else(|| format!("({len})"), |c| c.to_string()),
        _ => format!("({len})"),
    }
}

/// Used word prefixed with its length badge
#[must_use]
pub fn used_word_line(word: &str) -> String {
    format!("{} {word}", length_badge(word.chars().count()))
}

/// Root word spaced out in capitals, e.g. `S I L K W O R M`
#[must_use]
pub fn spaced_root(root: &str) -> String {
    root.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
