//! Ordinal forms.
//!
//! - Words: rewrite the last word of a cardinal phrase ("forty-two" →
//!   "forty-second"). Everything before the last space or hyphen is kept
//!   byte-for-byte.
//! - Digits: English suffix for a magnitude ("21" → "st").

use nw_core::vocab;

/// Turn a cardinal phrase into its ordinal phrase.
pub fn ordinal_words(phrase: &str) -> String {
    let cut = phrase
        .rfind(|c: char| c == ' ' || c == '-')
        .map_or(0, |i| i + 1);
    let (head, last) = phrase.split_at(cut);

    let mut out = String::with_capacity(phrase.len() + 4);
    out.push_str(head);
    out.push_str(&ordinal_word(last));
    out
}

/// Ordinal of a single cardinal word.
pub fn ordinal_word(word: &str) -> String {
    if let Some(irregular) = vocab::irregular_ordinal(word) {
        return irregular.to_string();
    }
    match word.strip_suffix('y') {
        Some(stem) => format!("{stem}ieth"),
        None => format!("{word}th"),
    }
}

/// "st" / "nd" / "rd" / "th" for a non-negative magnitude.
pub fn ordinal_suffix(n: u64) -> &'static str {
    match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    }
}
