// Word-frequency vectorization.
//
// Turns a raw message into a sparse bag-of-words vector: lowercase the text,
// strip every character outside [a-z0-9 ], split on single spaces, and count
// each resulting token. The frequency map is the only representation the
// similarity layer ever sees.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex_lite::Regex;

/// Matches every character the normalizer discards. Punctuation, emoji, and
/// non-ASCII letters are removed outright rather than replaced with spaces.
fn strip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("[^a-z0-9 ]").expect("strip pattern is valid"))
}

/// Build a word-frequency map for one message.
///
/// Splitting is on *single* space characters, not runs of whitespace, so
/// consecutive, leading, or trailing spaces left behind after stripping
/// produce empty-string tokens that are counted like any other. That keeps
/// the invariant that counts sum to the number of space-delimited segments
/// of the cleaned text.
///
/// Pure function: no side effects, same input always yields the same map.
pub fn word_frequencies(text: &str) -> HashMap<String, u32> {
    let lowered = text.to_lowercase();
    let cleaned = strip_pattern().replace_all(&lowered, "");

    let mut frequencies = HashMap::new();
    for token in cleaned.split(' ') {
        *frequencies.entry(token.to_string()).or_insert(0) += 1;
    }
    frequencies
}
