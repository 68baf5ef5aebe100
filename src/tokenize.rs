//! Tokenization and normalization.
//!
//! Input text splits on runs of whitespace; each raw token keeps only its
//! ASCII letters and is lowercased. Tokens with nothing left after
//! stripping carry no tag content and are dropped.
//!
//! Only ASCII letters survive normalization; letters outside `[a-zA-Z]` are
//! stripped like punctuation.

/// Normalize one raw token: keep ASCII letters only, lowercased.
///
/// Returns `None` when nothing survives (e.g. `"123"`, `"--"`).
pub fn normalize(raw: &str) -> Option<String> {
    let word: String = raw
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

/// Iterate the normalized tokens of `text` in document order.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(normalize)
}
