//! Stop-word loading and membership.
//!
//! A [`StopWordSet`] is loaded once per extraction from a user-supplied file
//! and consulted while counting. Tokens in the file are whitespace-delimited
//! and matched case-insensitively. A built-in English list is available for
//! callers that do not ship their own.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::error::{Error, Result};

/// An immutable set of lowercase stop words.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: FxHashSet<String>,
}

impl StopWordSet {
    /// Load a stop-word set from a file.
    ///
    /// Tokens are separated by any whitespace (newlines or spaces),
    /// lowercased, and deduplicated. An unreadable path is an error — a
    /// missing list is never treated as "no stop words". An empty but
    /// readable file yields an empty set, which is legal.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::StopWordLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&content))
    }

    /// Build a set from raw text, whitespace-delimited.
    pub fn from_text(text: &str) -> Self {
        let words = text.split_whitespace().map(str::to_lowercase).collect();
        Self { words }
    }

    /// Build a set from a slice of words.
    pub fn from_list(words: &[&str]) -> Self {
        let words = words.iter().map(|w| w.to_lowercase()).collect();
        Self { words }
    }

    /// The built-in English list from the `stop-words` crate.
    pub fn english() -> Self {
        let words = get(LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { words }
    }

    /// An empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether `word` is a stop word, case-insensitively.
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&word.to_ascii_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no stop words are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
