//! The 2048-entry word table mnemonics are encoded against.
//!
//! The canonical English list ships embedded in the binary. Other lists can be
//! loaded from disk, either as a JSON array of strings or one word per line.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::constants::*;
use crate::error::{Result, WalletError};

/// An immutable, validated word table. Cheap to clone.
#[derive(Clone, Debug)]
pub struct Wordlist {
    words: Arc<[String]>,
}

impl Wordlist {
    /// The embedded BIP-39 English list.
    pub fn english() -> Self {
        let words: Vec<String> = ENGLISH_WORDLIST.lines().map(str::to_string).collect();
        Self { words: words.into() }
    }

    /// Fails unless `words` holds exactly 2048 distinct, non-empty entries.
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        if words.len() != WORDLIST_SIZE {
            return Err(WalletError::Wordlist(format!("expected {} words, got {}", WORDLIST_SIZE, words.len())));
        }
        {
            let mut seen: HashMap<&str, usize> = HashMap::with_capacity(WORDLIST_SIZE);
            for (i, word) in words.iter().enumerate() {
                if word.is_empty() || word.contains(char::is_whitespace) {
                    return Err(WalletError::Wordlist(format!("entry {} is empty or contains whitespace", i)));
                }
                if let Some(first) = seen.insert(word.as_str(), i) {
                    return Err(WalletError::Wordlist(format!("duplicate word '{}' at {} and {}", word, first, i)));
                }
            }
        }
        Ok(Self { words: words.into() })
    }

    /// Reads a word list from `path`. A file whose first non-blank character is
    /// `[` is parsed as a JSON array, anything else as newline-separated words.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| WalletError::Wordlist(format!("failed to read {}: {}", path.display(), e)))?;
        let words = if contents.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<String>>(&contents)
                .map_err(|e| WalletError::Wordlist(format!("invalid JSON in {}: {}", path.display(), e)))?
        } else {
            contents.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect()
        };
        let list = Self::from_words(words)?;
        debug!(path = %path.display(), "loaded word list");
        Ok(list)
    }

    /// Looks up the word at an 11-bit index.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Self::english()
    }
}
