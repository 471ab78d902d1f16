//! Dictionary capability used by the "is it a real word" check.
//!
//! The game only needs to ask whether a word is recognized in the configured
//! language. [`Dictionary`] is that seam; [`WordSetDictionary`] is the
//! in-memory implementation backed by a newline-separated word list.

use crate::error::{LoadError, LoadResult};
use crate::wordlist::load_word_list_from_str;
use std::collections::HashSet;
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Language tag of the embedded dictionary.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A spell-checking capability.
pub trait Dictionary {
    /// Whether `word` is a recognized entry in `language`.
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

/// Dictionary backed by a fixed set of lowercase words in one language.
#[derive(Debug, Clone)]
pub struct WordSetDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordSetDictionary {
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: language.to_lowercase(),
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The dictionary compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_str_list(DEFAULT_LANGUAGE, EMBEDDED_DICTIONARY)
    }

    #[must_use]
    pub fn from_str_list(language: &str, data: &str) -> Self {
        Self::new(language, load_word_list_from_str(data))
    }

    pub fn from_file<P: AsRef<Path>>(path: P, language: &str) -> LoadResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let dictionary = Self::from_str_list(language, &data);
        if dictionary.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(dictionary)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSetDictionary {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(&word.to_lowercase())
    }
}
