use crate::dictionary::{DEFAULT_LANGUAGE, Dictionary};
use std::collections::HashMap;
use std::fmt;

pub const DEFAULT_MIN_WORD_LENGTH: usize = 2;

/// Why a candidate was turned down. Checks run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AlreadyUsed,
    NotPossible,
    NotReal,
}

impl Rejection {
    pub fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
        }
    }

    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root_word}'!"),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Nothing left after normalization; ignored without an error.
    Empty,
    Accepted(String),
    Rejected(Rejection),
}

/// Settings for the dictionary check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub language: String,
    /// Shorter words are rejected as not real before the dictionary is asked.
    pub min_word_length: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }
}

pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

pub fn is_possible(word: &str, root_word: &str) -> bool {
    let mut available: HashMap<char, usize> = HashMap::new();
    for c in root_word.chars() {
        *available.entry(c).or_insert(0) += 1;
    }
    for c in word.chars() {
        match available.get_mut(&c) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

pub fn is_real<D: Dictionary + ?Sized>(word: &str, dictionary: &D, policy: &ValidationPolicy) -> bool {
    word.chars().count() >= policy.min_word_length
        && dictionary.is_recognized(word, &policy.language)
}

pub fn validate<D: Dictionary + ?Sized>(
    raw: &str,
    root_word: &str,
    used_words: &[String],
    dictionary: &D,
    policy: &ValidationPolicy,
) -> Validation {
    let word = normalize(raw);
    if word.is_empty() {
        return Validation::Empty;
    }
    if !is_original(&word, used_words) {
        return Validation::Rejected(Rejection::AlreadyUsed);
    }
    if !is_possible(&word, root_word) {
        return Validation::Rejected(Rejection::NotPossible);
    }
    if !is_real(&word, dictionary, policy) {
        return Validation::Rejected(Rejection::NotReal);
    }
    Validation::Accepted(word)
}
