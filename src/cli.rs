use crate::dictionary::DEFAULT_LANGUAGE;
use crate::game_state::{GameInterface, RoundState, UserAction, WordError};
use crate::validator::{DEFAULT_MIN_WORD_LENGTH, ValidationPolicy};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Word Scramble: spell as many words as you can from the root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub word_list_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary used to recognize words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Dictionary language
    #[arg(short = 'l', long = "language", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Shortest word that counts as a real word
    #[arg(short = 'm', long = "min-length", default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    pub min_word_length: usize,

    /// Seed for choosing root words (random when omitted)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Use the line-based interface instead of the full-screen one
    #[arg(long = "cli")]
    pub plain: bool,

    /// Where to write the log file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            language: self.language.clone(),
            min_word_length: self.min_word_length,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

const EXIT_COMMAND: &str = ":exit";
const NEXT_COMMAND: &str = ":next";

pub fn read_action<R: BufRead>(reader: &mut R) -> UserAction {
    println!("\nEnter a word ('{EXIT_COMMAND}' to quit, '{NEXT_COMMAND}' for a new root word):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return UserAction::Exit,
        Ok(_) => {}
    }

    match input.trim().to_lowercase().as_str() {
        EXIT_COMMAND => UserAction::Exit,
        NEXT_COMMAND => UserAction::NewRound,
        _ => UserAction::Submit(input),
    }
}

pub fn display_root_word(root_word: &str) {
    println!("Root word: {}", root_word.to_uppercase());
}

pub fn display_used_words(used_words: &[String]) {
    println!("Your words ({}):", used_words.len());
    for word in used_words {
        println!("  ({}) {word}", word.chars().count());
    }
}

pub fn display_error(error: &WordError) {
    println!("{}: {}", error.title, error.message);
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `GameInterface` trait
/// This struct wraps a `BufRead` reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, round: &RoundState) {
        display_root_word(round.root_word());
    }

    fn read_action(&mut self) -> Option<UserAction> {
        Some(read_action(&mut self.reader))
    }

    fn display_accepted(&mut self, round: &RoundState, _word: &str) {
        display_used_words(round.used_words());
    }

    fn display_error(&mut self, error: &WordError) {
        display_error(error);
    }

    fn display_new_round(&mut self, round: &RoundState) {
        println!("New round started.");
        display_root_word(round.root_word());
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
