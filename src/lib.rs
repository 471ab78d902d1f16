// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod validator;
pub mod wordlist;

// Re-export commonly used functions for easier testing
pub use dictionary::{Dictionary, WordSetDictionary};
pub use error::LoadError;
pub use game_state::{GameInterface, RoundState, UserAction, WordError, game_loop};
pub use validator::{
    Rejection, Validation, ValidationPolicy, is_original, is_possible, is_real, normalize, validate,
};
pub use wordlist::{load_word_list_from_file, load_word_list_from_str};
