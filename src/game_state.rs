use crate::dictionary::Dictionary;
use crate::validator::{Rejection, Validation, ValidationPolicy, validate};
use crate::wordlist::choose_root_word;
use crate::{debug_log, info_log};
use rand::Rng;

/// State of one round: the root word and the words accepted so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    used_words: Vec<String>,
}

impl RoundState {
    pub fn new(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            used_words: Vec::new(),
        }
    }

    /// Start a round with a root word drawn uniformly from `word_list`.
    pub fn start<R: Rng + ?Sized>(word_list: &[String], rng: &mut R) -> Option<Self> {
        choose_root_word(word_list, rng).map(|word| Self::new(word.as_str()))
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Validate `raw` against this round and record it if accepted.
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        raw: &str,
        dictionary: &D,
        policy: &ValidationPolicy,
    ) -> Validation {
        let outcome = validate(raw, &self.root_word, &self.used_words, dictionary, policy);
        if let Validation::Accepted(word) = &outcome {
            self.used_words.insert(0, word.clone());
        }
        outcome
    }
}

/// The single error shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordError {
    pub title: String,
    pub message: String,
}

impl WordError {
    pub fn from_rejection(rejection: Rejection, root_word: &str) -> Self {
        Self {
            title: rejection.title().to_string(),
            message: rejection.message(root_word),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewRound,
    Exit,
}

/// Presentation side of the game. Implemented by the CLI and the TUI.
pub trait GameInterface {
    fn display_round(&mut self, round: &RoundState);
    /// `None` means the input was ignored and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_accepted(&mut self, round: &RoundState, word: &str);
    fn display_error(&mut self, error: &WordError);
    fn display_new_round(&mut self, round: &RoundState);
    fn display_exit_message(&mut self);
}

pub fn game_loop<D, R, I>(
    word_list: &[String],
    dictionary: &D,
    policy: &ValidationPolicy,
    rng: &mut R,
    interface: &mut I,
) where
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
    I: GameInterface + ?Sized,
{
    let Some(mut round) = RoundState::start(word_list, rng) else {
        info_log!("game_loop() - Word list is empty, nothing to play");
        interface.display_exit_message();
        return;
    };
    info_log!("game_loop() - Round started with root word '{}'", round.root_word());
    interface.display_round(&round);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - Action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewRound => {
                if let Some(next) = RoundState::start(word_list, rng) {
                    round = next;
                }
                info_log!("game_loop() - New round with root word '{}'", round.root_word());
                interface.display_new_round(&round);
            }
            UserAction::Submit(raw) => match round.submit(&raw, dictionary, policy) {
                Validation::Empty => {
                    debug_log!("game_loop() - Empty submission ignored");
                }
                Validation::Accepted(word) => {
                    info_log!("game_loop() - Accepted '{}'", word);
                    interface.display_accepted(&round, &word);
                }
                Validation::Rejected(rejection) => {
                    info_log!("game_loop() - Rejected '{}': {:?}", raw.trim(), rejection);
                    interface.display_error(&WordError::from_rejection(rejection, round.root_word()));
                }
            },
        }
    }
}
