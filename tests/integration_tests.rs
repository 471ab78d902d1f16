// Integration tests for the word-scramble application
// These tests verify that all modules work together correctly

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::io::Cursor;
use word_scramble::cli::CliInterface;
use word_scramble::dictionary::DEFAULT_LANGUAGE;
use word_scramble::wordlist::EMBEDDED_START_WORDS;
use word_scramble::*;

/// Dictionary double that records every lookup it is asked to make.
struct RecordingDictionary {
    words: Vec<&'static str>,
    lookups: RefCell<Vec<(String, String)>>,
}

impl RecordingDictionary {
    fn new(words: &[&'static str]) -> Self {
        Self {
            words: words.to_vec(),
            lookups: RefCell::new(Vec::new()),
        }
    }
}

impl Dictionary for RecordingDictionary {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        self.lookups
            .borrow_mut()
            .push((word.to_string(), language.to_string()));
        self.words.iter().any(|w| *w == word)
    }
}

#[test]
fn test_end_to_end_cli_session() {
    // Accept, reject for every reason, start a new round, then exit
    let word_list = vec!["silkworm".to_string()];
    let dictionary = WordSetDictionary::embedded();
    let input = " Silk \nsilk\nsilkworms\nwrmoi\n\n:next\nworm\n:exit\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    game_loop(
        &word_list,
        &dictionary,
        &ValidationPolicy::default(),
        &mut rng,
        &mut interface,
    );
}

#[test]
fn test_cli_session_ends_at_end_of_input() {
    let word_list = load_word_list_from_str(EMBEDDED_START_WORDS);
    let dictionary = WordSetDictionary::embedded();
    let mut interface = CliInterface::new(Cursor::new("silk\nworm\n"));
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    // No explicit exit command: reaching EOF must end the loop
    game_loop(
        &word_list,
        &dictionary,
        &ValidationPolicy::default(),
        &mut rng,
        &mut interface,
    );
}

#[test]
fn test_properties_from_the_silkworm_round() {
    let dictionary = WordSetDictionary::embedded();
    let policy = ValidationPolicy::default();
    let mut round = RoundState::new("silkworm");

    assert_eq!(
        round.submit(" Silk ", &dictionary, &policy),
        Validation::Accepted("silk".to_string())
    );
    assert_eq!(
        round.submit("silkworms", &dictionary, &policy),
        Validation::Rejected(Rejection::NotPossible)
    );
    assert_eq!(
        round.submit("wrmoi", &dictionary, &policy),
        Validation::Rejected(Rejection::NotReal)
    );
    assert_eq!(
        round.submit("SILK", &dictionary, &policy),
        Validation::Rejected(Rejection::AlreadyUsed)
    );
    assert_eq!(round.submit(" \n", &dictionary, &policy), Validation::Empty);
    assert_eq!(round.used_words(), ["silk".to_string()]);
}

#[test]
fn test_dictionary_is_only_consulted_last() {
    let dictionary = RecordingDictionary::new(&["silk", "worm"]);
    let policy = ValidationPolicy::default();
    let used_words = vec!["silk".to_string()];

    assert_eq!(
        validate("silk", "silkworm", &used_words, &dictionary, &policy),
        Validation::Rejected(Rejection::AlreadyUsed)
    );
    assert_eq!(
        validate("zebra", "silkworm", &used_words, &dictionary, &policy),
        Validation::Rejected(Rejection::NotPossible)
    );
    assert!(dictionary.lookups.borrow().is_empty());

    assert_eq!(
        validate("Worm", "silkworm", &used_words, &dictionary, &policy),
        Validation::Accepted("worm".to_string())
    );
    assert_eq!(
        *dictionary.lookups.borrow(),
        vec![("worm".to_string(), DEFAULT_LANGUAGE.to_string())]
    );
}

#[test]
fn test_short_words_never_reach_dictionary() {
    let dictionary = RecordingDictionary::new(&["i"]);
    let policy = ValidationPolicy::default();

    assert_eq!(
        validate("I", "silkworm", &[], &dictionary, &policy),
        Validation::Rejected(Rejection::NotReal)
    );
    assert!(dictionary.lookups.borrow().is_empty());

    let lenient = ValidationPolicy {
        min_word_length: 1,
        ..ValidationPolicy::default()
    };
    assert_eq!(
        validate("I", "silkworm", &[], &dictionary, &lenient),
        Validation::Accepted("i".to_string())
    );
}

#[test]
fn test_custom_files_to_round() {
    // Load both word lists from disk and play a seeded round
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let start_path = temp_dir.join("test_integration_start.txt");
    let dict_path = temp_dir.join("test_integration_dictionary.txt");
    {
        let mut file = File::create(&start_path).unwrap();
        writeln!(file, "Panorama").unwrap();
        let mut file = File::create(&dict_path).unwrap();
        for word in ["panorama", "roam", "moan", "norm", "papa"] {
            writeln!(file, "{word}").unwrap();
        }
    }

    let word_list = load_word_list_from_file(&start_path).unwrap();
    let dictionary = WordSetDictionary::from_file(&dict_path, "en").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut round = RoundState::start(&word_list, &mut rng).unwrap();
    assert_eq!(round.root_word(), "panorama");

    let policy = ValidationPolicy::default();
    assert!(matches!(round.submit("roam", &dictionary, &policy), Validation::Accepted(_)));
    assert!(matches!(round.submit("moan", &dictionary, &policy), Validation::Accepted(_)));
    assert_eq!(
        round.submit("papa", &dictionary, &policy),
        Validation::Rejected(Rejection::NotPossible)
    );
    assert_eq!(round.used_words(), ["moan".to_string(), "roam".to_string()]);

    std::fs::remove_file(&start_path).unwrap();
    std::fs::remove_file(&dict_path).unwrap();
}

#[test]
fn test_missing_word_list_is_a_load_error() {
    let path = std::env::temp_dir().join("test_integration_no_such_start.txt");
    let _ = std::fs::remove_file(&path);
    let err = load_word_list_from_file(&path).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("test_integration_no_such_start.txt"));
}

#[test]
fn test_every_embedded_root_word_is_playable() {
    // Each root word is a real word derivable from itself
    let dictionary = WordSetDictionary::embedded();
    let policy = ValidationPolicy::default();
    for root in load_word_list_from_str(EMBEDDED_START_WORDS) {
        let mut round = RoundState::new(root.as_str());
        assert_eq!(
            round.submit(&root, &dictionary, &policy),
            Validation::Accepted(root.clone())
        );
    }
}

#[test]
fn test_seeded_rounds_are_reproducible() {
    let word_list = load_word_list_from_str(EMBEDDED_START_WORDS);
    let mut a = ChaCha8Rng::seed_from_u64(99);
    let mut b = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..5 {
        assert_eq!(
            RoundState::start(&word_list, &mut a),
            RoundState::start(&word_list, &mut b)
        );
    }
}
