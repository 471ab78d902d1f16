use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use std::process::ExitCode;
use word_scramble::cli::{Cli, CliInterface, parse_cli};
use word_scramble::dictionary::WordSetDictionary;
use word_scramble::error::LoadResult;
use word_scramble::logging::{default_log_path, init_logging};
use word_scramble::tui::TuiInterface;
use word_scramble::wordlist::{EMBEDDED_START_WORDS, load_word_list_from_file, load_word_list_from_str};
use word_scramble::{game_loop, info_log};

fn load_word_list(cli: &Cli) -> LoadResult<Vec<String>> {
    match &cli.word_list_path {
        Some(path) => load_word_list_from_file(path),
        None => Ok(load_word_list_from_str(EMBEDDED_START_WORDS)),
    }
}

fn load_dictionary(cli: &Cli) -> LoadResult<WordSetDictionary> {
    match &cli.dictionary_path {
        Some(path) => WordSetDictionary::from_file(path, &cli.language),
        None => Ok(WordSetDictionary::embedded()),
    }
}

fn main() -> ExitCode {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(default_log_path)
        && let Err(e) = init_logging(&path)
    {
        eprintln!("Logging disabled, could not open '{}': {e}", path.display());
    }

    let word_list = match load_word_list(&cli) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load word list: {e}");
            return ExitCode::FAILURE;
        }
    };
    let dictionary = match load_dictionary(&cli) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("Failed to load dictionary: {e}");
            return ExitCode::FAILURE;
        }
    };
    info_log!(
        "Loaded {} root words and {} dictionary words",
        word_list.len(),
        dictionary.len()
    );

    let policy = cli.validation_policy();
    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    if cli.plain {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&word_list, &dictionary, &policy, &mut rng, &mut interface);
    } else {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to initialize terminal: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&word_list, &dictionary, &policy, &mut rng, &mut interface);
    }

    ExitCode::SUCCESS
}
