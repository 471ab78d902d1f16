use crate::error::{LoadError, LoadResult};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");

fn is_usable(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

pub fn load_word_list_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_usable(word))
        .collect()
}

pub fn load_word_list_from_file<P: AsRef<Path>>(path: P) -> LoadResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line.map_err(|e| LoadError::io(path, e))?.trim().to_lowercase();
        if is_usable(&word) {
            words.push(word);
        }
    }
    if words.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(words)
}

/// Picks one entry uniformly at random, or `None` for an empty list.
pub fn choose_root_word<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> Option<&'a String> {
    words.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Write;

    #[test]
    fn test_load_from_str_normalizes_entries() {
        let words = load_word_list_from_str("  Silkworm \nBAROMETER\n\nsand-box\nabc123\n");
        assert_eq!(words, vec!["silkworm".to_string(), "barometer".to_string()]);
    }

    #[test]
    fn test_load_from_str_handles_crlf() {
        let words = load_word_list_from_str("silkworm\r\nbarometer\r\n");
        assert_eq!(words, vec!["silkworm".to_string(), "barometer".to_string()]);
    }

    #[test]
    fn test_embedded_list_is_usable() {
        let words = load_word_list_from_str(EMBEDDED_START_WORDS);
        assert!(!words.is_empty());
        assert!(words.contains(&"silkworm".to_string()));
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_lowercase())));
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("word_scramble_missing_start_words.txt");
        let _ = std::fs::remove_file(&path);
        match load_word_list_from_file(&path) {
            Err(LoadError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_blank_file_is_empty_error() {
        let path = std::env::temp_dir().join("word_scramble_blank_start_words.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "   ").unwrap();
            writeln!(file).unwrap();
        }
        assert!(matches!(
            load_word_list_from_file(&path),
            Err(LoadError::Empty { .. })
        ));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("word_scramble_start_words.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "Silkworm").unwrap();
            writeln!(file, "panorama").unwrap();
        }
        let words = load_word_list_from_file(&path).unwrap();
        assert_eq!(words, vec!["silkworm".to_string(), "panorama".to_string()]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_choose_root_word() {
        let words = vec!["silkworm".to_string(), "panorama".to_string()];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let word = choose_root_word(&words, &mut rng).unwrap();
            assert!(words.contains(word));
        }
        assert!(choose_root_word(&[], &mut rng).is_none());
    }

    #[test]
    fn test_choose_root_word_is_deterministic_for_seed() {
        let words = load_word_list_from_str(EMBEDDED_START_WORDS);
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            choose_root_word(&words, &mut a),
            choose_root_word(&words, &mut b)
        );
    }
}
