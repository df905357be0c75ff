// File: src/name.rs
// Purpose: Full-name check (two words minimum, letters only)

use once_cell::sync::Lazy;
use regex::Regex;

// One name word: letters only, Scandinavian diacritics included, at
// least two characters
static NAME_WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-zÄÖÅäöå]{2,}$").unwrap());

/// Validate a full name
///
/// The name is split on runs of whitespace and empty tokens are
/// discarded. It is valid when at least two words remain and every word
/// is two or more letters with no digits or punctuation.
pub fn is_valid_full_name(name: &str) -> bool {
    let words: Vec<&str> = name.split_whitespace().collect();
    words.len() >= 2 && words.iter().all(|word| NAME_WORD_REGEX.is_match(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_two_plain_words() {
        assert!(is_valid_full_name("Anna Virtanen"));
        assert!(is_valid_full_name("Matti Juhani Meikäläinen"));
    }

    #[test]
    fn test_accepts_scandinavian_letters() {
        assert!(is_valid_full_name("Åsa Öberg"));
        assert!(is_valid_full_name("Päivi Hämäläinen"));
    }

    #[test]
    fn test_ignores_surrounding_and_repeated_whitespace() {
        assert!(is_valid_full_name("  Anna   Virtanen  "));
        assert!(is_valid_full_name("Anna\tVirtanen"));
    }

    #[test]
    fn test_rejects_single_word() {
        assert!(!is_valid_full_name("Anna"));
        assert!(!is_valid_full_name("   Anna   "));
        assert!(!is_valid_full_name(""));
    }

    #[test]
    fn test_rejects_short_words() {
        assert!(!is_valid_full_name("A B"));
        assert!(!is_valid_full_name("Anna V"));
    }

    #[test]
    fn test_rejects_digits_and_punctuation() {
        assert!(!is_valid_full_name("Anna V1rtanen"));
        assert!(!is_valid_full_name("Anna Virtanen3"));
        assert!(!is_valid_full_name("Anna-Liisa Virtanen"));
        assert!(!is_valid_full_name("Anna O'Brien"));
    }
}
