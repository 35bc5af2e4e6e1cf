//! Evaluate and check commands

use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;

/// Score `guess` against `answer`
///
/// # Errors
/// Returns an error if either word is invalid or their lengths differ.
pub fn evaluate_words(guess: &str, answer: &str) -> Result<Feedback, String> {
    let guess = Word::new(guess).map_err(|e| format!("Guess: {e}"))?;
    let answer = Word::new(answer).map_err(|e| format!("Answer: {e}"))?;
    Feedback::calculate(&guess, &answer).map_err(|e| e.to_string())
}

/// Result of a dictionary lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCheck {
    pub length: usize,
    pub valid: bool,
}

/// Look `word` up in the bank of its own length
#[must_use]
pub fn check_word(dictionary: &Dictionary, word: &str) -> WordCheck {
    let length = word.trim().chars().count();
    WordCheck {
        length,
        valid: dictionary.is_word_valid(word, length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordBanks;

    #[test]
    fn evaluates_words() {
        let feedback = evaluate_words("kota", "KOPI").unwrap();
        assert_eq!(feedback.to_string(), "GG--");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(evaluate_words("kop", "kopi").is_err());
        assert!(evaluate_words("k0pi", "kopi").unwrap_err().starts_with("Guess"));
    }

    #[test]
    fn checks_against_banks() {
        let dictionary = Dictionary::from_banks(&WordBanks::new().with_bank(4, &["kopi"]));
        assert_eq!(check_word(&dictionary, " KOPI "), WordCheck { length: 4, valid: true });
        assert!(!check_word(&dictionary, "meja").valid);
    }
}
