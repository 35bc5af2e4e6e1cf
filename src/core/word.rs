//! Answer and guess word representation
//!
//! A Word is an uppercase ASCII word of any non-zero length. Answers in a
//! crossword vary between slots, so unlike a fixed five-letter game the length
//! is carried by the value.

use std::fmt;

/// An uppercase word used as an answer or a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use ttsla::core::Word;
    ///
    /// let word = Word::new(" kopi ").unwrap();
    /// assert_eq!(word.text(), "KOPI");
    ///
    /// assert!(Word::new("ko pi").is_err());
    /// assert!(Word::new("k0pi").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if !trimmed.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: trimmed.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; provided for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the letters
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("kopi").unwrap().text(), "KOPI");
        assert_eq!(Word::new("KoPi").unwrap().text(), "KOPI");
        assert_eq!(Word::new("  rumah\n").unwrap().text(), "RUMAH");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("kopí"), Err(WordError::NonAscii));
        assert_eq!(Word::new("ko-pi"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("k0pi"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_lengths_vary() {
        assert_eq!(Word::new("kopi").unwrap().len(), 4);
        assert_eq!(Word::new("bintang").unwrap().len(), 7);
    }

    #[test]
    fn word_letters_in_order() {
        let word = Word::new("koko").unwrap();
        assert_eq!(word.letters().collect::<String>(), "KOKO");
    }

    #[test]
    fn word_display() {
        let word = Word::new("pagi").unwrap();
        assert_eq!(format!("{word}"), "PAGI");
    }
}
