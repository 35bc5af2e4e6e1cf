//! Per-length word banks and the validation dictionary
//!
//! Banks keep their original order because the daily selector indexes into
//! them. The dictionary is a set per length, built once and passed to
//! whoever validates words.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use super::{KBBI_4, KBBI_5, KBBI_6};

/// Ordered word banks keyed by word length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBanks {
    by_length: FxHashMap<usize, Vec<String>>,
}

impl WordBanks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Banks compiled into the binary (4, 5 and 6 letters)
    #[must_use]
    pub fn embedded() -> Self {
        let mut banks = Self::new();
        banks.insert(4, KBBI_4.iter().map(|w| (*w).to_string()).collect());
        banks.insert(5, KBBI_5.iter().map(|w| (*w).to_string()).collect());
        banks.insert(6, KBBI_6.iter().map(|w| (*w).to_string()).collect());
        banks
    }

    /// Replace the bank for `length`
    pub fn insert(&mut self, length: usize, words: Vec<String>) {
        self.by_length.insert(length, words);
    }

    /// Builder form of [`WordBanks::insert`]
    #[must_use]
    pub fn with_bank<S: AsRef<str>>(mut self, length: usize, words: &[S]) -> Self {
        self.insert(length, words.iter().map(|w| w.as_ref().to_string()).collect());
        self
    }

    /// Bank for a word length; empty when no bank exists
    #[must_use]
    pub fn bank(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Lengths that have a bank, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}

/// Validation dictionary: normalised word sets per length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_length: FxHashMap<usize, FxHashSet<String>>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the dictionary from the same banks the selector draws from
    #[must_use]
    pub fn from_banks(banks: &WordBanks) -> Self {
        let mut dictionary = Self::new();
        for length in banks.lengths() {
            dictionary.populate(length, banks.bank(length));
        }
        debug!(
            "Dictionary built with {} words across {} lengths",
            dictionary.by_length.values().map(FxHashSet::len).sum::<usize>(),
            dictionary.by_length.len()
        );
        dictionary
    }

    /// Add words to the set for `length`
    pub fn populate<S: AsRef<str>>(&mut self, length: usize, words: &[S]) {
        let set = self.by_length.entry(length).or_default();
        set.extend(words.iter().map(|w| normalise(w.as_ref())));
    }

    /// Check whether `word` is in the set for `length`
    ///
    /// Comparison ignores case and surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use ttsla::wordlists::{Dictionary, WordBanks};
    ///
    /// let banks = WordBanks::new().with_bank(4, &["kopi"]);
    /// let dict = Dictionary::from_banks(&banks);
    /// assert!(dict.is_word_valid(" KOPI ", 4));
    /// assert!(!dict.is_word_valid("kopi", 5));
    /// ```
    #[must_use]
    pub fn is_word_valid(&self, word: &str, length: usize) -> bool {
        self.by_length
            .get(&length)
            .is_some_and(|set| set.contains(&normalise(word)))
    }

    /// Check `word` against the set matching its own length
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let normalised = normalise(word);
        self.is_word_valid(&normalised, normalised.chars().count())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.values().all(FxHashSet::is_empty)
    }
}

fn normalise(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_for_missing_length_is_empty() {
        let banks = WordBanks::embedded();
        assert!(banks.bank(7).is_empty());
        assert!(banks.bank(0).is_empty());
        assert_eq!(banks.lengths(), vec![4, 5, 6]);
    }

    #[test]
    fn embedded_banks_hold_matching_lengths() {
        let banks = WordBanks::embedded();
        for length in banks.lengths() {
            assert!(!banks.bank(length).is_empty());
            for word in banks.bank(length) {
                assert_eq!(word.len(), length, "{word}");
            }
        }
    }

    #[test]
    fn dictionary_is_case_and_space_insensitive() {
        let banks = WordBanks::new().with_bank(4, &["Kopi", "meja"]);
        let dict = Dictionary::from_banks(&banks);

        assert!(dict.is_word_valid("kopi", 4));
        assert!(dict.is_word_valid("KOPI", 4));
        assert!(dict.is_word_valid("  Meja\t", 4));
        assert!(!dict.is_word_valid("buku", 4));
    }

    #[test]
    fn dictionary_checks_the_requested_length_bucket() {
        let banks = WordBanks::new().with_bank(4, &["kopi"]);
        let dict = Dictionary::from_banks(&banks);

        assert!(!dict.is_word_valid("kopi", 5));
        assert!(dict.contains("KOPI"));
        assert!(!dict.contains("rumah"));
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert!(!dict.is_word_valid("kopi", 4));
    }

    #[test]
    fn embedded_dictionary_accepts_bank_words() {
        let banks = WordBanks::embedded();
        let dict = Dictionary::from_banks(&banks);
        assert!(dict.is_word_valid("kopi", 4));
        assert!(dict.is_word_valid("rumah", 5));
        assert!(dict.is_word_valid("kucing", 6));
    }
}
