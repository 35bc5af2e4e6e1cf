//! Guess evaluation and feedback representation
//!
//! Feedback is the per-letter status sequence produced by comparing a guess
//! against the answer:
//! - `Correct` = letter in the right position
//! - `Present` = letter in the answer elsewhere, while unmatched copies remain
//! - `Absent` = letter not in the answer, or every copy already accounted for

use super::{LetterStatus, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Error returned when guess and answer cannot be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluateError {
    LengthMismatch { guess: usize, answer: usize },
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, answer } => write!(
                f,
                "Guess has {guess} letters but the answer has {answer}"
            ),
        }
    }
}

impl std::error::Error for EvaluateError {}

/// Evaluate `guess` against `answer`
///
/// Letters are compared exactly; callers normalise case beforehand.
///
/// # Algorithm
/// 1. Count the remaining copies of each answer letter
/// 2. First pass: mark exact matches `Correct` and remove them from the pool
/// 3. Second pass: for every other position, mark `Present` while copies
///    remain in the pool (consuming one), otherwise `Absent`
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` if the lengths differ.
///
/// # Examples
/// ```
/// use ttsla::core::{LetterStatus::*, evaluate};
///
/// assert_eq!(
///     evaluate("KOTA", "KOPI").unwrap(),
///     vec![Correct, Correct, Absent, Absent]
/// );
/// assert!(evaluate("KOPI", "RUMAH").is_err());
/// ```
pub fn evaluate(guess: &str, answer: &str) -> Result<Vec<LetterStatus>, EvaluateError> {
    let guess: Vec<char> = guess.chars().collect();
    let answer: Vec<char> = answer.chars().collect();

    if guess.len() != answer.len() {
        return Err(EvaluateError::LengthMismatch {
            guess: guess.len(),
            answer: answer.len(),
        });
    }

    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in &answer {
        *remaining.entry(ch).or_insert(0) += 1;
    }

    let mut result = vec![LetterStatus::Absent; guess.len()];

    // First pass: exact position matches
    for (i, (&g, &a)) in guess.iter().zip(&answer).enumerate() {
        if g == a {
            result[i] = LetterStatus::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, limited by remaining copies
    for (i, &g) in guess.iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    Ok(result)
}

/// Feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Errors
    /// Returns `EvaluateError::LengthMismatch` if the words differ in length.
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, EvaluateError> {
        evaluate(guess.text(), answer.text()).map(Self)
    }

    /// Wrap an existing status sequence
    #[must_use]
    pub const fn from_statuses(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }

    /// Per-letter statuses
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    #[test]
    fn evaluate_identical_is_all_correct() {
        for word in ["KOPI", "RUMAH", "AAAA", "BINTANG"] {
            let result = evaluate(word, word).unwrap();
            assert!(result.iter().all(|&s| s == Correct), "{word}");
        }
    }

    #[test]
    fn evaluate_disjoint_is_all_absent() {
        let result = evaluate("BUKU", "MEJA").unwrap();
        assert_eq!(result, vec![Absent; 4]);
    }

    #[test]
    fn evaluate_position_matches() {
        assert_eq!(
            evaluate("KOTA", "KOPI").unwrap(),
            vec![Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_consumed_by_exact_matches() {
        // K and O each appear once in KOPI and both are matched in place,
        // so the second K and O find nothing left
        assert_eq!(
            evaluate("KOKO", "KOPI").unwrap(),
            vec![Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_present_limited_by_count() {
        // One A in PAGI: the first A takes the present mark, the second is absent
        assert_eq!(
            evaluate("AAXX", "PAGI").unwrap(),
            vec![Absent, Correct, Absent, Absent]
        );
        assert_eq!(
            evaluate("MAMA", "AMIN").unwrap(),
            vec![Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_present_later_than_correct() {
        // Second pass runs after every exact match is removed from the pool
        assert_eq!(
            evaluate("ABBA", "BABA").unwrap(),
            vec![Present, Present, Correct, Correct]
        );
        assert_eq!(
            evaluate("OOKO", "KOPI").unwrap(),
            vec![Absent, Correct, Present, Absent]
        );
    }

    #[test]
    fn evaluate_rejects_length_mismatch() {
        assert_eq!(
            evaluate("KOP", "KOPI"),
            Err(EvaluateError::LengthMismatch { guess: 3, answer: 4 })
        );
    }

    #[test]
    fn evaluate_empty_words() {
        assert_eq!(evaluate("", "").unwrap(), Vec::<LetterStatus>::new());
    }

    #[test]
    fn feedback_calculate_and_render() {
        let guess = Word::new("mama").unwrap();
        let answer = Word::new("amin").unwrap();
        let feedback = Feedback::calculate(&guess, &answer).unwrap();

        assert_eq!(feedback.statuses(), &[Present, Present, Absent, Absent]);
        assert!(!feedback.is_perfect());
        assert_eq!(feedback.to_string(), "YY--");
        assert_eq!(feedback.to_emoji(), "🟨🟨⬜⬜");
    }

    #[test]
    fn feedback_perfect() {
        let word = Word::new("rumah").unwrap();
        let feedback = Feedback::calculate(&word, &word).unwrap();
        assert!(feedback.is_perfect());
        assert!(!Feedback::from_statuses(Vec::new()).is_perfect());
    }
}
