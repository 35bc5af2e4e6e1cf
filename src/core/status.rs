//! Per-letter feedback status
//!
//! The derived ordering is the merge priority: `Absent < Present < Correct`.
//! An unset letter is represented as `None`, which `Option`'s ordering
//! already places below every status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// Letter does not occur in the answer (or all occurrences are used up)
    Absent,
    /// Letter occurs in the answer at another position
    Present,
    /// Letter is in the right position
    Correct,
}

impl LetterStatus {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert!(LetterStatus::Correct > LetterStatus::Present);
        assert!(LetterStatus::Present > LetterStatus::Absent);
        assert!(Some(LetterStatus::Absent) > None);
    }

    #[test]
    fn codes_and_emoji_are_distinct() {
        let all = [LetterStatus::Correct, LetterStatus::Present, LetterStatus::Absent];
        let codes: String = all.iter().map(|s| s.code()).collect();
        let emoji: String = all.iter().map(|s| s.emoji()).collect();
        assert_eq!(codes, "GY-");
        assert_eq!(emoji, "🟩🟨⬜");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&LetterStatus::Present).unwrap();
        assert_eq!(json, "\"present\"");
    }
}
