//! Day-scoped completion verdicts

use crate::core::{CrosswordData, LetterStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall verdict for a finished puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionResult {
    /// Every playable cell ended correct
    Perfect,
    /// Some, but not all, playable cells ended correct
    Partial,
    /// No playable cell ended correct
    AllWrong,
}

impl fmt::Display for CompletionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perfect => f.write_str("perfect"),
            Self::Partial => f.write_str("partial"),
            Self::AllWrong => f.write_str("all-wrong"),
        }
    }
}

/// What gets stored once a puzzle is finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// ISO date the record belongs to
    pub date: String,
    pub result: CompletionResult,
    pub puzzle: CrosswordData,
}

/// Classify the final status of every playable cell
///
/// Unfilled cells count as not correct.
///
/// # Examples
/// ```
/// use ttsla::core::LetterStatus::*;
/// use ttsla::session::{CompletionResult, classify};
///
/// assert_eq!(classify([Some(Correct), Some(Correct)]), CompletionResult::Perfect);
/// assert_eq!(classify([Some(Correct), Some(Present)]), CompletionResult::Partial);
/// assert_eq!(classify([None, Some(Absent)]), CompletionResult::AllWrong);
/// ```
pub fn classify<I>(statuses: I) -> CompletionResult
where
    I: IntoIterator<Item = Option<LetterStatus>>,
{
    let (correct, other) = statuses
        .into_iter()
        .fold((0usize, 0usize), |(correct, other), status| {
            if status == Some(LetterStatus::Correct) {
                (correct + 1, other)
            } else {
                (correct, other + 1)
            }
        });

    if other == 0 {
        CompletionResult::Perfect
    } else if correct == 0 {
        CompletionResult::AllWrong
    } else {
        CompletionResult::Partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    #[test]
    fn classify_all_correct_is_perfect() {
        assert_eq!(classify(vec![Some(Correct); 7]), CompletionResult::Perfect);
    }

    #[test]
    fn classify_none_correct_is_all_wrong() {
        assert_eq!(
            classify([Some(Present), Some(Absent), None]),
            CompletionResult::AllWrong
        );
    }

    #[test]
    fn classify_mixed_is_partial() {
        assert_eq!(
            classify([Some(Correct), None, Some(Absent)]),
            CompletionResult::Partial
        );
    }

    #[test]
    fn result_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&CompletionResult::AllWrong).unwrap(),
            "\"all-wrong\""
        );
        assert_eq!(CompletionResult::AllWrong.to_string(), "all-wrong");
    }
}
