//! Random crossword generation
//!
//! Builds a playable grid from a raw word list. Used directly for random
//! puzzles and as the fallback when no daily puzzle can be played.

mod crossword;

pub use crossword::{GeneratorConfig, can_place, generate, generate_with_rng};

use crate::core::CrosswordData;
use crate::wordlists::WORDS;

/// Random crossword from the embedded word list with default settings
///
/// Regenerates a bounded number of times if a draw places no words at all.
#[must_use]
pub fn random_crossword() -> CrosswordData {
    let mut rng = rand::rng();
    let config = GeneratorConfig::default();

    let mut crossword = generate_with_rng(WORDS, config, &mut rng);
    for _ in 0..MAX_REGENERATIONS {
        if !crossword.is_degenerate() {
            break;
        }
        crossword = generate_with_rng(WORDS, config, &mut rng);
    }
    crossword
}

/// Redraws allowed for a degenerate random crossword
const MAX_REGENERATIONS: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_crossword_has_answers() {
        let cw = random_crossword();
        assert!(!cw.is_degenerate());
        assert!(cw.validate().is_ok());
    }
}
