//! Generate command
//!
//! Random crosswords from a word list, optionally reproducible from a seed.

use crate::core::CrosswordData;
use crate::generator::{GeneratorConfig, generate_with_rng};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generate one crossword, redrawing a bounded number of times while empty
///
/// The same `seed`, word list and configuration always give the same grid.
#[must_use]
pub fn generate_crossword<S: AsRef<str>>(
    words: &[S],
    config: GeneratorConfig,
    seed: Option<u64>,
    redraws: usize,
) -> CrosswordData {
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    let mut crossword = generate_with_rng(words, config, &mut rng);
    for _ in 0..redraws {
        if !crossword.is_degenerate() {
            break;
        }
        crossword = generate_with_rng(words, config, &mut rng);
    }
    crossword
}
