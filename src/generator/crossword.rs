//! Random crossword generation
//!
//! Words are drawn from a shuffled list and dropped onto an empty grid at a
//! random direction and start. A placement is accepted only when every cell
//! it touches is empty or already holds the same letter; otherwise the word is
//! retried up to `placement_attempts` times and then skipped.

use crate::core::{Answer, CrosswordData, Direction, Position, Word, fits_span, mask_from_board};
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

/// Configuration for crossword generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    pub word_count: usize,
    /// Random placements tried per word before it is skipped (minimum 1)
    pub placement_attempts: usize,
}

impl GeneratorConfig {
    #[must_use]
    pub const fn new(rows: usize, cols: usize, word_count: usize) -> Self {
        Self {
            rows,
            cols,
            word_count,
            placement_attempts: 8,
        }
    }

    #[must_use]
    pub const fn with_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(6, 5, 4)
    }
}

/// Generate a crossword with the thread-local random generator
///
/// # Examples
/// ```
/// use ttsla::generator::generate;
///
/// let cw = generate(&["kopi", "buku", "meja", "pagi"], 6, 5, 4);
/// assert!(cw.answers.len() <= 4);
/// assert!(cw.validate().is_ok());
/// ```
#[must_use]
pub fn generate<S: AsRef<str>>(
    word_list: &[S],
    rows: usize,
    cols: usize,
    word_count: usize,
) -> CrosswordData {
    generate_with_rng(
        word_list,
        GeneratorConfig::new(rows, cols, word_count),
        &mut rand::rng(),
    )
}

/// Generate a crossword using the given random generator
///
/// Fewer placed answers than `word_count` is normal; a result without any
/// answers is degenerate and should be regenerated by the caller.
pub fn generate_with_rng<S: AsRef<str>, R: Rng>(
    word_list: &[S],
    config: GeneratorConfig,
    rng: &mut R,
) -> CrosswordData {
    let GeneratorConfig { rows, cols, .. } = config;
    let mut board: Vec<Vec<Option<char>>> = vec![vec![None; cols]; rows];
    let mut answers = Vec::new();

    let mut shuffled: Vec<&str> = word_list.iter().map(AsRef::as_ref).collect();
    shuffled.shuffle(rng);

    let selected: Vec<Word> = shuffled
        .into_iter()
        .take(config.word_count)
        .filter_map(|w| match Word::new(w) {
            Ok(word) => Some(word),
            Err(e) => {
                trace!("Skipping list entry '{w}': {e}");
                None
            }
        })
        .collect();

    for word in selected {
        let placement = (0..config.placement_attempts.max(1))
            .find_map(|_| random_placement(&board, &word, rng));

        if let Some((direction, start)) = placement {
            place_word(&mut board, &word, start, direction);
            answers.push(Answer::new(direction, start, word.text()));
        } else {
            debug!("Could not place {word} on a {rows}x{cols} grid, skipping");
        }
    }

    debug!(
        "Generated {rows}x{cols} crossword with {} of {} answers",
        answers.len(),
        config.word_count
    );

    CrosswordData {
        id: rng.random_range(0..1000),
        rows,
        cols,
        grid: mask_from_board(&board),
        answers,
    }
}

/// Try one random direction and start; `None` if it does not fit or clashes
fn random_placement<R: Rng>(
    board: &[Vec<Option<char>>],
    word: &Word,
    rng: &mut R,
) -> Option<(Direction, Position)> {
    let rows = board.len();
    let cols = board.first().map_or(0, Vec::len);
    let len = word.len();

    let direction = if rng.random_bool(0.5) {
        Direction::Across
    } else {
        Direction::Down
    };

    let (max_row, max_col) = match direction {
        Direction::Across => (rows.checked_sub(1)?, cols.checked_sub(len)?),
        Direction::Down => (rows.checked_sub(len)?, cols.checked_sub(1)?),
    };
    let start = Position::new(rng.random_range(0..=max_row), rng.random_range(0..=max_col));

    can_place(board, word, start, direction).then_some((direction, start))
}

/// Check that a word fits and agrees with every letter already on the board
#[must_use]
pub fn can_place(
    board: &[Vec<Option<char>>],
    word: &Word,
    start: Position,
    direction: Direction,
) -> bool {
    let rows = board.len();
    let cols = board.first().map_or(0, Vec::len);

    if !fits_span(direction, start, word.len(), rows, cols) {
        return false;
    }

    word.letters().enumerate().all(|(i, letter)| {
        let pos = start.advance(direction, i);
        board[pos.row][pos.col].is_none_or(|existing| existing == letter)
    })
}

fn place_word(board: &mut [Vec<Option<char>>], word: &Word, start: Position, direction: Direction) {
    for (i, letter) in word.letters().enumerate() {
        let pos = start.advance(direction, i);
        board[pos.row][pos.col] = Some(letter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_crosswords_hold_invariants() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cw = generate_with_rng(WORDS, GeneratorConfig::default(), &mut rng);

            assert_eq!(cw.rows, 6);
            assert_eq!(cw.cols, 5);
            assert!(cw.answers.len() <= 4);
            assert!(cw.validate().is_ok(), "seed {seed}: {:?}", cw.validate());

            // Every playable cell belongs to some answer
            for pos in cw.playable_cells() {
                assert!(cw.answer_at(pos).is_some(), "seed {seed}: stray cell {pos}");
            }
        }
    }

    #[test]
    fn answers_are_uppercase() {
        let mut rng = StdRng::seed_from_u64(7);
        let cw = generate_with_rng(&["kopi", "meja"], GeneratorConfig::new(6, 6, 2), &mut rng);
        for answer in &cw.answers {
            assert_eq!(answer.word, answer.word.to_uppercase());
        }
    }

    #[test]
    fn oversized_words_are_skipped() {
        let mut rng = StdRng::seed_from_u64(1);
        let cw = generate_with_rng(&["bintang"], GeneratorConfig::new(3, 3, 1), &mut rng);
        assert!(cw.is_degenerate());
        assert_eq!(cw.grid, vec![vec![0; 3]; 3]);
    }

    #[test]
    fn empty_word_list_is_degenerate() {
        let words: &[&str] = &[];
        let cw = generate(words, 6, 5, 4);
        assert!(cw.is_degenerate());
        assert_eq!(cw.grid.len(), 6);
    }

    #[test]
    fn zero_sized_grid_places_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let cw = generate_with_rng(&["kopi"], GeneratorConfig::new(0, 0, 1), &mut rng);
        assert!(cw.is_degenerate());
        assert!(cw.grid.is_empty());
    }

    #[test]
    fn single_word_always_fits_with_retries() {
        // A lone 4-letter word on an empty 4x4 grid cannot clash
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cw = generate_with_rng(&["kopi"], GeneratorConfig::new(4, 4, 1), &mut rng);
            assert_eq!(cw.answers.len(), 1);
            assert_eq!(cw.playable_cells().count(), 4);
        }
    }

    #[test]
    fn same_seed_same_crossword() {
        let a = generate_with_rng(WORDS, GeneratorConfig::default(), &mut StdRng::seed_from_u64(42));
        let b = generate_with_rng(WORDS, GeneratorConfig::default(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn can_place_checks_crossings() {
        let mut board = vec![vec![None; 4]; 4];
        let kopi = Word::new("kopi").unwrap();
        place_word(&mut board, &kopi, Position::new(0, 0), Direction::Across);

        let otak = Word::new("otak").unwrap();
        let atap = Word::new("atap").unwrap();
        assert!(can_place(&board, &otak, Position::new(0, 1), Direction::Down));
        assert!(!can_place(&board, &atap, Position::new(0, 1), Direction::Down));
        assert!(!can_place(&board, &otak, Position::new(1, 1), Direction::Down));
    }
}
