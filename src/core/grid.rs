//! Crossword grid model
//!
//! A crossword is a `rows × cols` mask of playable cells plus the answers
//! placed on it. Crossing answers must agree on the shared letter, which is
//! checked whenever a crossword is built from answers.

use super::{Word, WordError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a placed word
///
/// Templates use the Indonesian names `mendatar` (across) and `menurun` (down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "mendatar")]
    Across,
    #[serde(alias = "menurun")]
    Down,
}

impl Direction {
    /// Row and column step for one letter
    #[must_use]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => f.write_str("across"),
            Self::Down => f.write_str("down"),
        }
    }
}

/// Zero-indexed cell position; rows grow downward, columns rightward
///
/// Serialized as a `[row, col]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position `offset` letters along `direction`
    ///
    /// Saturates at `usize::MAX`, which lies outside every grid.
    #[must_use]
    pub const fn advance(self, direction: Direction, offset: usize) -> Self {
        let (dr, dc) = direction.step();
        Self {
            row: self.row.saturating_add(dr * offset),
            col: self.col.saturating_add(dc * offset),
        }
    }
}

impl From<[usize; 2]> for Position {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Position> for [usize; 2] {
    fn from(pos: Position) -> Self {
        [pos.row, pos.col]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One placed word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub direction: Direction,
    pub start: Position,
    pub word: String,
    /// Slot number when the answer comes from a template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no: Option<u32>,
}

impl Answer {
    #[must_use]
    pub fn new(direction: Direction, start: Position, word: impl Into<String>) -> Self {
        Self {
            direction,
            start,
            word: word.into(),
            no: None,
        }
    }

    #[must_use]
    pub fn with_no(mut self, no: u32) -> Self {
        self.no = Some(no);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cells covered by the answer, in letter order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(|i| self.start.advance(self.direction, i))
    }

    /// Cells paired with the letter each one holds
    pub fn letters(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.cells().zip(self.word.chars())
    }

    /// Index of `pos` within the answer, if covered
    #[must_use]
    pub fn offset_of(&self, pos: Position) -> Option<usize> {
        self.cells().position(|cell| cell == pos)
    }

    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        self.offset_of(pos).is_some()
    }

    /// Check whether the whole span fits a `rows × cols` grid
    #[must_use]
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        fits_span(self.direction, self.start, self.len(), rows, cols)
    }
}

/// Check whether a `len`-letter span starting at `start` fits the grid
#[must_use]
pub const fn fits_span(
    direction: Direction,
    start: Position,
    len: usize,
    rows: usize,
    cols: usize,
) -> bool {
    let span = len.saturating_sub(1);
    let (dr, dc) = direction.step();
    let (Some(end_row), Some(end_col)) = (
        start.row.checked_add(dr * span),
        start.col.checked_add(dc * span),
    ) else {
        return false;
    };
    end_row < rows && end_col < cols
}

/// Errors raised when a crossword violates its invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrosswordError {
    InvalidWord { word: String, source: WordError },
    OutOfBounds { word: String, start: Position },
    Conflict { pos: Position, existing: char, incoming: char },
    GridShape { rows: usize, cols: usize },
    UnmarkedCell { word: String, pos: Position },
}

impl fmt::Display for CrosswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord { word, source } => write!(f, "Invalid answer '{word}': {source}"),
            Self::OutOfBounds { word, start } => {
                write!(f, "Answer '{word}' at {start} does not fit the grid")
            }
            Self::Conflict {
                pos,
                existing,
                incoming,
            } => write!(
                f,
                "Cell {pos} holds '{existing}' but a crossing answer needs '{incoming}'"
            ),
            Self::GridShape { rows, cols } => {
                write!(f, "Grid mask does not match the declared {rows}x{cols} size")
            }
            Self::UnmarkedCell { word, pos } => {
                write!(f, "Answer '{word}' covers {pos}, which is not a playable cell")
            }
        }
    }
}

impl std::error::Error for CrosswordError {}

/// A crossword puzzle: playable mask plus placed answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosswordData {
    pub id: u32,
    pub rows: usize,
    pub cols: usize,
    /// 1 = playable cell, 0 = blocked
    pub grid: Vec<Vec<u8>>,
    pub answers: Vec<Answer>,
}

impl CrosswordData {
    /// Build a crossword from answers, deriving the mask
    ///
    /// Words are normalised to uppercase.
    ///
    /// # Errors
    /// Returns `CrosswordError` if a word is invalid, leaves the grid, or
    /// disagrees with a crossing word.
    pub fn from_answers(
        id: u32,
        rows: usize,
        cols: usize,
        answers: Vec<Answer>,
    ) -> Result<Self, CrosswordError> {
        let mut board = vec![vec![None; cols]; rows];
        let mut placed = Vec::with_capacity(answers.len());

        for mut answer in answers {
            answer.word = Word::new(&answer.word)
                .map_err(|source| CrosswordError::InvalidWord {
                    word: answer.word.clone(),
                    source,
                })?
                .text()
                .to_string();
            write_answer(&mut board, &answer, rows, cols)?;
            placed.push(answer);
        }

        Ok(Self {
            id,
            rows,
            cols,
            grid: mask_from_board(&board),
            answers: placed,
        })
    }

    /// Check every invariant of an existing crossword
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), CrosswordError> {
        if self.grid.len() != self.rows || self.grid.iter().any(|r| r.len() != self.cols) {
            return Err(CrosswordError::GridShape {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let mut board = vec![vec![None; self.cols]; self.rows];
        for answer in &self.answers {
            write_answer(&mut board, answer, self.rows, self.cols)?;
            if let Some(pos) = answer.cells().find(|p| self.grid[p.row][p.col] != 1) {
                return Err(CrosswordError::UnmarkedCell {
                    word: answer.word.clone(),
                    pos,
                });
            }
        }
        Ok(())
    }

    /// True when the puzzle has nothing to play
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.answers.is_empty()
    }

    /// Letters implied by the answers, `None` for blocked cells
    #[must_use]
    pub fn letter_board(&self) -> Vec<Vec<Option<char>>> {
        let mut board = vec![vec![None; self.cols]; self.rows];
        for answer in &self.answers {
            for (pos, letter) in answer.letters() {
                if pos.row < self.rows && pos.col < self.cols {
                    board[pos.row][pos.col] = Some(letter);
                }
            }
        }
        board
    }

    #[must_use]
    pub fn is_playable(&self, pos: Position) -> bool {
        self.grid
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .is_some_and(|&cell| cell == 1)
    }

    /// Positions of all playable cells, row by row
    pub fn playable_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell == 1)
                .map(move |(c, _)| Position::new(r, c))
        })
    }

    /// Index of the first answer covering `pos`
    #[must_use]
    pub fn answer_at(&self, pos: Position) -> Option<usize> {
        self.answers.iter().position(|a| a.covers(pos))
    }
}

/// Write an answer's letters onto a board, refusing clashes
fn write_answer(
    board: &mut [Vec<Option<char>>],
    answer: &Answer,
    rows: usize,
    cols: usize,
) -> Result<(), CrosswordError> {
    if !answer.fits(rows, cols) {
        return Err(CrosswordError::OutOfBounds {
            word: answer.word.clone(),
            start: answer.start,
        });
    }

    for (pos, letter) in answer.letters() {
        match board[pos.row][pos.col] {
            Some(existing) if existing != letter => {
                return Err(CrosswordError::Conflict {
                    pos,
                    existing,
                    incoming: letter,
                });
            }
            _ => board[pos.row][pos.col] = Some(letter),
        }
    }
    Ok(())
}

/// Convert a letter board into the 0/1 playable mask
#[must_use]
pub fn mask_from_board(board: &[Vec<Option<char>>]) -> Vec<Vec<u8>> {
    board
        .iter()
        .map(|row| row.iter().map(|cell| u8::from(cell.is_some())).collect())
        .collect()
}
