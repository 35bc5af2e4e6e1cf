//! Game session state machine
//!
//! Tracks one player's progress through one crossword: attempts left per
//! word, the letter and status shown in every cell, which cells are locked,
//! and the completion verdict once every word is solved or exhausted.
//!
//! Word lifecycle:
//! `Unattempted -> InProgress -> {Solved, Exhausted}`

use super::{CompletionRecord, CompletionResult, CompletionStore, classify};
use crate::core::{
    CrosswordData, CrosswordError, EvaluateError, Feedback, KeyStatusMap, LetterStatus, Position,
    Word, WordError, evaluate,
};
use log::{debug, info, warn};
use std::fmt;

/// Guesses allowed per word
pub const MAX_ATTEMPTS: u8 = 6;

/// Progress state of a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordState {
    Unattempted,
    InProgress,
    Solved,
    Exhausted,
}

impl WordState {
    /// True for the terminal states
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Per-word progress
#[derive(Debug, Clone)]
pub struct WordProgress {
    pub state: WordState,
    pub remaining: u8,
    pub guesses: Vec<(String, Feedback)>,
    /// Keyboard colouring for this word's guess panel
    pub keyboard: KeyStatusMap,
}

impl WordProgress {
    fn new(max_attempts: u8) -> Self {
        Self {
            state: WordState::Unattempted,
            remaining: max_attempts,
            guesses: Vec::new(),
            keyboard: KeyStatusMap::new(),
        }
    }
}

/// What a cell currently shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellState {
    pub letter: Option<char>,
    pub status: Option<LetterStatus>,
    pub locked: bool,
}

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub state: WordState,
    pub remaining: u8,
    /// Set when this guess finished the puzzle
    pub completion: Option<CompletionRecord>,
}

/// Errors from session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The crossword has no answers; the caller should load another
    EmptyPuzzle,
    InvalidPuzzle(CrosswordError),
    NoSuchWord(usize),
    InvalidGuess(WordError),
    LengthMismatch { expected: usize, got: usize },
    WordFinished(usize),
    /// The puzzle is complete and read-only for the rest of the day
    PuzzleLocked,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPuzzle => write!(f, "Puzzle has no words to play"),
            Self::InvalidPuzzle(e) => write!(f, "Puzzle is inconsistent: {e}"),
            Self::NoSuchWord(i) => write!(f, "Puzzle has no word #{i}"),
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::LengthMismatch { expected, got } => {
                write!(f, "Guess must have {expected} letters, got {got}")
            }
            Self::WordFinished(i) => write!(f, "Word #{i} is already finished"),
            Self::PuzzleLocked => write!(f, "Today's puzzle is already complete"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<EvaluateError> for SessionError {
    fn from(e: EvaluateError) -> Self {
        match e {
            EvaluateError::LengthMismatch { guess, answer } => Self::LengthMismatch {
                expected: answer,
                got: guess,
            },
        }
    }
}

/// One player's session on one crossword for one date
pub struct Session<S: CompletionStore> {
    date: String,
    puzzle: CrosswordData,
    words: Vec<WordProgress>,
    cells: Vec<Vec<CellState>>,
    completion: Option<CompletionRecord>,
    store: S,
}

impl<S: CompletionStore> Session<S> {
    /// Start or resume the session for `date`
    ///
    /// When the store already holds a record for `date`, the stored puzzle is
    /// restored fully locked. Otherwise a fresh session starts on `puzzle`.
    /// A store that cannot be read is treated as holding no record.
    ///
    /// # Errors
    /// Returns `SessionError::EmptyPuzzle` for a crossword without answers and
    /// `SessionError::InvalidPuzzle` if its invariants do not hold.
    pub fn start(puzzle: CrosswordData, date: &str, store: S) -> Result<Self, SessionError> {
        let existing = store.get(date).unwrap_or_else(|e| {
            warn!("Could not read progress for {date}: {e}");
            None
        });

        if let Some(record) = existing {
            info!("Puzzle for {date} already completed ({})", record.result);
            return Ok(Self::restore(record, store));
        }

        if puzzle.is_degenerate() {
            return Err(SessionError::EmptyPuzzle);
        }
        puzzle.validate().map_err(SessionError::InvalidPuzzle)?;

        let words = puzzle
            .answers
            .iter()
            .map(|_| WordProgress::new(MAX_ATTEMPTS))
            .collect();
        let cells = vec![vec![CellState::default(); puzzle.cols]; puzzle.rows];

        Ok(Self {
            date: date.to_string(),
            puzzle,
            words,
            cells,
            completion: None,
            store,
        })
    }

    fn restore(record: CompletionRecord, store: S) -> Self {
        let puzzle = record.puzzle.clone();
        let locked = CellState {
            locked: true,
            ..CellState::default()
        };
        let state = if record.result == CompletionResult::Perfect {
            WordState::Solved
        } else {
            WordState::Exhausted
        };
        let words = puzzle
            .answers
            .iter()
            .map(|_| WordProgress {
                state,
                ..WordProgress::new(0)
            })
            .collect();

        Self {
            date: record.date.clone(),
            cells: vec![vec![locked; puzzle.cols]; puzzle.rows],
            words,
            puzzle,
            completion: Some(record),
            store,
        }
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub const fn puzzle(&self) -> &CrosswordData {
        &self.puzzle
    }

    #[must_use]
    pub fn word(&self, index: usize) -> Option<&WordProgress> {
        self.words.get(index)
    }

    #[must_use]
    pub fn words(&self) -> &[WordProgress] {
        &self.words
    }

    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&CellState> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col))
    }

    #[must_use]
    pub fn cells(&self) -> &[Vec<CellState>] {
        &self.cells
    }

    #[must_use]
    pub const fn completion(&self) -> Option<&CompletionRecord> {
        self.completion.as_ref()
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Word opened by clicking `pos`
    ///
    /// `None` for blocked or locked cells and for finished words.
    #[must_use]
    pub fn select_cell(&self, pos: Position) -> Option<usize> {
        if self.is_complete() || self.cell(pos).is_none_or(|c| c.locked) {
            return None;
        }
        let index = self.puzzle.answer_at(pos)?;
        (!self.words[index].state.is_finished()).then_some(index)
    }

    /// Answer of an exhausted word
    #[must_use]
    pub fn reveal(&self, index: usize) -> Option<&str> {
        let progress = self.words.get(index)?;
        (progress.state == WordState::Exhausted).then(|| self.puzzle.answers[index].word.as_str())
    }

    /// Submit a guess for word `index`
    ///
    /// # Errors
    /// Returns `SessionError` if the puzzle is locked, the word does not exist
    /// or is finished, or the guess is not a word of the right length.
    pub fn submit_guess(&mut self, index: usize, guess: &str) -> Result<GuessOutcome, SessionError> {
        if self.is_complete() {
            return Err(SessionError::PuzzleLocked);
        }
        let progress = self.words.get(index).ok_or(SessionError::NoSuchWord(index))?;
        if progress.state.is_finished() {
            return Err(SessionError::WordFinished(index));
        }

        let guess = Word::new(guess).map_err(SessionError::InvalidGuess)?;
        let answer = &self.puzzle.answers[index];
        let statuses = evaluate(guess.text(), &answer.word)?;
        let feedback = Feedback::from_statuses(statuses);
        let solved = feedback.is_perfect();

        for ((pos, letter), &status) in answer.cells().zip(guess.letters()).zip(feedback.statuses()) {
            let cell = &mut self.cells[pos.row][pos.col];
            if !cell.locked {
                cell.letter = Some(letter);
                cell.status = Some(status);
            }
        }
        if solved {
            for pos in answer.cells() {
                self.cells[pos.row][pos.col].locked = true;
            }
        }

        let progress = &mut self.words[index];
        let updates = KeyStatusMap::updates_from(guess.text(), feedback.statuses());
        progress.keyboard = progress.keyboard.merge(&updates);
        progress.remaining = progress.remaining.saturating_sub(1);
        progress.guesses.push((guess.text().to_string(), feedback.clone()));
        progress.state = if solved {
            WordState::Solved
        } else if progress.remaining == 0 {
            WordState::Exhausted
        } else {
            WordState::InProgress
        };

        let state = progress.state;
        let remaining = progress.remaining;
        debug!("Word #{index}: {guess} -> {feedback} ({state:?}, {remaining} left)");

        let completion = self.check_completion();

        Ok(GuessOutcome {
            feedback,
            state,
            remaining,
            completion,
        })
    }

    /// Finish the puzzle once every word is terminal
    fn check_completion(&mut self) -> Option<CompletionRecord> {
        if !self.words.iter().all(|w| w.state.is_finished()) {
            return None;
        }

        let result = classify(
            self.puzzle
                .playable_cells()
                .map(|pos| self.cells[pos.row][pos.col].status),
        );
        let record = CompletionRecord {
            date: self.date.clone(),
            result,
            puzzle: self.puzzle.clone(),
        };
        info!("Puzzle for {} finished: {result}", self.date);

        for cell in self.cells.iter_mut().flatten() {
            cell.locked = true;
        }
        if let Err(e) = self.store.set(record.clone()) {
            warn!("Could not save progress for {}: {e}", self.date);
        }

        self.completion = Some(record.clone());
        Some(record)
    }
}
