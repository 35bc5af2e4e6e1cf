//! Core domain types for the crossword game
//!
//! This module contains the pure building blocks shared by every puzzle source:
//! words, letter feedback, keyboard merging and the crossword grid model.

mod feedback;
mod grid;
mod keyboard;
mod status;
mod word;

pub use feedback::{EvaluateError, Feedback, evaluate};
pub use grid::{Answer, CrosswordData, CrosswordError, Direction, Position, fits_span, mask_from_board};
pub use keyboard::{KEYBOARD_ROWS, KeyStatusMap, KeyUpdates};
pub use status::LetterStatus;
pub use word::{Word, WordError};
