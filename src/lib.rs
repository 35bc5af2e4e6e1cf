//! Teka-teki silang
//!
//! Core of a daily Indonesian crossword game where every word is guessed
//! Wordle style: guesses are scored letter by letter, keyboard colours only
//! ever improve, and each calendar date maps to the same puzzle everywhere.
//!
//! # Quick Start
//!
//! ```rust
//! use ttsla::core::{LetterStatus, evaluate};
//!
//! let statuses = evaluate("KOTA", "KOPI").unwrap();
//! assert_eq!(statuses[0], LetterStatus::Correct);
//! assert_eq!(statuses[2], LetterStatus::Absent);
//! ```

// Core domain types
pub mod core;

// Random crossword generation
pub mod generator;

// Date-seeded daily puzzles
pub mod daily;

// Word lists
pub mod wordlists;

// Game sessions, persistence and loading
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
