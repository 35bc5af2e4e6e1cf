//! Word lists for crossword generation and daily puzzles
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! plus the per-length banks and dictionary built from them.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, WordBanks};
pub use embedded::{KBBI_4, KBBI_4_COUNT, KBBI_5, KBBI_5_COUNT, KBBI_6, KBBI_6_COUNT, WORDS, WORDS_COUNT};
