//! Daily puzzles
//!
//! Everything needed to turn a calendar date into the day's puzzle: seeding,
//! templates, answer selection and conversion into a playable crossword.

mod board;
mod seed;
mod selector;
mod template;

pub use board::{Board, empty_board, fill_word_on_board};
pub use seed::{pick_index, seed_from_date, today_iso};
pub use selector::{DailyPuzzle, DailySelector, JawabanHarianEntry, daily_puzzle};
pub use template::{
    TemplateError, TtsSlot, TtsTemplate, embedded_templates, load_templates,
    load_templates_from_file,
};
