//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_calendar_report, print_completion, print_crossword, print_daily,
    print_feedback, print_guess_outcome, print_selftest, print_session, print_word_panel,
};
