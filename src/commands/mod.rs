//! Command implementations

pub mod benchmark;
pub mod calendar;
pub mod daily;
pub mod evaluate;
pub mod generate;
pub mod play;
pub mod selftest;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use calendar::{CalendarReport, date_range, scan_calendar};
pub use daily::{DailyReport, daily_report};
pub use evaluate::{WordCheck, check_word, evaluate_words};
pub use generate::generate_crossword;
pub use play::{PlayCommand, parse_command, run_play};
pub use selftest::{Check, SelfTestReport, run_selftest};
