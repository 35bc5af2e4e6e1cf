//! Calendar scan
//!
//! Selects the daily puzzle for a range of dates and summarises how the
//! templates are spread, how many slots could not be played, and which
//! dates ended up with identical puzzles.

use crate::daily::{DailyPuzzle, DailySelector};
use chrono::{Days, NaiveDate};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Summary over a date range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarReport {
    pub days: usize,
    /// Dates for which no puzzle could be selected
    pub missing: usize,
    /// Days per template id
    pub template_counts: BTreeMap<String, usize>,
    pub total_slots: usize,
    pub unplayable_slots: usize,
    /// Days whose crossword would have nothing to play
    pub empty_days: usize,
    /// Groups of dates sharing the exact same template and answers
    pub identical: Vec<Vec<String>>,
}

/// `days` consecutive dates starting at `from`
#[must_use]
pub fn date_range(from: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..u64::from(days))
        .map_while(|offset| from.checked_add_days(Days::new(offset)))
        .collect()
}

/// Scan `days` dates starting at `from`
#[must_use]
pub fn scan_calendar(selector: &DailySelector<'_>, from: NaiveDate, days: u32) -> CalendarReport {
    let dates = date_range(from, days);
    let puzzles: Vec<(String, Option<DailyPuzzle>)> = dates
        .par_iter()
        .map(|date| {
            let iso = date.format("%Y-%m-%d").to_string();
            let puzzle = selector.puzzle_for(&iso);
            (iso, puzzle)
        })
        .collect();

    let mut report = CalendarReport {
        days: puzzles.len(),
        ..CalendarReport::default()
    };
    let mut by_content: FxHashMap<(String, Vec<Option<String>>), Vec<String>> = FxHashMap::default();

    for (date, puzzle) in puzzles {
        let Some(puzzle) = puzzle else {
            report.missing += 1;
            continue;
        };

        *report
            .template_counts
            .entry(puzzle.template_id.clone())
            .or_default() += 1;
        report.total_slots += puzzle.jawaban_harian.len();
        report.unplayable_slots += puzzle.jawaban_harian.len() - puzzle.playable_count();

        let empty = selector
            .template_for(&puzzle)
            .is_none_or(|template| puzzle.to_crossword(template).is_degenerate());
        if empty {
            debug!("{date}: nothing playable");
            report.empty_days += 1;
        }

        let answers = puzzle
            .jawaban_harian
            .iter()
            .map(|entry| entry.jawaban.clone())
            .collect();
        by_content
            .entry((puzzle.template_id, answers))
            .or_default()
            .push(date);
    }

    report.identical = by_content
        .into_values()
        .filter(|dates| dates.len() > 1)
        .collect();
    report.identical.sort();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::{embedded_templates, load_templates};
    use crate::wordlists::{Dictionary, WordBanks};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn range_is_consecutive() {
        let dates = date_range(date("2024-12-30"), 4);
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[3], date("2025-01-02"));
        assert!(date_range(date("2025-01-01"), 0).is_empty());
    }

    #[test]
    fn scan_counts_every_day() {
        let templates = embedded_templates().unwrap();
        let banks = WordBanks::embedded();
        let dictionary = Dictionary::from_banks(&banks);
        let selector = DailySelector::new(&templates, &banks, &dictionary);

        let report = scan_calendar(&selector, date("2025-11-01"), 30);
        assert_eq!(report.days, 30);
        assert_eq!(report.missing, 0);
        assert_eq!(report.template_counts.values().sum::<usize>(), 30);
        assert_eq!(report.unplayable_slots, 0);
    }

    #[test]
    fn single_word_bank_repeats() {
        let templates = load_templates(
            r#"[{"id":"mini","name":"Mini","gridSize":[1,4],
            "words":[{"no":1,"arah":"mendatar","start":[0,0],"length":4}]}]"#,
        )
        .unwrap();
        let banks = WordBanks::new().with_bank(4, &["kopi"]);
        let dictionary = Dictionary::from_banks(&banks);
        let selector = DailySelector::new(&templates, &banks, &dictionary);

        let report = scan_calendar(&selector, date("2025-11-01"), 3);
        assert_eq!(report.identical.len(), 1);
        assert_eq!(report.identical[0].len(), 3);
    }

    #[test]
    fn missing_banks_are_unplayable() {
        let templates = load_templates(
            r#"[{"id":"mini","name":"Mini","gridSize":[1,4],
            "words":[{"no":1,"arah":"mendatar","start":[0,0],"length":4}]}]"#,
        )
        .unwrap();
        let banks = WordBanks::new();
        let dictionary = Dictionary::new();
        let selector = DailySelector::new(&templates, &banks, &dictionary);

        let report = scan_calendar(&selector, date("2025-11-01"), 2);
        assert_eq!(report.unplayable_slots, 2);
        assert_eq!(report.empty_days, 2);
    }
}
