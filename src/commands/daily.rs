//! Daily puzzle command
//!
//! Resolves the puzzle for a date together with its template and the
//! playable crossword built from it.

use crate::core::CrosswordData;
use crate::daily::{DailyPuzzle, DailySelector, TtsTemplate, seed_from_date};
use serde::Serialize;

/// Everything shown for one date
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub seed: u32,
    pub puzzle: DailyPuzzle,
    pub template: TtsTemplate,
    pub crossword: CrosswordData,
}

impl DailyReport {
    /// Slots left out of the crossword, unplayable or clashing
    #[must_use]
    pub fn skipped_slots(&self) -> usize {
        self.template.words.len() - self.crossword.answers.len()
    }
}

/// Build the report for `date`
///
/// # Errors
/// Returns an error if there are no templates, or the selected template
/// cannot be found again.
pub fn daily_report(selector: &DailySelector<'_>, date: &str) -> Result<DailyReport, String> {
    let puzzle = selector
        .puzzle_for(date)
        .ok_or_else(|| format!("No templates available for {date}"))?;
    let template = selector
        .template_for(&puzzle)
        .ok_or_else(|| format!("Template '{}' not found", puzzle.template_id))?
        .clone();
    let crossword = puzzle.to_crossword(&template);

    Ok(DailyReport {
        seed: seed_from_date(date),
        puzzle,
        template,
        crossword,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::embedded_templates;
    use crate::wordlists::{Dictionary, WordBanks};

    #[test]
    fn report_for_embedded_data() {
        let templates = embedded_templates().unwrap();
        let banks = WordBanks::embedded();
        let dictionary = Dictionary::from_banks(&banks);
        let selector = DailySelector::new(&templates, &banks, &dictionary);

        let report = daily_report(&selector, "2025-11-03").unwrap();
        assert_eq!(report.seed, 275_085_572);
        assert_eq!(report.puzzle.template_id, templates[2].id);
        assert_eq!(report.template.id, report.puzzle.template_id);
        assert!(report.crossword.validate().is_ok());
        assert!(report.skipped_slots() <= report.template.words.len());
    }

    #[test]
    fn no_templates_is_an_error() {
        let banks = WordBanks::new();
        let dictionary = Dictionary::new();
        let selector = DailySelector::new(&[], &banks, &dictionary);
        assert!(daily_report(&selector, "2025-11-03").is_err());
    }
}
