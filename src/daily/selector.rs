//! Daily puzzle selection
//!
//! The date string is hashed into a seed; the seed picks the template and,
//! offset by each slot's position, a word from the bank of the slot's length.
//! Slots whose bank is empty or whose pick fails dictionary validation stay
//! in the puzzle as unplayable entries.

use super::seed::{pick_index, seed_from_date};
use super::template::TtsTemplate;
use crate::wordlists::{Dictionary, WordBanks};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Answer chosen for one template slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JawabanHarianEntry {
    /// Slot number from the template
    pub no: u32,
    /// Uppercase answer, `None` when the slot cannot be played
    pub jawaban: Option<String>,
    pub kbbi_valid: bool,
    pub playable: bool,
}

/// The puzzle for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPuzzle {
    pub date: String,
    pub template_id: String,
    pub jawaban_harian: Vec<JawabanHarianEntry>,
}

impl DailyPuzzle {
    /// Entry for slot number `no`
    #[must_use]
    pub fn entry(&self, no: u32) -> Option<&JawabanHarianEntry> {
        self.jawaban_harian.iter().find(|e| e.no == no)
    }

    /// Number of slots that can be played
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.jawaban_harian.iter().filter(|e| e.playable).count()
    }
}

/// Selects daily puzzles from a template table, word banks and dictionary
pub struct DailySelector<'a> {
    templates: &'a [TtsTemplate],
    banks: &'a WordBanks,
    dictionary: &'a Dictionary,
}

impl<'a> DailySelector<'a> {
    #[must_use]
    pub const fn new(
        templates: &'a [TtsTemplate],
        banks: &'a WordBanks,
        dictionary: &'a Dictionary,
    ) -> Self {
        Self {
            templates,
            banks,
            dictionary,
        }
    }

    /// Puzzle for `date`, or `None` when there are no templates
    #[must_use]
    pub fn puzzle_for(&self, date: &str) -> Option<DailyPuzzle> {
        daily_puzzle(date, self.templates, self.banks, self.dictionary)
    }

    /// Template a puzzle was built from
    #[must_use]
    pub fn template_for(&self, puzzle: &DailyPuzzle) -> Option<&'a TtsTemplate> {
        self.templates.iter().find(|t| t.id == puzzle.template_id)
    }

    #[must_use]
    pub const fn templates(&self) -> &'a [TtsTemplate] {
        self.templates
    }
}

/// Deterministically select the puzzle for `date`
///
/// Returns `None` only when `templates` is empty. Missing banks and
/// rejected words degrade to unplayable slots.
///
/// # Examples
/// ```
/// use ttsla::daily::{daily_puzzle, load_templates};
/// use ttsla::wordlists::{Dictionary, WordBanks};
///
/// let templates = load_templates(r#"[{"id":"mini","name":"Mini","gridSize":[1,4],
///     "words":[{"no":1,"arah":"mendatar","start":[0,0],"length":4}]}]"#).unwrap();
/// let banks = WordBanks::new().with_bank(4, &["KOPI"]);
/// let dictionary = Dictionary::from_banks(&banks);
///
/// let puzzle = daily_puzzle("2025-11-03", &templates, &banks, &dictionary).unwrap();
/// assert_eq!(puzzle.jawaban_harian[0].jawaban.as_deref(), Some("KOPI"));
/// ```
#[must_use]
pub fn daily_puzzle(
    date: &str,
    templates: &[TtsTemplate],
    banks: &WordBanks,
    dictionary: &Dictionary,
) -> Option<DailyPuzzle> {
    let seed = seed_from_date(date);
    let Some(index) = pick_index(templates.len(), seed, 0) else {
        warn!("No templates available for {date}");
        return None;
    };
    let template = &templates[index];
    debug!("Date {date} (seed {seed}) uses template '{}'", template.id);

    let jawaban_harian = template
        .words
        .iter()
        .enumerate()
        .map(|(offset, slot)| {
            let bank = banks.bank(slot.length);
            let picked = pick_index(bank.len(), seed, offset).map(|i| bank[i].as_str());
            let valid = picked.is_some_and(|word| dictionary.is_word_valid(word, slot.length));

            if !valid {
                debug!(
                    "Slot {} ({} letters) has no valid answer for {date}",
                    slot.no, slot.length
                );
            }

            JawabanHarianEntry {
                no: slot.no,
                jawaban: picked
                    .filter(|_| valid)
                    .map(|word| word.trim().to_uppercase()),
                kbbi_valid: valid,
                playable: valid,
            }
        })
        .collect();

    Some(DailyPuzzle {
        date: date.to_string(),
        template_id: template.id.clone(),
        jawaban_harian,
    })
}
