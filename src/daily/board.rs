//! Turning a daily puzzle into something playable
//!
//! The selector picks slot answers independently, so two crossing slots may
//! disagree on a letter. Conversion to a crossword keeps the earlier slot and
//! skips any later one that would clash, the same rule the random generator
//! follows.

use super::selector::DailyPuzzle;
use super::template::TtsTemplate;
use crate::core::{Answer, CrosswordData, Word, mask_from_board};
use crate::generator::can_place;
use log::debug;

/// Letter board: `None` for an empty cell
pub type Board = Vec<Vec<Option<char>>>;

/// Empty board sized for a template
#[must_use]
pub fn empty_board(template: &TtsTemplate) -> Board {
    vec![vec![None; template.cols()]; template.rows()]
}

/// Write `answer` into slot `word_no`, returning a new board
///
/// An unknown slot number returns the board unchanged. Letters past the
/// board edge are dropped.
#[must_use]
pub fn fill_word_on_board(
    board: &[Vec<Option<char>>],
    template: &TtsTemplate,
    word_no: u32,
    answer: &str,
) -> Board {
    let mut next = board.to_vec();
    let Some(slot) = template.slot(word_no) else {
        return next;
    };

    for (i, letter) in answer.chars().enumerate() {
        let pos = slot.start.advance(slot.arah, i);
        if let Some(cell) = next.get_mut(pos.row).and_then(|row| row.get_mut(pos.col)) {
            *cell = Some(letter);
        }
    }
    next
}

impl DailyPuzzle {
    /// Build a crossword from the playable slots
    ///
    /// The crossword id is derived from the date seed.
    #[must_use]
    pub fn to_crossword(&self, template: &TtsTemplate) -> CrosswordData {
        let mut board = empty_board(template);
        let mut answers = Vec::new();

        for entry in &self.jawaban_harian {
            let (Some(text), true) = (entry.jawaban.as_deref(), entry.playable) else {
                continue;
            };
            let Some(slot) = template.slot(entry.no) else {
                debug!("Template '{}' has no slot {}", template.id, entry.no);
                continue;
            };
            let Ok(word) = Word::new(text) else {
                continue;
            };
            if word.len() != slot.length || !can_place(&board, &word, slot.start, slot.arah) {
                debug!("Slot {} ({word}) clashes with an earlier answer, skipping", entry.no);
                continue;
            }

            board = fill_word_on_board(&board, template, entry.no, word.text());
            answers.push(Answer::new(slot.arah, slot.start, word.text()).with_no(entry.no));
        }

        CrosswordData {
            id: super::seed_from_date(&self.date),
            rows: template.rows(),
            cols: template.cols(),
            grid: mask_from_board(&board),
            answers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Position};
    use crate::daily::{DailySelector, JawabanHarianEntry, embedded_templates, load_templates};
    use crate::wordlists::{Dictionary, WordBanks};

    fn cross_template() -> TtsTemplate {
        load_templates(
            r#"[{"id":"x","name":"X","gridSize":[4,4],"words":[
                {"no":1,"arah":"mendatar","start":[0,0],"length":4},
                {"no":2,"arah":"menurun","start":[0,1],"length":4}]}]"#,
        )
        .unwrap()
        .remove(0)
    }

    fn entry(no: u32, jawaban: Option<&str>) -> JawabanHarianEntry {
        JawabanHarianEntry {
            no,
            jawaban: jawaban.map(str::to_string),
            kbbi_valid: jawaban.is_some(),
            playable: jawaban.is_some(),
        }
    }

    fn puzzle(entries: Vec<JawabanHarianEntry>) -> DailyPuzzle {
        DailyPuzzle {
            date: "2025-11-03".to_string(),
            template_id: "x".to_string(),
            jawaban_harian: entries,
        }
    }

    #[test]
    fn fill_word_writes_along_slot() {
        let template = cross_template();
        let board = fill_word_on_board(&empty_board(&template), &template, 2, "OTAK");

        assert_eq!(board[0][1], Some('O'));
        assert_eq!(board[3][1], Some('K'));
        assert_eq!(board[0][0], None);
    }

    #[test]
    fn fill_word_unknown_slot_is_unchanged() {
        let template = cross_template();
        let board = empty_board(&template);
        assert_eq!(fill_word_on_board(&board, &template, 9, "KOPI"), board);
    }

    #[test]
    fn to_crossword_keeps_agreeing_slots() {
        let template = cross_template();
        let cw =
            puzzle(vec![entry(1, Some("KOPI")), entry(2, Some("OTAK"))]).to_crossword(&template);

        assert_eq!(cw.answers.len(), 2);
        assert_eq!(cw.answers[1].no, Some(2));
        assert_eq!(cw.answers[1].direction, Direction::Down);
        assert_eq!(cw.answers[1].start, Position::new(0, 1));
        assert!(cw.validate().is_ok());
        assert_eq!(cw.id, 275_085_572);
    }

    #[test]
    fn to_crossword_skips_clash_and_unplayable() {
        let template = cross_template();
        let cw =
            puzzle(vec![entry(1, Some("KOPI")), entry(2, Some("ATAP"))]).to_crossword(&template);
        assert_eq!(cw.answers.len(), 1);
        assert_eq!(cw.answers[0].word, "KOPI");

        let cw = puzzle(vec![entry(1, None), entry(2, Some("ATAP"))]).to_crossword(&template);
        assert_eq!(cw.answers.len(), 1);
        assert_eq!(cw.answers[0].word, "ATAP");
        assert_eq!(cw.grid[0], vec![0, 1, 0, 0]);
    }

    #[test]
    fn embedded_daily_converts_to_valid_crossword() {
        let templates = embedded_templates().unwrap();
        let banks = WordBanks::embedded();
        let dictionary = Dictionary::from_banks(&banks);
        let selector = DailySelector::new(&templates, &banks, &dictionary);

        for day in 1..=28 {
            let date = format!("2025-02-{day:02}");
            let daily = selector.puzzle_for(&date).unwrap();
            let template = selector.template_for(&daily).unwrap();
            let cw = daily.to_crossword(template);
            assert!(cw.validate().is_ok(), "{date}");
        }
    }
}
