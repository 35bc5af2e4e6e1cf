//! Daily puzzle templates
//!
//! A template fixes the grid size and the slots (number, direction, start,
//! length); the daily selector only chooses the words. Templates are stored
//! as JSON using the field names `gridSize` and `arah`.

use crate::core::{Direction, Position, fits_span};
use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Template data compiled into the binary
const EMBEDDED_TEMPLATES: &str = include_str!("../../data/templates.json");

/// One numbered slot of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtsSlot {
    pub no: u32,
    pub arah: Direction,
    pub start: Position,
    pub length: usize,
}

/// A crossword layout with numbered slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtsTemplate {
    pub id: String,
    pub name: String,
    /// `[rows, cols]`
    #[serde(rename = "gridSize")]
    pub grid_size: [usize; 2],
    pub words: Vec<TtsSlot>,
}

impl TtsTemplate {
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.grid_size[0]
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.grid_size[1]
    }

    /// Slot with number `no`
    #[must_use]
    pub fn slot(&self, no: u32) -> Option<&TtsSlot> {
        self.words.iter().find(|slot| slot.no == no)
    }

    /// Check that every slot has a unique number, a length, and fits the grid
    ///
    /// # Errors
    /// Returns the first offending slot.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let mut seen = FxHashSet::default();
        for slot in &self.words {
            if !seen.insert(slot.no) {
                return Err(TemplateError::DuplicateSlot {
                    template: self.id.clone(),
                    no: slot.no,
                });
            }
            if slot.length == 0 {
                return Err(TemplateError::ZeroLength {
                    template: self.id.clone(),
                    no: slot.no,
                });
            }
            if !fits_span(slot.arah, slot.start, slot.length, self.rows(), self.cols()) {
                return Err(TemplateError::SlotOutOfBounds {
                    template: self.id.clone(),
                    no: slot.no,
                });
            }
        }
        Ok(())
    }
}

/// Errors raised while loading templates
#[derive(Debug)]
pub enum TemplateError {
    Io(io::Error),
    Parse(serde_json::Error),
    DuplicateSlot { template: String, no: u32 },
    ZeroLength { template: String, no: u32 },
    SlotOutOfBounds { template: String, no: u32 },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Cannot read templates: {e}"),
            Self::Parse(e) => write!(f, "Invalid template JSON: {e}"),
            Self::DuplicateSlot { template, no } => {
                write!(f, "Template '{template}' declares slot {no} twice")
            }
            Self::ZeroLength { template, no } => {
                write!(f, "Template '{template}' slot {no} has no letters")
            }
            Self::SlotOutOfBounds { template, no } => {
                write!(f, "Template '{template}' slot {no} does not fit the grid")
            }
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TemplateError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Parse and validate a JSON array of templates
///
/// # Errors
/// Returns `TemplateError` for malformed JSON or an invalid template.
pub fn load_templates(json: &str) -> Result<Vec<TtsTemplate>, TemplateError> {
    let templates: Vec<TtsTemplate> = serde_json::from_str(json)?;
    for template in &templates {
        template.validate()?;
    }
    debug!("Loaded {} templates", templates.len());
    Ok(templates)
}

/// Read templates from a JSON file
///
/// # Errors
/// Returns `TemplateError` if the file cannot be read or is invalid.
pub fn load_templates_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<TtsTemplate>, TemplateError> {
    let json = fs::read_to_string(path)?;
    load_templates(&json)
}

/// Templates compiled into the binary
///
/// # Errors
/// Returns `TemplateError` if the embedded data is invalid.
pub fn embedded_templates() -> Result<Vec<TtsTemplate>, TemplateError> {
    load_templates(EMBEDDED_TEMPLATES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_templates_are_valid() {
        let templates = embedded_templates().unwrap();
        assert!(!templates.is_empty());
        for template in &templates {
            assert!(!template.words.is_empty(), "{}", template.id);
            for slot in &template.words {
                assert!((4..=6).contains(&slot.length), "{} slot {}", template.id, slot.no);
            }
        }
    }

    #[test]
    fn parses_template_field_names() {
        let json = r#"[{"id":"t","name":"T","gridSize":[4,5],
            "words":[{"no":1,"arah":"menurun","start":[0,2],"length":4}]}]"#;
        let templates = load_templates(json).unwrap();
        let template = &templates[0];

        assert_eq!(template.rows(), 4);
        assert_eq!(template.cols(), 5);
        let slot = template.slot(1).unwrap();
        assert_eq!(slot.arah, Direction::Down);
        assert_eq!(slot.start, Position::new(0, 2));
        assert!(template.slot(2).is_none());
    }

    #[test]
    fn rejects_slot_outside_grid() {
        let json = r#"[{"id":"t","name":"T","gridSize":[3,3],
            "words":[{"no":1,"arah":"mendatar","start":[0,0],"length":4}]}]"#;
        assert!(matches!(
            load_templates(json),
            Err(TemplateError::SlotOutOfBounds { no: 1, .. })
        ));
    }

    #[test]
    fn rejects_start_past_usize_range() {
        let json = r#"[{"id":"t","name":"T","gridSize":[4,4],
            "words":[{"no":3,"arah":"menurun","start":[18446744073709551615,0],"length":4}]}]"#;
        assert!(matches!(
            load_templates(json),
            Err(TemplateError::SlotOutOfBounds { no: 3, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_and_empty_slots() {
        let dup = r#"[{"id":"t","name":"T","gridSize":[5,5],"words":[
            {"no":1,"arah":"mendatar","start":[0,0],"length":4},
            {"no":1,"arah":"menurun","start":[0,0],"length":4}]}]"#;
        assert!(matches!(
            load_templates(dup),
            Err(TemplateError::DuplicateSlot { no: 1, .. })
        ));

        let empty = r#"[{"id":"t","name":"T","gridSize":[5,5],"words":[
            {"no":2,"arah":"mendatar","start":[0,0],"length":0}]}]"#;
        assert!(matches!(
            load_templates(empty),
            Err(TemplateError::ZeroLength { no: 2, .. })
        ));
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(load_templates("{"), Err(TemplateError::Parse(_))));
        assert!(matches!(
            load_templates_from_file("/no/such/templates.json"),
            Err(TemplateError::Io(_))
        ));
    }
}
