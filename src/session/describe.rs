//! Word descriptions
//!
//! Descriptions are free text shown after a word is solved. A lookup that
//! fails never interrupts the game: the player sees a fixed apology instead.

use log::warn;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fmt;

pub const NO_DESCRIPTION: &str = "No description found.";
pub const LOOKUP_FAILED: &str = "An error occurred while fetching the word description.";

/// One entry of the dictionary service's JSON answer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KbbiEntry {
    pub x: i64,
    /// The headword
    pub w: String,
    /// Description markup
    pub d: String,
    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    Transport(String),
    Status(u16),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(reason) => write!(f, "Lookup failed: {reason}"),
            Self::Status(code) => write!(f, "Lookup returned HTTP {code}"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Fetches the raw response body describing a word
pub trait DescriptionLookup {
    /// # Errors
    /// Returns `LookupError` when the service cannot be reached or refuses.
    fn fetch(&self, word: &str) -> Result<String, LookupError>;
}

/// Turn a raw response body into display text
///
/// A non-empty JSON array of entries yields their descriptions separated by
/// blank lines. Anything else is shown as trimmed text.
///
/// # Examples
/// ```
/// use ttsla::session::parse_description_body;
///
/// let body = r#"[{"x":1,"w":"kopi","d":"minuman"},{"x":2,"w":"kopi","d":"biji"}]"#;
/// assert_eq!(parse_description_body(body), "minuman\n\nbiji");
/// assert_eq!(parse_description_body("  plain  "), "plain");
/// assert_eq!(parse_description_body("   "), "No description found.");
/// ```
#[must_use]
pub fn parse_description_body(raw: &str) -> String {
    if let Ok(entries) = serde_json::from_str::<Vec<KbbiEntry>>(raw)
        && !entries.is_empty()
    {
        return entries
            .iter()
            .map(|entry| entry.d.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
    }

    match raw.trim() {
        "" => NO_DESCRIPTION.to_string(),
        text => text.to_string(),
    }
}

/// Description of `word`, or the apology text if the lookup fails
pub fn describe_or_fallback<L: DescriptionLookup + ?Sized>(lookup: &L, word: &str) -> String {
    match lookup.fetch(word) {
        Ok(body) => parse_description_body(&body),
        Err(e) => {
            warn!("Error fetching word description for '{word}': {e}");
            LOOKUP_FAILED.to_string()
        }
    }
}

/// Lookup answering from a fixed table of bodies
#[derive(Debug, Default, Clone)]
pub struct StaticLookup {
    bodies: FxHashMap<String, String>,
}

impl StaticLookup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, word: &str, body: impl Into<String>) -> Self {
        self.bodies.insert(word.to_lowercase(), body.into());
        self
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for StaticLookup {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |lookup, (word, body)| lookup.with(word.as_ref(), body))
    }
}

impl DescriptionLookup for StaticLookup {
    fn fetch(&self, word: &str) -> Result<String, LookupError> {
        self.bodies
            .get(&word.to_lowercase())
            .cloned()
            .ok_or(LookupError::Status(404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_json_descriptions() {
        let body = r#"[{"x":1,"w":"otak","d":"benak","msg":""},{"x":2,"w":"otak","d":"pikiran"}]"#;
        assert_eq!(parse_description_body(body), "benak\n\npikiran");
    }

    #[test]
    fn empty_json_array_is_treated_as_text() {
        assert_eq!(parse_description_body("[]"), "[]");
    }

    #[test]
    fn raw_text_is_trimmed() {
        assert_eq!(parse_description_body("\n kata tidak ditemukan \n"), "kata tidak ditemukan");
        assert_eq!(parse_description_body(""), NO_DESCRIPTION);
    }

    #[test]
    fn lookup_failure_falls_back() {
        let lookup = StaticLookup::new().with("kopi", r#"[{"x":1,"w":"kopi","d":"minuman"}]"#);
        assert_eq!(describe_or_fallback(&lookup, "KOPI"), "minuman");
        assert_eq!(describe_or_fallback(&lookup, "meja"), LOOKUP_FAILED);
    }

    #[test]
    fn lookup_from_pairs() {
        let lookup: StaticLookup = [("Meja", "perabot")].into_iter().collect();
        assert_eq!(describe_or_fallback(&lookup, "meja"), "perabot");
    }
}
