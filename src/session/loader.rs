//! Puzzle loading
//!
//! A loader asks a `PuzzleSource` for today's puzzle and falls back to a
//! random crossword when the daily one is unavailable or has nothing to play.
//! Only the most recent request may deliver a result; older ones are dropped.

use crate::core::CrosswordData;
use crate::daily::{DailyPuzzle, DailySelector, TemplateError, TtsTemplate, embedded_templates};
use crate::generator::{self, GeneratorConfig, generate_with_rng};
use crate::wordlists::loader::words_from_slice;
use crate::wordlists::{Dictionary, WORDS, WordBanks};
use log::{debug, warn};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Failure reaching a puzzle source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Unavailable(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "Puzzle source unavailable: {reason}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Where puzzles come from
pub trait PuzzleSource {
    /// A freshly generated random crossword
    ///
    /// # Errors
    /// Returns `SourceError` if the source cannot be reached.
    fn random_crossword(&self) -> Result<CrosswordData, SourceError>;

    /// The daily puzzle for `date`, `None` when the source has no templates
    ///
    /// # Errors
    /// Returns `SourceError` if the source cannot be reached.
    fn daily_puzzle(&self, date: &str) -> Result<Option<DailyPuzzle>, SourceError>;

    /// Template by id
    ///
    /// # Errors
    /// Returns `SourceError` if the source cannot be reached.
    fn template(&self, id: &str) -> Result<Option<TtsTemplate>, SourceError>;
}

/// In-process source over templates, word banks and a generator word list
pub struct LocalSource {
    templates: Vec<TtsTemplate>,
    banks: WordBanks,
    dictionary: Dictionary,
    words: Vec<String>,
    config: GeneratorConfig,
}

impl LocalSource {
    #[must_use]
    pub fn new(templates: Vec<TtsTemplate>, banks: WordBanks, words: Vec<String>) -> Self {
        let dictionary = Dictionary::from_banks(&banks);
        Self {
            templates,
            banks,
            dictionary,
            words,
            config: GeneratorConfig::default(),
        }
    }

    /// Source over the embedded templates and word lists
    ///
    /// # Errors
    /// Returns `TemplateError` if the embedded templates are invalid.
    pub fn embedded() -> Result<Self, TemplateError> {
        Ok(Self::new(
            embedded_templates()?,
            WordBanks::embedded(),
            words_from_slice(WORDS),
        ))
    }

    #[must_use]
    pub fn with_templates(mut self, templates: Vec<TtsTemplate>) -> Self {
        self.templates = templates;
        self
    }

    #[must_use]
    pub fn with_words(mut self, words: Vec<String>) -> Self {
        self.words = words;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn selector(&self) -> DailySelector<'_> {
        DailySelector::new(&self.templates, &self.banks, &self.dictionary)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub const fn config(&self) -> GeneratorConfig {
        self.config
    }
}

impl PuzzleSource for LocalSource {
    fn random_crossword(&self) -> Result<CrosswordData, SourceError> {
        Ok(generate_with_rng(self.words.as_slice(), self.config, &mut rand::rng()))
    }

    fn daily_puzzle(&self, date: &str) -> Result<Option<DailyPuzzle>, SourceError> {
        Ok(self.selector().puzzle_for(date))
    }

    fn template(&self, id: &str) -> Result<Option<TtsTemplate>, SourceError> {
        Ok(self.templates.iter().find(|t| t.id == id).cloned())
    }
}

/// A puzzle ready to play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedPuzzle {
    Daily {
        daily: DailyPuzzle,
        crossword: CrosswordData,
    },
    Random(CrosswordData),
}

impl LoadedPuzzle {
    #[must_use]
    pub const fn crossword(&self) -> &CrosswordData {
        match self {
            Self::Daily { crossword, .. } | Self::Random(crossword) => crossword,
        }
    }

    #[must_use]
    pub fn into_crossword(self) -> CrosswordData {
        match self {
            Self::Daily { crossword, .. } | Self::Random(crossword) => crossword,
        }
    }

    #[must_use]
    pub const fn is_daily(&self) -> bool {
        matches!(self, Self::Daily { .. })
    }
}

/// Load the puzzle for `date`
///
/// Tries the daily puzzle first. When it is missing, has no playable slot,
/// or the source fails, asks the source for a random crossword; if that
/// fails too, or is degenerate, generates one locally.
pub fn load_puzzle<P: PuzzleSource + ?Sized>(source: &P, date: &str) -> LoadedPuzzle {
    match daily_crossword(source, date) {
        Ok(Some((daily, crossword))) => {
            return LoadedPuzzle::Daily { daily, crossword };
        }
        Ok(None) => debug!("No playable daily puzzle for {date}, using a random one"),
        Err(e) => warn!("Daily puzzle for {date} failed to load: {e}"),
    }

    match source.random_crossword() {
        Ok(crossword) if !crossword.is_degenerate() => LoadedPuzzle::Random(crossword),
        Ok(_) => {
            debug!("Source produced an empty crossword, generating locally");
            LoadedPuzzle::Random(generator::random_crossword())
        }
        Err(e) => {
            warn!("Random crossword failed to load: {e}");
            LoadedPuzzle::Random(generator::random_crossword())
        }
    }
}

fn daily_crossword<P: PuzzleSource + ?Sized>(
    source: &P,
    date: &str,
) -> Result<Option<(DailyPuzzle, CrosswordData)>, SourceError> {
    let Some(daily) = source.daily_puzzle(date)? else {
        return Ok(None);
    };
    let Some(template) = source.template(&daily.template_id)? else {
        warn!("Template '{}' missing from source", daily.template_id);
        return Ok(None);
    };

    let crossword = daily.to_crossword(&template);
    Ok((!crossword.is_degenerate()).then_some((daily, crossword)))
}

/// Ticket identifying one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Last-request-wins gate for puzzle loads
///
/// Each `begin` invalidates every earlier ticket. A result delivered with a
/// stale ticket is discarded. Asynchronous sources hold a ticket across the
/// await; `load` covers the blocking case in one call.
#[derive(Debug, Default)]
pub struct PuzzleLoader {
    generation: AtomicU64,
}

impl PuzzleLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
        }
    }

    /// Start a new request
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }

    /// Hand back `value` if `ticket` is still the latest request
    pub fn resolve<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            warn!("Discarding result of superseded request #{}", ticket.0);
            None
        }
    }

    /// Load the puzzle for `date` as a new request
    ///
    /// `None` when another request started before this one finished.
    pub fn load<P: PuzzleSource + ?Sized>(&self, source: &P, date: &str) -> Option<LoadedPuzzle> {
        let ticket = self.begin();
        debug!("Request #{} loads puzzle for {date}", ticket.0);
        self.resolve(ticket, load_puzzle(source, date))
    }
}
