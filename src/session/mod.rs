//! Playing a crossword
//!
//! The session state machine, completion records and their storage, puzzle
//! loading with a random fallback, and word description lookup.

mod completion;
mod describe;
mod loader;
mod state;
mod store;

pub use completion::{CompletionRecord, CompletionResult, classify};
pub use describe::{
    DescriptionLookup, KbbiEntry, LOOKUP_FAILED, LookupError, NO_DESCRIPTION, StaticLookup,
    describe_or_fallback, parse_description_body,
};
pub use loader::{
    LoadedPuzzle, LocalSource, PuzzleLoader, PuzzleSource, RequestTicket, SourceError, load_puzzle,
};
pub use state::{CellState, GuessOutcome, MAX_ATTEMPTS, Session, SessionError, WordProgress, WordState};
pub use store::{CompletionStore, JsonFileStore, MemoryStore, StoreError};
