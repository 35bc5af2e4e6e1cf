//! Text-mode play
//!
//! Runs a session on stdin/stdout. Each line is one command:
//! `<no> <guess>` submits a guess for word `<no>`, `cell <row> <col>` opens
//! the word under a cell, `show <no>` prints a word's guesses and keyboard,
//! `reveal <no>` shows the answer of an exhausted word.

use crate::core::Position;
use crate::output::{print_completion, print_guess_outcome, print_session, print_word_panel};
use crate::session::{
    CompletionStore, DescriptionLookup, GuessOutcome, Session, SessionError, WordState,
    describe_or_fallback,
};
use crate::wordlists::Dictionary;
use std::io::{self, Write};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// Guess for a word, numbered from 1
    Guess { word: usize, text: String },
    Select(Position),
    Show(usize),
    Reveal(usize),
    Board,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one input line
#[must_use]
pub fn parse_command(input: &str) -> PlayCommand {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let number = |s: &&str| s.parse::<usize>().ok().filter(|&n| n > 0);
    let unknown = || PlayCommand::Unknown(input.trim().to_string());

    match parts.as_slice() {
        ["quit" | "q" | "exit"] => PlayCommand::Quit,
        ["help" | "h" | "?"] => PlayCommand::Help,
        ["board" | "b"] | [] => PlayCommand::Board,
        ["cell", row, col] => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => PlayCommand::Select(Position::new(row, col)),
            _ => unknown(),
        },
        ["show", no] => number(no).map_or_else(unknown, PlayCommand::Show),
        ["reveal", no] => number(no).map_or_else(unknown, PlayCommand::Reveal),
        [no, text] => number(no).map_or_else(
            unknown,
            |word| PlayCommand::Guess {
                word,
                text: (*text).to_string(),
            },
        ),
        _ => unknown(),
    }
}

/// Submit a guess, optionally requiring it to be a dictionary word
///
/// A guess rejected by the dictionary costs no attempt.
///
/// # Errors
/// Returns a message describing why the guess was not accepted.
pub fn submit<S: CompletionStore>(
    session: &mut Session<S>,
    word: usize,
    text: &str,
    dictionary: Option<&Dictionary>,
) -> Result<GuessOutcome, String> {
    let index = word.checked_sub(1).ok_or("Words are numbered from 1")?;
    if let Some(dictionary) = dictionary
        && let Some(answer) = session.puzzle().answers.get(index)
        && text.trim().chars().count() == answer.len()
        && !dictionary.is_word_valid(text, answer.len())
    {
        return Err(format!("'{}' is not in the word list", text.trim().to_uppercase()));
    }

    session.submit_guess(index, text).map_err(|e| match e {
        SessionError::NoSuchWord(_) => format!("There is no word {word}"),
        SessionError::WordFinished(_) => format!("Word {word} is already finished"),
        other => other.to_string(),
    })
}

/// Run the interactive loop until the player quits or the puzzle ends
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_play<S: CompletionStore>(
    session: &mut Session<S>,
    dictionary: Option<&Dictionary>,
    lookup: Option<&dyn DescriptionLookup>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Teka-Teki Silang - {}               ║", session.date());
    println!("╚══════════════════════════════════════════════════════════════╝");

    if let Some(record) = session.completion() {
        println!("\nThis puzzle is already complete for today.");
        print_completion(record.result);
        return Ok(());
    }

    print_help();
    print_session(session);

    loop {
        let Some(line) = get_user_input("Command")? else {
            return Ok(());
        };

        match parse_command(&line) {
            PlayCommand::Quit => {
                println!("\n👋 Sampai jumpa!\n");
                return Ok(());
            }
            PlayCommand::Help => print_help(),
            PlayCommand::Board => print_session(session),
            PlayCommand::Select(pos) => match session.select_cell(pos) {
                Some(index) => print_word_panel(session, index),
                None => println!("Nothing to play at {pos}"),
            },
            PlayCommand::Show(no) => print_word_panel(session, no - 1),
            PlayCommand::Reveal(no) => match session.reveal(no - 1) {
                Some(answer) => println!("Word {no} was {answer}"),
                None => println!("Word {no} can only be revealed once its attempts run out"),
            },
            PlayCommand::Guess { word, text } => match submit(session, word, &text, dictionary) {
                Ok(outcome) => {
                    print_guess_outcome(&text, &outcome);
                    if outcome.state == WordState::Solved
                        && let Some(lookup) = lookup
                    {
                        println!("\n{}\n", describe_or_fallback(lookup, &text));
                    }
                    if let Some(record) = outcome.completion {
                        print_session(session);
                        print_completion(record.result);
                        return Ok(());
                    }
                }
                Err(message) => println!("❌ {message}"),
            },
            PlayCommand::Unknown(input) => println!("Unknown command '{input}', type 'help'"),
        }
    }
}

fn print_help() {
    println!("\nCommands:");
    println!("  <no> <guess>     guess word <no>, e.g. '1 kopi'");
    println!("  cell <row> <col> open the word under a cell");
    println!("  show <no>        guesses and keyboard for a word");
    println!("  reveal <no>      answer of a word with no attempts left");
    println!("  board            redraw the board");
    println!("  quit             leave (progress is kept only when finished)\n");
}

/// Read one line, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
