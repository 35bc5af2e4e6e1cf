//! Teka-teki silang - CLI
//!
//! Daily crossword where every word is guessed Wordle style. Plays in the
//! terminal and exposes the generator, daily selector and evaluator as
//! subcommands.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use ttsla::{
    commands::{
        check_word, daily_report, evaluate_words, generate_crossword, run_benchmark, run_play,
        run_selftest, scan_calendar,
    },
    core::CrosswordData,
    daily::{load_templates_from_file, today_iso},
    generator::GeneratorConfig,
    output::{
        print_benchmark_result, print_calendar_report, print_crossword, print_daily,
        print_feedback, print_selftest,
    },
    session::{
        CompletionStore, DescriptionLookup, JsonFileStore, LocalSource, MemoryStore, PuzzleLoader,
        PuzzleSource, Session, SessionError, StaticLookup,
    },
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "ttsla",
    about = "Daily Indonesian crossword with Wordle-style guessing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list for random crosswords (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Template JSON file for daily puzzles (default: embedded templates)
    #[arg(short = 't', long, global = true)]
    templates: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzle in the terminal (default)
    Play {
        /// Play the puzzle of another date (yyyy-mm-dd)
        #[arg(short, long)]
        date: Option<String>,

        /// Play a random crossword instead of the daily one
        #[arg(short, long)]
        random: bool,

        /// Progress file for completed days
        #[arg(short, long, default_value = "ttsla-progress.json")]
        store: PathBuf,

        /// Only accept guesses found in the word banks
        #[arg(long)]
        strict: bool,

        /// JSON object mapping words to description text
        #[arg(long)]
        descriptions: Option<PathBuf>,
    },

    /// Show the daily puzzle for a date
    Daily {
        /// Date (yyyy-mm-dd), default today
        #[arg(short, long)]
        date: Option<String>,

        /// Print the answers
        #[arg(short, long)]
        reveal: bool,

        /// Print JSON instead of a grid
        #[arg(long)]
        json: bool,
    },

    /// Generate a random crossword
    Generate {
        #[arg(long, default_value = "6")]
        rows: usize,

        #[arg(long, default_value = "5")]
        cols: usize,

        /// Words to try to place
        #[arg(short = 'n', long, default_value = "4")]
        count: usize,

        /// Random placements tried per word
        #[arg(short, long, default_value = "8")]
        attempts: usize,

        /// Seed for a reproducible grid
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of a grid
        #[arg(long)]
        json: bool,
    },

    /// Score a guess against an answer
    Evaluate { guess: String, answer: String },

    /// Check whether a word is in the bank of its length
    Check { word: String },

    /// Scan the daily puzzles of a date range
    Calendar {
        /// First date (yyyy-mm-dd), default today
        #[arg(short, long)]
        from: Option<String>,

        /// Number of days
        #[arg(short, long, default_value = "365")]
        days: u32,
    },

    /// Benchmark how densely the generator fills its grid
    Benchmark {
        /// Number of grids to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Base seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Run the built-in checks of the evaluator, merger and generator
    Selftest,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = load_source(cli.words.as_deref(), cli.templates.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Play {
        date: None,
        random: false,
        store: PathBuf::from("ttsla-progress.json"),
        strict: false,
        descriptions: None,
    });

    match command {
        Commands::Play {
            date,
            random,
            store,
            strict,
            descriptions,
        } => {
            let lookup = descriptions.as_deref().map(load_descriptions).transpose()?;
            run_play_command(
                &source,
                date.as_deref(),
                random,
                &store,
                strict,
                lookup.as_ref(),
            )?;
        }
        Commands::Daily { date, reveal, json } => {
            run_daily_command(&source, date.as_deref(), reveal, json)?;
        }
        Commands::Generate {
            rows,
            cols,
            count,
            attempts,
            seed,
            json,
        } => {
            let config = GeneratorConfig::new(rows, cols, count).with_attempts(attempts.max(1));
            let crossword = generate_crossword(source.words(), config, seed, 16);
            print_generated(&crossword, json)?;
        }
        Commands::Evaluate { guess, answer } => {
            let feedback = evaluate_words(&guess, &answer).map_err(|e| anyhow!(e))?;
            print_feedback(&guess, &feedback);
        }
        Commands::Check { word } => {
            let check = check_word(source.dictionary(), &word);
            if check.valid {
                println!("✓ {} is a valid {}-letter word", word.to_uppercase(), check.length);
            } else {
                println!("✗ {} is not in the {}-letter bank", word.to_uppercase(), check.length);
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Calendar { from, days } => {
            let from = parse_date(from.as_deref())?;
            println!("Scanning {days} days from {from}...");
            let report = scan_calendar(&source.selector(), from, days);
            print_calendar_report(&report);
        }
        Commands::Benchmark { count, seed } => {
            println!("Generating {count} crosswords...");
            let result = run_benchmark(source.words(), source.config(), count, seed, true);
            print_benchmark_result(&result);
        }
        Commands::Selftest => {
            let report = run_selftest();
            print_selftest(&report);
            if !report.all_passed() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Build the puzzle source, replacing embedded data with files when given
fn load_source(words: Option<&Path>, templates: Option<&Path>) -> Result<LocalSource> {
    let mut source = LocalSource::embedded().context("Embedded templates are invalid")?;

    if let Some(path) = templates {
        let templates = load_templates_from_file(path)
            .with_context(|| format!("Failed to load templates from {}", path.display()))?;
        source = source.with_templates(templates);
    }
    if let Some(path) = words {
        let words = load_from_file(path)
            .with_context(|| format!("Failed to load word list from {}", path.display()))?;
        source = source.with_words(words);
    }
    Ok(source)
}

fn load_descriptions(path: &Path) -> Result<StaticLookup> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptions from {}", path.display()))?;
    let bodies: BTreeMap<String, String> =
        serde_json::from_str(&text).context("Descriptions must be a JSON object of strings")?;
    Ok(bodies.into_iter().collect())
}

/// Normalise a user supplied date, defaulting to today
fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    let text = date.map_or_else(today_iso, str::to_string);
    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{text}', expected yyyy-mm-dd"))
}

fn run_daily_command(
    source: &LocalSource,
    date: Option<&str>,
    reveal: bool,
    json: bool,
) -> Result<()> {
    let date = parse_date(date)?.format("%Y-%m-%d").to_string();
    let report = daily_report(&source.selector(), &date).map_err(|e| anyhow!(e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.puzzle)?);
    } else {
        print_daily(&report, reveal);
    }
    Ok(())
}

fn print_generated(crossword: &CrosswordData, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(crossword)?);
    } else {
        println!("\nCrossword #{} ({}x{})\n", crossword.id, crossword.rows, crossword.cols);
        print_crossword(crossword, true);
    }
    Ok(())
}

fn run_play_command(
    source: &LocalSource,
    date: Option<&str>,
    random: bool,
    store: &Path,
    strict: bool,
    lookup: Option<&StaticLookup>,
) -> Result<()> {
    let date = parse_date(date)?.format("%Y-%m-%d").to_string();
    let dictionary = strict.then(|| source.dictionary());

    if random {
        let crossword = source.random_crossword().map_err(|e| anyhow!(e))?;
        play(crossword, &date, MemoryStore::new(), dictionary, lookup)
    } else {
        let crossword = PuzzleLoader::new()
            .load(source, &date)
            .context("Puzzle request was superseded")?
            .into_crossword();
        play(crossword, &date, JsonFileStore::new(store), dictionary, lookup)
    }
}

fn play<S: CompletionStore>(
    crossword: CrosswordData,
    date: &str,
    store: S,
    dictionary: Option<&Dictionary>,
    lookup: Option<&StaticLookup>,
) -> Result<()> {
    let mut session = match Session::start(crossword, date, store) {
        Ok(session) => session,
        Err(SessionError::EmptyPuzzle) => {
            return Err(anyhow!("Could not build a playable crossword, try again"));
        }
        Err(e) => return Err(e.into()),
    };
    run_play(
        &mut session,
        dictionary,
        lookup.map(|l| l as &dyn DescriptionLookup),
    )
    .map_err(|e| anyhow!(e))
}
