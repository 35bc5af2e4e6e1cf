//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, keyboard_lines, status_tile};
use crate::commands::{BenchmarkResult, CalendarReport, DailyReport, SelfTestReport};
use crate::core::{CrosswordData, Feedback, Position};
use crate::session::{CompletionResult, CompletionStore, GuessOutcome, Session, WordState};
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Label shown for answer `index`
fn word_label(crossword: &CrosswordData, index: usize) -> String {
    let answer = &crossword.answers[index];
    let no = answer.no.map_or(index + 1, |no| no as usize);
    format!("{no}. {} {}", answer.direction, answer.start)
}

/// Print a crossword grid, with or without its letters
pub fn print_crossword(crossword: &CrosswordData, reveal: bool) {
    let letters = crossword.letter_board();
    for (r, row) in letters.iter().enumerate() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(c, letter)| {
                if !crossword.is_playable(Position::new(r, c)) {
                    " ■ ".bright_black().to_string()
                } else if reveal {
                    format!(" {} ", letter.unwrap_or('?')).bold().to_string()
                } else {
                    " · ".to_string()
                }
            })
            .collect();
        println!("   {line}");
    }

    println!();
    for (i, answer) in crossword.answers.iter().enumerate() {
        if reveal {
            println!("   {}  {}", word_label(crossword, i), answer.word.bright_white());
        } else {
            println!("   {}  {} letters", word_label(crossword, i), answer.len());
        }
    }
}

/// Print the daily puzzle for one date
pub fn print_daily(report: &DailyReport, reveal: bool) {
    banner(&format!("TTS HARIAN {}", report.puzzle.date));
    println!(
        "\n   Template: {} ({})  seed {}",
        report.template.name.bright_yellow(),
        report.template.id,
        report.seed
    );
    println!(
        "   Playable: {}/{} slots",
        report.crossword.answers.len(),
        report.template.words.len()
    );
    if report.skipped_slots() > 0 {
        println!(
            "   {}",
            format!("{} slot(s) skipped", report.skipped_slots()).yellow()
        );
    }
    println!();
    print_crossword(&report.crossword, reveal);
}

/// Print the board and word list of a session
pub fn print_session<S: CompletionStore>(session: &Session<S>) {
    let crossword = session.puzzle();
    println!();
    for (r, row) in session.cells().iter().enumerate() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                if !crossword.is_playable(Position::new(r, c)) {
                    " ■ ".bright_black().to_string()
                } else if let Some(letter) = cell.letter {
                    status_tile(letter, cell.status).to_string()
                } else {
                    " · ".to_string()
                }
            })
            .collect();
        println!("   {line}");
    }

    println!();
    for (i, progress) in session.words().iter().enumerate() {
        let state = match progress.state {
            WordState::Unattempted => "new".normal(),
            WordState::InProgress => format!("{} left", progress.remaining).yellow(),
            WordState::Solved => "solved".green().bold(),
            WordState::Exhausted => "out of attempts".red(),
        };
        println!(
            "   {}  {} letters  {state}",
            word_label(crossword, i),
            crossword.answers[i].len()
        );
    }
}

/// Print the guesses and keyboard of one word
pub fn print_word_panel<S: CompletionStore>(session: &Session<S>, index: usize) {
    let Some(progress) = session.word(index) else {
        return;
    };
    println!("\n   {}", word_label(session.puzzle(), index).bright_cyan());
    for (guess, feedback) in &progress.guesses {
        println!("   {}  {}", colored_guess(guess, feedback), feedback.to_emoji());
    }
    println!();
    for line in keyboard_lines(&progress.keyboard) {
        println!("   {line}");
    }
}

/// Print the result of one guess
pub fn print_guess_outcome(guess: &str, outcome: &GuessOutcome) {
    println!(
        "\n   {}  {}",
        colored_guess(&guess.to_uppercase(), &outcome.feedback),
        outcome.feedback.to_emoji()
    );
    match outcome.state {
        WordState::Solved => println!("   {}", "✅ Correct!".green().bold()),
        WordState::Exhausted => println!("   {}", "❌ No attempts left".red().bold()),
        _ => println!("   {} attempt(s) left", outcome.remaining),
    }
}

/// Print the verdict of a finished puzzle
pub fn print_completion(result: CompletionResult) {
    let line = match result {
        CompletionResult::Perfect => "🎉 Perfect! Every cell is correct.".green().bold(),
        CompletionResult::Partial => "✨ Finished with some cells wrong.".yellow().bold(),
        CompletionResult::AllWrong => "😢 No cell ended correct.".red().bold(),
    };
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("   {line}");
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print a single evaluation
pub fn print_feedback(guess: &str, feedback: &Feedback) {
    println!(
        "{}  {}  {}",
        colored_guess(&guess.to_uppercase(), feedback),
        feedback.to_emoji(),
        feedback
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("GENERATOR BENCHMARK");

    let config = &result.config;
    println!(
        "\n📊 {} {}x{} grid, {} words, {} attempts per word",
        "Setup:".bright_cyan().bold(),
        config.rows,
        config.cols,
        config.word_count,
        config.placement_attempts
    );
    println!("   Runs:             {}", result.runs);
    println!(
        "   Average placed:   {}",
        format!("{:.2}", result.average_answers).bright_yellow().bold()
    );
    println!(
        "   Average fill:     [{}] {:.1}%",
        create_progress_bar(result.average_fill, 1.0, 30).green(),
        result.average_fill * 100.0
    );
    println!(
        "   Degenerate:       {}",
        if result.degenerate == 0 {
            "0".green()
        } else {
            result.degenerate.to_string().red()
        }
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Grids/second:     {:.1}", result.grids_per_second);

    println!("\n📈 {}", "Words placed:".bright_cyan().bold());
    for (&placed, &count) in &result.distribution {
        let pct = if result.runs == 0 {
            0.0
        } else {
            count as f64 / result.runs as f64 * 100.0
        };
        println!(
            "   {placed}: {} {count:4} ({pct:5.1}%)",
            create_progress_bar(pct, 100.0, 40).green()
        );
    }
}

/// Print a calendar scan
pub fn print_calendar_report(report: &CalendarReport) {
    banner("CALENDAR SCAN");

    println!("\n   Days scanned:     {}", report.days);
    if report.missing > 0 {
        println!("   Without puzzle:   {}", report.missing.to_string().red());
    }
    println!(
        "   Unplayable slots: {}/{}",
        report.unplayable_slots, report.total_slots
    );
    println!("   Empty days:       {}", report.empty_days);

    println!("\n📅 {}", "Templates:".bright_cyan().bold());
    for (id, &count) in &report.template_counts {
        let pct = count as f64 / report.days.max(1) as f64 * 100.0;
        println!(
            "   {id:<12} {} {count:4} ({pct:5.1}%)",
            create_progress_bar(pct, 100.0, 30).green()
        );
    }

    if report.identical.is_empty() {
        println!("\n   {}", "No repeated puzzles".green());
    } else {
        println!("\n🔁 {}", "Identical puzzles:".yellow().bold());
        for dates in &report.identical {
            println!("   {}", dates.join(", "));
        }
    }
}

/// Print self test results
pub fn print_selftest(report: &SelfTestReport) {
    banner("SELF TEST");
    println!();
    for check in &report.checks {
        if check.passed {
            println!("   {} {}", "✓".green(), check.name);
        } else {
            println!(
                "   {} {}: {}",
                "✗".red(),
                check.name,
                check.detail.as_deref().unwrap_or_default()
            );
        }
    }
    let summary = format!("{} passed, {} failed", report.passed(), report.failed());
    println!(
        "\n   {}",
        if report.all_passed() {
            summary.green().bold()
        } else {
            summary.red().bold()
        }
    );
}
