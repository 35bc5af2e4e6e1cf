//! Benchmark command
//!
//! Measures how well the generator fills its grid across many runs.

use crate::core::CrosswordData;
use crate::generator::{GeneratorConfig, generate_with_rng};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub runs: usize,
    pub config: GeneratorConfig,
    /// Runs that placed no word at all
    pub degenerate: usize,
    pub average_answers: f64,
    /// Mean fraction of grid cells that are playable
    pub average_fill: f64,
    /// Number of runs per count of placed answers
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub grids_per_second: f64,
}

/// Generate `runs` crosswords in parallel and summarise them
///
/// Run `i` uses a generator seeded from `base_seed + i`, so results are
/// reproducible for a fixed word list.
pub fn run_benchmark<S: AsRef<str> + Sync>(
    words: &[S],
    config: GeneratorConfig,
    runs: usize,
    base_seed: u64,
    progress: bool,
) -> BenchmarkResult {
    let pb = if progress {
        progress_bar(runs as u64)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let stats: Vec<(usize, f64)> = (0..runs)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let crossword = generate_with_rng(words, config, &mut rng);
            pb.inc(1);
            (crossword.answers.len(), fill_ratio(&crossword))
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_and_clear();

    let mut distribution = BTreeMap::new();
    for &(answers, _) in &stats {
        *distribution.entry(answers).or_insert(0) += 1;
    }

    let total_answers: usize = stats.iter().map(|&(answers, _)| answers).sum();
    let total_fill: f64 = stats.iter().map(|&(_, fill)| fill).sum();
    let mean = |total: f64| if runs == 0 { 0.0 } else { total / runs as f64 };

    BenchmarkResult {
        runs,
        config,
        degenerate: distribution.get(&0).copied().unwrap_or(0),
        average_answers: mean(total_answers as f64),
        average_fill: mean(total_fill),
        distribution,
        duration,
        grids_per_second: runs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Fraction of cells marked playable
#[must_use]
pub fn fill_ratio(crossword: &CrosswordData) -> f64 {
    let cells = crossword.rows * crossword.cols;
    if cells == 0 {
        return 0.0;
    }
    crossword.playable_cells().count() as f64 / cells as f64
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
