//! Built-in self test
//!
//! Runs the evaluator, keyboard merger and generator on literal inputs and
//! reports each check. The binary exits non-zero when any check fails.

use crate::core::{CrosswordData, KeyStatusMap, KeyUpdates, LetterStatus, evaluate};
use crate::generator::random_crossword;
use LetterStatus::{Absent, Correct, Present};

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
    /// What was observed when the check failed
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SelfTestReport {
    pub checks: Vec<Check>,
}

impl SelfTestReport {
    fn record(&mut self, name: &'static str, passed: bool, detail: impl FnOnce() -> String) {
        self.checks.push(Check {
            name,
            passed,
            detail: (!passed).then(detail),
        });
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Run every check
#[must_use]
pub fn run_selftest() -> SelfTestReport {
    let mut report = SelfTestReport::default();
    check_evaluator(&mut report);
    check_merger(&mut report);
    check_generator(&mut report, &random_crossword());
    report
}

fn expect_statuses(
    report: &mut SelfTestReport,
    name: &'static str,
    guess: &str,
    answer: &str,
    expected: &[LetterStatus],
) {
    let got = evaluate(guess, answer);
    let passed = got.as_deref() == Ok(expected);
    report.record(name, passed, || format!("{guess} vs {answer} gave {got:?}"));
}

fn check_evaluator(report: &mut SelfTestReport) {
    expect_statuses(report, "answer against itself", "KOPI", "KOPI", &[Correct; 4]);
    expect_statuses(report, "no shared letters", "BUKU", "MEJA", &[Absent; 4]);
    expect_statuses(
        report,
        "repeated guess letter",
        "KOKO",
        "KOPI",
        &[Correct, Correct, Absent, Absent],
    );
    expect_statuses(
        report,
        "misplaced letters",
        "KOTA",
        "KOPI",
        &[Correct, Correct, Absent, Absent],
    );
    expect_statuses(
        report,
        "present before correct copy",
        "ABAB",
        "BABA",
        &[Present; 4],
    );

    let mismatch = evaluate("KOP", "KOPI");
    report.record("length mismatch rejected", mismatch.is_err(), || {
        format!("KOP vs KOPI gave {mismatch:?}")
    });
}

fn check_merger(report: &mut SelfTestReport) {
    let prev: KeyStatusMap = [('K', Correct)].into_iter().collect();
    let updates: KeyUpdates = [('K', Absent)].into_iter().collect();
    let merged = prev.merge(&updates);
    report.record("correct is never downgraded", merged.get('K') == Some(Correct), || {
        format!("K became {:?}", merged.get('K'))
    });

    let prev: KeyStatusMap = [('K', Present), ('O', Absent)].into_iter().collect();
    let updates: KeyUpdates = [('O', Correct), ('P', Present)].into_iter().collect();
    let merged = prev.merge(&updates);
    let expected: KeyStatusMap = [('K', Present), ('O', Correct), ('P', Present)]
        .into_iter()
        .collect();
    report.record("merge upgrades and adds keys", merged == expected, || {
        format!("got {merged:?}")
    });
    report.record("merge leaves input untouched", prev.get('O') == Some(Absent), || {
        format!("O became {:?}", prev.get('O'))
    });
}

fn check_generator(report: &mut SelfTestReport, crossword: &CrosswordData) {
    report.record("generator places words", !crossword.is_degenerate(), || {
        "no answers placed".to_string()
    });

    let valid = crossword.validate();
    report.record("answers agree with grid", valid.is_ok(), || {
        format!("{valid:?}")
    });

    let shape = crossword.rows == 6 && crossword.cols == 5;
    report.record("default grid is 6x5", shape, || {
        format!("{}x{}", crossword.rows, crossword.cols)
    });
}
