//! The correction session: a second pass over recorded mistakes.
//!
//! Pairs come from the ledger by line index, not from the vocabulary, so
//! words dropped from the vocabulary can still be practised. Answers are
//! compared exactly unless `normalize_corrections` is set.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::input::LineSource;
use crate::ledger::MistakeStore;
use crate::model::{normalize_answer, DrillOptions, WordPair};

/// Result of a finished correction session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorrectionOutcome {
    pub score: u32,
    /// Pairs that were prompted.
    pub attempted: usize,
    /// Pairs answered correctly, in ledger order.
    pub corrected: Vec<WordPair>,
    /// Pairs answered wrongly, in ledger order.
    pub missed: Vec<WordPair>,
    /// Whether corrected pairs were removed from the ledger afterwards.
    pub cleared: bool,
}

pub struct CorrectionSession<'a, L: ?Sized> {
    ledger: &'a mut L,
    options: DrillOptions,
}

impl<'a, L: MistakeStore + ?Sized> CorrectionSession<'a, L> {
    pub fn new(ledger: &'a mut L) -> Self {
        Self {
            ledger,
            options: DrillOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DrillOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<CorrectionOutcome>
    where
        I: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        let pairs = self.ledger.load()?.pairs();
        let mut outcome = CorrectionOutcome::default();

        if pairs.is_empty() {
            writeln!(out, "No mistakes recorded yet.")?;
            return Ok(outcome);
        }

        writeln!(out, "Now practise the words you got wrong.")?;
        for pair in pairs {
            write!(out, "Translate this word: {}\nYour answer: ", pair.source)?;
            out.flush()?;
            let raw = input.next_line()?;
            outcome.attempted += 1;

            let matched = if self.options.normalize_corrections {
                normalize_answer(&raw) == normalize_answer(&pair.target)
            } else {
                raw == pair.target
            };

            if matched {
                outcome.score += 1;
                writeln!(out, "Correct!")?;
                outcome.corrected.push(pair);
            } else {
                writeln!(out, "Wrong. The correct answer is: {}", pair.target)?;
                outcome.missed.push(pair);
            }
            writeln!(out, "Your score: {}", outcome.score)?;
        }

        if self.options.clear_corrected && !outcome.corrected.is_empty() {
            self.ledger.remove(&outcome.corrected)?;
            outcome.cleared = true;
        }

        tracing::debug!(
            score = outcome.score,
            attempted = outcome.attempted,
            "correction session finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::input::ScriptedInput;
    use crate::ledger::{FileLedger, MemoryLedger, DEFAULT_SOURCES_FILE, DEFAULT_TARGETS_FILE};

    fn seeded(targets: &str, sources: &str) -> (tempfile::TempDir, FileLedger) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_TARGETS_FILE), targets).unwrap();
        fs::write(dir.path().join(DEFAULT_SOURCES_FILE), sources).unwrap();
        let ledger = FileLedger::in_dir(dir.path());
        (dir, ledger)
    }

    fn run(
        ledger: &mut dyn MistakeStore,
        options: DrillOptions,
        input: &mut ScriptedInput,
    ) -> (CorrectionOutcome, String) {
        let mut out = Vec::new();
        let outcome = CorrectionSession::new(ledger)
            .with_options(options)
            .run(input, &mut out)
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn empty_ledger_reads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = FileLedger::in_dir(dir.path());
        let mut input = ScriptedInput::new(["should not be read"]);

        let (outcome, out) = run(&mut ledger, DrillOptions::default(), &mut input);
        assert_eq!(input.reads(), 0);
        assert_eq!(outcome.attempted, 0);
        assert!(out.contains("No mistakes"));
    }

    #[test]
    fn correct_answer_scores() {
        let (_dir, mut ledger) = seeded("city\n", "город\n");
        let mut input = ScriptedInput::new(["city"]);

        let (outcome, out) = run(&mut ledger, DrillOptions::default(), &mut input);
        assert_eq!(outcome.score, 1);
        assert!(out.contains("Translate this word: город"));
        assert!(out.contains("Correct!"));
        assert!(out.contains("Your score: 1"));
    }

    #[test]
    fn wrong_answer_shows_expected() {
        let (_dir, mut ledger) = seeded("city\n", "город\n");
        let mut input = ScriptedInput::new(["wrong"]);

        let (outcome, out) = run(&mut ledger, DrillOptions::default(), &mut input);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.missed.len(), 1);
        assert!(out.contains("The correct answer is: city"));
    }

    #[test]
    fn more_targets_than_sources_processes_shorter() {
        let (_dir, mut ledger) = seeded("city\nwater\n", "город\n");
        let mut input = ScriptedInput::new(["city", "water"]);

        let (outcome, _) = run(&mut ledger, DrillOptions::default(), &mut input);
        assert_eq!(outcome.attempted, 1);
        assert_eq!(input.reads(), 1);
    }

    #[test]
    fn more_sources_than_targets_processes_shorter() {
        let (_dir, mut ledger) = seeded("city\n", "город\nрека\n");
        let mut input = ScriptedInput::new(["city"]);

        let (outcome, _) = run(&mut ledger, DrillOptions::default(), &mut input);
        assert_eq!(outcome.attempted, 1);
        assert_eq!(outcome.score, 1);
    }

    #[test]
    fn exact_match_by_default() {
        let (_dir, mut ledger) = seeded("city\n", "город\n");
        let mut input = ScriptedInput::new(["  CITY  "]);

        let (outcome, _) = run(&mut ledger, DrillOptions::default(), &mut input);
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn normalized_match_when_enabled() {
        let (_dir, mut ledger) = seeded("city\r\n", "город\r\n");
        let mut input = ScriptedInput::new(["  CITY  "]);
        let options = DrillOptions {
            normalize_corrections: true,
            ..Default::default()
        };

        let (outcome, _) = run(&mut ledger, options, &mut input);
        assert_eq!(outcome.score, 1);
    }

    #[test]
    fn ledger_untouched_by_default() {
        let (_dir, mut ledger) = seeded("city\nwater\n", "город\nвода\n");
        let before = ledger.load().unwrap();
        let mut input = ScriptedInput::new(["city", "nope"]);

        let (outcome, _) = run(&mut ledger, DrillOptions::default(), &mut input);
        assert!(!outcome.cleared);
        assert_eq!(ledger.load().unwrap(), before);
    }

    #[test]
    fn clear_corrected_removes_only_fixed_pairs() {
        let (_dir, mut ledger) = seeded("city\nwater\n", "город\nвода\n");
        let mut input = ScriptedInput::new(["city", "nope"]);
        let options = DrillOptions {
            clear_corrected: true,
            ..Default::default()
        };

        let (outcome, _) = run(&mut ledger, options, &mut input);
        assert!(outcome.cleared);
        let snapshot = ledger.load().unwrap();
        assert_eq!(snapshot.targets, vec!["water\n"]);
        assert_eq!(snapshot.sources, vec!["вода\n"]);
    }

    #[test]
    fn works_against_memory_ledger() {
        let mut ledger = MemoryLedger::new();
        ledger.record("tree", "дерево").unwrap();
        let mut input = ScriptedInput::new(["tree"]);

        let (outcome, _) = run(&mut ledger, DrillOptions::default(), &mut input);
        assert_eq!(outcome.corrected, vec![WordPair::new("дерево", "tree").unwrap()]);
    }
}
