//! The quiz session engine.
//!
//! Prompts each source word in turn, scores answers against the vocabulary,
//! and records every miss in the mistake ledger. When the score reaches the
//! current threshold the learner chooses to continue (raising the threshold)
//! or to stop. Apart from that checkpoint the only way out is running out of
//! words.

use std::io::Write;

use serde::Serialize;

use crate::error::{DrillError, Result};
use crate::input::LineSource;
use crate::ledger::MistakeStore;
use crate::model::{normalize_answer, DrillOptions, WordPair};
use crate::vocabulary::Vocabulary;

/// Score at which the first continue/stop checkpoint fires.
pub const DEFAULT_INITIAL_THRESHOLD: u32 = 10;
/// How far the threshold moves each time the learner continues.
pub const DEFAULT_THRESHOLD_STEP: u32 = 5;

/// The checkpoint answer that keeps the session going.
const CONTINUE_CHOICE: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckpointChoice {
    Continue,
    Stop,
}

/// Configuration for a quiz session.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub initial_threshold: u32,
    pub threshold_step: u32,
    pub options: DrillOptions,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            initial_threshold: DEFAULT_INITIAL_THRESHOLD,
            threshold_step: DEFAULT_THRESHOLD_STEP,
            options: DrillOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizState {
    Prompting,
    AwaitingContinueDecision,
    Stopped,
}

/// How a quiz session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionEnd {
    /// Every word was presented.
    Exhausted,
    /// The learner chose to stop at a checkpoint.
    Stopped,
}

/// Result of a finished quiz session.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcome {
    pub score: u32,
    /// Threshold in effect when the session ended.
    pub threshold: u32,
    /// Number of words actually shown.
    pub presented: usize,
    /// Pairs answered wrongly, in prompt order.
    pub misses: Vec<WordPair>,
    /// Misses that were new to the ledger.
    pub recorded: usize,
    pub end: SessionEnd,
}

/// A single pass over a word list.
pub struct QuizSession<'a, L: ?Sized> {
    vocabulary: &'a Vocabulary,
    ledger: &'a mut L,
    config: QuizConfig,
}

impl<'a, L: MistakeStore + ?Sized> QuizSession<'a, L> {
    pub fn new(vocabulary: &'a Vocabulary, ledger: &'a mut L) -> Self {
        Self {
            vocabulary,
            ledger,
            config: QuizConfig::default(),
        }
    }

    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the session over `words`, which must all come from the
    /// vocabulary.
    pub fn run<I, W>(&mut self, words: &[&str], input: &mut I, out: &mut W) -> Result<QuizOutcome>
    where
        I: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        let mut state = QuizState::Prompting;
        let mut score = 0u32;
        let mut threshold = self.config.initial_threshold;
        let mut presented = 0usize;
        let mut misses = Vec::new();
        let mut recorded = 0usize;
        let mut remaining = words.iter();

        let end = loop {
            match state {
                QuizState::Prompting => {
                    let Some(&source) = remaining.next() else {
                        writeln!(out, "No more words. Your score: {score}")?;
                        break SessionEnd::Exhausted;
                    };
                    let target = self.vocabulary.lookup(source)?;

                    write!(out, "Translate this word: {source}\nYour answer: ")?;
                    out.flush()?;
                    let answer = normalize_answer(&input.next_line()?);
                    presented += 1;

                    if answer == target {
                        score += 1;
                        writeln!(out, "Correct!")?;
                    } else {
                        writeln!(out, "Wrong. The correct answer is: {target}")?;
                        if self.ledger.record(target, source)? {
                            recorded += 1;
                        }
                        misses.push(WordPair {
                            source: source.to_string(),
                            target: target.to_string(),
                        });
                    }

                    if score == threshold {
                        tracing::debug!("checkpoint reached at score {score}");
                        state = QuizState::AwaitingContinueDecision;
                    }
                }
                QuizState::AwaitingContinueDecision => {
                    let choice = self.read_choice(input, out)?;
                    writeln!(out, "Your score: {score}")?;
                    if choice == CheckpointChoice::Continue {
                        threshold += self.config.threshold_step;
                        tracing::debug!("continuing, next checkpoint at {threshold}");
                        state = QuizState::Prompting;
                    } else {
                        state = QuizState::Stopped;
                    }
                }
                QuizState::Stopped => break SessionEnd::Stopped,
            }
        };

        tracing::debug!(
            score,
            presented,
            misses = misses.len(),
            recorded,
            "quiz session finished"
        );
        Ok(QuizOutcome {
            score,
            threshold,
            presented,
            misses,
            recorded,
            end,
        })
    }

    fn read_choice<I, W>(&self, input: &mut I, out: &mut W) -> Result<CheckpointChoice>
    where
        I: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        loop {
            write!(out, "1 - continue training\n2 - exit\nYour choice: ")?;
            out.flush()?;
            let line = input.next_line()?;
            let answer = line.trim();
            match answer.parse::<i64>() {
                Ok(CONTINUE_CHOICE) => return Ok(CheckpointChoice::Continue),
                Ok(_) => return Ok(CheckpointChoice::Stop),
                // Too large for i64 but still a number, so not a "1"
                Err(_) if is_integer(answer) => return Ok(CheckpointChoice::Stop),
                Err(_) if self.config.options.reprompt_on_malformed_choice => {
                    writeln!(out, "Please enter a number.")?;
                }
                Err(_) => return Err(DrillError::MalformedContinueChoice(line)),
            }
        }
    }
}

/// An optionally signed run of ASCII digits.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
