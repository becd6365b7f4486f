//! The `wordrill practice` command.

use std::io::{self, Write};

use anyhow::Result;

use wordrill_core::config::DrillConfig;
use wordrill_core::{LineSource, MistakeStore, QuizOutcome, QuizSession, ReaderSource, Vocabulary};

pub fn execute(config: &DrillConfig, limit: Option<usize>) -> Result<()> {
    let vocabulary = config.load_vocabulary()?;
    let mut ledger = config.ledger();
    let mut input = ReaderSource::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    drill(config, &vocabulary, &mut ledger, limit, &mut input, &mut out)?;
    Ok(())
}

/// One quiz pass over the vocabulary in order, followed by a summary line.
pub fn drill<L, I, W>(
    config: &DrillConfig,
    vocabulary: &Vocabulary,
    ledger: &mut L,
    limit: Option<usize>,
    input: &mut I,
    out: &mut W,
) -> wordrill_core::error::Result<QuizOutcome>
where
    L: MistakeStore + ?Sized,
    I: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let sources = vocabulary.sources();
    let words = match limit {
        Some(n) => &sources[..n.min(sources.len())],
        None => &sources[..],
    };

    let outcome = QuizSession::new(vocabulary, ledger)
        .with_config(config.quiz_config())
        .run(words, input, out)?;

    if outcome.recorded > 0 {
        writeln!(
            out,
            "{} word(s) added to your mistakes for later review.",
            outcome.recorded
        )?;
    }
    Ok(outcome)
}
