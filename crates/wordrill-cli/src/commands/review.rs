//! The `wordrill review` command.

use std::io::{self, Write};

use anyhow::Result;

use wordrill_core::config::DrillConfig;
use wordrill_core::{CorrectionOutcome, CorrectionSession, LineSource, MistakeStore, ReaderSource};

pub fn execute(config: &DrillConfig) -> Result<()> {
    let mut ledger = config.ledger();
    let mut input = ReaderSource::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    review(config, &mut ledger, &mut input, &mut out)?;
    Ok(())
}

pub fn review<L, I, W>(
    config: &DrillConfig,
    ledger: &mut L,
    input: &mut I,
    out: &mut W,
) -> wordrill_core::error::Result<CorrectionOutcome>
where
    L: MistakeStore + ?Sized,
    I: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let outcome = CorrectionSession::new(ledger)
        .with_options(config.options.clone())
        .run(input, out)?;

    if outcome.cleared {
        writeln!(
            out,
            "{} corrected word(s) removed from your mistakes.",
            outcome.corrected.len()
        )?;
    }
    Ok(outcome)
}
