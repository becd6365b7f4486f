//! The interactive menu, run when no subcommand is given.

use std::io::{self, Write};

use anyhow::Result;

use wordrill_core::config::DrillConfig;
use wordrill_core::{DrillError, LineSource, ReaderSource};

use super::{practice, review};

const GREETING: &str = "Welcome!\n\
We will show you a word and you type its translation.\n\
Press Enter to continue: ";

const MENU: &str = "1 - practice\n2 - work on mistakes\n3 - exit\nEnter a number: ";

pub fn execute(config: &DrillConfig) -> Result<()> {
    let mut input = ReaderSource::new(io::stdin().lock());
    let mut out = io::stdout().lock();
    run(config, &mut input, &mut out)
}

/// Menu loop. Running out of input anywhere ends the program quietly.
pub fn run<I, W>(config: &DrillConfig, input: &mut I, out: &mut W) -> Result<()>
where
    I: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let vocabulary = config.load_vocabulary()?;
    let mut ledger = config.ledger();

    write!(out, "{GREETING}")?;
    out.flush()?;
    if ended(input.next_line())?.is_none() {
        return Ok(());
    }

    loop {
        write!(out, "{MENU}")?;
        out.flush()?;
        let Some(choice) = ended(input.next_line())? else {
            writeln!(out)?;
            return Ok(());
        };

        let step = match choice.trim() {
            "1" => practice::drill(config, &vocabulary, &mut ledger, None, input, out).map(drop),
            "2" => review::review(config, &mut ledger, input, out).map(drop),
            "3" => {
                writeln!(out, "You have left the program.")?;
                return Ok(());
            }
            other => {
                tracing::debug!("unknown menu choice {other:?}");
                writeln!(out, "unknown command")?;
                Ok(())
            }
        };
        if ended(step)?.is_none() {
            writeln!(out)?;
            return Ok(());
        }
    }
}

/// `Ok(None)` when the learner closed the input stream.
fn ended<T>(result: Result<T, DrillError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_end_of_input() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordrill_core::{MistakeStore, ScriptedInput};

    fn config_in(dir: &std::path::Path) -> DrillConfig {
        DrillConfig {
            ledger_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    fn run_menu(config: &DrillConfig, lines: &[&str]) -> (Result<()>, String) {
        let mut input = ScriptedInput::new(lines.iter().copied());
        let mut out = Vec::new();
        let result = run(config, &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn unknown_commands_then_exit() {
        let dir = tempfile::tempdir().unwrap();
        let (result, out) = run_menu(&config_in(dir.path()), &["", "0", "abc", "3"]);
        result.unwrap();
        assert_eq!(out.matches("unknown command").count(), 2);
        assert!(out.contains("You have left the program."));
    }

    #[test]
    fn practice_then_exit() {
        let dir = tempfile::tempdir().unwrap();
        let config = DrillConfig {
            initial_threshold: 2,
            ..config_in(dir.path())
        };
        let (result, out) = run_menu(&config, &["", "1", "city", "water", "2", "3"]);
        result.unwrap();
        assert!(out.contains("Your score: 2"));
        assert!(out.contains("You have left the program."));
    }

    #[test]
    fn review_with_empty_ledger_returns_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        let (result, out) = run_menu(&config_in(dir.path()), &["", "2", "3"]);
        result.unwrap();
        assert!(out.contains("No mistakes recorded yet."));
        assert_eq!(out.matches("Enter a number:").count(), 2);
    }

    #[test]
    fn end_of_input_mid_session_exits_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let (result, _) = run_menu(&config, &["", "1", "wrong"]);
        result.unwrap();

        let snapshot = config.ledger().load().unwrap();
        assert_eq!(snapshot.targets, vec!["city\n"]);
    }

    #[test]
    fn malformed_choice_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = DrillConfig {
            initial_threshold: 1,
            ..config_in(dir.path())
        };
        let (result, _) = run_menu(&config, &["", "1", "city", "yes"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("expected a number"));
    }
}
