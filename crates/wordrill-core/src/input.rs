//! Line-based input capability used by both sessions.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::{DrillError, Result};

/// Something that hands out one line of learner input at a time.
pub trait LineSource {
    /// The next line without its terminator. Fails with
    /// [`DrillError::EndOfInput`] once exhausted.
    fn next_line(&mut self) -> Result<String>;
}

/// Reads lines from any buffered reader, usually locked stdin.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(DrillError::EndOfInput);
        }
        let trimmed = crate::model::strip_line_terminator(&line).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// A fixed script of answers. Counts how many lines were consumed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    reads: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            reads: 0,
        }
    }

    /// Number of successful `next_line` calls so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn next_line(&mut self) -> Result<String> {
        let line = self.lines.pop_front().ok_or(DrillError::EndOfInput)?;
        self.reads += 1;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_source_strips_terminators() {
        let mut src = ReaderSource::new("city\r\n  water \n last".as_bytes());
        assert_eq!(src.next_line().unwrap(), "city");
        assert_eq!(src.next_line().unwrap(), "  water ");
        assert_eq!(src.next_line().unwrap(), " last");
        assert!(src.next_line().unwrap_err().is_end_of_input());
    }

    #[test]
    fn scripted_input_counts_reads() {
        let mut src = ScriptedInput::new(["a", "b"]);
        assert_eq!(src.next_line().unwrap(), "a");
        assert_eq!(src.reads(), 1);
        assert_eq!(src.remaining(), 1);
        src.next_line().unwrap();
        assert!(matches!(src.next_line(), Err(DrillError::EndOfInput)));
        assert_eq!(src.reads(), 2);
    }
}
