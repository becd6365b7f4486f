//! Drill error types.
//!
//! Every failure the quiz engine and mistake ledger can surface. The CLI
//! wraps these in `anyhow` and terminates with a message.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the vocabulary, the ledger, and the sessions.
#[derive(Debug, Error)]
pub enum DrillError {
    /// A source word was looked up that the vocabulary does not contain.
    #[error("word not found in vocabulary: {0}")]
    NotFound(String),

    /// The answer at a threshold checkpoint was not an integer.
    #[error("expected a number at the continue/stop prompt, got {0:?}")]
    MalformedContinueChoice(String),

    /// A ledger file exists but could not be read or decoded.
    #[error("failed to read mistake log {path}: {source}")]
    LedgerRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Appending to (or rewriting) a ledger file failed.
    #[error("failed to write mistake log {path}: {source}")]
    LedgerWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input capability has no more lines.
    #[error("end of input")]
    EndOfInput,

    /// A vocabulary was built from blank words or duplicate sources.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// Console I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DrillError {
    /// Returns `true` when the learner simply ran out of input, which the
    /// menu treats as a clean exit rather than a failure.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, DrillError::EndOfInput)
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
