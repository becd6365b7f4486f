//! wordrill-core — Quiz session engine and mistake ledger.
//!
//! This crate holds the vocabulary store, the two-log mistake ledger, and
//! the quiz and correction sessions that drive a drill over an injected
//! line-based input.

pub mod config;
pub mod correction;
pub mod error;
pub mod input;
pub mod ledger;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod vocabulary;

pub use correction::{CorrectionOutcome, CorrectionSession};
pub use error::DrillError;
pub use input::{LineSource, ReaderSource, ScriptedInput};
pub use ledger::{FileLedger, LedgerSnapshot, MemoryLedger, MistakeStore};
pub use model::{DrillOptions, WordPair};
pub use quiz::{QuizConfig, QuizOutcome, QuizSession, SessionEnd};
pub use vocabulary::Vocabulary;
