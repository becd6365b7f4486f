//! Core data model types for wordrill.
//!
//! Word pairs, the behaviour switches shared by both sessions, and the
//! text normalization rules used when comparing answers.

use serde::{Deserialize, Serialize};

use crate::error::{DrillError, Result};

/// A source word and its expected translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    /// The word shown to the learner.
    pub source: String,
    /// The correct translation.
    pub target: String,
}

impl WordPair {
    /// Build a pair from untrimmed text. Both sides are trimmed and must
    /// be non-empty afterwards.
    pub fn new(source: &str, target: &str) -> Result<Self> {
        let source = source.trim();
        let target = target.trim();
        if source.is_empty() || target.is_empty() {
            return Err(DrillError::InvalidVocabulary(format!(
                "blank word in pair ({source:?}, {target:?})"
            )));
        }
        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
        })
    }
}

/// Behaviour switches for the sessions and the ledger.
///
/// Every default keeps the historical behaviour; each flag opts into the
/// hardened variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillOptions {
    /// Trim and lowercase answers in the correction session too.
    pub normalize_corrections: bool,
    /// Ask again on a non-numeric continue/stop answer instead of failing.
    pub reprompt_on_malformed_choice: bool,
    /// Drop pairs from the ledger once they are answered correctly during
    /// a correction session.
    pub clear_corrected: bool,
    /// Treat an undecodable ledger file as empty instead of failing.
    pub lenient_decoding: bool,
}

/// Quiz-style answer normalization: surrounding whitespace removed, then
/// lowercased.
pub fn normalize_answer(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Remove one trailing line terminator (`\n` or `\r\n`), leaving every
/// other character untouched.
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_pair_trims_both_sides() {
        let pair = WordPair::new("  город ", "city\n").unwrap();
        assert_eq!(pair.source, "город");
        assert_eq!(pair.target, "city");
    }

    #[test]
    fn word_pair_rejects_blank() {
        assert!(WordPair::new("", "city").is_err());
        assert!(WordPair::new("город", "   ").is_err());
    }

    #[test]
    fn answer_normalization() {
        assert_eq!(normalize_answer("  CiTy \t"), "city");
        assert_eq!(normalize_answer("ЯБЛОКО"), "яблоко");
    }

    #[test]
    fn line_terminators_only() {
        assert_eq!(strip_line_terminator("city\n"), "city");
        assert_eq!(strip_line_terminator("city\r\n"), "city");
        assert_eq!(strip_line_terminator(" City "), " City ");
        assert_eq!(strip_line_terminator("city"), "city");
    }

    #[test]
    fn options_default_to_historical_behaviour() {
        let opts = DrillOptions::default();
        assert!(!opts.normalize_corrections);
        assert!(!opts.reprompt_on_malformed_choice);
        assert!(!opts.clear_corrected);
        assert!(!opts.lenient_decoding);
    }
}
