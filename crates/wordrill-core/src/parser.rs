//! TOML vocabulary parser.
//!
//! Loads word lists from TOML files and checks them for entries that can
//! never be answered correctly.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{normalize_answer, WordPair};
use crate::vocabulary::Vocabulary;

/// Intermediate TOML structure for vocabulary files.
#[derive(Debug, Deserialize)]
struct TomlVocabularyFile {
    #[serde(default)]
    vocabulary: TomlVocabularyHeader,
    #[serde(default)]
    words: Vec<TomlWord>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlVocabularyHeader {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlWord {
    source: String,
    target: String,
}

/// Parse a single TOML file into a `Vocabulary`.
pub fn parse_vocabulary(path: &Path) -> Result<Vocabulary> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read vocabulary file: {}", path.display()))?;

    parse_vocabulary_str(&content, path)
}

/// Parse a TOML string into a `Vocabulary` (useful for testing).
pub fn parse_vocabulary_str(content: &str, source_path: &Path) -> Result<Vocabulary> {
    let parsed: TomlVocabularyFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let name = parsed.vocabulary.name.unwrap_or_else(|| {
        source_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let pairs = parsed
        .words
        .iter()
        .map(|w| WordPair::new(&w.source, &w.target))
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("bad word entry in {}", source_path.display()))?;

    Vocabulary::new(name, pairs)
        .with_context(|| format!("bad vocabulary in {}", source_path.display()))
}

/// A warning from vocabulary validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The source word (if applicable).
    pub source: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a vocabulary for entries the quiz cannot score as correct.
pub fn validate_vocabulary(vocab: &Vocabulary) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if vocab.is_empty() {
        warnings.push(ValidationWarning {
            source: None,
            message: "vocabulary has no words".into(),
        });
    }

    // Answers are lowercased before comparison
    for (source, target) in vocab.pairs() {
        if normalize_answer(target) != target {
            warnings.push(ValidationWarning {
                source: Some(source.to_string()),
                message: format!("target {target:?} is not lowercase and can never be matched"),
            });
        }
    }

    warnings
}
