//! The vocabulary store.

use indexmap::IndexMap;

use crate::error::{DrillError, Result};
use crate::model::WordPair;

/// Immutable source → target mapping that remembers insertion order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    name: String,
    words: IndexMap<String, String>,
}

impl Vocabulary {
    /// Build a vocabulary from pairs. Duplicate sources are rejected.
    pub fn new(name: impl Into<String>, pairs: impl IntoIterator<Item = WordPair>) -> Result<Self> {
        let mut words = IndexMap::new();
        for pair in pairs {
            if words.contains_key(&pair.source) {
                return Err(DrillError::InvalidVocabulary(format!(
                    "duplicate source word: {}",
                    pair.source
                )));
            }
            words.insert(pair.source, pair.target);
        }
        Ok(Self {
            name: name.into(),
            words,
        })
    }

    /// Build from `(source, target)` string slices.
    pub fn from_pairs(name: impl Into<String>, pairs: &[(&str, &str)]) -> Result<Self> {
        let pairs = pairs
            .iter()
            .map(|(s, t)| WordPair::new(s, t))
            .collect::<Result<Vec<_>>>()?;
        Self::new(name, pairs)
    }

    /// The built-in Russian → English word list.
    pub fn builtin() -> Self {
        let words = BUILTIN_WORDS
            .iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect();
        Self {
            name: "Russian → English".to_string(),
            words,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The expected translation for `source`.
    pub fn lookup(&self, source: &str) -> Result<&str> {
        self.words
            .get(source)
            .map(String::as_str)
            .ok_or_else(|| DrillError::NotFound(source.to_string()))
    }

    /// Source words in insertion order.
    pub fn sources(&self) -> Vec<&str> {
        self.words.keys().map(String::as_str).collect()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

const BUILTIN_WORDS: &[(&str, &str)] = &[
    ("город", "city"),
    ("вода", "water"),
    ("метро", "underground"),
    ("яблоко", "apple"),
    ("семья", "family"),
    ("сестра", "sister"),
    ("чай", "tea"),
    ("математика", "maths"),
    ("цветок", "flower"),
    ("дерево", "tree"),
    ("река", "river"),
    ("торт", "cake"),
    ("старый", "old"),
    ("маленький", "small"),
    ("кот", "cat"),
    ("мясо", "meat"),
    ("банк", "bank"),
    ("расписка", "note"),
    ("видео", "video"),
    ("книга", "book"),
];
