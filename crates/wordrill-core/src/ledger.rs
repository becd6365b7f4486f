//! The mistake ledger.
//!
//! Missed pairs are kept as two index-aligned logs: one line per missed
//! target word, one line per prompted source word. A target is recorded
//! at most once. Deduplication looks at the target log only, so a source
//! line that went missing is never restored by a later `record`.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{DrillError, Result};
use crate::model::{strip_line_terminator, WordPair};

/// Default file name of the target-word log.
pub const DEFAULT_TARGETS_FILE: &str = "word_error.txt";
/// Default file name of the source-word log.
pub const DEFAULT_SOURCES_FILE: &str = "translate_errors.txt";

/// Durable storage for missed word pairs.
pub trait MistakeStore {
    /// Record a missed pair. Returns `false` when `target` is already
    /// tracked and nothing was written.
    fn record(&mut self, target: &str, source: &str) -> Result<bool>;

    /// Read both logs in full.
    fn load(&self) -> Result<LedgerSnapshot>;

    /// Drop every aligned pair that appears in `corrected`. Unpaired tail
    /// lines of the longer log are kept.
    fn remove(&mut self, corrected: &[WordPair]) -> Result<()>;
}

/// Contents of both logs as stored, line terminators included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerSnapshot {
    pub targets: Vec<String>,
    pub sources: Vec<String>,
}

impl LedgerSnapshot {
    /// Index-aligned pairs, truncated to the shorter log, terminators
    /// stripped.
    pub fn pairs(&self) -> Vec<WordPair> {
        self.targets
            .iter()
            .zip(&self.sources)
            .map(|(t, s)| WordPair {
                source: strip_line_terminator(s).to_string(),
                target: strip_line_terminator(t).to_string(),
            })
            .collect()
    }

    /// The two logs have different lengths.
    pub fn is_desynced(&self) -> bool {
        self.targets.len() != self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty() && self.sources.is_empty()
    }

    /// Filter out corrected pairs, keeping the unpaired tail of the
    /// longer log as it was.
    fn without(&self, corrected: &[WordPair]) -> LedgerSnapshot {
        let corrected: HashSet<(&str, &str)> = corrected
            .iter()
            .map(|p| (p.target.as_str(), p.source.as_str()))
            .collect();
        let paired = self.targets.len().min(self.sources.len());
        let mut kept = LedgerSnapshot::default();

        for (t, s) in self.targets.iter().zip(&self.sources) {
            let key = (strip_line_terminator(t), strip_line_terminator(s));
            if !corrected.contains(&key) {
                kept.targets.push(t.clone());
                kept.sources.push(s.clone());
            }
        }
        kept.targets.extend(self.targets.iter().skip(paired).cloned());
        kept.sources.extend(self.sources.iter().skip(paired).cloned());
        kept
    }
}

// ---------------------------------------------------------------------------
// File-backed ledger
// ---------------------------------------------------------------------------

/// The two-file on-disk ledger.
#[derive(Debug, Clone)]
pub struct FileLedger {
    targets_path: PathBuf,
    sources_path: PathBuf,
    lenient: bool,
}

impl FileLedger {
    pub fn new(targets_path: impl Into<PathBuf>, sources_path: impl Into<PathBuf>) -> Self {
        Self {
            targets_path: targets_path.into(),
            sources_path: sources_path.into(),
            lenient: false,
        }
    }

    /// A ledger using the default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_TARGETS_FILE), dir.join(DEFAULT_SOURCES_FILE))
    }

    /// Treat undecodable files as empty logs.
    pub fn with_lenient_decoding(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn targets_path(&self) -> &Path {
        &self.targets_path
    }

    pub fn sources_path(&self) -> &Path {
        &self.sources_path
    }

    fn read_log(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(DrillError::LedgerRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text.split_inclusive('\n').map(str::to_string).collect()),
            Err(e) if self.lenient => {
                tracing::warn!("treating undecodable {} as empty: {}", path.display(), e);
                Ok(Vec::new())
            }
            Err(e) => Err(DrillError::LedgerRead {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidData, e),
            }),
        }
    }

    fn append_line(path: &Path, value: &str) -> Result<()> {
        let write = || -> io::Result<()> {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            file.write_all(value.as_bytes())?;
            file.write_all(b"\n")?;
            file.flush()
        };
        write().map_err(|source| DrillError::LedgerWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    fn rewrite(path: &Path, lines: &[String]) -> Result<()> {
        fs::write(path, lines.concat()).map_err(|source| DrillError::LedgerWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl MistakeStore for FileLedger {
    fn record(&mut self, target: &str, source: &str) -> Result<bool> {
        let targets = self.read_log(&self.targets_path)?;
        if targets.iter().any(|t| strip_line_terminator(t) == target) {
            tracing::debug!("'{target}' already in ledger, skipping");
            return Ok(false);
        }

        Self::append_line(&self.targets_path, target)?;
        Self::append_line(&self.sources_path, source)?;
        tracing::debug!("recorded mistake '{source}' -> '{target}'");
        Ok(true)
    }

    fn load(&self) -> Result<LedgerSnapshot> {
        let snapshot = LedgerSnapshot {
            targets: self.read_log(&self.targets_path)?,
            sources: self.read_log(&self.sources_path)?,
        };
        if snapshot.is_desynced() {
            tracing::warn!(
                "mistake logs out of sync: {} targets, {} sources",
                snapshot.targets.len(),
                snapshot.sources.len()
            );
        }
        Ok(snapshot)
    }

    fn remove(&mut self, corrected: &[WordPair]) -> Result<()> {
        if corrected.is_empty() {
            return Ok(());
        }
        let kept = self.load()?.without(corrected);
        Self::rewrite(&self.targets_path, &kept.targets)?;
        Self::rewrite(&self.sources_path, &kept.sources)?;
        tracing::debug!("cleared {} corrected mistakes", corrected.len());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory ledger
// ---------------------------------------------------------------------------

/// A single ordered list of pairs keyed by target. Cannot desync.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    pairs: Vec<WordPair>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }
}

impl MistakeStore for MemoryLedger {
    fn record(&mut self, target: &str, source: &str) -> Result<bool> {
        if self.pairs.iter().any(|p| p.target == target) {
            return Ok(false);
        }
        self.pairs.push(WordPair {
            source: source.to_string(),
            target: target.to_string(),
        });
        Ok(true)
    }

    fn load(&self) -> Result<LedgerSnapshot> {
        let (targets, sources) = self
            .pairs
            .iter()
            .map(|p| (p.target.clone(), p.source.clone()))
            .unzip();
        Ok(LedgerSnapshot { targets, sources })
    }

    fn remove(&mut self, corrected: &[WordPair]) -> Result<()> {
        self.pairs.retain(|p| !corrected.contains(p));
        Ok(())
    }
}
