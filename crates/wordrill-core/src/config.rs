//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ledger::{FileLedger, DEFAULT_SOURCES_FILE, DEFAULT_TARGETS_FILE};
use crate::model::DrillOptions;
use crate::parser::parse_vocabulary;
use crate::quiz::{QuizConfig, DEFAULT_INITIAL_THRESHOLD, DEFAULT_THRESHOLD_STEP};
use crate::vocabulary::Vocabulary;

/// Overrides `ledger_dir` when set.
pub const LEDGER_DIR_ENV: &str = "WORDRILL_LEDGER_DIR";

/// Top-level wordrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Vocabulary TOML file. The built-in list is used when unset.
    #[serde(default)]
    pub vocabulary: Option<PathBuf>,
    /// Directory holding the mistake logs.
    #[serde(default = "default_ledger_dir")]
    pub ledger_dir: PathBuf,
    /// File name of the target-word log.
    #[serde(default = "default_targets_file")]
    pub targets_file: String,
    /// File name of the source-word log.
    #[serde(default = "default_sources_file")]
    pub sources_file: String,
    /// Score of the first continue/stop checkpoint.
    #[serde(default = "default_initial_threshold")]
    pub initial_threshold: u32,
    /// Threshold increase after each "continue".
    #[serde(default = "default_threshold_step")]
    pub threshold_step: u32,
    #[serde(default)]
    pub options: DrillOptions,
}

fn default_ledger_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_targets_file() -> String {
    DEFAULT_TARGETS_FILE.to_string()
}
fn default_sources_file() -> String {
    DEFAULT_SOURCES_FILE.to_string()
}
fn default_initial_threshold() -> u32 {
    DEFAULT_INITIAL_THRESHOLD
}
fn default_threshold_step() -> u32 {
    DEFAULT_THRESHOLD_STEP
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            vocabulary: None,
            ledger_dir: default_ledger_dir(),
            targets_file: default_targets_file(),
            sources_file: default_sources_file(),
            initial_threshold: default_initial_threshold(),
            threshold_step: default_threshold_step(),
            options: DrillOptions::default(),
        }
    }
}

impl DrillConfig {
    /// The file-backed ledger described by this config.
    pub fn ledger(&self) -> FileLedger {
        FileLedger::new(
            self.ledger_dir.join(&self.targets_file),
            self.ledger_dir.join(&self.sources_file),
        )
        .with_lenient_decoding(self.options.lenient_decoding)
    }

    /// Load the configured vocabulary, or the built-in one.
    pub fn load_vocabulary(&self) -> Result<Vocabulary> {
        match &self.vocabulary {
            Some(path) => parse_vocabulary(path),
            None => Ok(Vocabulary::builtin()),
        }
    }

    pub fn quiz_config(&self) -> QuizConfig {
        QuizConfig {
            initial_threshold: self.initial_threshold,
            threshold_step: self.threshold_step,
            options: self.options.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.initial_threshold == 0 {
            anyhow::bail!("initial_threshold must be at least 1");
        }
        if self.threshold_step == 0 {
            anyhow::bail!("threshold_step must be at least 1");
        }
        if self.targets_file == self.sources_file {
            anyhow::bail!("targets_file and sources_file must differ");
        }
        Ok(())
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `wordrill.toml` in the current directory
/// 2. `~/.config/wordrill/config.toml`
///
/// Environment variable override: `WORDRILL_LEDGER_DIR`.
pub fn load_config() -> Result<DrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<DrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("wordrill.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = toml::from_str::<DrillConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            // Relative vocabulary paths are relative to the config file
            config.vocabulary = config.vocabulary.take().map(|vocab| match path.parent() {
                Some(base) if vocab.is_relative() => base.join(vocab),
                _ => vocab,
            });
            config
        }
        None => DrillConfig::default(),
    };

    if let Ok(dir) = std::env::var(LEDGER_DIR_ENV) {
        if !dir.is_empty() {
            config.ledger_dir = PathBuf::from(dir);
        }
    }

    config.validate()?;
    tracing::debug!(?config_path, ledger_dir = %config.ledger_dir.display(), "config loaded");
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("wordrill"))
}
