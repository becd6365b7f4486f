//! The `wordrill words` command.

use anyhow::Result;

use wordrill_core::config::DrillConfig;
use wordrill_core::parser::validate_vocabulary;

pub fn execute(config: &DrillConfig) -> Result<()> {
    let vocabulary = config.load_vocabulary()?;

    println!("Vocabulary: {} ({} words)", vocabulary.name(), vocabulary.len());
    for (source, target) in vocabulary.pairs() {
        println!("  {source} — {target}");
    }

    let warnings = validate_vocabulary(&vocabulary);
    for w in &warnings {
        let prefix = w
            .source
            .as_ref()
            .map(|s| format!("  [{s}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }
    if !warnings.is_empty() {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
