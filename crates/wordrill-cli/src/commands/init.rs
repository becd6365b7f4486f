//! The `wordrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("wordrill.toml").exists() {
        println!("wordrill.toml already exists, skipping.");
    } else {
        std::fs::write("wordrill.toml", SAMPLE_CONFIG)?;
        println!("Created wordrill.toml");
    }

    let vocab_path = std::path::Path::new("vocabulary.toml");
    if vocab_path.exists() {
        println!("vocabulary.toml already exists, skipping.");
    } else {
        std::fs::write(vocab_path, SAMPLE_VOCABULARY)?;
        println!("Created vocabulary.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add your own words to vocabulary.toml");
    println!("  2. Run: wordrill words");
    println!("  3. Run: wordrill");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# wordrill configuration

vocabulary = "vocabulary.toml"
ledger_dir = "."
targets_file = "word_error.txt"
sources_file = "translate_errors.txt"
initial_threshold = 10
threshold_step = 5

[options]
# Trim and lowercase answers when working on mistakes
normalize_corrections = false
# Ask again instead of failing on a non-numeric continue/stop answer
reprompt_on_malformed_choice = false
# Remove mistakes once they are answered correctly
clear_corrected = false
# Treat unreadable mistake logs as empty
lenient_decoding = false
"#;

const SAMPLE_VOCABULARY: &str = r#"[vocabulary]
name = "Russian → English"

[[words]]
source = "город"
target = "city"

[[words]]
source = "вода"
target = "water"

[[words]]
source = "яблоко"
target = "apple"

[[words]]
source = "книга"
target = "book"

[[words]]
source = "кот"
target = "cat"
"#;
