//! The `wordrill mistakes` command.

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

use wordrill_core::config::DrillConfig;
use wordrill_core::{LedgerSnapshot, MistakeStore, WordPair};

#[derive(Serialize)]
struct MistakesView<'a> {
    pairs: &'a [WordPair],
    targets: usize,
    sources: usize,
    in_sync: bool,
}

pub fn execute(config: &DrillConfig, format: &str) -> Result<()> {
    let snapshot = config.ledger().load()?;
    print!("{}", render(&snapshot, format)?);
    Ok(())
}

fn render(snapshot: &LedgerSnapshot, format: &str) -> Result<String> {
    let pairs = snapshot.pairs();

    let rendered = match format {
        "json" => {
            let view = MistakesView {
                pairs: &pairs,
                targets: snapshot.targets.len(),
                sources: snapshot.sources.len(),
                in_sync: !snapshot.is_desynced(),
            };
            format!("{}\n", serde_json::to_string_pretty(&view)?)
        }
        "text" => {
            if pairs.is_empty() {
                return Ok("No mistakes recorded.\n".to_string());
            }
            let mut table = Table::new();
            table.set_header(vec!["#", "Word", "Translation"]);
            for (i, pair) in pairs.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(&pair.source),
                    Cell::new(&pair.target),
                ]);
            }
            let mut text = format!("{table}\n");
            if snapshot.is_desynced() {
                text.push_str(&format!(
                    "Warning: mistake logs out of sync ({} words, {} translations); extra lines are ignored.\n",
                    snapshot.sources.len(),
                    snapshot.targets.len()
                ));
            }
            text
        }
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(targets: &[&str], sources: &[&str]) -> LedgerSnapshot {
        LedgerSnapshot {
            targets: targets.iter().map(|s| s.to_string()).collect(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn text_lists_pairs() {
        let text = render(&snapshot(&["city\n"], &["город\n"]), "text").unwrap();
        assert!(text.contains("город"));
        assert!(text.contains("city"));
        assert!(!text.contains("out of sync"));
    }

    #[test]
    fn text_warns_on_desync() {
        let text = render(&snapshot(&["city\n", "tree\n"], &["город\n"]), "text").unwrap();
        assert!(text.contains("out of sync"));
        assert!(!text.contains("tree"));
    }

    #[test]
    fn empty_text() {
        let text = render(&LedgerSnapshot::default(), "text").unwrap();
        assert_eq!(text, "No mistakes recorded.\n");
    }

    #[test]
    fn json_output() {
        let json = render(&snapshot(&["city\n"], &["город\n"]), "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pairs"][0]["target"], "city");
        assert_eq!(value["pairs"][0]["source"], "город");
        assert_eq!(value["in_sync"], true);
    }

    #[test]
    fn unknown_format_fails() {
        assert!(render(&LedgerSnapshot::default(), "xml").is_err());
    }
}
