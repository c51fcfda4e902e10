//! Run history
//!
//! Each successful run can be recorded as one JSON object per line in a
//! history file: who was targeted, how many candidates came out, and when.

use crate::report::GenerationReport;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use console::style;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

const RULE: &str =
    "───────────────────────────────────────────────────────────────────────────────────\n";

/// One recorded generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub target_name: String,
    pub word_count: usize,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Entry stamped with the current time
    pub fn new(target_name: impl Into<String>, word_count: usize) -> Self {
        Self {
            target_name: target_name.into(),
            word_count,
            created_at: Utc::now(),
        }
    }

    pub fn from_report(report: &GenerationReport) -> Self {
        Self::new(report.target_name.clone(), report.count)
    }
}

/// Append an entry, creating the file if needed
pub fn append_history(path: &Path, entry: &HistoryEntry) -> Result<()> {
    let mut line = serde_json::to_string(entry).context("Failed to encode history entry")?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open history file {}", path.display()))?;
    file.write_all(line.as_bytes())
        .with_context(|| format!("Failed to write history file {}", path.display()))?;

    log::debug!("recorded run for {} in {}", entry.target_name, path.display());
    Ok(())
}

/// Load every entry, newest first.
///
/// A missing file is an empty history. Lines that do not parse are skipped
/// with a warning.
pub fn load_history(path: &Path) -> Result<Vec<HistoryEntry>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read history file {}", path.display()))
        }
    };

    let mut entries = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<HistoryEntry>(line) {
            Ok(entry) => entries.push(entry),
            Err(e) => log::warn!(
                "skipping history line {} in {}: {}",
                index + 1,
                path.display(),
                e
            ),
        }
    }

    // file order is oldest first; the stable sort keeps later appends ahead on ties
    entries.reverse();
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(entries)
}

/// Styled listing of recorded runs
pub fn generate_history_output(entries: &[HistoryEntry]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        " 📜  {} ({})\n",
        style("Generation History").bright().white(),
        entries.len()
    ));
    output.push_str(RULE);
    if entries.is_empty() {
        output.push_str(&format!("     {}\n", style("no runs recorded").dim()));
    }
    for entry in entries {
        output.push_str(&format!(
            " {}  │ {:<30} │ {} words\n",
            style(entry.created_at.format("%Y-%m-%d %H:%M:%S UTC")).dim(),
            style(&entry.target_name).cyan(),
            style(entry.word_count).green()
        ));
    }
    output.push_str(RULE);
    output
}

pub fn history_to_json(entries: &[HistoryEntry]) -> String {
    serde_json::to_string_pretty(entries).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(name: &str, count: usize, hour: u32) -> HistoryEntry {
        HistoryEntry {
            target_name: name.to_string(),
            word_count: count,
            created_at: Utc.with_ymd_and_hms(2026, 10, 18, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_history(&dir.path().join("none.jsonl")).unwrap().is_empty());
    }

    #[test]
    fn test_append_and_load_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.jsonl");
        append_history(&path, &entry("Aryan", 5118, 9)).unwrap();
        append_history(&path, &entry("XCorp", 42, 11)).unwrap();
        append_history(&path, &entry("Sam", 7, 10)).unwrap();

        let names: Vec<_> = load_history(&path)
            .unwrap()
            .into_iter()
            .map(|e| e.target_name)
            .collect();
        assert_eq!(names, vec!["XCorp", "Sam", "Aryan"]);
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_ties_keep_latest_append_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.jsonl");
        append_history(&path, &entry("first", 1, 9)).unwrap();
        append_history(&path, &entry("second", 2, 9)).unwrap();
        assert_eq!(load_history(&path).unwrap()[0].target_name, "second");
    }

    #[test]
    fn test_bad_lines_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.jsonl");
        append_history(&path, &entry("Aryan", 10, 9)).unwrap();
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "not json\n").unwrap();
        assert_eq!(load_history(&path).unwrap(), vec![entry("Aryan", 10, 9)]);
    }

    #[test]
    fn test_entry_json_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&history_to_json(&[entry("Aryan", 10, 9)])).unwrap();
        assert_eq!(json[0]["targetName"], "Aryan");
        assert_eq!(json[0]["wordCount"], 10);
        assert_eq!(json[0]["createdAt"], "2026-10-18T09:00:00Z");
    }

    #[test]
    fn test_generate_history_output() {
        let output =
            console::strip_ansi_codes(&generate_history_output(&[entry("Aryan", 10, 9)]))
                .to_string();
        assert!(output.contains("Generation History (1)"));
        assert!(output.contains("2026-10-18 09:00:00 UTC"));
        assert!(output.contains("Aryan"));
        assert!(output.contains("10 words"));

        let empty = console::strip_ansi_codes(&generate_history_output(&[])).to_string();
        assert!(empty.contains("no runs recorded"));
    }
}
