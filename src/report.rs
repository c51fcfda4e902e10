//! Run summary for the operator
//!
//! Mirrors the scanner-style banner output: a padded label column, a `│`
//! divider and colored values, written to stderr so the wordlist itself can
//! go to stdout or a file untouched.

use crate::variation::GeneratorConfig;
use console::style;
use serde::{Deserialize, Serialize};

/// Default number of candidates shown in the preview
pub const DEFAULT_PREVIEW: usize = 50;

const DIVIDER_TOP: &str =
    "─────────────────────────────────────────┬──────────────────────────────────────────\n";
const DIVIDER_BOTTOM: &str =
    "─────────────────────────────────────────┴──────────────────────────────────────────\n";
const RULE: &str =
    "───────────────────────────────────────────────────────────────────────────────────\n";

/// Summary of one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub target_name: String,
    pub seed_count: usize,
    pub leet_enabled: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub count: usize,
    /// Where the wordlist was written, if it was
    pub output: Option<String>,
    pub preview: Vec<String>,
}

impl GenerationReport {
    pub fn new(
        target_name: String,
        seeds: &[String],
        config: &GeneratorConfig,
        candidates: &[String],
        preview_len: usize,
    ) -> Self {
        Self {
            target_name,
            seed_count: seeds.len(),
            leet_enabled: config.leet_enabled,
            min_length: config.min_length,
            max_length: config.max_length,
            count: candidates.len(),
            output: None,
            preview: candidates.iter().take(preview_len).cloned().collect(),
        }
    }

    /// Record the path the wordlist was saved to
    pub fn set_output(&mut self, path: String) {
        self.output = Some(path);
    }

    /// Styled terminal summary
    pub fn generate_output(&self) -> String {
        let mut output = String::new();

        output.push_str(DIVIDER_TOP);
        output.push_str(&format!(
            " 🎯  {:<22}│ {}\n",
            "Target",
            style(&self.target_name).cyan()
        ));
        output.push_str(&format!(
            " 🌱  {:<22}│ {}\n",
            "Seed Tokens",
            style(self.seed_count).green()
        ));
        output.push_str(&format!(
            " 🔣  {:<22}│ {}\n",
            "Leet Speak",
            if self.leet_enabled {
                style("enabled").green()
            } else {
                style("disabled").dim()
            }
        ));
        output.push_str(&format!(
            " 📏  {:<22}│ {}..={}\n",
            "Length Bounds", self.min_length, self.max_length
        ));
        output.push_str(&format!(
            " ✅  {:<22}│ {}\n",
            "Candidates",
            style(self.count).green()
        ));
        if let Some(ref path) = self.output {
            output.push_str(&format!(
                " 💾  {:<22}│ {}\n",
                "Saved To",
                style(path).cyan()
            ));
        }
        output.push_str(DIVIDER_BOTTOM);

        if !self.preview.is_empty() {
            output.push_str(&format!(" 🔍  {}\n", style("Preview").bright().white()));
            output.push_str(RULE);
            for word in &self.preview {
                output.push_str(&format!("     {}\n", style(word).dim()));
            }
            if self.count > self.preview.len() {
                output.push_str(&format!(
                    "     ... and {} more\n",
                    self.count - self.preview.len()
                ));
            }
            output.push_str(RULE);
        }

        output
    }

    /// Generate JSON output
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Tool banner
pub fn banner() -> String {
    let mut output = String::new();
    output.push_str(RULE);
    output.push_str(&format!(
        "  {}  {}\n",
        style("wordforge").bold().red(),
        style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
    ));
    output.push_str("  targeted wordlist generation from personal intel\n");
    output.push_str(RULE);
    output
}

/// Output report to stderr
pub fn output_report(report: &GenerationReport) {
    eprint!("{}", report.generate_output());
}
