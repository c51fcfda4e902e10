//! # CLI Argument Definitions
//!
//! Command-line surface of the `wordforge` binary, built on `clap` derive.

use crate::output::DEFAULT_OUTPUT;
use crate::profile::{split_csv, ProfileError, TargetProfile};
use crate::report::DEFAULT_PREVIEW;
use crate::variation::{
    parse_length_bounds, GeneratorConfig, DEFAULT_CURRENT_YEAR, DEFAULT_PAIR_CORE_SIZE,
    DEFAULT_RECENT_YEAR_COUNT, DEFAULT_TRIPLE_CORE_SIZE,
};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "wordforge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a targeted password wordlist from personal intel")]
pub struct Cli {
    /// JSON target profile (camelCase keys, e.g. "firstName", "petName")
    #[arg(short, long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Seed token, appended after the profile's seeds (repeatable)
    #[arg(short = 'w', long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Extra comma separated keywords
    #[arg(short, long, value_name = "CSV")]
    pub keywords: Option<String>,

    /// Prompt for profile fields, leet and length bounds
    #[arg(short, long, conflicts_with = "profile")]
    pub interactive: bool,

    /// Add leet-speak forms of each seed
    #[arg(long, overrides_with = "no_leet")]
    pub leet: bool,

    /// Skip leet-speak forms even if the profile asks for them
    #[arg(long, overrides_with = "leet")]
    pub no_leet: bool,

    /// Shortest candidate kept [default: profile "minLen", else 6]
    #[arg(long, value_name = "N")]
    pub min_length: Option<String>,

    /// Longest candidate kept [default: profile "maxLen", else 20]
    #[arg(long, value_name = "N")]
    pub max_length: Option<String>,

    /// Reference year for the year catalog and triple suffixes
    #[arg(long, value_name = "YEAR", default_value_t = DEFAULT_CURRENT_YEAR)]
    pub year: u32,

    /// Leading seeds used for separated pairs
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PAIR_CORE_SIZE)]
    pub pair_core: usize,

    /// Leading seeds used as the third word of triples
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TRIPLE_CORE_SIZE)]
    pub triple_core: usize,

    /// Wordlist destination, overwritten if present
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Append a record of each run to this JSON lines file
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// List the runs recorded in --history, newest first, and exit
    #[arg(long, requires = "history")]
    pub show_history: bool,

    /// Print the run summary (or history) as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Number of candidates shown in the summary preview
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PREVIEW)]
    pub preview: usize,

    /// Suppress the banner and summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Generator settings: flags first, then the profile, then defaults.
    ///
    /// Length values are parsed leniently; anything non-numeric resets both
    /// bounds to the defaults with a warning.
    pub fn generator_config(&self, profile: &TargetProfile) -> GeneratorConfig {
        let leet_enabled = if self.leet {
            true
        } else if self.no_leet {
            false
        } else {
            profile.use_leet.unwrap_or(false)
        };
        let (min_length, max_length) = parse_length_bounds(
            self.min_length.as_deref(),
            self.max_length.as_deref(),
            profile.length_bounds(),
        );

        GeneratorConfig {
            leet_enabled,
            min_length,
            max_length,
            current_year: self.year,
            pair_core_size: self.pair_core,
            triple_core_size: self.triple_core,
            recent_year_count: DEFAULT_RECENT_YEAR_COUNT,
        }
    }

    /// Profile from `--profile` (or empty), with `--keywords` merged in
    pub fn load_profile(&self) -> Result<TargetProfile, ProfileError> {
        let mut profile = match self.profile {
            Some(ref path) => TargetProfile::from_path(path)?,
            None => TargetProfile::default(),
        };
        if let Some(ref keywords) = self.keywords {
            profile.add_keywords(split_csv(keywords));
        }
        Ok(profile)
    }

    /// Seed tokens given directly with `--word`, trimmed, blanks dropped
    pub fn extra_seeds(&self) -> Vec<String> {
        self.words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["wordforge"]);
        assert_eq!(
            cli.generator_config(&TargetProfile::default()),
            GeneratorConfig::default()
        );
        assert_eq!(cli.output, PathBuf::from("wordlist.txt"));
        assert_eq!(cli.preview, 50);
        assert!(!cli.interactive);
        assert!(cli.history.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "wordforge", "-w", "Sam", "--word", " ", "-w", "Rex", "--leet", "--min-length", "4",
            "--max-length", "12", "--year", "2030", "-vv",
        ]);
        let config = cli.generator_config(&TargetProfile::default());
        assert!(config.leet_enabled);
        assert_eq!((config.min_length, config.max_length), (4, 12));
        assert_eq!(config.current_year, 2030);
        assert_eq!(cli.extra_seeds(), vec!["Sam", "Rex"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_keywords_merge_into_profile() {
        let cli = Cli::parse_from(["wordforge", "-k", "red, blue"]);
        let profile = cli.load_profile().unwrap();
        assert_eq!(profile.seed_tokens(), vec!["red", "blue"]);
    }

    #[test]
    fn test_interactive_conflicts_with_profile() {
        assert!(Cli::try_parse_from(["wordforge", "-i", "-p", "target.json"]).is_err());
    }

    #[test]
    fn test_profile_settings_apply_under_flags() {
        let profile = TargetProfile {
            use_leet: Some(true),
            min_len: Some(8),
            max_len: Some(16),
            ..TargetProfile::default()
        };

        let config = Cli::parse_from(["wordforge"]).generator_config(&profile);
        assert!(config.leet_enabled);
        assert_eq!((config.min_length, config.max_length), (8, 16));

        let cli = Cli::parse_from(["wordforge", "--no-leet", "--max-length", "12"]);
        let config = cli.generator_config(&profile);
        assert!(!config.leet_enabled);
        assert_eq!((config.min_length, config.max_length), (8, 12));
    }

    #[test]
    fn test_last_leet_flag_wins() {
        let cli = Cli::parse_from(["wordforge", "--no-leet", "--leet"]);
        assert!(cli.generator_config(&TargetProfile::default()).leet_enabled);
        let cli = Cli::parse_from(["wordforge", "--leet", "--no-leet"]);
        assert!(!cli.generator_config(&TargetProfile::default()).leet_enabled);
    }

    #[test]
    fn test_non_numeric_length_falls_back() {
        let cli = Cli::parse_from(["wordforge", "--min-length", "six", "--max-length", "12"]);
        let config = cli.generator_config(&TargetProfile::default());
        assert_eq!((config.min_length, config.max_length), (6, 20));
    }

    #[test]
    fn test_show_history_requires_file() {
        assert!(Cli::try_parse_from(["wordforge", "--show-history"]).is_err());
        let cli = Cli::parse_from(["wordforge", "--show-history", "--history", "runs.jsonl"]);
        assert!(cli.show_history);
    }
}
