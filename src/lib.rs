//! wordforge: targeted password wordlist generation
//!
//! Turns a small set of personal facts about a target (names, dates, pets,
//! interests, keywords) into a deduplicated candidate wordlist for password
//! auditing.
//!
//! - [`variation`] holds the generation engine
//! - [`profile`] collects and flattens target intel into seed tokens
//! - [`output`] and [`report`] persist and summarise a run
//! - [`history`] records runs across invocations

pub mod cli;
pub mod history;
pub mod output;
pub mod profile;
pub mod report;
pub mod variation;

pub use profile::{ProfileError, TargetProfile};
pub use report::GenerationReport;
pub use variation::{generate_variations, GeneratorConfig, VariationEngine};
