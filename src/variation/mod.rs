//! Variation engine for targeted wordlist generation
//!
//! Expands a handful of personal-fact seed tokens (names, dates, pets,
//! keywords) into a large deduplicated set of password candidates.
//!
//! Generation runs five passes over a single owned accumulator:
//! - base forms: verbatim, lower, upper, capitalized and leet
//! - pairwise combinations of every ordered seed pair
//! - affixation of years, numbers and specials onto everything so far
//! - separated pairs and triples over the leading "core" seeds
//! - reversed and alternating-case seeds
//!
//! Every insertion goes through the length filter in [`CandidateSet::add`].

mod candidates;
mod catalog;
mod config;
mod engine;
mod leet;
mod passes;
mod transform;

pub use candidates::{CandidateSet, LengthBounds};
pub use catalog::AffixCatalog;
pub use config::{
    parse_length_bounds, GeneratorConfig, DEFAULT_CURRENT_YEAR, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
    DEFAULT_PAIR_CORE_SIZE, DEFAULT_RECENT_YEAR_COUNT, DEFAULT_TRIPLE_CORE_SIZE,
};
pub use engine::{generate_variations, VariationEngine};
pub use leet::to_leet;
pub use passes::{affixation, base_forms, core_combinations, pairwise, reversal};
pub use transform::{alternate_case, capitalize, reverse};
