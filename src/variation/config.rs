//! Generator configuration

use super::candidates::LengthBounds;

/// Default minimum candidate length
pub const DEFAULT_MIN_LENGTH: usize = 6;

/// Default maximum candidate length
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Reference year used for the year catalog and triple suffixes
pub const DEFAULT_CURRENT_YEAR: u32 = 2026;

/// Seeds (from the front of the input) used for pairwise combinations
pub const DEFAULT_PAIR_CORE_SIZE: usize = 30;

/// Seeds (from the front of the pair core) used as the third word of triples
pub const DEFAULT_TRIPLE_CORE_SIZE: usize = 10;

/// Trailing year-catalog entries appended to pairwise combinations
pub const DEFAULT_RECENT_YEAR_COUNT: usize = 30;

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub leet_enabled: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub current_year: u32,
    pub pair_core_size: usize,
    pub triple_core_size: usize,
    pub recent_year_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            leet_enabled: false,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            current_year: DEFAULT_CURRENT_YEAR,
            pair_core_size: DEFAULT_PAIR_CORE_SIZE,
            triple_core_size: DEFAULT_TRIPLE_CORE_SIZE,
            recent_year_count: DEFAULT_RECENT_YEAR_COUNT,
        }
    }
}

impl GeneratorConfig {
    /// Config with the given leet toggle and length bounds, defaults elsewhere
    pub fn new(leet_enabled: bool, min_length: usize, max_length: usize) -> Self {
        Self {
            leet_enabled,
            min_length,
            max_length,
            ..Self::default()
        }
    }

    pub fn bounds(&self) -> LengthBounds {
        LengthBounds::new(self.min_length, self.max_length)
    }

    /// Whether the bounds can admit anything at all
    pub fn has_valid_bounds(&self) -> bool {
        self.min_length <= self.max_length
    }
}

/// Resolve textual length bounds.
///
/// A missing value takes its half of `fallback`. Any value that is not a
/// non-negative integer resets both bounds to the defaults. Inverted bounds
/// pass through untouched.
pub fn parse_length_bounds(
    min: Option<&str>,
    max: Option<&str>,
    fallback: (usize, usize),
) -> (usize, usize) {
    let parse = |value: Option<&str>, default: usize| match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<usize>(),
    };

    match (parse(min, fallback.0), parse(max, fallback.1)) {
        (Ok(min), Ok(max)) => (min, max),
        _ => {
            log::warn!(
                "invalid length bounds, using defaults {}..={}",
                DEFAULT_MIN_LENGTH,
                DEFAULT_MAX_LENGTH
            );
            (DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
        }
    }
}
