//! The five generation passes
//!
//! Each pass takes ownership of the accumulator, extends it and hands it
//! back, so the engine composes them as a plain pipeline and each pass can
//! be exercised on its own.

use super::candidates::CandidateSet;
use super::catalog::{AffixCatalog, NUMBER_SPECIAL_COUNT, YEAR_SPECIAL_COUNT};
use super::config::GeneratorConfig;
use super::leet::to_leet;
use super::transform::{alternate_case, capitalize, reverse};

/// Separators joining the two words of a pairwise combination
const PAIR_SEPARATORS: &[&str] = &[".", "_", "@"];

/// Separators used for the extended pairwise combinations over the core seeds
const CORE_SEPARATORS: &[&str] = &["", ".", "_", "-", "@"];

/// All ordered pairs of positionally distinct words
fn ordered_pairs(words: &[String]) -> impl Iterator<Item = (&str, &str)> {
    words.iter().enumerate().flat_map(move |(i, w1)| {
        words
            .iter()
            .enumerate()
            .filter(move |(j, _)| *j != i)
            .map(move |(_, w2)| (w1.as_str(), w2.as_str()))
    })
}

/// Pass A: verbatim, lower, upper, capitalized and optionally leet forms
pub fn base_forms(mut set: CandidateSet, seeds: &[String], leet_enabled: bool) -> CandidateSet {
    let before = set.len();
    for word in seeds {
        set.add(word.as_str());
        set.add(word.to_lowercase());
        set.add(word.to_uppercase());
        set.add(capitalize(word));
        if leet_enabled {
            set.add(to_leet(word));
        }
    }
    log::debug!("base forms added {} candidates", set.len() - before);
    set
}

/// Pass B: every ordered seed pair, concatenated and joined by `.`, `_`, `@`
pub fn pairwise(mut set: CandidateSet, seeds: &[String]) -> CandidateSet {
    let before = set.len();
    for (w1, w2) in ordered_pairs(seeds) {
        set.add(format!("{}{}", w1, w2));
        for sep in PAIR_SEPARATORS {
            set.add(format!("{}{}{}", w1, sep, w2));
        }
    }
    log::debug!("pairwise combinations added {} candidates", set.len() - before);
    set
}

/// Pass C: append years, numbers and specials to everything accumulated so far
pub fn affixation(mut set: CandidateSet, catalog: &AffixCatalog) -> CandidateSet {
    let base = set.snapshot();
    let before = set.len();
    log::info!("applying affixation to {} base forms", base.len());

    let year_specials = catalog.leading_specials(YEAR_SPECIAL_COUNT);
    let number_specials = catalog.leading_specials(NUMBER_SPECIAL_COUNT);

    for word in &base {
        for year in catalog.years() {
            let stem = format!("{}{}", word, year);
            for c in year_specials {
                set.add(format!("{}{}", stem, c));
            }
            set.add(stem);
        }

        for number in catalog.numbers() {
            let stem = format!("{}{}", word, number);
            for c in number_specials {
                set.add(format!("{}{}", stem, c));
            }
            set.add(stem);
        }

        for c in catalog.specials() {
            set.add(format!("{}{}", word, c));
            set.add(format!("{}{}", c, word));
            for pattern in catalog.double_specials() {
                set.add(format!("{}{}", word, pattern));
            }
        }
    }

    log::debug!("affixation added {} candidates", set.len() - before);
    set
}

/// Pass D: separated pairs with year/special suffixes, plus triples, drawn
/// from the leading seeds only
pub fn core_combinations(
    mut set: CandidateSet,
    seeds: &[String],
    catalog: &AffixCatalog,
    config: &GeneratorConfig,
) -> CandidateSet {
    let before = set.len();
    let pair_core = &seeds[..seeds.len().min(config.pair_core_size)];
    let triple_core = &pair_core[..pair_core.len().min(config.triple_core_size)];
    let recent_years = catalog.recent_years(config.recent_year_count);
    let suffix_specials = catalog.leading_specials(YEAR_SPECIAL_COUNT);
    let year_suffix = config.current_year.to_string();

    for (w1, w2) in ordered_pairs(pair_core) {
        for sep in CORE_SEPARATORS {
            let combined = format!("{}{}{}", w1, sep, w2);
            for year in recent_years {
                set.add(format!("{}{}", combined, year));
            }
            for c in suffix_specials {
                set.add(format!("{}{}", combined, c));
            }
            set.add(combined);
        }

        for w3 in triple_core.iter().filter(|w3| w3.as_str() != w1 && w3.as_str() != w2) {
            let joined = format!("{}{}{}", w1, w2, w3);
            set.add(format!("{}.{}.{}", w1, w2, w3));
            set.add(format!("{}{}", joined, year_suffix));
            set.add(joined);
        }
    }

    log::debug!("core combinations added {} candidates", set.len() - before);
    set
}

/// Pass E: reversed and alternating-case forms of the raw seeds
pub fn reversal(mut set: CandidateSet, seeds: &[String]) -> CandidateSet {
    let before = set.len();
    for word in seeds {
        set.add(reverse(word));
        set.add(alternate_case(word, false));
        set.add(alternate_case(word, true));
    }
    log::debug!("reversal patterns added {} candidates", set.len() - before);
    set
}
