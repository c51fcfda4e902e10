//! Variation engine: runs the five passes over one fresh accumulator

use super::candidates::CandidateSet;
use super::catalog::AffixCatalog;
use super::config::GeneratorConfig;
use super::passes;

/// Expands seed tokens into the deduplicated candidate wordlist
#[derive(Debug, Clone)]
pub struct VariationEngine {
    config: GeneratorConfig,
    catalog: AffixCatalog,
}

impl VariationEngine {
    /// Create an engine; the affix catalog is derived from `config.current_year`
    pub fn new(config: GeneratorConfig) -> Self {
        let catalog = AffixCatalog::new(config.current_year);
        Self { config, catalog }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &AffixCatalog {
        &self.catalog
    }

    /// Run every pass and return the candidates in ascending order
    pub fn generate(&self, seeds: &[String]) -> Vec<String> {
        self.generate_set(seeds).into_vec()
    }

    /// Run every pass, returning the accumulator itself
    pub fn generate_set(&self, seeds: &[String]) -> CandidateSet {
        let set = CandidateSet::new(self.config.bounds());

        if !self.config.has_valid_bounds() {
            log::warn!(
                "min length {} exceeds max length {}, no candidate can be accepted",
                self.config.min_length,
                self.config.max_length
            );
            return set;
        }

        log::info!("generating variations from {} seed tokens", seeds.len());

        let set = passes::base_forms(set, seeds, self.config.leet_enabled);
        let set = passes::pairwise(set, seeds);
        let set = passes::affixation(set, &self.catalog);
        let set = passes::core_combinations(set, seeds, &self.catalog, &self.config);
        let set = passes::reversal(set, seeds);

        log::info!("generated {} unique candidates", set.len());
        set
    }
}

/// Generate the wordlist for `seeds` with a one-off engine
pub fn generate_variations(seeds: &[String], config: &GeneratorConfig) -> Vec<String> {
    VariationEngine::new(config.clone()).generate(seeds)
}
