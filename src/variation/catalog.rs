//! Fixed affix catalogs used by the affixation and combination passes
//!
//! Catalog sizes are part of the generator's contract: for the default
//! reference year of 2026 there are 237 years, 1007 numbers, 12 special
//! characters and 6 multi-character patterns.

/// First four-digit year in the catalog
pub const FIRST_YEAR: u32 = 1900;

/// How many years past the reference year the catalog reaches
pub const FUTURE_YEAR_MARGIN: u32 = 10;

/// Numeric patterns appended after the 0-999 range
const EXTRA_NUMBERS: &[&str] = &[
    "12345", "123456", "12345678", "123456789", "1111", "9999", "000",
];

/// Single special characters, in priority order
const SPECIAL_CHARS: &[&str] = &["!", "@", "#", "$", "%", "&", "*", "?", ".", "_", "-", "+"];

/// Multi-character suffix patterns
const DOUBLE_SPECIALS: &[&str] = &["!!", "@@", "123!", "321!", "007!", "123456!"];

/// Specials combined with year suffixes
pub const YEAR_SPECIAL_COUNT: usize = 5;

/// Specials combined with number suffixes
pub const NUMBER_SPECIAL_COUNT: usize = 3;

/// Immutable affix data for one generation run
#[derive(Debug, Clone)]
pub struct AffixCatalog {
    years: Vec<String>,
    numbers: Vec<String>,
    specials: Vec<String>,
    double_specials: Vec<String>,
}

impl AffixCatalog {
    /// Build the catalog for a reference year.
    ///
    /// Years run from 1900 through `current_year + 10`, followed by the
    /// two-digit forms `00`-`99`.
    pub fn new(current_year: u32) -> Self {
        let mut years: Vec<String> = (FIRST_YEAR..=current_year.saturating_add(FUTURE_YEAR_MARGIN))
            .map(|y| y.to_string())
            .collect();
        years.extend((0..100).map(|y| format!("{:02}", y)));

        let mut numbers: Vec<String> = (0..1000).map(|n| n.to_string()).collect();
        numbers.extend(EXTRA_NUMBERS.iter().map(|n| n.to_string()));

        Self {
            years,
            numbers,
            specials: to_owned(SPECIAL_CHARS),
            double_specials: to_owned(DOUBLE_SPECIALS),
        }
    }

    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// The last `count` entries of the year catalog, in catalog order
    pub fn recent_years(&self, count: usize) -> &[String] {
        &self.years[self.years.len().saturating_sub(count)..]
    }

    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    pub fn specials(&self) -> &[String] {
        &self.specials
    }

    /// The first `count` special characters
    pub fn leading_specials(&self, count: usize) -> &[String] {
        &self.specials[..count.min(self.specials.len())]
    }

    pub fn double_specials(&self) -> &[String] {
        &self.double_specials
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        let catalog = AffixCatalog::new(2026);
        assert_eq!(catalog.years().len(), 237);
        assert_eq!(catalog.numbers().len(), 1007);
        assert_eq!(catalog.specials().len(), 12);
        assert_eq!(catalog.double_specials().len(), 6);
    }

    #[test]
    fn test_year_ordering() {
        let catalog = AffixCatalog::new(2026);
        let years = catalog.years();
        assert_eq!(years[0], "1900");
        assert_eq!(years[136], "2036");
        assert_eq!(years[137], "00");
        assert_eq!(years.last().map(String::as_str), Some("99"));

        let recent = catalog.recent_years(30);
        assert_eq!(recent.len(), 30);
        assert_eq!(recent[0], "70");
    }

    #[test]
    fn test_year_range_follows_reference_year() {
        assert_eq!(AffixCatalog::new(2000).years().len(), 111 + 100);
    }

    #[test]
    fn test_leading_specials() {
        let catalog = AffixCatalog::new(2026);
        assert_eq!(catalog.leading_specials(YEAR_SPECIAL_COUNT), ["!", "@", "#", "$", "%"]);
        assert_eq!(catalog.leading_specials(NUMBER_SPECIAL_COUNT), ["!", "@", "#"]);
        assert_eq!(catalog.leading_specials(99).len(), 12);
    }
}
