//! Length-filtered candidate accumulator
//!
//! Every generation pass funnels its output through [`CandidateSet::add`],
//! which is the single place the length bounds are enforced.

use std::collections::BTreeSet;

/// Inclusive length bounds, measured in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    /// Create bounds; inverted bounds are allowed and admit nothing
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Check whether a candidate's length falls within the bounds
    pub fn admits(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        self.min <= len && len <= self.max
    }
}

/// Deduplicated, ordered set of accepted candidates
#[derive(Debug, Clone)]
pub struct CandidateSet {
    bounds: LengthBounds,
    words: BTreeSet<String>,
}

impl CandidateSet {
    /// Create an empty set gated by the given bounds
    pub fn new(bounds: LengthBounds) -> Self {
        Self {
            bounds,
            words: BTreeSet::new(),
        }
    }

    /// Insert a candidate if it satisfies the length bounds.
    ///
    /// Returns `true` only when the candidate was newly accepted.
    pub fn add(&mut self, candidate: impl Into<String>) -> bool {
        let candidate = candidate.into();
        if !self.bounds.admits(&candidate) {
            return false;
        }
        self.words.insert(candidate)
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    /// Copy of the current members, used by passes that expand what is
    /// already accumulated
    pub fn snapshot(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// Consume the set, yielding candidates in ascending order
    pub fn into_vec(self) -> Vec<String> {
        self.words.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_respects_bounds() {
        let mut set = CandidateSet::new(LengthBounds::new(3, 5));
        assert!(!set.add("ab"));
        assert!(set.add("abc"));
        assert!(set.add("abcde"));
        assert!(!set.add("abcdef"));
        assert_eq!(set.into_vec(), vec!["abc", "abcde"]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut set = CandidateSet::new(LengthBounds::new(0, 10));
        assert!(set.add("hunter2"));
        assert!(!set.add("hunter2"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_inverted_bounds_admit_nothing() {
        let mut set = CandidateSet::new(LengthBounds::new(50, 5));
        for word in ["", "a", "abcdef", &"z".repeat(50)] {
            set.add(word);
        }
        assert!(set.is_empty());
    }

    #[test]
    fn test_length_counts_characters() {
        let bounds = LengthBounds::new(4, 4);
        assert!(bounds.admits("ñaño"));
        assert!(!bounds.admits("ñañoo"));
    }
}
