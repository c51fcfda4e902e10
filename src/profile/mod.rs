//! Target profile: the operator-supplied intel that seeds generation
//!
//! A profile is flattened into the ordered seed sequence the variation
//! engine consumes. Order matters because the combination pass only pairs
//! the leading seeds.

mod prompt;

pub use prompt::{prompt_generator_config, prompt_profile};

use crate::variation::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fallback name when the profile has neither first name nor company
const UNKNOWN_TARGET: &str = "Unknown Target";

/// Errors raised while loading a profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Personal facts about a target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<String>,
    pub pet_name: Option<String>,
    pub company: Option<String>,

    pub partner_name: Option<String>,
    pub partner_dob: Option<String>,
    pub father_name: Option<String>,
    pub father_dob: Option<String>,
    pub mother_name: Option<String>,
    pub mother_dob: Option<String>,
    /// Comma separated
    pub sibling_names: Option<String>,
    /// Comma separated
    pub sibling_dobs: Option<String>,

    pub fav_hobby: Option<String>,
    pub fav_person: Option<String>,
    pub fav_influencer: Option<String>,

    /// Comma separated
    pub keywords: Option<String>,

    /// Generator settings carried with the profile; command line flags win
    #[serde(alias = "leetEnabled")]
    pub use_leet: Option<bool>,
    #[serde(alias = "minLength")]
    pub min_len: Option<usize>,
    #[serde(alias = "maxLength")]
    pub max_len: Option<usize>,
}

impl TargetProfile {
    /// Load a profile from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Single-valued fields, in seed order
    fn single_fields(&self) -> [&Option<String>; 14] {
        [
            &self.first_name,
            &self.last_name,
            &self.dob,
            &self.pet_name,
            &self.company,
            &self.partner_name,
            &self.partner_dob,
            &self.father_name,
            &self.father_dob,
            &self.mother_name,
            &self.mother_dob,
            &self.fav_hobby,
            &self.fav_person,
            &self.fav_influencer,
        ]
    }

    /// Comma separated fields, in seed order
    fn list_fields(&self) -> [&Option<String>; 3] {
        [&self.sibling_names, &self.sibling_dobs, &self.keywords]
    }

    /// Flatten into the ordered seed sequence.
    ///
    /// Single fields come first, then the comma separated ones. Values are
    /// trimmed and blanks dropped.
    pub fn seed_tokens(&self) -> Vec<String> {
        let mut seeds: Vec<String> = self
            .single_fields()
            .into_iter()
            .flatten()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();

        for field in self.list_fields().into_iter().flatten() {
            seeds.extend(split_csv(field));
        }

        seeds
    }

    /// Length bounds requested by the profile, defaults where unset
    pub fn length_bounds(&self) -> (usize, usize) {
        (
            self.min_len.unwrap_or(DEFAULT_MIN_LENGTH),
            self.max_len.unwrap_or(DEFAULT_MAX_LENGTH),
        )
    }

    /// Name used when reporting on this profile
    pub fn target_name(&self) -> String {
        [&self.first_name, &self.company]
            .into_iter()
            .flatten()
            .map(|value| value.trim())
            .find(|value| !value.is_empty())
            .unwrap_or(UNKNOWN_TARGET)
            .to_string()
    }

    /// Append extra keywords to the profile's comma separated keyword list
    pub fn add_keywords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = self.keywords.as_deref().map(split_csv).unwrap_or_default();
        keywords.extend(words.into_iter().flat_map(|w| split_csv(w.as_ref())));
        if !keywords.is_empty() {
            self.keywords = Some(keywords.join(","));
        }
    }
}

/// Split a comma separated value into trimmed, non-empty entries
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_seed_order() {
        let profile = TargetProfile {
            keywords: some("hacker, , leet"),
            first_name: some(" Aryan "),
            sibling_names: some("Riya,Dev"),
            fav_influencer: some("mkbhd"),
            dob: some("01021999"),
            sibling_dobs: some("05052005"),
            pet_name: some("  "),
            ..TargetProfile::default()
        };

        assert_eq!(
            profile.seed_tokens(),
            vec!["Aryan", "01021999", "mkbhd", "Riya", "Dev", "05052005", "hacker", "leet"]
        );
    }

    #[test]
    fn test_empty_profile_has_no_seeds() {
        assert!(TargetProfile::default().seed_tokens().is_empty());
    }

    #[test]
    fn test_target_name() {
        let mut profile = TargetProfile::default();
        assert_eq!(profile.target_name(), "Unknown Target");
        profile.company = some("XCorp");
        assert_eq!(profile.target_name(), "XCorp");
        profile.first_name = some("Aryan");
        assert_eq!(profile.target_name(), "Aryan");
    }

    #[test]
    fn test_from_json_camel_case() {
        let profile =
            TargetProfile::from_json(r#"{"firstName": "Sam", "petName": "Rex", "useLeet": true}"#)
                .unwrap();
        assert_eq!(profile.first_name.as_deref(), Some("Sam"));
        assert_eq!(profile.use_leet, Some(true));
        // settings never become seeds
        assert_eq!(profile.seed_tokens(), vec!["Sam", "Rex"]);
    }

    #[test]
    fn test_generator_settings() {
        let profile =
            TargetProfile::from_json(r#"{"firstName": "Sam", "minLen": 8, "maxLen": 12}"#).unwrap();
        assert_eq!(profile.length_bounds(), (8, 12));
        assert_eq!(profile.use_leet, None);

        let aliased =
            TargetProfile::from_json(r#"{"leetEnabled": false, "maxLength": 16}"#).unwrap();
        assert_eq!(aliased.use_leet, Some(false));
        assert_eq!(aliased.length_bounds(), (6, 16));

        assert!(TargetProfile::from_json(r#"{"minLen": "eight"}"#).is_err());
    }

    #[test]
    fn test_from_path_errors() {
        let missing = TargetProfile::from_path("/nonexistent/profile.json");
        assert!(matches!(missing, Err(ProfileError::Read { .. })));
    }

    #[test]
    fn test_add_keywords() {
        let mut profile = TargetProfile {
            keywords: some("alpha"),
            ..TargetProfile::default()
        };
        profile.add_keywords(["beta", "gamma, delta", ""]);
        assert_eq!(profile.keywords.as_deref(), Some("alpha,beta,gamma,delta"));

        let mut empty = TargetProfile::default();
        empty.add_keywords(Vec::<String>::new());
        assert_eq!(empty.keywords, None);
    }
}
