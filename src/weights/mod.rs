//! Canonical weight table loaded from `fontweights.toml`

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::naming::normalize_phrase;

/// Conventional filename of the weight configuration; callers resolve the
/// actual path (there is no ambient default table).
pub const DEFAULT_WEIGHTS_FILE: &str = "fontweights.toml";

#[derive(Debug, Deserialize)]
struct RawWeightConfig {
    weights: Option<BTreeMap<String, i64>>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

/// Immutable mapping of canonical weight names, numeric weight classes and
/// alias phrases.
///
/// Loaded once from a TOML source and shared by value reference afterwards;
/// no method mutates the table post-construction.
#[derive(Debug, Clone)]
pub struct WeightTable {
    canonical_to_value: BTreeMap<String, u16>,
    normalized_to_canonical: HashMap<String, String>,
    /// (normalized phrase, canonical name), longest phrase first.
    ordered_phrases: Vec<(String, String)>,
}

impl WeightTable {
    /// Load the weight table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::Config(format!(
                "weights config not found at {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse the weight table from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawWeightConfig = toml::from_str(content)?;

        let weights = match raw.weights {
            Some(w) if !w.is_empty() => w,
            _ => {
                return Err(Error::Config(
                    "weights config must define a non-empty [weights] table".to_string(),
                ))
            }
        };

        let mut canonical_to_value = BTreeMap::new();
        for (name, value) in weights {
            let value = u16::try_from(value).map_err(|_| {
                Error::Config(format!(
                    "[weights].{} must be a non-negative integer weight class",
                    name
                ))
            })?;
            canonical_to_value.insert(name, value);
        }

        let mut normalized_to_canonical = HashMap::new();
        for canonical in canonical_to_value.keys() {
            normalized_to_canonical.insert(normalize_phrase(canonical), canonical.clone());
        }

        for (alias, canonical) in raw.aliases {
            if !canonical_to_value.contains_key(&canonical) {
                log::warn!(
                    "alias '{}' refers to unknown canonical '{}'; ignoring",
                    alias,
                    canonical
                );
                continue;
            }
            normalized_to_canonical.insert(normalize_phrase(&alias), canonical);
        }

        let mut ordered_phrases: Vec<(String, String)> = normalized_to_canonical
            .iter()
            .map(|(phrase, canonical)| (phrase.clone(), canonical.clone()))
            .collect();
        ordered_phrases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Ok(WeightTable {
            canonical_to_value,
            normalized_to_canonical,
            ordered_phrases,
        })
    }

    /// All `(value, canonical name)` pairs sorted ascending by value, ties
    /// broken by name
    pub fn standard_weights(&self) -> Vec<(u16, String)> {
        let mut items: Vec<(u16, String)> = self
            .canonical_to_value
            .iter()
            .map(|(name, value)| (*value, name.clone()))
            .collect();
        items.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        items
    }

    /// Resolve a phrase to its canonical weight name, through canonical
    /// names and aliases alike
    pub fn canonical_name_for(&self, phrase: &str) -> Option<&str> {
        self.normalized_to_canonical
            .get(&normalize_phrase(phrase))
            .map(String::as_str)
    }

    /// Resolve a phrase to its numeric weight class
    pub fn lookup_value(&self, phrase: &str) -> Option<u16> {
        let canonical = self.canonical_name_for(phrase)?;
        self.canonical_to_value.get(canonical).copied()
    }

    /// Numeric weight class of a canonical name (exact, not normalized)
    pub fn value_of(&self, canonical: &str) -> Option<u16> {
        self.canonical_to_value.get(canonical).copied()
    }

    /// All recognized normalized phrases with their canonical names,
    /// longest phrase first; used for substring-based weight inference
    pub fn phrases_longest_first(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ordered_phrases
            .iter()
            .map(|(phrase, canonical)| (phrase.as_str(), canonical.as_str()))
    }
}
