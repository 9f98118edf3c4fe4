use std::collections::HashSet;

use super::normalize::normalize_phrase;
use crate::weights::WeightTable;

const ITALIC_TOKENS: [&str; 2] = ["italic", "oblique"];

/// True if a single token is an italic/oblique style modifier
pub fn is_italic_token(token: &str) -> bool {
    ITALIC_TOKENS.contains(&normalize_phrase(token).as_str())
}

/// Precomputed set of recognized style phrases, built once from a loaded
/// [`WeightTable`] and shared by the splitting and renaming paths.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    phrases: HashSet<String>,
    default_subfamily: String,
}

impl StyleCatalog {
    /// Build the catalog from the table's canonical names and aliases.
    /// The default subfamily is whatever canonical name the phrase
    /// "Regular" resolves to, or the literal "Regular" when unmapped.
    pub fn new(table: &WeightTable) -> Self {
        let phrases = table
            .phrases_longest_first()
            .map(|(phrase, _)| phrase.to_string())
            .collect();
        let default_subfamily = table
            .canonical_name_for("Regular")
            .unwrap_or("Regular")
            .to_string();
        StyleCatalog {
            phrases,
            default_subfamily,
        }
    }

    /// Subfamily assigned when no trailing style phrase is found
    pub fn default_subfamily(&self) -> &str {
        &self.default_subfamily
    }

    fn is_weight_phrase(&self, tokens: &[&str]) -> bool {
        self.phrases.contains(&normalize_phrase(&tokens.join(" ")))
    }

    /// Split a humanized string into `(family, subfamily)`.
    ///
    /// Greedy right-to-left trailing match: an optional italic/oblique
    /// modifier at the very end, preceded by a recognized weight phrase
    /// (two-token phrases tried before one-token ones). The matched tokens
    /// become the subfamily as written; everything before them is the
    /// family. Interior style tokens are never matched. With no trailing
    /// match the whole string is the family and the subfamily is the
    /// default. An all-style input ("Bold Italic") yields an empty family;
    /// callers must handle that.
    pub fn split(&self, humanized: &str) -> (String, String) {
        let tokens: Vec<&str> = humanized.split_whitespace().collect();
        if tokens.is_empty() {
            return (String::new(), self.default_subfamily.clone());
        }

        let mut end = tokens.len();
        let mut italic: Option<&str> = None;
        if is_italic_token(tokens[end - 1]) {
            italic = Some(tokens[end - 1]);
            end -= 1;
        }

        let mut start = end;
        for size in [2usize, 1] {
            if end >= size && self.is_weight_phrase(&tokens[end - size..end]) {
                start = end - size;
                break;
            }
        }

        if start == end && italic.is_none() {
            let family = tokens.join(" ");
            return (family, self.default_subfamily.clone());
        }

        let family = tokens[..start].join(" ");
        let mut subfamily: Vec<&str> = tokens[start..end].to_vec();
        if let Some(modifier) = italic {
            subfamily.push(modifier);
        }
        (family, subfamily.join(" "))
    }
}
