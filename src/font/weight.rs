use crate::naming::{is_italic_token, normalize_phrase, tokenize_stem};
use crate::weights::WeightTable;

/// Find the longest recognized weight phrase contained in a name string.
///
/// The text is normalized first, then every known phrase (canonical names
/// and aliases) is tried as a substring, longest phrase first, so
/// "Semi Bold Italic" resolves through "semi bold" rather than "bold".
/// Returns the canonical name and its weight class.
pub fn resolve_weight_phrase<'a>(table: &'a WeightTable, text: &str) -> Option<(&'a str, u16)> {
    let normalized = normalize_phrase(text);
    if normalized.is_empty() {
        return None;
    }
    for (phrase, canonical) in table.phrases_longest_first() {
        if normalized.contains(phrase) {
            return table.value_of(canonical).map(|value| (canonical, value));
        }
    }
    None
}

/// Determine the weight class from a subfamily-like phrase
pub fn determine_weight(table: &WeightTable, phrase: &str) -> Option<u16> {
    resolve_weight_phrase(table, phrase).map(|(_, value)| value)
}

/// Check if a font is italic based on a name string
pub fn is_italic_font(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("italic") || lower.contains("oblique")
}

/// Infer `(weight class, italic)` for one font from the data at hand.
///
/// Cascade: the subfamily string, then the family string, then the filename
/// stem (single tokens and adjacent token pairs, exact matches only). Never
/// fails; an unrecognized weight comes back as `None` with the best-effort
/// italic flag.
pub fn weight_and_style(
    table: &WeightTable,
    family: Option<&str>,
    subfamily: Option<&str>,
    stem: &str,
) -> (Option<u16>, bool) {
    let sub_italic = subfamily.map(is_italic_font).unwrap_or(false);
    if let Some(text) = subfamily {
        if let Some((_, value)) = resolve_weight_phrase(table, text) {
            return (Some(value), sub_italic);
        }
    }

    let fam_italic = family.map(is_italic_font).unwrap_or(false);
    if let Some(text) = family {
        if let Some((_, value)) = resolve_weight_phrase(table, text) {
            return (Some(value), sub_italic || fam_italic);
        }
    }

    let tokens = tokenize_stem(stem);
    let stem_italic = tokens.iter().any(|t| is_italic_token(t));
    let pairs: Vec<String> = tokens
        .windows(2)
        .map(|pair| pair.join(" "))
        .collect();
    for (phrase, canonical) in table.phrases_longest_first() {
        if tokens.iter().any(|t| t == phrase) || pairs.iter().any(|p| p == phrase) {
            let value = table.value_of(canonical);
            return (value, stem_italic);
        }
    }

    (None, sub_italic || fam_italic || stem_italic)
}
