use std::collections::HashSet;

use crate::models::FontDescriptor;
use crate::naming::{is_italic_token, is_version_token, normalize_phrase, tokenize_stem};
use crate::utils::sanitize_filename;

const VARIABLE_MARKERS: [&str; 3] = ["vf", "variable", "var"];

/// Strip italic/oblique markers, variable-font markers and version-like
/// tokens from a lowercase token list. Weight phrases are kept; a weight
/// mismatch simply ends the common prefix.
fn strip_noise_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| {
            !is_italic_token(t) && !VARIABLE_MARKERS.contains(&t.as_str()) && !is_version_token(t)
        })
        .collect()
}

/// Positional longest common prefix across token lists. The first mismatch,
/// or any list running out, ends the prefix.
fn common_token_prefix(lists: &[Vec<String>]) -> Vec<String> {
    let Some(first) = lists.first() else {
        return Vec::new();
    };
    let min_len = lists.iter().map(Vec::len).min().unwrap_or(0);
    let mut prefix = Vec::new();
    for idx in 0..min_len {
        let token = &first[idx];
        if lists[1..].iter().all(|list| &list[idx] == token) {
            prefix.push(token.clone());
        } else {
            break;
        }
    }
    prefix
}

/// Recover the original casing of prefix tokens from the first stem
fn recase_from_stem(prefix: &[String], stem: &str) -> Vec<String> {
    let raw: Vec<&str> = stem.split(['-', '_']).filter(|t| !t.is_empty()).collect();
    let mut out = Vec::with_capacity(prefix.len());
    let mut cursor = 0;
    for token in prefix {
        while cursor < raw.len() && raw[cursor].to_lowercase() != *token {
            cursor += 1;
        }
        if cursor < raw.len() {
            out.push(raw[cursor].to_string());
            cursor += 1;
        } else {
            out.push(token.clone());
        }
    }
    out
}

/// Derive a sanitized group basename for a set of fonts.
///
/// An explicit override bypasses derivation entirely. Otherwise the
/// consensus path applies: every descriptor must carry a non-empty family
/// and all families must agree after normalization — a single missing or
/// differing value disqualifies the path, with no majority vote. The
/// fallback derives the longest common token prefix of the stripped
/// filename stems, and falls back further to the first font's parent
/// directory name, then its stem. All paths are sanitized for filesystem
/// use. The sequence must be non-empty; an empty input yields an empty
/// string.
pub fn derive_basename(fonts: &[FontDescriptor], override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return sanitize_filename(name);
    }
    let Some(first) = fonts.first() else {
        return String::new();
    };

    let mut normalized: HashSet<String> = HashSet::new();
    let mut consensus = true;
    for font in fonts {
        match font.family.as_deref().map(normalize_phrase) {
            Some(norm) if !norm.is_empty() => {
                normalized.insert(norm);
            }
            _ => {
                consensus = false;
                break;
            }
        }
    }
    if consensus && normalized.len() == 1 {
        let family = first.family.as_deref().unwrap_or_default();
        let collapsed = family.split_whitespace().collect::<Vec<_>>().join(" ");
        return sanitize_filename(&collapsed);
    }
    log::debug!("no family consensus; deriving basename from filename tokens");

    let token_lists: Vec<Vec<String>> = fonts
        .iter()
        .map(|font| strip_noise_tokens(tokenize_stem(font.stem())))
        .collect();
    let prefix = common_token_prefix(&token_lists);
    if !prefix.is_empty() {
        let recased = recase_from_stem(&prefix, first.stem());
        return sanitize_filename(&recased.join(" "));
    }

    let parent = first
        .path
        .parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("");
    if !parent.is_empty() {
        return sanitize_filename(parent);
    }
    sanitize_filename(first.stem())
}
