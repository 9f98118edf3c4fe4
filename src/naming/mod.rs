//! Filename humanization and family/subfamily splitting heuristics

pub mod humanize;
pub mod normalize;
pub mod split;

pub use humanize::{classify_token, humanize_stem, is_version_token, tokenize_stem, TokenClass};
pub use normalize::normalize_phrase;
pub use split::{is_italic_token, StyleCatalog};
