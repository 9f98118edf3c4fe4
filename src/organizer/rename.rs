use crate::font::weight::{is_italic_font, resolve_weight_phrase};
use crate::naming::{humanize_stem, normalize_phrase, StyleCatalog};
use crate::utils::{clean_stem, ps_name};
use crate::weights::WeightTable;

/// Everything a name-table writer needs to rename one font, computed purely
/// from its filename stem.
///
/// The plan is data for external collaborators: this library never opens or
/// rewrites the font itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenamePlan {
    /// Family name (name IDs 1/16)
    pub family: String,
    /// Subfamily name (name IDs 2/17)
    pub subfamily: String,
    /// Full name (name ID 4)
    pub full_name: String,
    /// PostScript name (name ID 6)
    pub postscript_name: String,
    /// Cleaned output filename stem
    pub file_stem: String,
    /// Resolved OS/2 weight class
    pub weight_class: u16,
    /// Italic style flag
    pub set_italic: bool,
    /// Bold style flag; only the canonical "Bold" weight sets it
    pub set_bold: bool,
    /// Regular style flag; upright default subfamily only
    pub set_regular: bool,
}

/// Compute the rename plan for one font from its filename stem:
/// humanize, split into family/subfamily, and resolve the weight and style
/// flags through the loaded table.
pub fn plan_rename(table: &WeightTable, catalog: &StyleCatalog, stem: &str) -> RenamePlan {
    let humanized = humanize_stem(stem);
    let (family, subfamily) = catalog.split(&humanized);

    let full_name = format!("{} {}", family, subfamily).trim().to_string();
    let postscript_name = ps_name(&family, &subfamily);
    let file_stem = clean_stem(&family, &subfamily);

    let set_italic = is_italic_font(&subfamily);
    let resolved = resolve_weight_phrase(table, &subfamily);
    let weight_class = resolved
        .map(|(_, value)| value)
        .or_else(|| table.lookup_value("Regular"))
        .unwrap_or(400);
    let set_bold = resolved
        .map(|(canonical, _)| normalize_phrase(canonical) == "bold")
        .unwrap_or(false);
    let set_regular = normalize_phrase(&subfamily) == "regular" && !set_italic;

    RenamePlan {
        family,
        subfamily,
        full_name,
        postscript_name,
        file_stem,
        weight_class,
        set_italic,
        set_bold,
        set_regular,
    }
}
