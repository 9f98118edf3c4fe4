use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UNSAFE_CHARS_RE: Regex = Regex::new(r"[^A-Za-z0-9._-]").unwrap();
    static ref UNDERSCORE_RUN_RE: Regex = Regex::new(r"_+").unwrap();
    static ref DASH_RUN_RE: Regex = Regex::new(r"-+").unwrap();
    static ref PS_UNSAFE_RE: Regex = Regex::new(r"[^A-Za-z0-9-]").unwrap();
}

/// Make a filesystem-safe filename stem.
///
/// Spaces become underscores, existing dashes are retained, everything
/// outside `A-Z a-z 0-9 . _ -` is stripped, separator runs collapse, and
/// leading/trailing separators are trimmed.
pub fn sanitize_filename(name: &str) -> String {
    let name = name.replace(' ', "_");
    let name = UNSAFE_CHARS_RE.replace_all(&name, "");
    let name = UNDERSCORE_RUN_RE.replace_all(&name, "_");
    let name = DASH_RUN_RE.replace_all(&name, "-");
    name.trim_matches(|c: char| matches!(c, '-' | '.' | '_')).to_string()
}

/// Compose a PostScript name: `<Family>-<Subfamily>` with spaces removed
/// and characters outside `A-Za-z0-9-` filtered out
pub fn ps_name(family: &str, subfamily: &str) -> String {
    let family_nospace = family.replace(' ', "");
    let family = PS_UNSAFE_RE.replace_all(&family_nospace, "");
    let subfamily_nospace = subfamily.replace(' ', "");
    let subfamily = PS_UNSAFE_RE.replace_all(&subfamily_nospace, "");
    if subfamily.is_empty() {
        family.into_owned()
    } else {
        format!("{}-{}", family, subfamily)
    }
}

/// Cleaned filename stem: `<Family>-<Subfamily>` with spaces replaced by
/// underscores; just the family part when the subfamily is empty
pub fn clean_stem(family: &str, subfamily: &str) -> String {
    let family = family.replace(' ', "_");
    let subfamily = subfamily.replace(' ', "_");
    if subfamily.is_empty() {
        family
    } else {
        format!("{}-{}", family, subfamily)
    }
}
