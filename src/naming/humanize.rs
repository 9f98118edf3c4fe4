use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VERSION_TOKEN_RE: Regex = Regex::new(r"^(?:v)?\d+(?:[._]\d+)*$").unwrap();
    static ref CAMEL_RE: Regex = Regex::new(r"[a-z][A-Z]").unwrap();
}

/// Classification of a single filename-stem token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Version-like token (`0902`, `v1`, `1.2.3`); dropped entirely
    Version,
    /// Variable-font noise marker (`VF`); dropped entirely
    Noise,
    /// Token with an internal lowercase-to-uppercase transition; kept verbatim
    Camel,
    /// Digit-bearing token; preserved as written
    Mixed,
    /// Plain word; title-cased
    Word,
}

/// Heuristic: token looks like a version (e.g. `0902`, `1.0`, `v1`, `v1.2.3`)
pub fn is_version_token(token: &str) -> bool {
    VERSION_TOKEN_RE.is_match(token)
}

/// Classify one stem token; precedence follows `humanize_stem`
pub fn classify_token(token: &str) -> TokenClass {
    if token.eq_ignore_ascii_case("vf") {
        TokenClass::Noise
    } else if is_version_token(token) {
        TokenClass::Version
    } else if CAMEL_RE.is_match(token) {
        TokenClass::Camel
    } else if token.chars().any(|c| c.is_ascii_digit()) {
        TokenClass::Mixed
    } else {
        TokenClass::Word
    }
}

/// Tokenize a filename stem on `-`/`_` runs into lowercase tokens
pub fn tokenize_stem(stem: &str) -> Vec<String> {
    stem.split(['-', '_'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn strip_vf_suffix(token: &str) -> &str {
    let bytes = token.as_bytes();
    if bytes.len() > 2
        && bytes[bytes.len() - 2].eq_ignore_ascii_case(&b'v')
        && bytes[bytes.len() - 1].eq_ignore_ascii_case(&b'f')
    {
        &token[..token.len() - 2]
    } else {
        token
    }
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}

/// Convert a filename stem into a humanized Title Case string.
///
/// Splits on `_`/`-` runs, strips trailing `VF` suffixes
/// (`PragmataProMonoVF` becomes `PragmataProMono`), drops standalone `VF`
/// markers and version-like tokens, keeps CamelCase and digit-bearing tokens
/// verbatim, title-cases the rest, and rejoins with single spaces. Total
/// over arbitrary input; the empty stem humanizes to the empty string.
pub fn humanize_stem(stem: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    for raw in stem.split(['-', '_']).filter(|t| !t.is_empty()) {
        let token = strip_vf_suffix(raw);
        match classify_token(token) {
            TokenClass::Noise | TokenClass::Version => continue,
            TokenClass::Camel | TokenClass::Mixed => out.push(token.to_string()),
            TokenClass::Word => out.push(title_case(token)),
        }
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_drops_version_and_vf_tokens() {
        assert_eq!(
            humanize_stem("PragmataProMonoVF_liga_0902-Extra-bold-NerdFont"),
            "PragmataProMono Liga Extra Bold NerdFont"
        );
        assert_eq!(humanize_stem("my_font-VF-italic"), "My Font Italic");
        assert_eq!(humanize_stem("CoolFont-regular"), "CoolFont Regular");
    }

    #[test]
    fn test_humanize_collapses_delimiter_runs() {
        assert_eq!(humanize_stem("cool__font--regular"), "Cool Font Regular");
    }

    #[test]
    fn test_humanize_preserves_camel_and_mixed_tokens() {
        assert_eq!(humanize_stem("NerdFontMono-H2"), "NerdFontMono H2");
        assert_eq!(humanize_stem("iosevka-term"), "Iosevka Term");
    }

    #[test]
    fn test_humanize_total_over_empty_input() {
        assert_eq!(humanize_stem(""), "");
        assert_eq!(humanize_stem("___"), "");
        assert_eq!(humanize_stem("0902"), "");
    }

    #[test]
    fn test_version_token_shapes() {
        assert!(is_version_token("0902"));
        assert!(is_version_token("v1"));
        assert!(is_version_token("1.2.3"));
        assert!(is_version_token("v1_2"));
        assert!(!is_version_token("h2"));
        assert!(!is_version_token("bold"));
    }

    #[test]
    fn test_classify_token_precedence() {
        assert_eq!(classify_token("vf"), TokenClass::Noise);
        assert_eq!(classify_token("VF"), TokenClass::Noise);
        assert_eq!(classify_token("v1.2"), TokenClass::Version);
        assert_eq!(classify_token("PragmataProMono"), TokenClass::Camel);
        assert_eq!(classify_token("h2"), TokenClass::Mixed);
        assert_eq!(classify_token("bold"), TokenClass::Word);
    }

    #[test]
    fn test_tokenize_stem_lowercases() {
        assert_eq!(
            tokenize_stem("CoolFont-Bold_Italic"),
            vec!["coolfont", "bold", "italic"]
        );
    }
}
