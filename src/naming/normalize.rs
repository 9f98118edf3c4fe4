/// Normalize a phrase for case-, hyphen- and whitespace-insensitive matching.
///
/// Lowercases, splits on Unicode whitespace and literal hyphens, and rejoins
/// with single ASCII spaces. Total and idempotent; empty input yields an
/// empty string.
pub fn normalize_phrase(s: &str) -> String {
    s.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
