use crate::models::FontDescriptor;

/// Sentinel ranking fonts with unknown weight after every real weight class
pub const UNKNOWN_WEIGHT_RANK: u16 = 1000;

/// Composite sort key for collection ordering.
///
/// Field order matters: the derived `Ord` compares weight ascending, then
/// Roman before italic, then the case-insensitive filename, then the
/// canonical subfamily for fonts sharing a filename.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    pub weight: u16,
    pub italic_rank: u8,
    pub file_name: String,
    pub subfamily: String,
}

/// Compute the sort key for one font
pub fn sort_key(font: &FontDescriptor) -> SortKey {
    SortKey {
        weight: font.weight_class.unwrap_or(UNKNOWN_WEIGHT_RANK),
        italic_rank: u8::from(font.is_italic),
        file_name: font.file_name().to_lowercase(),
        subfamily: font.subfamily.clone().unwrap_or_default(),
    }
}

/// Order fonts for collection assembly.
///
/// Stable and reproducible: the same set of fonts sorts identically
/// regardless of input order.
pub fn sort_fonts(fonts: &[FontDescriptor]) -> Vec<FontDescriptor> {
    let mut sorted = fonts.to_vec();
    sorted.sort_by_cached_key(sort_key);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font(path: &str, weight: Option<u16>, italic: bool) -> FontDescriptor {
        let mut font = FontDescriptor::new(path).with_italic(italic);
        font.weight_class = weight;
        font
    }

    #[test]
    fn test_weight_then_italic_then_name() {
        let fonts = vec![
            font("c.ttf", Some(700), false),
            font("b.ttf", Some(400), true),
            font("a.ttf", Some(400), false),
        ];
        let ordered = sort_fonts(&fonts);
        let names: Vec<&str> = ordered.iter().map(|f| f.file_name()).collect();
        assert_eq!(names, vec!["a.ttf", "b.ttf", "c.ttf"]);
    }

    #[test]
    fn test_unknown_weight_sorts_last() {
        let fonts = vec![
            font("mystery.ttf", None, false),
            font("black.ttf", Some(900), false),
        ];
        let ordered = sort_fonts(&fonts);
        assert_eq!(ordered[0].file_name(), "black.ttf");
        assert_eq!(ordered[1].file_name(), "mystery.ttf");
    }

    #[test]
    fn test_filename_tiebreak_is_case_insensitive() {
        let fonts = vec![
            font("beta.ttf", Some(400), false),
            font("Alpha.ttf", Some(400), false),
        ];
        let ordered = sort_fonts(&fonts);
        assert_eq!(ordered[0].file_name(), "Alpha.ttf");
    }

    #[test]
    fn test_subfamily_breaks_identical_filenames() {
        let fonts = vec![
            font("a/Font.ttf", Some(400), false).with_subfamily("Regular"),
            font("b/Font.ttf", Some(400), false).with_subfamily("Book"),
        ];
        let ordered = sort_fonts(&fonts);
        assert_eq!(ordered[0].subfamily.as_deref(), Some("Book"));
    }

    #[test]
    fn test_ordering_is_input_order_independent() {
        let fonts = vec![
            font("a.ttf", Some(400), false),
            font("b.ttf", Some(400), true),
            font("c.ttf", Some(700), false),
            font("d.ttf", None, true),
        ];
        let mut shuffled = fonts.clone();
        shuffled.reverse();
        shuffled.swap(0, 2);

        let a: Vec<String> = sort_fonts(&fonts)
            .iter()
            .map(|f| f.file_name().to_string())
            .collect();
        let b: Vec<String> = sort_fonts(&shuffled)
            .iter()
            .map(|f| f.file_name().to_string())
            .collect();
        assert_eq!(a, b);
    }
}
