use std::fmt;
use std::path::PathBuf;

/// Container flavor of a single font file, as sniffed by calling tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfntKind {
    /// TrueType outlines
    Ttf,
    /// CFF/OpenType outlines
    Otf,
}

impl SfntKind {
    /// Conventional file extension for this flavor
    pub fn extension(&self) -> &'static str {
        match self {
            SfntKind::Ttf => "ttf",
            SfntKind::Otf => "otf",
        }
    }
}

impl fmt::Display for SfntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Descriptor for one font, as consumed from calling tools.
///
/// The path is used only as an identifier and token source; the library
/// never opens it. Weight, italic flag and name strings come from whatever
/// metadata the caller managed to read. The library never mutates a
/// descriptor; it only derives new values from it.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    /// Path or identifier of the font file
    pub path: PathBuf,
    /// Resolved numeric weight class, when known
    pub weight_class: Option<u16>,
    /// Whether the font is italic/oblique
    pub is_italic: bool,
    /// Family name read from the font's name table, when available
    pub family: Option<String>,
    /// Subfamily name read from the font's name table, when available
    pub subfamily: Option<String>,
    /// Container flavor, when sniffed
    pub kind: Option<SfntKind>,
}

impl FontDescriptor {
    /// Create a descriptor with nothing known beyond its path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FontDescriptor {
            path: path.into(),
            weight_class: None,
            is_italic: false,
            family: None,
            subfamily: None,
            kind: None,
        }
    }

    pub fn with_weight(mut self, weight_class: u16) -> Self {
        self.weight_class = Some(weight_class);
        self
    }

    pub fn with_italic(mut self, is_italic: bool) -> Self {
        self.is_italic = is_italic;
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn with_subfamily(mut self, subfamily: impl Into<String>) -> Self {
        self.subfamily = Some(subfamily.into());
        self
    }

    pub fn with_kind(mut self, kind: SfntKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filename stem (no directory, no extension)
    pub fn stem(&self) -> &str {
        self.path.file_stem().and_then(|s| s.to_str()).unwrap_or("")
    }

    /// Filename including extension
    pub fn file_name(&self) -> &str {
        self.path.file_name().and_then(|s| s.to_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_stem_and_file_name() {
        let font = FontDescriptor::new("fonts/CoolFont-Bold.ttf");
        assert_eq!(font.stem(), "CoolFont-Bold");
        assert_eq!(font.file_name(), "CoolFont-Bold.ttf");
    }

    #[test]
    fn test_descriptor_builders() {
        let font = FontDescriptor::new("a.ttf")
            .with_weight(700)
            .with_italic(true)
            .with_family("Cool")
            .with_subfamily("Bold Italic")
            .with_kind(SfntKind::Ttf);
        assert_eq!(font.weight_class, Some(700));
        assert!(font.is_italic);
        assert_eq!(font.family.as_deref(), Some("Cool"));
        assert_eq!(font.subfamily.as_deref(), Some("Bold Italic"));
        assert_eq!(font.kind, Some(SfntKind::Ttf));
    }

    #[test]
    fn test_sfnt_kind_extension() {
        assert_eq!(SfntKind::Ttf.extension(), "ttf");
        assert_eq!(SfntKind::Otf.to_string(), "otf");
    }
}
