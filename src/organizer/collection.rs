use std::fmt;

use crate::error::{Error, Result};
use crate::models::SfntKind;
use crate::utils::sanitize_filename;

/// Container type of a multi-font collection file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// TrueType collection
    Ttc,
    /// OpenType/CFF collection
    Otc,
}

impl CollectionKind {
    /// File extension for this collection type
    pub fn extension(&self) -> &'static str {
        match self {
            CollectionKind::Ttc => "ttc",
            CollectionKind::Otc => "otc",
        }
    }

    fn member_kind(&self) -> SfntKind {
        match self {
            CollectionKind::Ttc => SfntKind::Ttf,
            CollectionKind::Otc => SfntKind::Otf,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Infer the collection container type from member tags, honoring a forced
/// kind. Mixed inputs, empty inputs, and a forced kind that conflicts with
/// the members are collection errors.
pub fn infer_collection_kind(
    kinds: &[SfntKind],
    forced: Option<CollectionKind>,
) -> Result<CollectionKind> {
    let Some(&first) = kinds.first() else {
        return Err(Error::Collection(
            "no input fonts to infer type from".to_string(),
        ));
    };
    let mixed = kinds.iter().any(|kind| *kind != first);

    if let Some(forced) = forced {
        if mixed || first != forced.member_kind() {
            return Err(Error::Collection(format!(
                "forced type {} conflicts with input font types",
                forced
            )));
        }
        return Ok(forced);
    }

    if mixed {
        return Err(Error::Collection(
            "mixed TTF/OTF inputs; force a type or filter inputs".to_string(),
        ));
    }
    Ok(match first {
        SfntKind::Ttf => CollectionKind::Ttc,
        SfntKind::Otf => CollectionKind::Otc,
    })
}

/// Compose the output filename for a collection
pub fn collection_file_name(basename: &str, kind: CollectionKind) -> String {
    format!("{}.{}", sanitize_filename(basename), kind.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_pure_inputs() {
        assert_eq!(
            infer_collection_kind(&[SfntKind::Ttf, SfntKind::Ttf], None).unwrap(),
            CollectionKind::Ttc
        );
        assert_eq!(
            infer_collection_kind(&[SfntKind::Otf], None).unwrap(),
            CollectionKind::Otc
        );
    }

    #[test]
    fn test_infer_mixed_inputs_fails() {
        let err = infer_collection_kind(&[SfntKind::Ttf, SfntKind::Otf], None).unwrap_err();
        assert!(matches!(err, Error::Collection(_)));
    }

    #[test]
    fn test_infer_empty_inputs_fails() {
        assert!(infer_collection_kind(&[], None).is_err());
    }

    #[test]
    fn test_forced_kind_must_match_members() {
        assert_eq!(
            infer_collection_kind(&[SfntKind::Ttf], Some(CollectionKind::Ttc)).unwrap(),
            CollectionKind::Ttc
        );
        assert!(infer_collection_kind(&[SfntKind::Otf], Some(CollectionKind::Ttc)).is_err());
    }

    #[test]
    fn test_collection_file_name() {
        assert_eq!(
            collection_file_name("Cool Family", CollectionKind::Ttc),
            "Cool_Family.ttc"
        );
    }
}
