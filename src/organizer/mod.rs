//! Font grouping, ordering and packaging plans

pub mod basename;
pub mod collection;
pub mod order;
pub mod rename;
pub mod variants;

pub use basename::derive_basename;
pub use collection::{collection_file_name, infer_collection_kind, CollectionKind};
pub use order::{sort_fonts, sort_key, SortKey, UNKNOWN_WEIGHT_RANK};
pub use rename::{plan_rename, RenamePlan};
pub use variants::{compose_weight_basename, parse_weight_offset, plan_weight_variants, WeightVariant};
