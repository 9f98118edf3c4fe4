//! Core naming and weight-resolution engine for font packaging tools.
//!
//! Normalizes human-written font identifiers (filename stems, name-table
//! strings) into a canonical family/subfamily/weight model, and uses that
//! model to order and group font files deterministically: weight variants,
//! name-table rename plans, and multi-font collection assembly.
//!
//! The crate does no file discovery, font-binary parsing or process
//! execution. Calling tools feed it strings and tags, and act on the plans
//! it returns. Apart from loading the weight table every function here is
//! total over arbitrary input; filenames are untrusted, inconsistent text
//! and get a best-effort result rather than an error.

pub mod error;
pub mod font;
pub mod models;
pub mod naming;
pub mod organizer;
pub mod utils;
pub mod weights;

pub use error::{Error, Result};
pub use font::{determine_weight, is_italic_font, weight_and_style};
pub use models::{FontDescriptor, SfntKind};
pub use naming::{humanize_stem, normalize_phrase, StyleCatalog};
pub use organizer::{
    collection_file_name, derive_basename, infer_collection_kind, plan_rename,
    plan_weight_variants, sort_fonts, CollectionKind, RenamePlan, SortKey, WeightVariant,
};
pub use utils::sanitize_filename;
pub use weights::{WeightTable, DEFAULT_WEIGHTS_FILE};
