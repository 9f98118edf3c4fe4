pub mod naming;

pub use naming::{clean_stem, ps_name, sanitize_filename};
