//! Weight and style inference from name strings

pub mod weight;

pub use weight::{determine_weight, is_italic_font, resolve_weight_phrase, weight_and_style};
