pub mod font;

pub use font::{FontDescriptor, SfntKind};
