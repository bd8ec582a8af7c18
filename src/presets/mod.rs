//! Named grammar/table bundles and the input suggested for each.

mod builtin;
mod catalog;
mod suggest;

pub use catalog::{Preset, PresetCatalog};
pub use suggest::suggest_input;
