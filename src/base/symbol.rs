use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A grammar symbol (terminal or nonterminal) as it appears on the parse stack.
pub type Symbol = SmolStr;

/// A parser state label. Tables key their rows by the textual state number.
pub type StateId = SmolStr;

/// Identifier of a preset bundle in a catalog (e.g. `example1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetId(SmolStr);

impl PresetId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PresetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PresetId {
    fn from(id: String) -> Self {
        Self(SmolStr::from(id))
    }
}

impl AsRef<str> for PresetId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for PresetId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}
