//! Domain constants shared by the engine, the presets and the session.

/// End-of-input marker appended to every tokenized input.
pub const END_MARKER: &str = "$";

/// Label of the initial parser state pushed onto an empty stack.
pub const START_STATE: &str = "0";

/// Preferred production arrow.
pub const ARROW: &str = "→";

/// ASCII spelling of the production arrow.
pub const ASCII_ARROW: &str = "->";

/// Right-hand sides that denote the empty string.
pub const EPSILON_SPELLINGS: &[&str] = &["ε", "epsilon", "''"];

/// Input suggested for grammars that mention the `id` terminal.
pub const SUGGESTED_ID_INPUT: &str = "id+id*id";

/// Input suggested for grammars that mention the `a` terminal.
pub const SUGGESTED_A_INPUT: &str = "a+a*a";
