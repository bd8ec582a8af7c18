//! Input suggestion for freshly loaded presets.

use crate::base::constants::{SUGGESTED_A_INPUT, SUGGESTED_ID_INPUT};

/// Pick a sample input by looking at the production text.
///
/// Matching is plain substring search over whole productions, so a rule
/// mentioning `data` counts as mentioning `a`. `id` wins over `a`.
pub fn suggest_input<S: AsRef<str>>(grammar: &[S]) -> Option<&'static str> {
    let mentions = |needle: &str| grammar.iter().any(|rule| rule.as_ref().contains(needle));

    if mentions("id") {
        Some(SUGGESTED_ID_INPUT)
    } else if mentions("a") {
        Some(SUGGESTED_A_INPUT)
    } else {
        None
    }
}
