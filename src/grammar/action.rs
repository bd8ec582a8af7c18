//! Action descriptors as they appear in action-table cells.

use crate::base::StateId;

/// A decoded action-table entry.
///
/// Cells hold compact descriptors: `s5` shifts to state 5, `r2` reduces by
/// the second production (1-based), `acc` accepts. The long forms `shift 5`,
/// `reduce 2` and `accept` are accepted too. State labels are opaque, so
/// `sq2` shifts to state `q2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Shift(StateId),
    Reduce(usize),
    Accept,
}

impl Action {
    /// Decode a descriptor. Returns `None` for anything unrecognised.
    pub fn parse(descriptor: &str) -> Option<Self> {
        let descriptor = descriptor.trim();
        match descriptor {
            "acc" | "accept" => return Some(Self::Accept),
            "" => return None,
            _ => {}
        }

        if let Some(state) = strip_operand(descriptor, "shift", 's') {
            return Some(Self::Shift(StateId::new(state)));
        }
        let rule = strip_operand(descriptor, "reduce", 'r')?;
        if rule.chars().all(|c| c.is_ascii_digit()) {
            rule.parse().ok().map(Self::Reduce)
        } else {
            None
        }
    }
}

/// Return the non-empty operand after `long` or `short`.
fn strip_operand<'a>(descriptor: &'a str, long: &str, short: char) -> Option<&'a str> {
    let operand = descriptor
        .strip_prefix(long)
        .or_else(|| descriptor.strip_prefix(short))?
        .trim();
    (!operand.is_empty()).then_some(operand)
}
