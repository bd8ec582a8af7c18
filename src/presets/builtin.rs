//! The built-in presets.

use crate::base::Symbol;
use crate::grammar::{ActionTable, GotoTable, Grammar};

use super::Preset;

/// Classic `E/T/F` arithmetic grammar over `id`, with its SLR(1) tables.
pub(super) fn expression_grammar() -> Preset {
    Preset {
        grammar: Grammar::new(["E → E+T", "E → T", "T → T*F", "T → F", "F → (E)", "F → id"]),
        terminals: symbols(&["id", "+", "*", "(", ")", "$"]),
        non_terminals: symbols(&["E", "T", "F"]),
        start_symbol: Some(Symbol::new("E")),
        action_table: action_table(&[
            ("0", &[("id", "s5"), ("(", "s4")]),
            ("1", &[("+", "s6"), ("$", "acc")]),
            ("2", &[("+", "r2"), ("*", "s7"), (")", "r2"), ("$", "r2")]),
            ("3", &[("+", "r4"), ("*", "r4"), (")", "r4"), ("$", "r4")]),
            ("4", &[("id", "s5"), ("(", "s4")]),
            ("5", &[("+", "r6"), ("*", "r6"), (")", "r6"), ("$", "r6")]),
            ("6", &[("id", "s5"), ("(", "s4")]),
            ("7", &[("id", "s5"), ("(", "s4")]),
            ("8", &[("+", "s6"), (")", "s11")]),
            ("9", &[("+", "r1"), ("*", "s7"), (")", "r1"), ("$", "r1")]),
            ("10", &[("+", "r3"), ("*", "r3"), (")", "r3"), ("$", "r3")]),
            ("11", &[("+", "r5"), ("*", "r5"), (")", "r5"), ("$", "r5")]),
        ]),
        goto_table: goto_table(&[
            ("0", &[("E", "1"), ("T", "2"), ("F", "3")]),
            ("4", &[("E", "8"), ("T", "2"), ("F", "3")]),
            ("6", &[("T", "9"), ("F", "3")]),
            ("7", &[("F", "10")]),
        ]),
    }
}

/// Ambiguous `S → S+S | S*S | (S) | a` with conflicts resolved in the table
/// (`*` binds tighter, both operators associate left).
pub(super) fn ambiguous_sum_grammar() -> Preset {
    Preset {
        grammar: Grammar::new(["S → S+S", "S → S*S", "S → (S)", "S → a"]),
        terminals: symbols(&["a", "+", "*", "(", ")", "$"]),
        non_terminals: symbols(&["S"]),
        start_symbol: Some(Symbol::new("S")),
        action_table: action_table(&[
            ("0", &[("a", "s3"), ("(", "s2")]),
            ("1", &[("+", "s4"), ("*", "s5"), ("$", "acc")]),
            ("2", &[("a", "s3"), ("(", "s2")]),
            ("3", &[("+", "r4"), ("*", "r4"), (")", "r4"), ("$", "r4")]),
            ("4", &[("a", "s3"), ("(", "s2")]),
            ("5", &[("a", "s3"), ("(", "s2")]),
            ("6", &[("+", "s4"), ("*", "s5"), (")", "s9")]),
            ("7", &[("+", "r1"), ("*", "s5"), (")", "r1"), ("$", "r1")]),
            ("8", &[("+", "r2"), ("*", "r2"), (")", "r2"), ("$", "r2")]),
            ("9", &[("+", "r3"), ("*", "r3"), (")", "r3"), ("$", "r3")]),
        ]),
        goto_table: goto_table(&[
            ("0", &[("S", "1")]),
            ("2", &[("S", "6")]),
            ("4", &[("S", "7")]),
            ("5", &[("S", "8")]),
        ]),
    }
}

type Rows<'a> = &'a [(&'a str, &'a [(&'a str, &'a str)])];

fn action_table(rows: Rows<'_>) -> ActionTable {
    let mut table = ActionTable::new();
    for (state, cells) in rows {
        for (terminal, descriptor) in *cells {
            table.insert(*state, *terminal, *descriptor);
        }
    }
    table
}

fn goto_table(rows: Rows<'_>) -> GotoTable {
    let mut table = GotoTable::new();
    for (state, cells) in rows {
        for (nonterminal, target) in *cells {
            table.insert(*state, *nonterminal, *target);
        }
    }
    table
}

fn symbols(names: &[&str]) -> Vec<Symbol> {
    names.iter().map(Symbol::new).collect()
}
