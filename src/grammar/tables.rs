//! Grammar, action and goto tables decoded from JSON-shaped data.
//!
//! All three serialize back to the plain JSON shapes they were read from
//! (`[...]` for grammars, `{state: {symbol: cell}}` for tables), so a preset
//! can be shown to the user as editable text and sent back verbatim.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::base::{StateId, Symbol};

use super::TableError;

/// Ordered list of production strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Grammar {
    rules: Vec<String>,
}

impl Grammar {
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Decode a JSON array of strings. `null` is read as an empty grammar.
    pub fn from_value(value: &Value) -> Result<Self, TableError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::String(rule) => Ok(rule.clone()),
                    other => Err(TableError::shape(
                        "grammar",
                        format!("production {} must be a string, found {}", i + 1, kind(other)),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|rules| Self { rules }),
            other => Err(TableError::shape(
                "grammar",
                format!("expected a list of productions, found {}", kind(other)),
            )),
        }
    }
}

impl Serialize for Grammar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rules.serialize(serializer)
    }
}

impl TryFrom<Value> for Grammar {
    type Error = TableError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

/// `state → terminal → descriptor`. Absent cells are parse errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct ActionTable {
    rows: IndexMap<StateId, IndexMap<Symbol, String>>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one cell.
    pub fn insert(
        &mut self,
        state: impl Into<StateId>,
        terminal: impl Into<Symbol>,
        descriptor: impl Into<String>,
    ) {
        self.rows
            .entry(state.into())
            .or_default()
            .insert(terminal.into(), descriptor.into());
    }

    /// The raw descriptor for `(state, terminal)`, if any.
    pub fn get(&self, state: &str, terminal: &str) -> Option<&str> {
        self.rows.get(state)?.get(terminal).map(String::as_str)
    }

    pub fn states(&self) -> impl Iterator<Item = &StateId> {
        self.rows.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Decode `{state: {terminal: "s5"}}`. `null` is read as an empty table.
    pub fn from_value(value: &Value) -> Result<Self, TableError> {
        let mut table = Self::new();
        for_each_cell("action table", value, |state, terminal, cell| {
            let Value::String(descriptor) = cell else {
                return Err(TableError::shape(
                    "action table",
                    format!(
                        "cell for state {state}, symbol {terminal} must be a string, found {}",
                        kind(cell)
                    ),
                ));
            };
            table.insert(state, terminal, descriptor.as_str());
            Ok(())
        })?;
        Ok(table)
    }
}

impl Serialize for ActionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl TryFrom<Value> for ActionTable {
    type Error = TableError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

/// `state → nonterminal → successor state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct GotoTable {
    rows: IndexMap<StateId, IndexMap<Symbol, StateId>>,
}

impl GotoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        state: impl Into<StateId>,
        nonterminal: impl Into<Symbol>,
        target: impl Into<StateId>,
    ) {
        self.rows
            .entry(state.into())
            .or_default()
            .insert(nonterminal.into(), target.into());
    }

    pub fn get(&self, state: &str, nonterminal: &str) -> Option<&StateId> {
        self.rows.get(state)?.get(nonterminal)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Decode `{state: {nonterminal: "3"}}`; integer targets are accepted.
    pub fn from_value(value: &Value) -> Result<Self, TableError> {
        let mut table = Self::new();
        for_each_cell("goto table", value, |state, nonterminal, cell| {
            let target = match cell {
                Value::String(target) => StateId::new(target),
                Value::Number(n) if n.is_u64() => StateId::new(n.to_string()),
                other => {
                    return Err(TableError::shape(
                        "goto table",
                        format!(
                            "cell for state {state}, symbol {nonterminal} must be a state, found {}",
                            kind(other)
                        ),
                    ));
                }
            };
            table.insert(state, nonterminal, target);
            Ok(())
        })?;
        Ok(table)
    }
}

impl Serialize for GotoTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl TryFrom<Value> for GotoTable {
    type Error = TableError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

/// Walk a two-level object, handing every leaf to `visit`.
fn for_each_cell(
    table: &'static str,
    value: &Value,
    mut visit: impl FnMut(&str, &str, &Value) -> Result<(), TableError>,
) -> Result<(), TableError> {
    let rows = match value {
        Value::Null => return Ok(()),
        Value::Object(rows) => rows,
        other => {
            return Err(TableError::shape(
                table,
                format!("expected an object keyed by state, found {}", kind(other)),
            ));
        }
    };

    for (state, row) in rows {
        let Value::Object(cells) = row else {
            return Err(TableError::shape(
                table,
                format!("row for state {state} must be an object, found {}", kind(row)),
            ));
        };
        for (symbol, cell) in cells {
            visit(state, symbol, cell)?;
        }
    }
    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
