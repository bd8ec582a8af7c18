//! Request Assembler: turns the resolved tables into a [`ParseRequest`].

use serde_json::{Map, Value};

use crate::service::ParseRequest;

use super::{AssemblyError, ResolvedTables, TableField, TableSource};

/// Build the request for the current tables.
///
/// A preset request carries only the identifier. Custom table texts are
/// decoded independently; blank text stands for an empty grammar or table.
/// Fails before anything is sent if any non-blank text is not JSON.
pub fn assemble(tables: &ResolvedTables) -> Result<ParseRequest, AssemblyError> {
    let input = tables.fields.input.clone();

    match &tables.source {
        TableSource::Preset(id) => Ok(ParseRequest::example(id.clone(), input)),
        TableSource::Custom => {
            let fields = &tables.fields;
            let grammar = decode(TableField::Grammar, &fields.grammar)?;
            let action_table = decode(TableField::ActionTable, &fields.action_table)?;
            let goto_table = decode(TableField::GotoTable, &fields.goto_table)?;
            Ok(ParseRequest::custom(grammar, action_table, goto_table, input))
        }
    }
}

fn decode(field: TableField, text: &str) -> Result<Value, AssemblyError> {
    if text.trim().is_empty() {
        return Ok(empty_value(field));
    }
    serde_json::from_str(text).map_err(|source| AssemblyError::MalformedTable { field, source })
}

fn empty_value(field: TableField) -> Value {
    match field {
        TableField::Grammar => Value::Array(Vec::new()),
        TableField::ActionTable | TableField::GotoTable => Value::Object(Map::new()),
    }
}
