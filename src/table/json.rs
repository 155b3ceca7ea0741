//! Conversion of JSON documents into table rows

use serde_json::Value;

use super::layout::Row;
use crate::error::{MdprintError, Result};

/// Text shown for a single JSON value in a table cell
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read an array of arrays as rows
pub fn list_from_json(value: &Value) -> Result<Vec<Row>> {
    let rows = value
        .as_array()
        .ok_or_else(|| MdprintError::Input("expected a JSON array of rows".to_string()))?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row.as_array()
                .map(|cells| cells.iter().map(cell_text).collect())
                .ok_or_else(|| MdprintError::Input(format!("row {} is not an array", i + 1)))
        })
        .collect()
}

/// Read an object of arrays as key -> column values, keeping key order.
///
/// A scalar value counts as a single-element column.
pub fn dict_from_json(value: &Value) -> Result<Vec<(String, Row)>> {
    let object = value
        .as_object()
        .ok_or_else(|| MdprintError::Input("expected a JSON object of columns".to_string()))?;

    Ok(object
        .iter()
        .map(|(key, values)| {
            let column = match values {
                Value::Array(cells) => cells.iter().map(cell_text).collect(),
                scalar => vec![cell_text(scalar)],
            };
            (key.clone(), column)
        })
        .collect())
}
