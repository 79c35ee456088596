use crate::errors::{AppError, AppResult};
use crate::pivot::PivotTable;
use serde_json::{Map, Value};

/// Export JSON pretty-printed: one object per row, keys in column order.
pub(crate) fn encode_json(table: &PivotTable) -> AppResult<Vec<u8>> {
    let rows: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            obj.insert("project".to_string(), Value::from(row.key.label().into_owned()));
            for (date, hours) in table.axis.dates().iter().zip(&row.hours) {
                obj.insert(date.clone(), Value::from(*hours));
            }
            Value::Object(obj)
        })
        .collect();

    serde_json::to_vec_pretty(&rows)
        .map_err(|e| AppError::Encoding(format!("JSON serialization error: {e}")))
}
