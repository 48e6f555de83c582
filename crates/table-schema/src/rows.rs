//! Row files for bulk appends.
//!
//! ```json
//! { "columns": ["id", "name"], "rows": [[1, "Alice"], [2, "Bob"]] }
//! ```

use crate::error::SchemaError;
use crate::values::CellValue;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Column names plus any number of rows to append under them.
#[derive(Debug, Clone, Deserialize)]
pub struct RowBatch {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl RowBatch {
    /// Load a batch from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a batch from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rows converted to cell values.
    pub fn cell_rows(&self) -> impl Iterator<Item = Vec<CellValue>> + '_ {
        self.rows
            .iter()
            .map(|row| row.iter().map(CellValue::from_json).collect())
    }
}
