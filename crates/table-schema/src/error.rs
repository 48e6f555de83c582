//! Error types for schema loading and validation.

use thiserror::Error;

/// Errors that can occur while loading or validating a table schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Error reading a schema or literals file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Table name does not follow the `Some_Table_Name` convention.
    #[error("Table name '{0}' not allowed")]
    TableNameNotAllowed(String),

    /// Column name does not follow the `some_column_name` convention.
    #[error("Column name '{0}' not allowed")]
    ColumnNameNotAllowed(String),

    /// Datatype is not in the allow-list or has malformed arguments.
    #[error("Type '{0}' not allowed")]
    DatatypeNotAllowed(String),

    /// Constraint is not in the allow-list.
    #[error("Constraint '{0}' not allowed")]
    ConstraintNotAllowed(String),

    /// Table defines no columns.
    #[error("Table '{0}' has no columns")]
    EmptyTable(String),
}
