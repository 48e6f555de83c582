//! Error types for the schema manager.

use table_schema::SchemaError;
use thiserror::Error;

/// Errors that can occur while connecting or executing schema operations.
#[derive(Error, Debug)]
pub enum Error {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// Schema loading or validation error.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Required environment variable is unset or empty.
    #[error("Missing environment variable: {0}")]
    MissingVariable(&'static str),

    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidVariable { name: &'static str, value: String },

    /// Row length does not match the column list.
    #[error("Row has {values} values but {columns} columns were given")]
    RowLengthMismatch { columns: usize, values: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
