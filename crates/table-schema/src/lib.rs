//! Table schema model for mysql-table-creator.
//!
//! This crate holds everything that can be decided without a database:
//!
//! - [`TableSchema`] - Tables, columns and foreign keys loaded from JSON or YAML
//! - [`SqlLiterals`] - Allow-lists of datatypes, constraints and reserved words
//! - [`ValidatedTable`] - A schema whose every part has been checked and is safe to render
//! - [`CellValue`] - Row values inferred from text or JSON
//! - [`RowBatch`] - Many rows for one set of columns
//!
//! # Architecture
//!
//! ```text
//! table-schema (this crate)
//!    │
//!    ├─── mysql-types          (renders ValidatedTable as MySQL DDL, CellValue as mysql_async::Value)
//!    │
//!    └─── mysql-table-creator  (connects and executes)
//! ```
//!
//! # Example
//!
//! ```rust
//! use table_schema::{SqlLiterals, TableSchema};
//!
//! let table = TableSchema::from_json(
//!     r#"{"name": "Person", "columns": [{"name": "id", "datatype": "int", "constraints": ["primary key"]}]}"#,
//! )
//! .unwrap();
//!
//! let validated = table.validate(SqlLiterals::builtin()).unwrap();
//! assert_eq!(validated.columns[0].datatype, "INT");
//! assert_eq!(validated.columns[0].constraints, vec!["PRIMARY KEY"]);
//! ```

pub mod error;
pub mod literals;
pub mod rows;
pub mod schema;
pub mod validate;
pub mod values;

pub use error::SchemaError;
pub use literals::SqlLiterals;
pub use rows::RowBatch;
pub use schema::{
    ColumnDefinition, ForeignKeyDefinition, TableSchema, ValidatedColumn, ValidatedForeignKey,
    ValidatedTable,
};
pub use values::CellValue;
