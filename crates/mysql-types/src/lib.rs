//! MySQL rendering for table-schema types.
//!
//! This crate turns validated schemas into MySQL DDL and row cells into
//! `mysql_async` values.
//!
//! # Structure
//!
//! - `ddl`: Generate `CREATE TABLE`, database reset and `INSERT` statements
//! - `forward`: Convert `CellValue` → `MySQLValue` (for INSERT parameters)
//!
//! # Example
//!
//! ```rust
//! use mysql_types::{MySQLDdl, MySQLValue};
//! use table_schema::CellValue;
//!
//! let ddl = MySQLDdl;
//! assert_eq!(
//!     ddl.to_insert("Person", &["id".to_string(), "name".to_string()]),
//!     "INSERT INTO Person (id, name) VALUES (?, ?)"
//! );
//!
//! let value: MySQLValue = CellValue::Bool(true).into();
//! assert_eq!(value.into_inner(), mysql_async::Value::Int(1));
//! ```

pub mod ddl;
pub mod forward;

pub use ddl::{MySQLDdl, ToDdl};
pub use forward::{to_positional_params, MySQLValue};
