//! mysql-table-creator library
//!
//! Creates MySQL tables from JSON table schemas and appends rows to them.
//!
//! # Operations
//!
//! - [`connect`] - Open a connection using the `DATABASE_*` environment variables
//! - [`drop_all`] - Drop and recreate the working database
//! - [`table_creator`] - Validate a [`TableSchema`] and run its `CREATE TABLE`
//! - [`append_row`] - Validate names and run a parameterised `INSERT`
//!
//! Every datatype, constraint and identifier from a schema is checked against
//! [`SqlLiterals`] before it is interpolated into SQL. Row values are always
//! bound as parameters.
//!
//! # Example
//!
//! ```rust,no_run
//! use mysql_table_creator::{append_row, connect, table_creator, CellValue, ConnectionConfig, TableSchema};
//!
//! # async fn run() -> mysql_table_creator::Result<()> {
//! let config = ConnectionConfig::from_env()?;
//! let mut conn = connect(&config).await?;
//!
//! for table in TableSchema::load_file("person.json")? {
//!     table_creator(&mut conn, &table).await?;
//! }
//! append_row(
//!     &mut conn,
//!     "Person",
//!     &["name", "age"],
//!     vec![CellValue::infer("Alice"), CellValue::infer("30")],
//! )
//! .await?;
//!
//! conn.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connect;
pub mod error;
pub mod executor;
pub mod manager;
pub mod testing;

pub use config::ConnectionConfig;
pub use connect::{connect, connect_server, Connection};
pub use error::{Error, Result};
pub use executor::{SqlExecutor, Statement};
pub use manager::{append_row, create_table_statement, drop_all, insert_statement, table_creator};
pub use table_schema::{CellValue, RowBatch, SqlLiterals, TableSchema};
