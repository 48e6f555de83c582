//! Statement execution seam.
//!
//! The schema operations build [`Statement`]s and hand them to a
//! [`SqlExecutor`]. A live [`crate::Connection`] sends them to MySQL; tests
//! record them instead.

use crate::error::Result;
use async_trait::async_trait;
use table_schema::{CellValue, SqlLiterals};

/// SQL text plus the values bound to its `?` placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<CellValue>,
}

impl Statement {
    /// A statement without parameters.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// A statement with positional parameters.
    pub fn with_params(sql: impl Into<String>, params: Vec<CellValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

/// Something that can run statements against a MySQL session.
#[async_trait]
pub trait SqlExecutor: Send {
    /// Allow-lists used to validate schema values before they reach SQL.
    fn literals(&self) -> &SqlLiterals;

    /// Execute a statement and return the number of affected rows.
    async fn execute(&mut self, statement: Statement) -> Result<u64>;
}
