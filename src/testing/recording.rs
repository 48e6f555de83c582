//! An executor that records statements instead of running them.

use crate::error::Result;
use crate::executor::{SqlExecutor, Statement};
use async_trait::async_trait;
use table_schema::SqlLiterals;

/// Records every executed statement. Parameterised statements report one
/// affected row, everything else none.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub statements: Vec<Statement>,
    literals: SqlLiterals,
}

impl RecordingExecutor {
    pub fn with_literals(literals: SqlLiterals) -> Self {
        Self {
            statements: Vec::new(),
            literals,
        }
    }

    /// SQL text of each recorded statement, in execution order.
    pub fn sql(&self) -> Vec<&str> {
        self.statements.iter().map(|s| s.sql.as_str()).collect()
    }
}

#[async_trait]
impl SqlExecutor for RecordingExecutor {
    fn literals(&self) -> &SqlLiterals {
        &self.literals
    }

    async fn execute(&mut self, statement: Statement) -> Result<u64> {
        let affected = if statement.params.is_empty() { 0 } else { 1 };
        self.statements.push(statement);
        Ok(affected)
    }
}
