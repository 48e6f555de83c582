//! MySQL connection handling.

use crate::config::ConnectionConfig;
use crate::error::Result;
use crate::executor::{SqlExecutor, Statement};
use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::{Conn, Params};
use mysql_types::to_positional_params;
use table_schema::{CellValue, SqlLiterals};
use tracing::{debug, info};

/// An open session with the MySQL server.
///
/// Owned by the caller and passed by `&mut` into each schema operation.
/// Call [`Connection::close`] when done.
pub struct Connection {
    conn: Conn,
    literals: SqlLiterals,
}

/// Connect to the working database named in `config`.
pub async fn connect(config: &ConnectionConfig) -> Result<Connection> {
    open(config, true).await
}

/// Connect to the server without selecting a database.
pub async fn connect_server(config: &ConnectionConfig) -> Result<Connection> {
    open(config, false).await
}

async fn open(config: &ConnectionConfig, select_database: bool) -> Result<Connection> {
    debug!("Connecting to {config}");
    let conn = Conn::new(config.opts(select_database)).await?;
    info!("Connected to database");
    Ok(Connection {
        conn,
        literals: SqlLiterals::default(),
    })
}

impl Connection {
    /// Replace the allow-lists used to validate schemas on this connection.
    pub fn with_literals(mut self, literals: SqlLiterals) -> Self {
        self.literals = literals;
        self
    }

    /// Access the underlying driver connection.
    pub fn inner_mut(&mut self) -> &mut Conn {
        &mut self.conn
    }

    /// Disconnect from the server.
    pub async fn close(self) -> Result<()> {
        self.conn.disconnect().await?;
        debug!("Disconnected from database");
        Ok(())
    }
}

#[async_trait]
impl SqlExecutor for Connection {
    fn literals(&self) -> &SqlLiterals {
        &self.literals
    }

    async fn execute(&mut self, statement: Statement) -> Result<u64> {
        debug!(sql = %statement.sql, params = statement.params.len(), "Executing statement");
        match prepared_params(statement.params) {
            Some(params) => self.conn.exec_drop(statement.sql, params).await?,
            None => self.conn.query_drop(statement.sql).await?,
        }
        Ok(self.conn.affected_rows())
    }
}

/// Parameters for a prepared statement, or `None` when the statement should
/// go over the text protocol. USE and some DDL cannot be prepared.
fn prepared_params(params: Vec<CellValue>) -> Option<Params> {
    if params.is_empty() {
        None
    } else {
        Some(to_positional_params(params))
    }
}
