//! Schema manager operations.
//!
//! Each operation takes the executor explicitly and runs its statements one
//! after another. MySQL runs in autocommit mode, so every statement is
//! committed as soon as it completes.

use crate::error::{Error, Result};
use crate::executor::{SqlExecutor, Statement};
use mysql_types::{MySQLDdl, ToDdl};
use table_schema::{CellValue, SqlLiterals, TableSchema};
use tracing::{debug, info, warn};

/// Drop the working database and create it again, empty.
///
/// Issues `DROP DATABASE IF EXISTS`, then `CREATE DATABASE`, then `USE` so the
/// same executor can go on to create tables. There is no confirmation.
pub async fn drop_all<E>(executor: &mut E, database: &str) -> Result<()>
where
    E: SqlExecutor + ?Sized,
{
    let ddl = MySQLDdl;
    warn!("Dropping database {database}");
    executor
        .execute(Statement::new(ddl.to_drop_database(database)))
        .await?;
    executor
        .execute(Statement::new(ddl.to_create_database(database)))
        .await?;
    executor
        .execute(Statement::new(ddl.to_use_database(database)))
        .await?;
    info!("Recreated database {database}");
    Ok(())
}

/// Validate `schema` and render its `CREATE TABLE` statement.
pub fn create_table_statement(schema: &TableSchema, literals: &SqlLiterals) -> Result<Statement> {
    let validated = schema.validate(literals)?;
    Ok(Statement::new(MySQLDdl.to_create_table(&validated)))
}

/// Create the table described by `schema` if it does not exist yet.
pub async fn table_creator<E>(executor: &mut E, schema: &TableSchema) -> Result<()>
where
    E: SqlExecutor + ?Sized,
{
    let statement = create_table_statement(schema, executor.literals())?;
    debug!("{}", statement.sql);
    executor.execute(statement).await?;
    info!("Created table {}", schema.name);
    Ok(())
}

/// Validate names and render a parameterised `INSERT` binding `row` in order.
pub fn insert_statement<S>(
    table_name: &str,
    column_names: &[S],
    row: Vec<CellValue>,
    literals: &SqlLiterals,
) -> Result<Statement>
where
    S: AsRef<str>,
{
    if column_names.len() != row.len() {
        return Err(Error::RowLengthMismatch {
            columns: column_names.len(),
            values: row.len(),
        });
    }

    let table = literals.table_name(table_name)?;
    let columns = column_names
        .iter()
        .map(|c| literals.column_name(c.as_ref()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Statement::with_params(
        MySQLDdl.to_insert(&table, &columns),
        row,
    ))
}

/// Append one row to `table_name`. Returns the number of affected rows.
pub async fn append_row<E, S>(
    executor: &mut E,
    table_name: &str,
    column_names: &[S],
    row: Vec<CellValue>,
) -> Result<u64>
where
    E: SqlExecutor + ?Sized,
    S: AsRef<str> + Sync,
{
    let statement = insert_statement(table_name, column_names, row, executor.literals())?;
    debug!("{}", statement.sql);
    let affected = executor.execute(statement).await?;
    debug!("Appended {affected} row(s) to {table_name}");
    Ok(affected)
}
