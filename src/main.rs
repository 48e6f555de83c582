//! Command-line interface for mysql-table-creator
//!
//! Connection settings come from `--host`, `--port`, `--username`,
//! `--password` and `--database`, or from the `DATABASE_IP`, `DATABASE_PORT`,
//! `DATABASE_USERNAME`, `DATABASE_PASSWORD` and `DATABASE_DATABASE`
//! environment variables.
//!
//! # Usage Examples
//!
//! ```bash
//! # Drop and recreate the working database
//! mysql-table-creator reset
//!
//! # Create tables from schema files, in order
//! mysql-table-creator create-table person.json pet.json
//!
//! # Print the CREATE TABLE statements without connecting
//! mysql-table-creator print-ddl person.json
//!
//! # Append a single row
//! mysql-table-creator append-row --table Person --columns name,age --value Alice --value 30
//!
//! # Append every row of a JSON file
//! mysql-table-creator append-rows --table Person --file people.json
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use mysql_table_creator::{
    append_row, connect, connect_server, create_table_statement, drop_all, table_creator,
    CellValue, Connection, ConnectionConfig, RowBatch, SqlLiterals, TableSchema,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mysql-table-creator")]
#[command(about = "Create MySQL tables from JSON schemas and append rows to them")]
#[command(long_about = None)]
struct Cli {
    /// JSON file replacing the built-in datatype, constraint and reserved word lists
    #[arg(long, global = true, value_name = "PATH")]
    sql_literals: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop the working database and create it again, empty
    Reset {
        #[command(flatten)]
        connection: ConnectionConfig,
    },

    /// Create tables from schema files (JSON, or YAML by extension)
    CreateTable {
        #[command(flatten)]
        connection: ConnectionConfig,

        /// Schema files, processed in order
        #[arg(required = true, value_name = "SCHEMA_FILE")]
        schema_files: Vec<PathBuf>,
    },

    /// Print the CREATE TABLE statements for schema files without connecting
    PrintDdl {
        /// Schema files, processed in order
        #[arg(required = true, value_name = "SCHEMA_FILE")]
        schema_files: Vec<PathBuf>,
    },

    /// Append one row to a table
    AppendRow {
        #[command(flatten)]
        connection: ConnectionConfig,

        /// Table name (Some_Table_Name)
        #[arg(long)]
        table: String,

        /// Column names (comma-separated, some_column_name)
        #[arg(long, value_delimiter = ',', required = true)]
        columns: Vec<String>,

        /// Row value, repeated once per column; numbers, true/false and null are converted
        #[arg(long = "value", value_name = "VALUE", required = true)]
        values: Vec<String>,
    },

    /// Append every row of a JSON file (`{"columns": [...], "rows": [[...], ...]}`)
    AppendRows {
        #[command(flatten)]
        connection: ConnectionConfig,

        /// Table name (Some_Table_Name)
        #[arg(long)]
        table: String,

        /// Row file
        #[arg(long, value_name = "PATH")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let literals = match &cli.sql_literals {
        Some(path) => SqlLiterals::from_file(path)
            .with_context(|| format!("Failed to load SQL literals from {path:?}"))?,
        None => SqlLiterals::default(),
    };

    match cli.command {
        Commands::Reset { connection } => {
            let mut conn = open(&connection, literals, false).await?;
            drop_all(&mut conn, &connection.database)
                .await
                .with_context(|| format!("Failed to reset database '{}'", connection.database))?;
            conn.close().await?;
        }
        Commands::CreateTable {
            connection,
            schema_files,
        } => {
            let tables = load_tables(&schema_files)?;
            let mut conn = open(&connection, literals, true).await?;
            for table in &tables {
                table_creator(&mut conn, table)
                    .await
                    .with_context(|| format!("Failed to create table '{}'", table.name))?;
            }
            tracing::info!("Created {} table(s)", tables.len());
            conn.close().await?;
        }
        Commands::PrintDdl { schema_files } => {
            for table in load_tables(&schema_files)? {
                let statement = create_table_statement(&table, &literals)
                    .with_context(|| format!("Invalid schema for table '{}'", table.name))?;
                println!("{}\n", statement.sql);
            }
        }
        Commands::AppendRow {
            connection,
            table,
            columns,
            values,
        } => {
            let row: Vec<CellValue> = values.iter().map(|v| CellValue::infer(v)).collect();
            let mut conn = open(&connection, literals, true).await?;
            append_row(&mut conn, &table, &columns, row)
                .await
                .with_context(|| format!("Failed to append row to '{table}'"))?;
            conn.close().await?;
        }
        Commands::AppendRows {
            connection,
            table,
            file,
        } => {
            let batch = RowBatch::from_file(&file)
                .with_context(|| format!("Failed to load rows from {file:?}"))?;
            let mut conn = open(&connection, literals, true).await?;
            let mut total = 0u64;
            for (index, row) in batch.cell_rows().enumerate() {
                total += append_row(&mut conn, &table, &batch.columns, row)
                    .await
                    .with_context(|| format!("Failed to append row {index} to '{table}'"))?;
            }
            tracing::info!("Appended {} row(s) to {}", total, table);
            conn.close().await?;
        }
    }

    Ok(())
}

async fn open(
    config: &ConnectionConfig,
    literals: SqlLiterals,
    select_database: bool,
) -> anyhow::Result<Connection> {
    let conn = if select_database {
        connect(config).await
    } else {
        connect_server(config).await
    };
    Ok(conn
        .with_context(|| format!("Failed to connect to {config}"))?
        .with_literals(literals))
}

fn load_tables(paths: &[PathBuf]) -> anyhow::Result<Vec<TableSchema>> {
    let mut tables = Vec::new();
    for path in paths {
        tables.extend(load_schema_file(path)?);
    }
    Ok(tables)
}

fn load_schema_file(path: &Path) -> anyhow::Result<Vec<TableSchema>> {
    TableSchema::load_file(path).with_context(|| format!("Failed to load schema from {path:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONNECTION: [&str; 10] = [
        "--host",
        "localhost",
        "--port",
        "3306",
        "--username",
        "root",
        "--password",
        "secret",
        "--database",
        "people",
    ];

    fn parse_append_row(extra: &[&str]) -> Result<Cli, clap::Error> {
        let mut args = vec!["mysql-table-creator", "append-row"];
        args.extend(CONNECTION);
        args.extend(["--table", "Person", "--columns", "name,age"]);
        args.extend(extra);
        Cli::try_parse_from(args)
    }

    #[test]
    fn test_append_row_values_keep_commas() {
        let cli = parse_append_row(&["--value", "Smith, John", "--value", "3"]).unwrap();
        match cli.command {
            Commands::AppendRow {
                table,
                columns,
                values,
                ..
            } => {
                assert_eq!(table, "Person");
                assert_eq!(columns, vec!["name", "age"]);
                assert_eq!(values, vec!["Smith, John", "3"]);
            }
            _ => panic!("Expected append-row"),
        }
    }

    #[test]
    fn test_append_row_requires_a_value() {
        let err = parse_append_row(&[]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
