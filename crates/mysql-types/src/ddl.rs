//! MySQL DDL generation from validated table schemas.
//!
//! Every identifier reaching this module has either passed validation in
//! `table-schema` or is quoted here, so the output can be sent to the server
//! as-is.

use table_schema::{ValidatedColumn, ValidatedForeignKey, ValidatedTable};

/// Trait for generating DDL statements.
pub trait ToDdl {
    /// Render a single column clause, e.g. `name VARCHAR(255) NOT NULL`.
    fn to_column_clause(&self, column: &ValidatedColumn) -> String;

    /// Render a single foreign key clause.
    fn to_foreign_key_clause(&self, fk: &ValidatedForeignKey) -> String;

    /// Generate a complete CREATE TABLE statement.
    fn to_create_table(&self, table: &ValidatedTable) -> String;
}

/// MySQL DDL generator.
pub struct MySQLDdl;

impl ToDdl for MySQLDdl {
    fn to_column_clause(&self, column: &ValidatedColumn) -> String {
        let mut clause = format!("{} {}", column.name, column.datatype);
        for constraint in &column.constraints {
            clause.push(' ');
            clause.push_str(constraint);
        }
        clause
    }

    fn to_foreign_key_clause(&self, fk: &ValidatedForeignKey) -> String {
        format!(
            "FOREIGN KEY ({}) REFERENCES {}({})",
            fk.column, fk.references_table, fk.references_column
        )
    }

    fn to_create_table(&self, table: &ValidatedTable) -> String {
        let clauses: Vec<String> = table
            .columns
            .iter()
            .map(|c| format!("  {}", self.to_column_clause(c)))
            .chain(
                table
                    .foreign_keys
                    .iter()
                    .map(|fk| format!("  {}", self.to_foreign_key_clause(fk))),
            )
            .collect();

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n);",
            table.name,
            clauses.join(",\n")
        )
    }
}

impl MySQLDdl {
    /// Quote an arbitrary identifier with backticks, doubling embedded backticks.
    pub fn quote_identifier(name: &str) -> String {
        format!("`{}`", name.replace('`', "``"))
    }

    /// Generate a DROP DATABASE statement.
    pub fn to_drop_database(&self, database: &str) -> String {
        format!("DROP DATABASE IF EXISTS {}", Self::quote_identifier(database))
    }

    /// Generate a CREATE DATABASE statement.
    pub fn to_create_database(&self, database: &str) -> String {
        format!("CREATE DATABASE {}", Self::quote_identifier(database))
    }

    /// Generate a USE statement.
    pub fn to_use_database(&self, database: &str) -> String {
        format!("USE {}", Self::quote_identifier(database))
    }

    /// Generate an INSERT statement template with one `?` per column.
    /// `table_name` and `columns` must already be validated.
    pub fn to_insert(&self, table_name: &str, columns: &[String]) -> String {
        let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table_name,
            columns.join(", "),
            placeholders.join(", ")
        )
    }
}
