//! Table schema definitions.
//!
//! A schema file describes one table, or an array of tables:
//!
//! ```json
//! {
//!     "name": "Person",
//!     "columns": [
//!         { "name": "id", "datatype": "INT", "constraints": ["NOT NULL", "AUTO_INCREMENT", "PRIMARY KEY"] },
//!         { "name": "name", "datatype": "VARCHAR(255)", "constraints": ["NOT NULL"] }
//!     ],
//!     "foreign_keys": [
//!         { "name": "person_id", "references_table": "Person", "references_column": "id" }
//!     ]
//! }
//! ```
//!
//! The raw types mirror the file. [`TableSchema::validate`] checks every
//! value against [`SqlLiterals`] and produces a [`ValidatedTable`] whose
//! strings are safe to interpolate into DDL.

use crate::error::SchemaError;
use crate::literals::SqlLiterals;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Raw schema types
// ============================================================================

/// Definition of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name
    pub name: String,

    /// SQL datatype, e.g. `VARCHAR(255)`
    pub datatype: String,

    /// Constraint keywords in declaration order, e.g. `["NOT NULL"]`
    #[serde(default)]
    pub constraints: Vec<String>,
}

/// Foreign key from a column of this table to a column of another table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyDefinition {
    /// Column in this table holding the reference
    pub name: String,

    /// Referenced table
    pub references_table: String,

    /// Referenced column
    pub references_column: String,
}

/// A table as described in a schema file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name
    pub name: String,

    /// Columns in declaration order
    pub columns: Vec<ColumnDefinition>,

    /// Foreign keys in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub foreign_keys: Vec<ForeignKeyDefinition>,
}

impl TableSchema {
    /// Parse a single table from JSON.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load all tables from a schema file, in file order.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, anything else as JSON.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
            });
        if is_yaml {
            Self::parse_yaml(&content)
        } else {
            Self::parse_json(&content)
        }
    }

    /// Parse one or many tables from a JSON string.
    ///
    /// A top-level array is a list of tables, anything else a single table.
    pub fn parse_json(json: &str) -> Result<Vec<Self>, SchemaError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        match value {
            serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
            other => Ok(vec![serde_json::from_value(other)?]),
        }
    }

    /// Parse one or many tables from a YAML string.
    ///
    /// A top-level sequence is a list of tables, anything else a single table.
    pub fn parse_yaml(yaml: &str) -> Result<Vec<Self>, SchemaError> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        match value {
            serde_yaml::Value::Sequence(_) => Ok(serde_yaml::from_value(value)?),
            other => Ok(vec![serde_yaml::from_value(other)?]),
        }
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Check every identifier, datatype and constraint.
    pub fn validate(&self, literals: &SqlLiterals) -> Result<ValidatedTable, SchemaError> {
        let name = literals.table_name(&self.name)?;
        if self.columns.is_empty() {
            return Err(SchemaError::EmptyTable(self.name.clone()));
        }

        let columns = self
            .columns
            .iter()
            .map(|column| -> Result<ValidatedColumn, SchemaError> {
                Ok(ValidatedColumn {
                    name: literals.column_name(&column.name)?,
                    datatype: literals.datatype(&column.datatype)?,
                    constraints: column
                        .constraints
                        .iter()
                        .map(|c| literals.constraint(c))
                        .collect::<Result<Vec<_>, _>>()?,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        let foreign_keys = self
            .foreign_keys
            .iter()
            .map(|fk| -> Result<ValidatedForeignKey, SchemaError> {
                Ok(ValidatedForeignKey {
                    column: literals.column_name(&fk.name)?,
                    references_table: literals.table_name(&fk.references_table)?,
                    references_column: literals.column_name(&fk.references_column)?,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        Ok(ValidatedTable {
            name,
            columns,
            foreign_keys,
        })
    }
}

// ============================================================================
// Validated types
// ============================================================================

/// A column whose parts have passed validation. Identifiers are already
/// quoted where required.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedColumn {
    pub name: String,
    pub datatype: String,
    pub constraints: Vec<String>,
}

/// A foreign key whose identifiers have passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForeignKey {
    pub column: String,
    pub references_table: String,
    pub references_column: String,
}

/// A table ready to be rendered as DDL.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTable {
    pub name: String,
    pub columns: Vec<ValidatedColumn>,
    pub foreign_keys: Vec<ValidatedForeignKey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSON: &str = r#"
    {
        "name": "Person",
        "columns": [
            { "name": "id", "datatype": "INT", "constraints": ["NOT NULL", "AUTO_INCREMENT", "PRIMARY KEY"] },
            { "name": "name", "datatype": "VARCHAR(255)", "constraints": ["NOT NULL"] },
            { "name": "age", "datatype": "INT", "constraints": ["NOT NULL"] },
            { "name": "is_active", "datatype": "BOOLEAN", "constraints": ["NOT NULL"] }
        ]
    }"#;

    const ADDRESS: &str = r#"
    {
        "name": "Address",
        "columns": [
            { "name": "id", "datatype": "INT", "constraints": ["PRIMARY KEY"] },
            { "name": "person_id", "datatype": "INT" }
        ],
        "foreign_keys": [
            { "name": "person_id", "references_table": "Person", "references_column": "id" }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let table = TableSchema::from_json(PERSON).unwrap();
        assert_eq!(table.name, "Person");
        assert_eq!(table.column_names(), vec!["id", "name", "age", "is_active"]);
        assert!(table.foreign_keys.is_empty());
        assert_eq!(
            table.get_column("id").unwrap().constraints,
            vec!["NOT NULL", "AUTO_INCREMENT", "PRIMARY KEY"]
        );
    }

    #[test]
    fn test_missing_constraints_default_to_empty() {
        let table = TableSchema::from_json(ADDRESS).unwrap();
        assert!(table.get_column("person_id").unwrap().constraints.is_empty());
        assert_eq!(table.foreign_keys.len(), 1);
        assert_eq!(table.foreign_keys[0].references_table, "Person");
    }

    #[test]
    fn test_missing_columns_is_error() {
        let result = TableSchema::from_json(r#"{"name": "Person"}"#);
        assert!(matches!(result, Err(SchemaError::JsonError(_))));
    }

    #[test]
    fn test_parse_json_single_or_many() {
        assert_eq!(TableSchema::parse_json(PERSON).unwrap().len(), 1);

        let many = format!("[{PERSON}, {ADDRESS}]");
        let tables = TableSchema::parse_json(&many).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].name, "Person");
        assert_eq!(tables[1].name, "Address");
    }

    #[test]
    fn test_parse_errors_name_the_missing_field() {
        let err = TableSchema::parse_json(r#"{"name":"Person","columns":[{"name":"id"}]}"#)
            .unwrap_err();
        assert!(matches!(err, SchemaError::JsonError(_)));
        assert!(err.to_string().contains("datatype"), "got: {err}");

        let err = TableSchema::parse_json(r#"[{"name":"Person"}]"#).unwrap_err();
        assert!(err.to_string().contains("columns"), "got: {err}");

        let err = TableSchema::parse_yaml("name: Person\ncolumns:\n  - name: id\n").unwrap_err();
        assert!(matches!(err, SchemaError::YamlError(_)));
        assert!(err.to_string().contains("datatype"), "got: {err}");
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
- name: Person
  columns:
    - name: id
      datatype: INT
      constraints: [PRIMARY KEY]
- name: Pet
  columns:
    - name: owner_id
      datatype: INT
  foreign_keys:
    - name: owner_id
      references_table: Person
      references_column: id
"#;
        let tables = TableSchema::parse_yaml(yaml).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].foreign_keys[0].name, "owner_id");
    }

    #[test]
    fn test_load_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("person.json");
        fs::write(&json_path, PERSON).unwrap();
        let tables = TableSchema::load_file(&json_path).unwrap();
        assert_eq!(tables[0].name, "Person");

        let yaml_path = dir.path().join("person.yml");
        fs::write(
            &yaml_path,
            "name: Person\ncolumns:\n  - name: id\n    datatype: INT\n",
        )
        .unwrap();
        let tables = TableSchema::load_file(&yaml_path).unwrap();
        assert_eq!(tables[0].column_names(), vec!["id"]);
    }

    #[test]
    fn test_load_file_missing() {
        let result = TableSchema::load_file("/nonexistent/schema.json");
        assert!(matches!(result, Err(SchemaError::IoError(_))));
    }

    #[test]
    fn test_validate() {
        let table = TableSchema::from_json(ADDRESS).unwrap();
        let validated = table.validate(SqlLiterals::builtin()).unwrap();
        assert_eq!(validated.name, "Address");
        assert_eq!(validated.columns.len(), 2);
        assert_eq!(validated.columns[0].constraints, vec!["PRIMARY KEY"]);
        assert_eq!(
            validated.foreign_keys,
            vec![ValidatedForeignKey {
                column: "person_id".to_string(),
                references_table: "Person".to_string(),
                references_column: "id".to_string(),
            }]
        );
    }

    #[test]
    fn test_validate_rejects_bad_parts() {
        let literals = SqlLiterals::builtin();

        let mut table = TableSchema::from_json(PERSON).unwrap();
        table.columns[1].datatype = "VARCHAR(255); DROP TABLE Person".to_string();
        assert!(matches!(
            table.validate(literals),
            Err(SchemaError::DatatypeNotAllowed(_))
        ));

        let mut table = TableSchema::from_json(PERSON).unwrap();
        table.columns[0].constraints.push("CHECK (1=1)".to_string());
        assert!(matches!(
            table.validate(literals),
            Err(SchemaError::ConstraintNotAllowed(_))
        ));

        let mut table = TableSchema::from_json(ADDRESS).unwrap();
        table.foreign_keys[0].references_table = "person".to_string();
        assert!(matches!(
            table.validate(literals),
            Err(SchemaError::TableNameNotAllowed(_))
        ));
    }

    #[test]
    fn test_validate_empty_table() {
        let table = TableSchema {
            name: "Empty".to_string(),
            columns: vec![],
            foreign_keys: vec![],
        };
        assert!(matches!(
            table.validate(SqlLiterals::builtin()),
            Err(SchemaError::EmptyTable(_))
        ));
    }
}
