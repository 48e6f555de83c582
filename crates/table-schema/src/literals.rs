//! SQL literal allow-lists.
//!
//! Datatypes, constraints and identifiers taken from a schema file are
//! interpolated directly into DDL, so every one of them is checked against
//! these lists first. The built-in set covers MySQL 8 and is embedded from
//! `sql_literals.json`; a replacement can be loaded from disk.

use crate::error::SchemaError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

const BUILTIN_LITERALS: &str = include_str!("sql_literals.json");

static BUILTIN: LazyLock<SqlLiterals> = LazyLock::new(|| {
    SqlLiterals::from_json(BUILTIN_LITERALS).expect("embedded sql_literals.json is valid")
});

/// Raw on-disk layout of a literals file.
#[derive(Debug, Clone, Deserialize)]
struct LiteralsFile {
    datatypes: Vec<String>,
    #[serde(default)]
    datatype_modifiers: Vec<String>,
    constraints: Vec<String>,
    #[serde(default)]
    parameterized_constraints: Vec<String>,
    #[serde(default)]
    reserved_words: Vec<String>,
}

/// Allow-lists used to validate schema values. All entries are stored
/// uppercase with single spaces between words.
#[derive(Debug, Clone)]
pub struct SqlLiterals {
    pub(crate) datatypes: HashSet<String>,
    pub(crate) datatype_modifiers: HashSet<String>,
    pub(crate) constraints: HashSet<String>,
    pub(crate) parameterized_constraints: Vec<String>,
    pub(crate) reserved_words: HashSet<String>,
}

impl SqlLiterals {
    /// The built-in MySQL 8 allow-lists.
    pub fn builtin() -> &'static SqlLiterals {
        &BUILTIN
    }

    /// Load allow-lists from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse allow-lists from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let file: LiteralsFile = serde_json::from_str(json)?;
        let set = |items: Vec<String>| -> HashSet<String> {
            items.iter().map(|s| normalize(s)).collect()
        };
        Ok(Self {
            datatypes: set(file.datatypes),
            datatype_modifiers: set(file.datatype_modifiers),
            constraints: set(file.constraints),
            parameterized_constraints: file
                .parameterized_constraints
                .iter()
                .map(|s| normalize(s))
                .collect(),
            reserved_words: set(file.reserved_words),
        })
    }

    /// Whether `word` is a reserved word (case-insensitive).
    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved_words.contains(&word.to_uppercase())
    }
}

impl Default for SqlLiterals {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Uppercase and collapse runs of whitespace to a single space.
pub(crate) fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parses() {
        let literals = SqlLiterals::builtin();
        assert!(literals.datatypes.contains("VARCHAR"));
        assert!(literals.datatypes.contains("DOUBLE PRECISION"));
        assert!(literals.constraints.contains("NOT NULL"));
        assert!(literals.parameterized_constraints.contains(&"DEFAULT".to_string()));
    }

    #[test]
    fn test_reserved_words_case_insensitive() {
        let literals = SqlLiterals::builtin();
        assert!(literals.is_reserved("order"));
        assert!(literals.is_reserved("Group"));
        assert!(!literals.is_reserved("person"));
    }

    #[test]
    fn test_from_json_normalizes_entries() {
        let literals = SqlLiterals::from_json(
            r#"{"datatypes": ["int"], "constraints": ["not   null"]}"#,
        )
        .unwrap();
        assert!(literals.datatypes.contains("INT"));
        assert!(literals.constraints.contains("NOT NULL"));
        assert!(literals.reserved_words.is_empty());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("literals.json");
        fs::write(
            &path,
            r#"{"datatypes": ["TEXT"], "constraints": [], "reserved_words": ["SELECT"]}"#,
        )
        .unwrap();

        let literals = SqlLiterals::from_file(&path).unwrap();
        assert!(literals.datatypes.contains("TEXT"));
        assert!(literals.is_reserved("select"));
    }

    #[test]
    fn test_from_json_missing_datatypes() {
        let result = SqlLiterals::from_json(r#"{"constraints": []}"#);
        assert!(matches!(result, Err(SchemaError::JsonError(_))));
    }
}
