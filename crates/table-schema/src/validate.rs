//! Validation of identifiers, datatypes and constraints against [`SqlLiterals`].
//!
//! Each check returns the value as it should appear in generated SQL, so
//! callers never interpolate unchecked input.

use crate::error::SchemaError;
use crate::literals::{normalize, SqlLiterals};
use tracing::error;

/// Datatypes whose arguments are a list of quoted string literals.
const LIST_DATATYPES: [&str; 2] = ["ENUM", "SET"];

/// Bare keywords accepted as a constraint literal, besides numbers and strings.
const LITERAL_KEYWORDS: [&str; 4] = ["NULL", "TRUE", "FALSE", "CURRENT_TIMESTAMP"];

impl SqlLiterals {
    /// Check a table name. Table names start with an uppercase letter followed
    /// by letters or underscores (`Some_Table_Name`).
    pub fn table_name(&self, value: &str) -> Result<String, SchemaError> {
        let mut chars = value.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_uppercase())
            && chars.all(|c| c.is_ascii_alphabetic() || c == '_');
        if !valid {
            error!("Table name {value} not allowed");
            return Err(SchemaError::TableNameNotAllowed(value.to_string()));
        }
        Ok(self.quote_reserved(value))
    }

    /// Check a column name. Column names are lowercase letters and
    /// underscores only (`some_column_name`).
    pub fn column_name(&self, value: &str) -> Result<String, SchemaError> {
        let valid = !value.is_empty()
            && value.chars().all(|c| c.is_ascii_lowercase() || c == '_');
        if !valid {
            error!("Column name {value} not allowed");
            return Err(SchemaError::ColumnNameNotAllowed(value.to_string()));
        }
        Ok(self.quote_reserved(value))
    }

    /// Check a column datatype such as `VARCHAR(255)`, `decimal(10, 2)`,
    /// `INT UNSIGNED` or `ENUM('a', 'b')`. Returns the canonical uppercase form.
    pub fn datatype(&self, value: &str) -> Result<String, SchemaError> {
        match self.render_datatype(value.trim()) {
            Some(rendered) => Ok(rendered),
            None => {
                error!("Type {value} not allowed");
                Err(SchemaError::DatatypeNotAllowed(value.to_string()))
            }
        }
    }

    /// Check a column constraint such as `NOT NULL` or `DEFAULT 'x'`.
    pub fn constraint(&self, value: &str) -> Result<String, SchemaError> {
        match self.render_constraint(value.trim()) {
            Some(rendered) => Ok(rendered),
            None => {
                error!("Constraint {value} not allowed");
                Err(SchemaError::ConstraintNotAllowed(value.to_string()))
            }
        }
    }

    /// Wrap `value` in backticks when it is a reserved word.
    pub fn quote_reserved(&self, value: &str) -> String {
        if self.is_reserved(value) {
            format!("`{value}`")
        } else {
            value.to_string()
        }
    }

    fn render_datatype(&self, value: &str) -> Option<String> {
        let (base, args, modifiers): (String, Option<&str>, Vec<&str>) = match value.find('(') {
            Some(open) => {
                let close = value.rfind(')')?;
                if close < open {
                    return None;
                }
                (
                    normalize(&value[..open]),
                    Some(&value[open + 1..close]),
                    value[close + 1..].split_whitespace().collect(),
                )
            }
            None => {
                // Longest run of leading words that names a type, so that
                // `DOUBLE PRECISION UNSIGNED` splits after `PRECISION`.
                let words: Vec<&str> = value.split_whitespace().collect();
                let split = (1..=words.len())
                    .rev()
                    .find(|&n| self.datatypes.contains(&normalize(&words[..n].join(" "))))?;
                (
                    normalize(&words[..split].join(" ")),
                    None,
                    words[split..].to_vec(),
                )
            }
        };

        if !self.datatypes.contains(&base) {
            return None;
        }

        let is_list = LIST_DATATYPES.contains(&base.as_str());
        let mut rendered = base;
        match args {
            Some(args) if is_list => {
                rendered.push_str(&format!("({})", quoted_list(args)?.join(", ")));
            }
            Some(args) => {
                let sizes: Vec<&str> = args.split(',').map(str::trim).collect();
                let valid = sizes.len() <= 2
                    && sizes
                        .iter()
                        .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()));
                if !valid {
                    return None;
                }
                rendered.push_str(&format!("({})", sizes.join(",")));
            }
            None if is_list => return None,
            None => {}
        }

        for modifier in modifiers {
            let modifier = normalize(modifier);
            if !self.datatype_modifiers.contains(&modifier) {
                return None;
            }
            rendered.push(' ');
            rendered.push_str(&modifier);
        }

        Some(rendered)
    }

    fn render_constraint(&self, value: &str) -> Option<String> {
        let normalized = normalize(value);
        if self.constraints.contains(&normalized) {
            return Some(normalized);
        }

        let (keyword, literal) = value.split_once(char::is_whitespace)?;
        let keyword = normalize(keyword);
        if !self.parameterized_constraints.contains(&keyword) {
            return None;
        }
        let literal = safe_literal(literal.trim())?;
        Some(format!("{keyword} {literal}"))
    }
}

/// Parse `'a', 'b'` into its quoted items.
fn quoted_list(args: &str) -> Option<Vec<&str>> {
    let items: Vec<&str> = args.split(',').map(str::trim).collect();
    if items.iter().all(|item| is_quoted_string(item)) {
        Some(items)
    } else {
        None
    }
}

fn is_quoted_string(s: &str) -> bool {
    s.len() >= 2
        && s.starts_with('\'')
        && s.ends_with('\'')
        && !s[1..s.len() - 1].contains(['\'', '\\'])
}

/// Returns the literal as it should be rendered, or `None` if it is unsafe.
fn safe_literal(s: &str) -> Option<String> {
    if is_quoted_string(s) {
        return Some(s.to_string());
    }
    let upper = s.to_uppercase();
    if LITERAL_KEYWORDS.contains(&upper.as_str()) {
        return Some(upper);
    }
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut parts = digits.splitn(2, '.');
    let is_number = parts
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
    is_number.then(|| s.to_string())
}
