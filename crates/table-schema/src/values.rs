//! Row cell values.
//!
//! Rows usually arrive as text (command line arguments, CSV-ish input), so
//! each cell is inferred into the narrowest SQL value its text represents.

use std::fmt;
use tracing::debug;

/// A single value bound into an INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`, e.g. for `BIGINT UNSIGNED` columns
    UInt(u64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Infer a value from its textual form.
    ///
    /// - `^[0-9]+$` becomes [`CellValue::Int`], or [`CellValue::UInt`] above
    ///   `i64::MAX` (falling back to text if it overflows `u64`)
    /// - `^[0-9]+\.[0-9]+$` becomes [`CellValue::Float`]
    /// - `true` / `false` become [`CellValue::Bool`]
    /// - `null` becomes [`CellValue::Null`]
    /// - everything else stays [`CellValue::Text`]
    pub fn infer(text: &str) -> Self {
        let value = if is_digits(text) {
            text.parse::<i64>()
                .map(CellValue::Int)
                .or_else(|_| text.parse::<u64>().map(CellValue::UInt))
                .unwrap_or_else(|_| CellValue::Text(text.to_string()))
        } else if is_decimal(text) {
            text.parse::<f64>()
                .map(CellValue::Float)
                .unwrap_or_else(|_| CellValue::Text(text.to_string()))
        } else {
            match text {
                "true" => CellValue::Bool(true),
                "false" => CellValue::Bool(false),
                "null" => CellValue::Null,
                _ => CellValue::Text(text.to_string()),
            }
        };
        if matches!(value, CellValue::Text(_)) {
            debug!("Value {text} not converted");
        } else {
            debug!("Value {text} converted to {}", value.kind());
        }
        value
    }

    /// Convert a JSON value. Strings still go through [`CellValue::infer`];
    /// arrays and objects are bound as their JSON text. Only numbers with a
    /// fractional part or exponent become [`CellValue::Float`].
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    CellValue::UInt(u)
                } else {
                    n.as_f64()
                        .map(CellValue::Float)
                        .unwrap_or_else(|| CellValue::Text(n.to_string()))
                }
            }
            serde_json::Value::String(s) => CellValue::infer(s),
            other => CellValue::Text(other.to_string()),
        }
    }

    /// Short name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::UInt(_) => "uint",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::UInt(u) => write!(f, "{u}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::infer(text)
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::infer(&text)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_decimal(s: &str) -> bool {
    s.split_once('.')
        .is_some_and(|(int, frac)| is_digits(int) && is_digits(frac))
}
