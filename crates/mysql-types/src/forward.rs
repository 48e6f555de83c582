//! Forward conversion: CellValue → MySQLValue
//!
//! This module implements `From<CellValue>` for `MySQLValue`, converting
//! row cells into values that can be bound as positional INSERT parameters.

use mysql_async::{Params, Value};
use table_schema::CellValue;

/// MySQL value wrapper for type-safe conversions.
#[derive(Debug, Clone)]
pub struct MySQLValue(pub Value);

impl MySQLValue {
    /// Get the inner mysql_async::Value.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Get a reference to the inner value.
    pub fn as_inner(&self) -> &Value {
        &self.0
    }
}

impl From<CellValue> for MySQLValue {
    fn from(cell: CellValue) -> Self {
        match cell {
            CellValue::Null => MySQLValue(Value::NULL),
            // Boolean - MySQL uses TINYINT(1)
            CellValue::Bool(b) => MySQLValue(Value::Int(if b { 1 } else { 0 })),
            CellValue::Int(i) => MySQLValue(Value::Int(i)),
            CellValue::UInt(u) => MySQLValue(Value::UInt(u)),
            CellValue::Float(f) => MySQLValue(Value::Double(f)),
            CellValue::Text(s) => MySQLValue(Value::Bytes(s.into_bytes())),
        }
    }
}

/// Convert a row into positional parameters, preserving order.
pub fn to_positional_params(row: Vec<CellValue>) -> Params {
    if row.is_empty() {
        return Params::Empty;
    }
    Params::Positional(
        row.into_iter()
            .map(|cell| MySQLValue::from(cell).into_inner())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_conversion() {
        let mysql_val: MySQLValue = CellValue::Null.into();
        assert!(matches!(mysql_val.0, Value::NULL));
    }

    #[test]
    fn test_bool_conversion() {
        let mysql_val: MySQLValue = CellValue::Bool(true).into();
        assert!(matches!(mysql_val.0, Value::Int(1)));

        let mysql_val: MySQLValue = CellValue::Bool(false).into();
        assert!(matches!(mysql_val.0, Value::Int(0)));
    }

    #[test]
    fn test_int_conversion() {
        let mysql_val: MySQLValue = CellValue::Int(9_223_372_036_854_775_807).into();
        assert!(matches!(
            mysql_val.as_inner(),
            Value::Int(9_223_372_036_854_775_807)
        ));
    }

    #[test]
    fn test_uint_conversion() {
        let mysql_val: MySQLValue = CellValue::UInt(u64::MAX).into();
        assert_eq!(mysql_val.into_inner(), Value::UInt(18_446_744_073_709_551_615));
    }

    #[test]
    fn test_float_conversion() {
        let mysql_val: MySQLValue = CellValue::Float(1.23456789012345).into();
        if let Value::Double(d) = mysql_val.0 {
            assert!((d - 1.23456789012345).abs() < 0.0001);
        } else {
            panic!("Expected Double value");
        }
    }

    #[test]
    fn test_text_conversion() {
        let mysql_val: MySQLValue = CellValue::Text("hello world".to_string()).into();
        if let Value::Bytes(b) = mysql_val.into_inner() {
            assert_eq!(String::from_utf8(b).unwrap(), "hello world");
        } else {
            panic!("Expected Bytes value");
        }
    }

    #[test]
    fn test_positional_params_keep_order() {
        let params = to_positional_params(vec![
            CellValue::Int(1),
            CellValue::Text("Alice".to_string()),
        ]);
        match params {
            Params::Positional(values) => {
                assert_eq!(values.len(), 2);
                assert_eq!(values[0], Value::Int(1));
                assert_eq!(values[1], Value::Bytes(b"Alice".to_vec()));
            }
            other => panic!("Expected positional params, got {other:?}"),
        }
    }

    #[test]
    fn test_positional_params_empty() {
        assert!(matches!(to_positional_params(vec![]), Params::Empty));
    }
}
