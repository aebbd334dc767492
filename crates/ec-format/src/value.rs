//! Loosely typed cell input.

/// Anything a report cell may be asked to display.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// null / undefined
    Missing,
    Number(f64),
    Text(String),
    /// Values with no numeric meaning, kept as their textual form.
    Other(String),
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<usize> for CellValue {
    fn from(v: usize) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Self::Missing)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(v: &serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Null => Self::Missing,
            Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .unwrap_or_else(|| Self::Other(n.to_string())),
            Value::String(s) => Self::Text(s.clone()),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => Self::Other(v.to_string()),
        }
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(v: serde_json::Value) -> Self {
        (&v).into()
    }
}
