//! Primitive cell values and row identifiers.

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A primitive attribute value held by a row.
///
/// Ordering is natural within a type (lexicographic text, numeric numbers,
/// `false < true`). Across types the order is Bool < Number < Text, so that
/// any column can be sorted even when its values are mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Bool(_) => 0,
            Value::Number(_) => 1,
            Value::Text(_) => 2,
        }
    }

    /// Total order used for sorting.
    pub fn natural_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Compare two possibly-missing values. A missing value sorts first.
pub fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.natural_cmp(b),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            // Integral numbers print without a trailing ".0".
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Stable identifier of a row. Selection is keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl RowId {
    /// Encoding stored in element data. Keeps `Int(1)` and `Text("1")` apart.
    pub fn to_data(&self) -> String {
        match self {
            RowId::Int(n) => format!("i:{n}"),
            RowId::Text(s) => format!("s:{s}"),
        }
    }

    /// Inverse of [`RowId::to_data`].
    pub fn from_data(data: &str) -> Option<RowId> {
        if let Some(n) = data.strip_prefix("i:") {
            n.parse().ok().map(RowId::Int)
        } else {
            data.strip_prefix("s:").map(|s| RowId::Text(s.to_string()))
        }
    }

    /// Form used inside element ids. Same typed prefix as [`RowId::to_data`],
    /// with `%` and `-` percent-escaped so no suffix after a `-` can be
    /// mistaken for part of the id.
    pub fn element_key(&self) -> String {
        let mut out = String::new();
        for ch in self.to_data().chars() {
            match ch {
                '%' => out.push_str("%25"),
                '-' => out.push_str("%2D"),
                c => out.push(c),
            }
        }
        out
    }

    /// The id as a cell value, so an `id` column can be shown and sorted.
    pub fn to_value(&self) -> Value {
        match self {
            RowId::Int(n) => Value::from(*n),
            RowId::Text(s) => Value::from(s.as_str()),
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(n) => write!(f, "{n}"),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowId {
    fn from(n: i64) -> Self {
        RowId::Int(n)
    }
}

impl From<i32> for RowId {
    fn from(n: i32) -> Self {
        RowId::Int(i64::from(n))
    }
}

impl From<u32> for RowId {
    fn from(n: u32) -> Self {
        RowId::Int(i64::from(n))
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId::Text(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        RowId::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_orders_lexicographically() {
        assert_eq!(Value::from("a").natural_cmp(&Value::from("b")), Ordering::Less);
        assert_eq!(Value::from("B").natural_cmp(&Value::from("a")), Ordering::Less);
    }

    #[test]
    fn test_numbers_order_numerically() {
        // "10" < "9" as text, but 9 < 10 as numbers.
        assert_eq!(Value::from(9).natural_cmp(&Value::from(10)), Ordering::Less);
        assert_eq!(Value::from(-1.5).natural_cmp(&Value::from(0)), Ordering::Less);
    }

    #[test]
    fn test_mixed_types_rank() {
        assert_eq!(Value::from(true).natural_cmp(&Value::from(0)), Ordering::Less);
        assert_eq!(Value::from(1000).natural_cmp(&Value::from("a")), Ordering::Less);
    }

    #[test]
    fn test_missing_sorts_first() {
        let a = Value::from("a");
        assert_eq!(compare_fields(None, Some(&a)), Ordering::Less);
        assert_eq!(compare_fields(Some(&a), None), Ordering::Greater);
        assert_eq!(compare_fields(None, None), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(1).to_string(), "1");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from("Sneha").to_string(), "Sneha");
    }

    #[test]
    fn test_row_id_data_encoding() {
        let int = RowId::from(1);
        let text = RowId::from("1");

        assert_ne!(int.to_data(), text.to_data());
        assert_eq!(RowId::from_data(&int.to_data()), Some(int));
        assert_eq!(RowId::from_data(&text.to_data()), Some(text));
        assert_eq!(RowId::from_data("x:1"), None);
    }

    #[test]
    fn test_element_key_keeps_ids_apart() {
        assert_eq!(RowId::Int(1).element_key(), "i:1");
        assert_eq!(RowId::from("1").element_key(), "s:1");
        assert_eq!(RowId::Int(-5).element_key(), "i:%2D5");
        assert_eq!(RowId::from("1-select").element_key(), "s:1%2Dselect");
        assert_eq!(RowId::from("50%").element_key(), "s:50%25");
        assert!(!RowId::from("a-b").element_key().contains('-'));
    }

    #[test]
    fn test_deserialize_untagged() {
        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v, Value::Bool(true));
        let v: Value = serde_json::from_str("3").unwrap();
        assert_eq!(v, Value::Number(3.0));
        let v: Value = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(v, Value::Text("x".into()));
    }
}
