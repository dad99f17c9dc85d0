//! TableRow trait and the bundled `Record` row type.

use std::collections::BTreeMap;

use serde::Serialize;

use super::value::{RowId, Value};
use crate::error::RowError;

/// Trait for items that can be displayed as rows in a [`DataTable`](super::DataTable).
///
/// # Example
///
/// ```
/// use tessera::widgets::table::{RowId, TableRow, Value};
///
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRow for User {
///     fn id(&self) -> RowId {
///         RowId::from(self.id)
///     }
///
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(Value::from(self.name.as_str())),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Unique identifier for this row.
    ///
    /// Used for stable selection across re-sorts and re-renders.
    fn id(&self) -> RowId;

    /// Value of the named attribute, or `None` if the row has no such field.
    fn field(&self, name: &str) -> Option<Value>;
}

/// A row with an id and named primitive attributes.
///
/// The id is also readable as the `"id"` field, so it can back a column.
///
/// ```
/// use tessera::widgets::table::{Record, TableRow, Value};
///
/// let row = Record::new(1).set("name", "Atharav").set("active", true);
/// assert_eq!(row.field("name"), Some(Value::from("Atharav")));
/// assert_eq!(row.field("id"), Some(Value::from(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    id: RowId,
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record with the given id.
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set a field. Setting `"id"` is ignored; the id is fixed at creation.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if name != "id" {
            self.fields.insert(name, value.into());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field names in sorted order, excluding `id`.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Build a record from a JSON object.
    ///
    /// The object needs an `id` that is a string or an integer. Other fields
    /// must be strings, numbers, booleans or null (null fields are left out).
    pub fn from_json(json: serde_json::Value) -> Result<Self, RowError> {
        let map = match json {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(RowError::NotAnObject {
                    found: json_type_name(&other),
                });
            }
        };

        let id = match map.get("id") {
            None | Some(serde_json::Value::Null) => return Err(RowError::MissingId),
            Some(serde_json::Value::String(s)) => RowId::Text(s.clone()),
            Some(serde_json::Value::Number(n)) => match n.as_i64() {
                Some(n) => RowId::Int(n),
                None => return Err(RowError::InvalidId { found: "non-integer number" }),
            },
            Some(other) => {
                return Err(RowError::InvalidId {
                    found: json_type_name(other),
                });
            }
        };

        let mut record = Record::new(id);
        for (name, value) in map {
            if name == "id" {
                continue;
            }
            let value = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::Bool(b) => Value::Bool(b),
                serde_json::Value::String(s) => Value::Text(s),
                serde_json::Value::Number(n) => match n.as_f64() {
                    Some(n) => Value::Number(n),
                    None => {
                        return Err(RowError::UnsupportedValue {
                            field: name,
                            found: "number",
                        });
                    }
                },
                other => {
                    return Err(RowError::UnsupportedValue {
                        field: name,
                        found: json_type_name(&other),
                    });
                }
            };
            record.fields.insert(name, value);
        }
        Ok(record)
    }

    /// Parse a JSON array of objects into records.
    pub fn list_from_json_str(json: &str) -> Result<Vec<Self>, RowError> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        match parsed {
            serde_json::Value::Array(items) => items.into_iter().map(Record::from_json).collect(),
            other => Err(RowError::NotAnArray {
                found: json_type_name(&other),
            }),
        }
    }
}

impl TableRow for Record {
    fn id(&self) -> RowId {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<Value> {
        if name == "id" {
            return Some(self.id.to_value());
        }
        self.fields.get(name).cloned()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
