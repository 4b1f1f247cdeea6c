//! The revived document model
//!
//! [`Revived`] is what a parse walk produces: the usual JSON variants plus
//! [`Revived::DateTime`] for strings a reviver turned into an instant.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::ops::Index;

static NULL: Revived = Revived::Null;

/// A JSON value after revival
#[derive(Debug, Clone, PartialEq)]
pub enum Revived {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// A UTC instant produced from an ISO-8601 string
    DateTime(DateTime<Utc>),
    Array(Vec<Revived>),
    Object(BTreeMap<String, Revived>),
}

impl Revived {
    pub fn is_null(&self) -> bool {
        matches!(self, Revived::Null)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Revived::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Revived::Number(_))
    }

    pub fn is_date_time(&self) -> bool {
        matches!(self, Revived::DateTime(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Revived::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Revived::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Revived::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime<Utc>> {
        match self {
            Revived::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Revived>> {
        match self {
            Revived::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Revived>> {
        match self {
            Revived::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up an object member; `None` for missing keys and non-objects
    pub fn get(&self, key: &str) -> Option<&Revived> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Convert back into plain JSON.
    ///
    /// Dates become UTC ISO-8601 strings with millisecond precision and a `Z`
    /// suffix, e.g. `2025-01-22T09:37:40.994Z`.
    pub fn into_json(self) -> Value {
        match self {
            Revived::Null => Value::Null,
            Revived::Bool(b) => Value::Bool(b),
            Revived::Number(n) => Value::Number(n),
            Revived::String(s) => Value::String(s),
            Revived::DateTime(dt) => Value::String(format_date_time(&dt)),
            Revived::Array(items) => {
                Value::Array(items.into_iter().map(Revived::into_json).collect())
            }
            Revived::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.into_json()))
                    .collect(),
            ),
        }
    }
}

fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<Value> for Revived {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Revived::Null,
            Value::Bool(b) => Revived::Bool(b),
            Value::Number(n) => Revived::Number(n),
            Value::String(s) => Revived::String(s),
            Value::Array(items) => Revived::Array(items.into_iter().map(Revived::from).collect()),
            Value::Object(map) => Revived::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Revived::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<DateTime<Utc>> for Revived {
    fn from(dt: DateTime<Utc>) -> Self {
        Revived::DateTime(dt)
    }
}

impl From<String> for Revived {
    fn from(s: String) -> Self {
        Revived::String(s)
    }
}

impl From<&str> for Revived {
    fn from(s: &str) -> Self {
        Revived::String(s.to_string())
    }
}

impl Index<&str> for Revived {
    type Output = Revived;

    fn index(&self, key: &str) -> &Revived {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Revived {
    type Output = Revived;

    fn index(&self, index: usize) -> &Revived {
        self.as_array()
            .and_then(|items| items.get(index))
            .unwrap_or(&NULL)
    }
}

impl Serialize for Revived {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Revived::Null => serializer.serialize_unit(),
            Revived::Bool(b) => serializer.serialize_bool(*b),
            Revived::Number(n) => n.serialize(serializer),
            Revived::String(s) => serializer.serialize_str(s),
            Revived::DateTime(dt) => serializer.serialize_str(&format_date_time(dt)),
            Revived::Array(items) => serializer.collect_seq(items),
            Revived::Object(map) => serializer.collect_map(map),
        }
    }
}
