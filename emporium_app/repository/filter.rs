use serde_json::{Map, Value};
use uuid::Uuid;

/// A single comparable value in a [`Filter`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterValue(Value);

impl From<Uuid> for FilterValue {
    fn from(v: Uuid) -> Self {
        Self(Value::String(v.to_string()))
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        Self(Value::String(v.to_string()))
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        Self(Value::String(v))
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        Self(Value::Bool(v))
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        Self(Value::from(v))
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        Self(Value::from(v))
    }
}

impl From<i16> for FilterValue {
    fn from(v: i16) -> Self {
        Self(Value::from(v))
    }
}

/// A conjunction of field equality constraints over an entity's serialized
/// form. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: Map<String, Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &str, value: impl Into<FilterValue>) -> Self {
        self.fields.insert(field.to_string(), value.into().0);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON object a matching record must contain.
    pub fn as_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn matches(&self, record: &Value) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| record.get(field) == Some(expected))
    }
}
