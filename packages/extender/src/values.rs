// ABOUTME: Submitted form values and their coercion into option fields
// ABOUTME: Text, boolean and selection coercions; anything unusable means "no change"

use crate::error::{ExtenderError, Result};
use crate::types::HeaderSelection;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat key/value payload handed over by the host's form layer after the
/// user submits a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedValues(Map<String, Value>);

impl SubmittedValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(coerce_text)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(coerce_flag)
    }

    pub fn selection(&self, key: &str) -> Option<HeaderSelection> {
        self.get(key).and_then(coerce_selection)
    }

    /// Parse a JSON object payload
    pub fn from_json(raw: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ExtenderError::InvalidValues(format!(
                "expected a JSON object, got {}",
                kind_of(&other)
            ))),
        }
    }
}

impl From<Map<String, Value>> for SubmittedValues {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Loose truthiness of form input: empty strings, "0", zero and empty
/// containers are false.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

pub(crate) fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn coerce_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(_) => Some(truthy(value)),
        Value::String(s) if s.eq_ignore_ascii_case("false") || s.eq_ignore_ascii_case("off") => {
            Some(false)
        }
        Value::String(_) => Some(truthy(value)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Accepts an id list, a single id, or a checkbox map of id to flag
pub(crate) fn coerce_selection(value: &Value) -> Option<HeaderSelection> {
    match value {
        Value::Array(items) => Some(HeaderSelection::from_ids(
            items.iter().filter_map(coerce_id),
        )),
        Value::Object(map) => Some(
            map.iter()
                .map(|(id, flag)| (id.clone(), truthy(flag)))
                .collect(),
        ),
        Value::String(id) if id.is_empty() => Some(HeaderSelection::new()),
        Value::String(id) => Some(HeaderSelection::from_ids([id.clone()])),
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
