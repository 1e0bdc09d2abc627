//! Positional arguments handed to a model backend.
//!
//! The first element is the primary input (usually the prompt or context);
//! the rest are mode-specific, such as a continuation string or generation
//! options. A bare value is wrapped into a one-element list when the
//! arguments are built, so reads never need to inspect the shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Ordered positional arguments for a model call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Arguments(Vec<Value>);

impl Arguments {
    /// Arguments that are already positional.
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// A single bare argument, wrapped as `(value,)`.
    pub fn single(value: impl Into<Value>) -> Self {
        Self(vec![value.into()])
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// The primary input, if any argument is present.
    pub fn primary(&self) -> Option<&Value> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl From<&str> for Arguments {
    fn from(prompt: &str) -> Self {
        Self::single(prompt)
    }
}

impl From<String> for Arguments {
    fn from(prompt: String) -> Self {
        Self::single(prompt)
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for Arguments {
    /// A JSON array is taken as the positional list; anything else is a bare argument.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Self::new(items),
            other => Self::single(other),
        })
    }
}
