//! Identity of a request within its task: task name, document id, repeat count.
//!
//! Producers that still hand over the packed `(task_name, doc_id, repeats)`
//! sequence go through [`RequestMetadata::try_from`], which insists on exactly
//! three elements. Everything else should build the struct directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{InstanceError, Result};

/// Number of elements in the packed positional form.
pub const METADATA_LEN: usize = 3;

/// Identity of a request within its task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MetadataRepr")]
pub struct RequestMetadata {
    /// Name of the task that produced the request.
    pub task_name: Option<String>,

    /// Id of the source document within the task.
    pub doc_id: Option<usize>,

    /// How many times the document's request is repeated.
    pub repeats: Option<usize>,
}

impl RequestMetadata {
    pub fn new(task_name: Option<String>, doc_id: Option<usize>, repeats: Option<usize>) -> Self {
        Self {
            task_name,
            doc_id,
            repeats,
        }
    }

    /// Metadata for `doc_id` of `task_name`, repeated `repeats` times.
    pub fn for_task(task_name: impl Into<String>, doc_id: usize, repeats: usize) -> Self {
        Self::new(Some(task_name.into()), Some(doc_id), Some(repeats))
    }

    /// Borrowed packed view, in `(task_name, doc_id, repeats)` order.
    pub fn as_tuple(&self) -> (Option<&str>, Option<usize>, Option<usize>) {
        (self.task_name.as_deref(), self.doc_id, self.repeats)
    }

    /// Owned packed view, in `(task_name, doc_id, repeats)` order.
    pub fn into_tuple(self) -> (Option<String>, Option<usize>, Option<usize>) {
        (self.task_name, self.doc_id, self.repeats)
    }
}

impl From<(Option<String>, Option<usize>, Option<usize>)> for RequestMetadata {
    fn from((task_name, doc_id, repeats): (Option<String>, Option<usize>, Option<usize>)) -> Self {
        Self::new(task_name, doc_id, repeats)
    }
}

impl TryFrom<&[Value]> for RequestMetadata {
    type Error = InstanceError;

    fn try_from(values: &[Value]) -> Result<Self> {
        let [task_name, doc_id, repeats] = values else {
            return Err(InstanceError::InvalidMetadataShape {
                expected: METADATA_LEN,
                actual: values.len(),
            });
        };

        Ok(Self {
            task_name: optional_string(task_name, 0, "task_name")?,
            doc_id: optional_index(doc_id, 1, "doc_id")?,
            repeats: optional_index(repeats, 2, "repeats")?,
        })
    }
}

impl TryFrom<Value> for RequestMetadata {
    type Error = InstanceError;

    /// A non-array value counts as a one-element packing.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Self::try_from(items.as_slice()),
            _ => Err(InstanceError::InvalidMetadataShape {
                expected: METADATA_LEN,
                actual: 1,
            }),
        }
    }
}

fn optional_string(value: &Value, position: usize, field: &'static str) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(InstanceError::InvalidMetadataField {
            position,
            field,
            expected: "null or string",
        }),
    }
}

fn optional_index(value: &Value, position: usize, field: &'static str) -> Result<Option<usize>> {
    match value {
        Value::Null => Ok(None),
        _ => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or(InstanceError::InvalidMetadataField {
                position,
                field,
                expected: "null or non-negative integer",
            }),
    }
}

/// Accepted wire shapes: the named struct or the packed 3-element array.
#[derive(Deserialize)]
#[serde(untagged)]
enum MetadataRepr {
    Positional(Vec<Value>),
    Named {
        #[serde(default)]
        task_name: Option<String>,
        #[serde(default)]
        doc_id: Option<usize>,
        #[serde(default)]
        repeats: Option<usize>,
    },
}

impl TryFrom<MetadataRepr> for RequestMetadata {
    type Error = InstanceError;

    fn try_from(repr: MetadataRepr) -> Result<Self> {
        match repr {
            MetadataRepr::Positional(items) => Self::try_from(items.as_slice()),
            MetadataRepr::Named {
                task_name,
                doc_id,
                repeats,
            } => Ok(Self::new(task_name, doc_id, repeats)),
        }
    }
}
