//! The request record: one request to a model plus the slots its results land in.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::arguments::Arguments;
use super::error::Result;
use super::metadata::RequestMetadata;
use super::request_kind::RequestKind;
use crate::obs;

/// Source document a request was derived from.
pub type Document = serde_json::Map<String, Value>;

/// One evaluation request and its accumulated responses.
///
/// Task builders create it, a model backend appends to `resps` (one entry per
/// model call), and filters write into `filtered_resps` keyed by filter name.
/// Only one writer should touch the result slots of a given instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Execution mode the backend should use.
    pub request_type: RequestKind,

    /// Source document.
    pub doc: Document,

    /// Positional arguments for the model call.
    pub arguments: Arguments,

    /// Position among repeated requests for the same document.
    pub idx: usize,

    /// Task name, doc id and repeats; fixed at construction, read through the accessors.
    #[serde(default, deserialize_with = "nullable_metadata")]
    metadata: RequestMetadata,

    /// Raw model responses, in call order.
    #[serde(default)]
    pub resps: Vec<Value>,

    /// Post-processed responses keyed by filter name.
    #[serde(default)]
    pub filtered_resps: BTreeMap<String, Value>,
}

impl Instance {
    /// Create an instance with empty metadata and empty result slots.
    pub fn new(
        request_type: RequestKind,
        doc: Document,
        arguments: impl Into<Arguments>,
        idx: usize,
    ) -> Self {
        Self::with_metadata(request_type, doc, arguments, idx, RequestMetadata::default())
    }

    /// Create an instance identified by `metadata`, with empty result slots.
    pub fn with_metadata(
        request_type: RequestKind,
        doc: Document,
        arguments: impl Into<Arguments>,
        idx: usize,
        metadata: RequestMetadata,
    ) -> Self {
        Self::build(request_type, doc, arguments.into(), idx, metadata)
    }

    /// Create an instance from a packed `(task_name, doc_id, repeats)` sequence.
    ///
    /// Fails without producing a record unless the packing has exactly three
    /// well-typed elements.
    pub fn from_positional(
        request_type: RequestKind,
        doc: Document,
        arguments: impl Into<Arguments>,
        idx: usize,
        metadata: &[Value],
    ) -> Result<Self> {
        let metadata = RequestMetadata::try_from(metadata).inspect_err(|e| {
            obs::emit_metadata_rejected(request_type, idx, e);
        })?;
        Ok(Self::build(request_type, doc, arguments.into(), idx, metadata))
    }

    fn build(
        request_type: RequestKind,
        doc: Document,
        arguments: Arguments,
        idx: usize,
        metadata: RequestMetadata,
    ) -> Self {
        obs::emit_instance_created(
            request_type,
            metadata.task_name.as_deref(),
            metadata.doc_id,
            idx,
        );
        Self {
            request_type,
            doc,
            arguments,
            idx,
            metadata,
            resps: Vec::new(),
            filtered_resps: BTreeMap::new(),
        }
    }

    pub fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    pub fn task_name(&self) -> Option<&str> {
        self.metadata.task_name.as_deref()
    }

    pub fn doc_id(&self) -> Option<usize> {
        self.metadata.doc_id
    }

    pub fn repeats(&self) -> Option<usize> {
        self.metadata.repeats
    }

    /// Positional arguments; the first element is the primary input.
    pub fn args(&self) -> &[Value] {
        self.arguments.as_slice()
    }

    /// Append one raw model response.
    pub fn push_response(&mut self, response: Value) {
        self.resps.push(response);
        obs::emit_response_recorded(self.request_type, self.doc_id(), self.resps.len());
    }

    /// Store a filter's output, returning whatever that filter stored before.
    pub fn set_filtered_response(
        &mut self,
        filter: impl Into<String>,
        value: Value,
    ) -> Option<Value> {
        let filter = filter.into();
        let previous = self.filtered_resps.insert(filter.clone(), value);
        obs::emit_filter_applied(&filter, self.doc_id(), previous.is_some());
        previous
    }

    pub fn filtered_response(&self, filter: &str) -> Option<&Value> {
        self.filtered_resps.get(filter)
    }
}

/// `null` decodes like an absent field: the all-`None` metadata.
fn nullable_metadata<'de, D>(deserializer: D) -> std::result::Result<RequestMetadata, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RequestMetadata>::deserialize(deserializer)?.unwrap_or_default())
}
