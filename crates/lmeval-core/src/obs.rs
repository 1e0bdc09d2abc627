//! Structured tracing hooks for the request record lifecycle.
//!
//! Record-level events are emitted at `debug!` (a task can build thousands
//! of instances); rejected input is reported at `warn!`.
//! Filtering is controlled by `RUST_LOG`; set `LMEVAL_LOG_FORMAT=json` for JSON output.

use tracing::{debug, warn};

use crate::domain::RequestKind;

/// RAII guard that enters a request-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = InstanceSpan::enter(instance.task_name(), instance.doc_id(), instance.idx);
/// // backend calls made here carry task_name, doc_id and idx
/// ```
pub struct InstanceSpan {
    _span: tracing::span::EnteredSpan,
}

impl InstanceSpan {
    /// Create and enter a span tagged with the request's identity.
    pub fn enter(task_name: Option<&str>, doc_id: Option<usize>, idx: usize) -> Self {
        let span = tracing::debug_span!(
            "lmeval.instance",
            task_name = task_name.unwrap_or("-"),
            doc_id = ?doc_id,
            idx = idx,
        );
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: an instance was built.
pub fn emit_instance_created(
    request_type: RequestKind,
    task_name: Option<&str>,
    doc_id: Option<usize>,
    idx: usize,
) {
    debug!(
        event = "instance.created",
        request_type = %request_type,
        task_name = task_name.unwrap_or("-"),
        doc_id = ?doc_id,
        idx = idx,
    );
}

/// Emit event: a raw model response was appended.
pub fn emit_response_recorded(request_type: RequestKind, doc_id: Option<usize>, count: usize) {
    debug!(
        event = "instance.response_recorded",
        request_type = %request_type,
        doc_id = ?doc_id,
        count = count,
    );
}

/// Emit event: a filter stored its output.
pub fn emit_filter_applied(filter: &str, doc_id: Option<usize>, replaced: bool) {
    debug!(
        event = "instance.filter_applied",
        filter = %filter,
        doc_id = ?doc_id,
        replaced = replaced,
    );
}

/// Emit event: positional metadata was rejected (warning level).
pub fn emit_metadata_rejected(request_type: RequestKind, idx: usize, error: &dyn std::fmt::Display) {
    warn!(
        event = "instance.metadata_rejected",
        request_type = %request_type,
        idx = idx,
        error = %error,
    );
}
