//! lmeval core library
//!
//! The request record that flows between task builders, model backends and
//! scorers in an LM evaluation pipeline.

pub mod domain;
pub mod obs;
pub mod telemetry;

pub use domain::{
    Arguments, Document, Instance, InstanceError, RequestKind, RequestMetadata, Result,
    METADATA_LEN,
};

pub use obs::{
    emit_filter_applied, emit_instance_created, emit_metadata_rejected, emit_response_recorded,
    InstanceSpan,
};

pub use telemetry::{init_tracing, init_tracing_from_env, LogFormat, LOG_FORMAT_ENV};
