//! Domain model for evaluation requests.
//!
//! - `Instance`: one request to a model plus its result slots
//! - `RequestKind`: closed set of execution modes
//! - `RequestMetadata`: task name, doc id and repeat count
//! - `Arguments`: positional call arguments, primary input first

pub mod arguments;
pub mod error;
pub mod instance;
pub mod metadata;
pub mod request_kind;

pub use arguments::Arguments;
pub use error::{InstanceError, Result};
pub use instance::{Document, Instance};
pub use metadata::{RequestMetadata, METADATA_LEN};
pub use request_kind::RequestKind;
