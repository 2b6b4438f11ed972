//! Link preview models
//!
//! - `url` - Scheme normalization and the parsed [`NormalizedUrl`]
//! - `request` - Per-call input ([`ResolutionRequest`])
//! - `record` - Upstream fields ([`RawMetadata`]) and the canonical [`MetadataRecord`]

mod record;
mod request;
mod url;

pub use record::{MetadataRecord, RawMetadata, DESCRIPTION_PLACEHOLDER};
pub use request::ResolutionRequest;
pub use url::{normalize_url, NormalizedUrl};
