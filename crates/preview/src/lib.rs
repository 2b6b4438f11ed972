//! Linkboard Link Preview Crate
//!
//! This crate resolves a user-supplied link into a small preview record
//! (`title`, `description`, `image`, `url`) by asking a third-party
//! metadata API about it.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   raw user URL   |  ("example.com", "HTTP://foo.dev/x", ...)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | ResolutionRequest|  (presence check)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  NormalizedUrl   |  (https:// prepended when no scheme)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | MetadataResolver |  (credential check, deadline, bounded retry)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | MetadataProvider |  (LinkPreview.net, opengraph.io)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  MetadataRecord  |  (fallbacks applied, never empty fields where avoidable)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`NormalizedUrl`] - A URL guaranteed to carry an `http`/`https` scheme
//! - [`MetadataRecord`] - Canonical preview record returned to callers
//! - [`ResolutionError`] - Typed failure, classified via [`RetryClass`]
//! - [`MetadataResolver`] - Entry point wiring a provider to its configuration

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use errors::{ResolutionError, RetryClass};

pub use models::{
    normalize_url, MetadataRecord, NormalizedUrl, RawMetadata, ResolutionRequest,
    DESCRIPTION_PLACEHOLDER,
};

pub use provider::link_preview::LinkPreviewProvider;
pub use provider::opengraph::OpenGraphProvider;
pub use provider::MetadataProvider;

pub use resolver::{MetadataResolver, ResolverConfig};
