//! Metadata provider abstractions and implementations.
//!
//! This module contains:
//! - The `MetadataProvider` trait that all providers implement
//! - Shared response handling for JSON metadata APIs
//! - Concrete providers (LinkPreview.net, opengraph.io)
//!
//! Providers receive an already normalized URL and a credential that the
//! resolver has checked for presence. Deadlines and retries are the
//! resolver's job, not the provider's.

mod http;
mod traits;

pub mod link_preview;
pub mod opengraph;

pub use traits::MetadataProvider;
