//! Metadata provider trait definition.

use async_trait::async_trait;

use crate::errors::ResolutionError;
use crate::models::{MetadataRecord, NormalizedUrl};

/// Trait for upstream metadata providers.
///
/// Implement this trait to add support for a new metadata source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use linkboard_preview::{MetadataProvider, MetadataRecord, NormalizedUrl, ResolutionError};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MetadataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn fetch(
///         &self,
///         url: &NormalizedUrl,
///         credential: &str,
///     ) -> Result<MetadataRecord, ResolutionError> {
///         // ... call the API
///     }
/// }
/// ```
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "LINK_PREVIEW" or "OPENGRAPH".
    /// Used for logging and in error values.
    fn id(&self) -> &'static str;

    /// Fetch metadata for a normalized URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The normalized URL to describe
    /// * `credential` - API key for the upstream, already checked to be non-empty
    ///
    /// # Returns
    ///
    /// The record with fallbacks applied, or a `ResolutionError`. A single call
    /// issues exactly one upstream request.
    async fn fetch(
        &self,
        url: &NormalizedUrl,
        credential: &str,
    ) -> Result<MetadataRecord, ResolutionError>;
}
