//! LinkPreview.net provider.
//!
//! Calls `GET https://api.linkpreview.net/?key=<KEY>&q=<url>` and reads the
//! flat `{title, description, image, url}` object it returns.

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::errors::ResolutionError;
use crate::models::{MetadataRecord, NormalizedUrl, RawMetadata};
use crate::provider::http::{build_client, read_json_object, unreachable};
use crate::provider::MetadataProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "LINK_PREVIEW";

/// Public API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.linkpreview.net";

/// LinkPreview.net metadata provider.
///
/// # Example
///
/// ```ignore
/// use linkboard_preview::LinkPreviewProvider;
///
/// let provider = LinkPreviewProvider::new();
/// ```
pub struct LinkPreviewProvider {
    client: Client,
    base_url: String,
}

impl LinkPreviewProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at another endpoint (self-hosted proxy, test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: build_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn request_url(&self, url: &NormalizedUrl, credential: &str) -> String {
        format!(
            "{}/?key={}&q={}",
            self.base_url,
            urlencoding::encode(credential),
            urlencoding::encode(url.as_str())
        )
    }
}

impl Default for LinkPreviewProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataProvider for LinkPreviewProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch(
        &self,
        url: &NormalizedUrl,
        credential: &str,
    ) -> Result<MetadataRecord, ResolutionError> {
        info!("Fetching metadata for: {}", url);

        let response = self
            .client
            .get(self.request_url(url, credential))
            .send()
            .await
            .map_err(|e| unreachable(PROVIDER_ID, e))?;

        let object = read_json_object(PROVIDER_ID, response).await?;

        Ok(MetadataRecord::from_raw(
            RawMetadata::from_object(&object),
            url,
        ))
    }
}
