//! opengraph.io provider.
//!
//! Calls `GET https://opengraph.io/api/1.1/site/<url>?app_id=<KEY>`. The useful
//! fields live under `hybridGraph`, which merges OpenGraph tags with values
//! inferred from the page when tags are missing.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::ResolutionError;
use crate::models::{MetadataRecord, NormalizedUrl, RawMetadata};
use crate::provider::http::{build_client, read_json_object, unreachable};
use crate::provider::MetadataProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "OPENGRAPH";

/// Public API endpoint
pub const DEFAULT_BASE_URL: &str = "https://opengraph.io/api/1.1";

/// Key of the merged metadata object in the response
const HYBRID_GRAPH: &str = "hybridGraph";

pub struct OpenGraphProvider {
    client: Client,
    base_url: String,
}

impl OpenGraphProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: build_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn request_url(&self, url: &NormalizedUrl, credential: &str) -> String {
        format!(
            "{}/site/{}?app_id={}",
            self.base_url,
            urlencoding::encode(url.as_str()),
            urlencoding::encode(credential)
        )
    }
}

impl Default for OpenGraphProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataProvider for OpenGraphProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch(
        &self,
        url: &NormalizedUrl,
        credential: &str,
    ) -> Result<MetadataRecord, ResolutionError> {
        info!("Fetching OpenGraph data for: {}", url);

        let response = self
            .client
            .get(self.request_url(url, credential))
            .send()
            .await
            .map_err(|e| unreachable(PROVIDER_ID, e))?;

        let object = read_json_object(PROVIDER_ID, response).await?;

        let Some(graph) = object.get(HYBRID_GRAPH).and_then(Value::as_object) else {
            warn!("No {} in response for {}", HYBRID_GRAPH, url);
            return Err(ResolutionError::NoMetadata {
                provider: PROVIDER_ID.to_string(),
            });
        };

        Ok(MetadataRecord::from_raw(RawMetadata::from_object(graph), url))
    }
}
