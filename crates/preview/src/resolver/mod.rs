//! Metadata resolution.
//!
//! [`MetadataResolver`] owns one provider and its [`ResolverConfig`]. Each call
//! validates the input, checks the credential, normalizes the URL and then
//! calls the provider under a per-attempt deadline, retrying once (by
//! default) when the failure is classified as [`RetryClass::Transient`].

mod config;

pub use config::{ResolverConfig, DEFAULT_DEADLINE, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};

use std::sync::Arc;

use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use crate::errors::{ResolutionError, RetryClass};
use crate::models::{MetadataRecord, NormalizedUrl, ResolutionRequest};
use crate::provider::MetadataProvider;

pub struct MetadataResolver {
    provider: Arc<dyn MetadataProvider>,
    config: ResolverConfig,
}

impl MetadataResolver {
    pub fn new(provider: Arc<dyn MetadataProvider>, config: ResolverConfig) -> Self {
        if !config.has_credential() {
            warn!(
                "No API key configured for {}; resolution requests will fail",
                provider.id()
            );
        }
        Self { provider, config }
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `raw_url` with the configured credential.
    pub async fn resolve(&self, raw_url: Option<&str>) -> Result<MetadataRecord, ResolutionError> {
        self.resolve_with_credential(raw_url, self.config.credential())
            .await
    }

    /// Resolve `raw_url` with an explicit credential.
    ///
    /// Input presence is checked before the credential, so a missing URL is
    /// always reported as [`ResolutionError::MissingInput`].
    pub async fn resolve_with_credential(
        &self,
        raw_url: Option<&str>,
        credential: Option<&str>,
    ) -> Result<MetadataRecord, ResolutionError> {
        let request = ResolutionRequest::new(raw_url)?;
        let credential = credential
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(ResolutionError::MissingCredential)?;
        let url = request.normalize()?;

        self.fetch_with_retry(&url, credential).await
    }

    async fn fetch_with_retry(
        &self,
        url: &NormalizedUrl,
        credential: &str,
    ) -> Result<MetadataRecord, ResolutionError> {
        let provider_id = self.provider.id();
        let mut attempt = 1;

        loop {
            let outcome = match timeout(self.config.deadline, self.provider.fetch(url, credential))
                .await
            {
                Ok(outcome) => outcome,
                Err(_) => Err(ResolutionError::UpstreamUnreachable {
                    provider: provider_id.to_string(),
                    message: format!("no response within {:?}", self.config.deadline),
                    timed_out: true,
                }),
            };

            match outcome {
                Ok(record) => {
                    debug!("{} resolved {} on attempt {}", provider_id, url, attempt);
                    return Ok(record);
                }
                Err(err)
                    if err.retry_class() == RetryClass::Transient
                        && attempt < self.config.max_attempts =>
                {
                    warn!(
                        "{} attempt {}/{} for {} failed: {}; retrying",
                        provider_id, attempt, self.config.max_attempts, url, err
                    );
                    attempt += 1;
                    sleep(self.config.retry_delay).await;
                }
                Err(err) => {
                    debug!(
                        "{} gave up on {} after attempt {}: {}",
                        provider_id, url, attempt, err
                    );
                    return Err(err);
                }
            }
        }
    }
}
