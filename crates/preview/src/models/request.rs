use crate::errors::ResolutionError;

use super::url::NormalizedUrl;

/// A single resolution call's input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionRequest {
    raw_url: String,
}

impl ResolutionRequest {
    /// Accept a user-supplied URL.
    ///
    /// Surrounding whitespace is dropped; an absent or blank value is
    /// [`ResolutionError::MissingInput`].
    pub fn new(raw_url: Option<&str>) -> Result<Self, ResolutionError> {
        let raw_url = raw_url
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or(ResolutionError::MissingInput)?;

        Ok(Self {
            raw_url: raw_url.to_string(),
        })
    }

    pub fn raw_url(&self) -> &str {
        &self.raw_url
    }

    pub fn normalize(&self) -> Result<NormalizedUrl, ResolutionError> {
        NormalizedUrl::parse(&self.raw_url)
    }
}
