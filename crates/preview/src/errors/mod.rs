//! Error types and retry classification for link preview resolution.
//!
//! This module provides:
//! - [`ResolutionError`]: The error enum for every resolution failure
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while resolving a link preview.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// No URL was supplied, or it was blank.
    #[error("URL is required")]
    MissingInput,

    /// No API key is configured for the upstream provider.
    #[error("API key is missing")]
    MissingCredential,

    /// The normalized URL could not be split into scheme, host, path and query.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The upstream could not be reached, or did not answer within the deadline.
    #[error("Upstream unreachable: {provider} - {message}")]
    UpstreamUnreachable {
        /// The provider that was being called
        provider: String,
        /// Transport error description
        message: String,
        /// Whether the failure was a deadline expiry
        timed_out: bool,
    },

    /// The upstream answered 2xx but the body is not a JSON object.
    #[error("Malformed upstream response: {provider} - {message}")]
    UpstreamMalformed {
        /// The provider that returned the body
        provider: String,
        /// What was wrong with it
        message: String,
    },

    /// The upstream answered with a non-success HTTP status.
    #[error("Upstream rejected request: {provider} returned HTTP {status}")]
    UpstreamRejected {
        /// The provider that rejected the request
        provider: String,
        /// HTTP status code returned by the provider
        status: u16,
        /// Response body, kept as diagnostic detail
        body: String,
    },

    /// The upstream answered with structured data that holds no metadata object.
    #[error("No metadata found: {provider}")]
    NoMetadata {
        /// The provider that had nothing to report
        provider: String,
    },
}

impl ResolutionError {
    /// Returns the retry classification for this error.
    ///
    /// Only transport failures are transient. Anything the upstream actually
    /// answered, including 5xx statuses, is final.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkboard_preview::errors::{ResolutionError, RetryClass};
    ///
    /// let error = ResolutionError::UpstreamUnreachable {
    ///     provider: "LINK_PREVIEW".to_string(),
    ///     message: "connection refused".to_string(),
    ///     timed_out: false,
    /// };
    /// assert_eq!(error.retry_class(), RetryClass::Transient);
    ///
    /// let error = ResolutionError::UpstreamRejected {
    ///     provider: "LINK_PREVIEW".to_string(),
    ///     status: 503,
    ///     body: String::new(),
    /// };
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::UpstreamUnreachable { .. } => RetryClass::Transient,

            Self::MissingInput
            | Self::MissingCredential
            | Self::InvalidUrl(_)
            | Self::UpstreamMalformed { .. }
            | Self::UpstreamRejected { .. }
            | Self::NoMetadata { .. } => RetryClass::Never,
        }
    }

    /// HTTP status reported by the upstream, when it rejected the request.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamRejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Diagnostic detail suitable for surfacing to the caller.
    pub fn details(&self) -> Option<String> {
        match self {
            Self::InvalidUrl(reason) => Some(reason.clone()),
            Self::UpstreamUnreachable { message, .. } | Self::UpstreamMalformed { message, .. } => {
                Some(message.clone())
            }
            Self::UpstreamRejected { body, .. } if !body.trim().is_empty() => Some(body.clone()),
            _ => None,
        }
    }
}
