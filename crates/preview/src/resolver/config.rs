use std::fmt;
use std::time::Duration;

/// Per-attempt deadline applied when none is configured.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(10);

/// First attempt plus one retry on transient failures.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

/// Pause before retrying a transient failure.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(250);

/// Configuration injected into a [`MetadataResolver`](super::MetadataResolver).
///
/// The credential is normalized on construction: blank values become `None`.
#[derive(Clone)]
pub struct ResolverConfig {
    credential: Option<String>,
    pub deadline: Duration,
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl ResolverConfig {
    pub fn new(credential: Option<String>) -> Self {
        Self {
            credential: credential
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            deadline: DEFAULT_DEADLINE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Clamped to at least one attempt.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("deadline", &self.deadline)
            .field("max_attempts", &self.max_attempts)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credential_is_absent() {
        assert!(!ResolverConfig::new(None).has_credential());
        assert!(!ResolverConfig::new(Some(String::new())).has_credential());
        assert!(!ResolverConfig::new(Some("   ".to_string())).has_credential());
    }

    #[test]
    fn test_credential_is_trimmed() {
        let config = ResolverConfig::new(Some(" KEY\n".to_string()));
        assert_eq!(config.credential(), Some("KEY"));
    }

    #[test]
    fn test_max_attempts_is_at_least_one() {
        let config = ResolverConfig::new(None).with_max_attempts(0);
        assert_eq!(config.max_attempts, 1);
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = ResolverConfig::new(Some("super-secret".to_string()));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
