use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use linkboard_preview::provider::{link_preview, opengraph};
use linkboard_preview::resolver::{DEFAULT_DEADLINE, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};
use linkboard_preview::ResolverConfig;
use reqwest::Url;

/// Headroom between the upstream budget and the HTTP request timeout.
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Credential and endpoint for one upstream metadata API.
#[derive(Clone)]
pub struct UpstreamConfig {
    pub api_key: Option<String>,
    pub api_url: String,
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub upstream_timeout: Duration,
    pub upstream_max_attempts: u32,
    pub link_preview: UpstreamConfig,
    pub opengraph: UpstreamConfig,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            upstream_timeout: DEFAULT_DEADLINE,
            upstream_max_attempts: DEFAULT_MAX_ATTEMPTS,
            link_preview: UpstreamConfig {
                api_key: None,
                api_url: link_preview::DEFAULT_BASE_URL.to_string(),
            },
            opengraph: UpstreamConfig {
                api_key: None,
                api_url: opengraph::DEFAULT_BASE_URL.to_string(),
            },
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from a variable lookup, falling back to defaults.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = match var("LB_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid LB_LISTEN_ADDR: {}", addr))?,
            None => defaults.listen_addr,
        };
        let cors_allow = var("LB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout = var("LB_REQUEST_TIMEOUT_MS")
            .and_then(|ms| ms.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.request_timeout);
        let upstream_timeout = var("LB_UPSTREAM_TIMEOUT_MS")
            .and_then(|ms| ms.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.upstream_timeout);
        let upstream_max_attempts = var("LB_UPSTREAM_MAX_ATTEMPTS")
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(defaults.upstream_max_attempts)
            .max(1);
        let log_format = match var("LB_LOG_FORMAT") {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let link_preview = UpstreamConfig {
            api_key: var("LINK_PREVIEW_API_KEY"),
            api_url: endpoint(var("LINK_PREVIEW_API_URL"), defaults.link_preview.api_url)
                .context("Invalid LINK_PREVIEW_API_URL")?,
        };
        let opengraph = UpstreamConfig {
            api_key: var("OPENGRAPH_API_KEY"),
            api_url: endpoint(var("OPENGRAPH_API_URL"), defaults.opengraph.api_url)
                .context("Invalid OPENGRAPH_API_URL")?,
        };

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            upstream_timeout,
            upstream_max_attempts,
            link_preview,
            opengraph,
            log_format,
        })
    }

    /// Worst-case time a resolver spends on one request: every attempt runs
    /// to its deadline, with a pause between attempts.
    pub fn upstream_budget(&self) -> Duration {
        let attempts = self.upstream_max_attempts.max(1);
        self.upstream_timeout * attempts + DEFAULT_RETRY_DELAY * (attempts - 1)
    }

    /// Request timeout for the HTTP layer, never shorter than the upstream
    /// budget so the resolver's JSON error reaches the caller first.
    pub fn effective_request_timeout(&self) -> Duration {
        self.request_timeout
            .max(self.upstream_budget() + REQUEST_TIMEOUT_MARGIN)
    }

    /// Resolver settings for one upstream, sharing the deadline and retry budget.
    pub fn resolver_config(&self, upstream: &UpstreamConfig) -> ResolverConfig {
        ResolverConfig::new(upstream.api_key.clone())
            .with_deadline(self.upstream_timeout)
            .with_max_attempts(self.upstream_max_attempts)
    }
}

fn endpoint(value: Option<String>, default: String) -> anyhow::Result<String> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(default);
    };
    let url = Url::parse(value.trim()).map_err(|e| anyhow!("{}: {}", value, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!("{}: scheme must be http or https", value));
    }
    Ok(value.trim().to_string())
}
