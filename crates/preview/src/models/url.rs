use std::fmt;

use reqwest::Url;

use crate::errors::ResolutionError;

/// Scheme prepended to inputs that carry none.
const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Prefixes accepted as an explicit scheme, matched case-insensitively.
const HTTP_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Ensure `raw` carries an explicit `http`/`https` scheme.
///
/// Inputs already starting with `http://` or `https://` (any case) are returned
/// unchanged; everything else gets `https://` prepended.
///
/// ```
/// use linkboard_preview::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("HTTP://example.com"), "HTTP://example.com");
/// ```
pub fn normalize_url(raw: &str) -> String {
    if has_http_scheme(raw) {
        raw.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{raw}")
    }
}

fn has_http_scheme(raw: &str) -> bool {
    HTTP_PREFIXES.iter().any(|prefix| {
        raw.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// A URL with an explicit `http`/`https` scheme, split into its parts.
///
/// [`as_str`](Self::as_str) keeps the normalized text exactly as the user typed
/// it (plus the scheme), so fallbacks echo the input rather than a
/// re-serialized form with an added trailing slash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedUrl {
    href: String,
    scheme: String,
    host: String,
    path: String,
    query: Option<String>,
}

impl NormalizedUrl {
    /// Normalize `raw` and parse the result.
    pub fn parse(raw: &str) -> Result<Self, ResolutionError> {
        let href = normalize_url(raw);
        let parsed =
            Url::parse(&href).map_err(|e| ResolutionError::InvalidUrl(format!("{href}: {e}")))?;

        let host = parsed
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ResolutionError::InvalidUrl(format!("{href}: missing host")))?
            .to_string();

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host,
            path: parsed.path().to_string(),
            query: parsed.query().map(str::to_string),
            href,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.href
    }

    /// Always `http` or `https`, lowercase.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}
