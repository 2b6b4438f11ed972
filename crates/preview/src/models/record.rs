use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::url::NormalizedUrl;

/// Description used when the upstream has none to offer.
pub const DESCRIPTION_PLACEHOLDER: &str = "Sem descrição";

/// Canonical preview record handed back to callers.
///
/// Every field is always populated; see [`MetadataRecord::from_raw`] for the
/// fallback policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub title: String,
    pub description: String,
    /// Image URL, or empty when the page has none.
    pub image: String,
    pub url: String,
}

/// Fields as reported by an upstream provider, before fallbacks.
///
/// Values that are not JSON strings are ignored rather than rejected, since
/// providers are loose about `null` and numeric placeholders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

impl RawMetadata {
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let field = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            title: field("title"),
            description: field("description"),
            image: field("image"),
            url: field("url"),
        }
    }
}

impl MetadataRecord {
    /// Apply the fallback policy to upstream fields.
    ///
    /// Empty and whitespace-only strings count as absent:
    /// - `title` falls back to the normalized input URL
    /// - `description` falls back to [`DESCRIPTION_PLACEHOLDER`]
    /// - `image` falls back to an empty string
    /// - `url` falls back to the normalized input URL
    pub fn from_raw(raw: RawMetadata, requested: &NormalizedUrl) -> Self {
        Self {
            title: present(raw.title).unwrap_or_else(|| requested.as_str().to_string()),
            description: present(raw.description)
                .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string()),
            image: present(raw.image).unwrap_or_default(),
            url: present(raw.url).unwrap_or_else(|| requested.as_str().to_string()),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
