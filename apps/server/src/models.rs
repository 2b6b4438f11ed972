use linkboard_preview::MetadataRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

impl From<MetadataRecord> for Preview {
    fn from(r: MetadataRecord) -> Self {
        Self {
            title: r.title,
            description: r.description,
            image: r.image,
            url: r.url,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
