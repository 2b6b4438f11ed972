use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use linkboard_preview::MetadataResolver;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::Preview,
};

#[derive(Debug, serde::Deserialize)]
pub struct PreviewQuery {
    url: Option<String>,
}

async fn resolve_with(
    resolver: &MetadataResolver,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> ApiResult<Json<Preview>> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let record = resolver.resolve(query.url.as_deref()).await?;
    Ok(Json(record.into()))
}

/// Resolve a link preview through LinkPreview.net.
#[utoipa::path(
    get,
    path = "/resolve",
    params(("url" = Option<String>, Query, description = "Link to describe; https:// is assumed when no scheme is given")),
    responses(
        (status = 200, body = Preview),
        (status = 400, body = crate::models::ErrorBody, description = "URL missing or invalid"),
        (status = 500, body = crate::models::ErrorBody, description = "API key missing or upstream failure")
    )
)]
pub async fn resolve_link_preview(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> ApiResult<Json<Preview>> {
    resolve_with(&state.link_preview, query).await
}

/// Resolve a link preview through opengraph.io.
#[utoipa::path(
    get,
    path = "/api/opengraph",
    params(("url" = Option<String>, Query, description = "Link to describe")),
    responses(
        (status = 200, body = Preview),
        (status = 400, body = crate::models::ErrorBody),
        (status = 404, body = crate::models::ErrorBody, description = "Upstream had no OpenGraph data"),
        (status = 500, body = crate::models::ErrorBody)
    )
)]
pub async fn resolve_opengraph(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> ApiResult<Json<Preview>> {
    resolve_with(&state.opengraph, query).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/resolve", get(resolve_link_preview))
        // Path used by the web client.
        .route("/api/preview", get(resolve_link_preview))
        .route("/api/opengraph", get(resolve_opengraph))
}
