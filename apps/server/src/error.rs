use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use linkboard_preview::ResolutionError;
use thiserror::Error;

use crate::models::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Resolution(#[from] ResolutionError),
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, String, Option<String>) {
        match self {
            ApiError::Resolution(e) => {
                let (status, message) = match e {
                    ResolutionError::MissingInput => (StatusCode::BAD_REQUEST, e.to_string()),
                    ResolutionError::InvalidUrl(_) => {
                        (StatusCode::BAD_REQUEST, "Invalid URL".to_string())
                    }
                    ResolutionError::MissingCredential => {
                        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                    }
                    ResolutionError::UpstreamRejected { status, .. } => (
                        StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                        "Failed to fetch preview".to_string(),
                    ),
                    ResolutionError::UpstreamUnreachable { .. } => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to retrieve preview data".to_string(),
                    ),
                    ResolutionError::UpstreamMalformed { .. } => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Invalid response from metadata provider".to_string(),
                    ),
                    ResolutionError::NoMetadata { .. } => {
                        (StatusCode::NOT_FOUND, "No metadata found".to_string())
                    }
                };
                (status, message, e.details())
            }
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone(), None),
        }
    }

    /// Server-side failures worth an error log. Mirrored upstream statuses are
    /// already reported by the provider.
    fn should_log(&self, status: StatusCode) -> bool {
        status.is_server_error()
            && !matches!(
                self,
                ApiError::Resolution(ResolutionError::UpstreamRejected { .. })
            )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.parts();
        if self.should_log(status) {
            tracing::error!("{} ({}): {}", error, status, self);
        }
        let body = Json(ErrorBody { error, details });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
