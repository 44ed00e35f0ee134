//! HTTP boundary errors.
//!
//! Two tiers: boundary errors (missing or malformed request input) map to
//! 4xx with a machine-readable `{"error": …}` payload; synthesis errors
//! map to 5xx. Extraction errors never reach this type; the extractor
//! absorbs them into the placeholder fallback.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use sitesmith_shared::SitesmithError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Required form fields are missing or empty.
    #[error("Title and scrapeUrl are required")]
    MissingRequiredFields,

    /// The multipart payload could not be decoded.
    #[error("invalid multipart request: {0}")]
    Multipart(String),

    /// Project rendering or archive assembly failed.
    #[error(transparent)]
    Synthesis(#[from] SitesmithError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingRequiredFields | ApiError::Multipart(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Synthesis(source) => {
                tracing::error!(error = %source, "template generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "template generation failed".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_is_stable() {
        // Clients match on this string; it is part of the API.
        assert_eq!(
            ApiError::MissingRequiredFields.to_string(),
            "Title and scrapeUrl are required"
        );
    }
}
