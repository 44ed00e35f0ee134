//! Request handlers for template generation.

use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{info, instrument};

use sitesmith_shared::{Branding, Logo};
use sitesmith_synthesis::archive_file_name;

use crate::error::ApiError;
use crate::router::AppState;

// ---------------------------------------------------------------------------
// Request collection
// ---------------------------------------------------------------------------

/// Fields collected from the multipart form, before validation.
#[derive(Debug, Default)]
struct TemplateRequest {
    title: Option<String>,
    scrape_url: Option<String>,
    address: String,
    phone: String,
    email: String,
    logo: Option<Logo>,
}

impl TemplateRequest {
    /// Collect the known fields from the multipart stream. Unknown parts
    /// are drained and ignored.
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut request = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::Multipart(e.to_string()))?
        {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("title") => request.title = Some(text(field).await?),
                Some("scrapeUrl") => request.scrape_url = Some(text(field).await?),
                Some("address") => request.address = text(field).await?,
                Some("phone") => request.phone = text(field).await?,
                Some("email") => request.email = text(field).await?,
                Some("logo") => {
                    let media_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::Multipart(e.to_string()))?;
                    request.logo = Some(Logo {
                        media_type,
                        data: data.to_vec(),
                    });
                }
                _ => {
                    let _ = field.bytes().await;
                }
            }
        }

        Ok(request)
    }

    /// Enforce the boundary invariant: `title` and `scrapeUrl` must both
    /// be present and non-empty before any work starts.
    fn validate(self) -> Result<(Branding, String, Option<Logo>), ApiError> {
        let (Some(title), Some(scrape_url)) = (self.title, self.scrape_url) else {
            return Err(ApiError::MissingRequiredFields);
        };
        if title.is_empty() || scrape_url.is_empty() {
            return Err(ApiError::MissingRequiredFields);
        }

        let branding = Branding {
            title,
            address: self.address,
            phone: self.phone,
            email: self.email,
        };
        Ok((branding, scrape_url, self.logo))
    }
}

async fn text(field: Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::Multipart(e.to_string()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /generate-template` — extract posts from the submitted URL and
/// respond with the generated project archive.
#[instrument(skip_all)]
pub async fn generate_template(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let request = TemplateRequest::from_multipart(multipart).await?;
    let (branding, scrape_url, logo) = request.validate()?;

    let posts = state.extractor.run(&scrape_url).await;
    let archive = state.synthesizer.build(&branding, logo.as_ref(), &posts)?;

    info!(
        title = %branding.title,
        posts = posts.len(),
        bytes = archive.len(),
        "template archive generated"
    );

    let disposition = format!(
        "attachment; filename={}",
        archive_file_name(&branding.title)
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        archive,
    )
        .into_response())
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
