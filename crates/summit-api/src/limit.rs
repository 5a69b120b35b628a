//! Upload size guard
//!
//! Rejects requests whose declared `Content-Length` exceeds the configured
//! upload limit before the body is read. Bodies without a declared length
//! are capped while streaming by axum's `DefaultBodyLimit`.

use axum::extract::{Request, State};
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Axum middleware function that enforces the upload limit.
///
/// Returns 413 when the declared body length is above the limit.
pub async fn reject_oversized_upload(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let declared = request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let limit = state.max_upload_bytes();
    if let Some(len) = declared {
        if len > limit as u64 {
            tracing::warn!(
                path = %request.uri().path(),
                content_length = len,
                limit,
                "Upload rejected: body exceeds limit"
            );
            return Err(ApiError::PayloadTooLarge("Payload too large".to_string()));
        }
    }

    Ok(next.run(request).await)
}
