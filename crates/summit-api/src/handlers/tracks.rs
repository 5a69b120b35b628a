//! Track upload handler
//!
//! Accepts a multipart form with a `file` field, decodes it with
//! `summit_core::decode_track` and returns the flattened point sequence.

use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::Multipart;
use axum::Json;
use summit_core::{decode_track, ParsedTrack};

use crate::error::ApiError;

/// Multipart field carrying the track file
const FILE_FIELD: &str = "file";

/// An uploaded file taken from the form
struct Upload {
    filename: String,
    content: Bytes,
}

/// POST /api/parse-gpx
/// Decode an uploaded GPX/KML file into its point sequence
pub async fn parse_track(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ParsedTrack>, ApiError> {
    // A request that is not a multipart form has no file part either
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(%rejection, "Upload is not a multipart form");
        ApiError::BadRequest("No file part".to_string())
    })?;

    let upload = read_file_field(&mut multipart).await?;
    let size = upload.content.len();
    let filename = upload.filename.clone();

    let parsed = tokio::task::spawn_blocking(move || {
        decode_track(&upload.filename, &upload.content)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Decoder task failed: {}", e)))??;

    tracing::info!(
        filename = %filename,
        size,
        points = parsed.len(),
        name = %parsed.name,
        "Track parsed"
    );

    Ok(Json(parsed))
}

/// Find the `file` field and read it fully
async fn read_file_field(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        // A `file` part without a filename is a plain form value, not a file
        let filename = match field.file_name() {
            None => continue,
            Some("") => return Err(ApiError::BadRequest("No selected file".to_string())),
            Some(name) => name.to_string(),
        };

        let content = field.bytes().await?;
        return Ok(Upload { filename, content });
    }

    Err(ApiError::BadRequest("No file part".to_string()))
}
