//! Multipart file-upload endpoint.
//!
//! ERROR HANDLING
//! ==============
//! The original script's contract is kept: an upload whose target already
//! exists is refused with `409 Conflict` and an empty body; a request with
//! no usable `file` part is a plain `400`. Filenames are flattened to their
//! final component so a crafted name cannot escape the upload directory.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::path::{Path, PathBuf};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::routes::cgi::escape_html;
use crate::state::AppState;

/// Reduce a client-supplied filename to a safe final component.
pub(crate) fn safe_filename(raw: &str) -> Option<String> {
    let name = Path::new(raw).file_name()?.to_str()?;
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_owned())
}

/// Render the success page for a stored upload.
pub(crate) fn upload_page(target: &Path) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>File Upload Result</title>\n</head>\n<body>\n\
         <p>The file {} was uploaded successfully.</p>\n</body>\n</html>\n",
        escape_html(&target.display().to_string())
    )
}

/// Pick the destination path, refusing a name that already exists there.
pub(crate) fn target_path(upload_dir: &Path, filename: &str) -> Result<PathBuf, StatusCode> {
    let target = upload_dir.join(filename);
    if target.exists() {
        return Err(StatusCode::CONFLICT);
    }
    Ok(target)
}

/// `POST /cgi-bin/upload` — store the `file` part and echo where it went.
pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return StatusCode::BAD_REQUEST.into_response(),
            Err(err) => {
                tracing::debug!(error = %err, "malformed multipart body");
                return StatusCode::BAD_REQUEST.into_response();
            }
        };
        if field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().and_then(safe_filename) else {
            return StatusCode::BAD_REQUEST.into_response();
        };
        let target = match target_path(&state.upload_dir, &filename) {
            Ok(target) => target,
            Err(status) => return status.into_response(),
        };
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(error = %err, "failed to read upload body");
                return StatusCode::BAD_REQUEST.into_response();
            }
        };
        return match tokio::fs::write(&target, &bytes).await {
            Ok(()) => Html(upload_page(&target)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, target = %target.display(), "upload write failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        };
    }
}
