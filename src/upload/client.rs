use crate::upload::types::{CleanError, CleanedArtifact, SelectedFile};
use crate::utils::content_disposition::filename_from_header;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::fs;
use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_OUTPUT_NAME: &str = "cleaned_output.pdf";

/// Shared multipart field name; the backend expects every file under it.
const UPLOAD_FIELD: &str = "files";

#[derive(Deserialize, Default)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the remote clean-file endpoint. One atomic POST per submission,
/// no retries, no timeout.
#[derive(Clone)]
pub struct CleanClient {
    base_url: String,
    http: reqwest::Client,
}

impl CleanClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Uploads the queued files as one multipart request and returns the
    /// cleaned artifact with the filename to save it under.
    pub async fn clean_files(&self, files: &[SelectedFile]) -> Result<CleanedArtifact, CleanError> {
        let mut form = Form::new();
        for file in files {
            let bytes = fs::read(&file.path).map_err(|source| CleanError::Read {
                name: file.name.clone(),
                source,
            })?;
            form = form.part(UPLOAD_FIELD, Part::bytes(bytes).file_name(file.name.clone()));
        }

        let url = format!("{}/clean-file", self.base_url);
        info!(%url, files = files.len(), "submitting clean request");

        let response = self.http.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The error body should be JSON with an `error` field; anything
            // else is tolerated and falls back to the generic message.
            let body = response.bytes().await.unwrap_or_default();
            let parsed: ErrorBody = serde_json::from_slice(&body).unwrap_or_default();
            let message = parsed
                .error
                .unwrap_or_else(|| "Processing failed".to_string());
            warn!(status = %status, "server rejected clean request: {message}");
            return Err(CleanError::Server(message));
        }

        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_header)
            .unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_string());

        let bytes = response.bytes().await?.to_vec();
        info!(%file_name, size = bytes.len(), "received cleaned artifact");

        Ok(CleanedArtifact { file_name, bytes })
    }
}
