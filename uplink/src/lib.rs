//! Submit collaborator: ships a rasterized snapshot to the remote
//! image-translation service and parses its reply.
//!
//! The engine knows nothing about this crate — it is a strictly downstream
//! consumer of [`sketch::render::Bitmap`]. A failed submit therefore never
//! touches tracker or document state; the host just reports the error. The
//! service address varies across deployments and is plain configuration, not
//! part of any stable contract.

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use sketch::render::Bitmap;
use tracing::{info, warn};


/// Response header carrying the service's classification of the drawing.
pub const PREDICTED_CLASS_HEADER: &str = "predicted_class";

/// Request header carrying the snapshot width in pixels.
pub const IMAGE_WIDTH_HEADER: &str = "image-width";

/// Request header carrying the snapshot height in pixels.
pub const IMAGE_HEIGHT_HEADER: &str = "image-height";

/// Error returned by [`SubmitClient::submit`].
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The HTTP request itself failed (connect, send, or body read).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("translation service returned status {0}")]
    BadStatus(StatusCode),
    /// The reply carried no `predicted_class` header.
    #[error("response missing the predicted_class header")]
    MissingPrediction,
}

/// Result of a successful submit: the service's label for the drawing and
/// the replacement image bytes to display in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Classification label, e.g. `"cat"` or `"dog"`.
    pub predicted: String,
    /// Encoded replacement image returned in the response body.
    pub image: Vec<u8>,
}

/// HTTP client for the translation service.
pub struct SubmitClient {
    endpoint: String,
    http: reqwest::Client,
}

impl SubmitClient {
    /// Create a client posting to `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), http: reqwest::Client::new() }
    }

    /// The configured service endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the snapshot and wait for the translated image.
    ///
    /// The body is the raw grayscale pixel buffer; the dimensions travel in
    /// request headers. Fire-and-forget from the drawing session's point of
    /// view: the caller decides what to do with the result.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Http`] on transport failure,
    /// [`SubmitError::BadStatus`] on a non-success reply, and
    /// [`SubmitError::MissingPrediction`] when the reply lacks the
    /// classification header.
    pub async fn submit(&self, bitmap: &Bitmap) -> Result<Translation, SubmitError> {
        info!(width = bitmap.width, height = bitmap.height, "submitting snapshot");

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/octet-stream")
            .header(IMAGE_WIDTH_HEADER, bitmap.width.to_string())
            .header(IMAGE_HEIGHT_HEADER, bitmap.height.to_string())
            .body(bitmap.pixels.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "translation service rejected snapshot");
            return Err(SubmitError::BadStatus(status));
        }

        let predicted = response
            .headers()
            .get(PREDICTED_CLASS_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .ok_or(SubmitError::MissingPrediction)?;

        let image = response.bytes().await?.to_vec();
        info!(%predicted, image_len = image.len(), "translation received");
        Ok(Translation { predicted, image })
    }
}
