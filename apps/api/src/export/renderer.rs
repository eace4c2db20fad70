//! PDF Render Client — the single point of entry for the external
//! headless-browser render service.
//!
//! ARCHITECTURAL RULE: no other module may call the render service
//! directly. The service receives the print snapshot as JSON and returns
//! the finished PDF bytes; everything it prints comes from the same
//! `narrate` output the live profile serves.

use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::profiles::snapshot::PrintSnapshot;

const RENDER_PATH: &str = "/render/profile";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Render service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Render service returned an empty document")]
    EmptyDocument,

    #[error("Render service unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

/// Client for the headless-browser PDF service.
/// Retries on 429 and 5xx with exponential backoff.
#[derive(Clone)]
pub struct PdfRenderClient {
    client: Client,
    base_url: String,
}

impl PdfRenderClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Renders a print snapshot to PDF bytes.
    pub async fn render(&self, snapshot: &PrintSnapshot) -> Result<Bytes, RenderError> {
        let url = format!("{}{}", self.base_url, RENDER_PATH);
        let mut last_error: Option<RenderError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Render attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&url).json(snapshot).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(RenderError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Render service returned {}: {}", status, body);
                last_error = Some(RenderError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(RenderError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let pdf = response.bytes().await?;
            if pdf.is_empty() {
                return Err(RenderError::EmptyDocument);
            }

            debug!("Render succeeded: {} bytes", pdf.len());
            return Ok(pdf);
        }

        Err(last_error.unwrap_or(RenderError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = PdfRenderClient::new("http://renderer:3000/".to_string());
        assert_eq!(client.base_url, "http://renderer:3000");
    }

    #[test]
    fn test_base_url_without_slash_is_unchanged() {
        let client = PdfRenderClient::new("http://renderer:3000".to_string());
        assert_eq!(client.base_url, "http://renderer:3000");
    }
}
