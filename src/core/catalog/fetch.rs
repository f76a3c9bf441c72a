//! Fetch the model catalog from the research backend.

use thiserror::Error;

use super::info::ModelCatalog;

/// Errors from a catalog fetch. A non-success status is split out so callers
/// can log it distinctly; everything else (network, body decode) comes through
/// as the underlying reqwest error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("backend returned HTTP {0}")]
    Http(reqwest::StatusCode),
    #[error(transparent)]
    Other(#[from] reqwest::Error),
}

impl FetchError {
    /// Human-readable description carried into the `Failed` phase.
    /// Falls back to a fixed literal if the error somehow has no text.
    pub fn message(&self) -> String {
        let msg = self.to_string();
        if msg.is_empty() {
            "Unknown error".to_string()
        } else {
            msg
        }
    }
}

/// Issue one `GET {backend_url}/api/models` and parse the response.
/// No retry, no timeout: one attempt per activation.
pub async fn fetch_catalog(backend_url: &str) -> Result<ModelCatalog, FetchError> {
    let url = format!("{}/api/models", backend_url);
    log::debug!("fetching model catalog from {}", url);

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http(status));
    }

    let catalog = response.json::<ModelCatalog>().await?;
    log::debug!(
        "catalog ready: {} models across {} providers",
        catalog.model_count(),
        catalog.providers.len()
    );
    Ok(catalog)
}
