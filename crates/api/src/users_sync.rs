//! User directory download.
//!
//! [`UserDirectorySync`] fetches the directory XML from the intranet and
//! replaces the local copy read by the users listing. The document is
//! validated before it is written, so a bad download never clobbers a good
//! file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use presence_core::users::parse_directory;

/// HTTP request timeout for a single download.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Directory source returned HTTP {0}")]
    HttpStatus(u16),

    /// The downloaded body is not a usable directory.
    #[error("Downloaded directory is invalid: {0}")]
    InvalidDocument(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// UserDirectorySync
// ---------------------------------------------------------------------------

pub struct UserDirectorySync {
    client: reqwest::Client,
}

impl UserDirectorySync {
    /// Create a downloader with a pre-configured HTTP client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client }
    }

    /// Download the directory from `source_url` and store it at `dest`.
    ///
    /// Returns the number of users in the stored document.
    pub async fn update_user_names(&self, source_url: &str, dest: &Path) -> Result<usize, SyncError> {
        let response = self.client.get(source_url).send().await?;
        if !response.status().is_success() {
            return Err(SyncError::HttpStatus(response.status().as_u16()));
        }
        let body = response.text().await?;

        let users = parse_directory(&body).map_err(|e| SyncError::InvalidDocument(e.to_string()))?;

        // Write next to the destination, then rename over it.
        let tmp = dest.with_extension("xml.tmp");
        tokio::fs::write(&tmp, body.as_bytes())
            .await
            .map_err(|source| SyncError::Write {
                path: tmp.clone(),
                source,
            })?;
        if let Err(source) = tokio::fs::rename(&tmp, dest).await {
            if let Err(e) = tokio::fs::remove_file(&tmp).await {
                tracing::warn!(tmp = %tmp.display(), error = %e, "Failed to remove temporary directory file");
            }
            return Err(SyncError::Write {
                path: dest.to_path_buf(),
                source,
            });
        }

        tracing::info!(
            source_url,
            dest = %dest.display(),
            users = users.len(),
            "User directory updated"
        );
        Ok(users.len())
    }
}

impl Default for UserDirectorySync {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_error_display_http_status() {
        let err = SyncError::HttpStatus(502);
        assert_eq!(err.to_string(), "Directory source returned HTTP 502");
    }

    #[test]
    fn sync_error_display_request() {
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = SyncError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }
}
