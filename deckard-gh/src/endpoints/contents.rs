//! GitHub repository contents endpoint.

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use tracing::{debug, info, instrument};

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::models::RepositoryContent;

impl RepositoryContent {
  /// Decode the file body according to its declared encoding.
  ///
  /// GitHub wraps base64 payloads at 60 columns, so whitespace is removed
  /// before decoding. Files above 1 MB come back with encoding `none` and no
  /// body at all.
  pub fn decoded(&self) -> Result<Vec<u8>> {
    let content = self.content.as_deref().unwrap_or_default();

    match self.encoding.as_deref() {
      Some("base64") => {
        let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        STANDARD
          .decode(compact)
          .map_err(|e| GitHubError::InvalidContent(format!("{}: {e}", self.path)).into())
      }
      None | Some("") => Ok(content.as_bytes().to_vec()),
      Some("none") => Err(
        GitHubError::InvalidContent(format!(
          "{}: unsupported content encoding 'none', this may occur when the file is larger than 1 MB",
          self.path
        ))
        .into(),
      ),
      Some(other) => Err(GitHubError::InvalidContent(format!("{}: unsupported content encoding '{other}'", self.path)).into()),
    }
  }
}

impl GitHubClient {
  /// Get the raw contents entry for a path in a repository
  #[instrument(skip(self), level = "debug")]
  pub async fn get_contents(&self, owner: &str, repo: &str, path: &str) -> Result<RepositoryContent> {
    let segments = ["repos", owner, repo, "contents"]
      .into_iter()
      .chain(path.split('/').filter(|segment| !segment.is_empty()));
    let url = self.segments_url(segments)?;

    let response = Self::send(self.get(&url), &url).await?;
    if response.status() != StatusCode::OK {
      return Err(Self::unexpected_status(response).await);
    }

    let body = response
      .json::<serde_json::Value>()
      .await
      .context("Failed to read contents response")?;

    if body.is_array() {
      return Err(GitHubError::InvalidContent(format!("{path} is a directory, not a file")).into());
    }

    let content = serde_json::from_value::<RepositoryContent>(body).context("Failed to parse contents response")?;
    if content.content_type != "file" {
      return Err(GitHubError::InvalidContent(format!("{path} is a {}, not a file", content.content_type)).into());
    }

    Ok(content)
  }

  /// Get the decoded contents of a file and its download URL.
  ///
  /// The download URL is empty when GitHub does not provide one.
  ///
  /// # Errors
  ///
  /// Returns [`GitHubError::BadStatus`] for any non-200 response, and
  /// [`GitHubError::InvalidContent`] when the path is not a regular file or
  /// its body cannot be decoded.
  pub async fn get_file(&self, owner: &str, repo: &str, path: &str) -> Result<(Vec<u8>, String)> {
    info!("Fetching {} from {}/{}", path, owner, repo);

    let content = self.get_contents(owner, repo, path).await?;
    let decoded = content.decoded()?;
    debug!("Decoded {} bytes from {}", decoded.len(), content.path);

    Ok((decoded, content.download_url.unwrap_or_default()))
  }
}
