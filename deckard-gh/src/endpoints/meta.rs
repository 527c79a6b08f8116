//! GitHub meta endpoints.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::consts::ACCEPT_OCTOCAT;

impl GitHubClient {
  /// Get the octocat as ASCII art, saying `message` in a speech bubble
  #[instrument(skip(self), level = "debug")]
  pub async fn octocat(&self, message: &str) -> Result<String> {
    let url = self.url("octocat");

    let mut request = self.get_accepting(&url, ACCEPT_OCTOCAT);
    if !message.is_empty() {
      request = request.query(&[("s", message)]);
    }

    let response = Self::send(request, &url).await?;
    match response.status() {
      StatusCode::OK => response.text().await.context("Failed to read octocat response"),
      _ => Err(Self::unexpected_status(response).await),
    }
  }

  /// Same as [`GitHubClient::octocat`], but any failure yields an empty string
  pub async fn octocat_or_empty(&self, message: &str) -> String {
    self.octocat(message).await.unwrap_or_else(|e| {
      debug!("Octocat unavailable: {:#}", e);
      String::new()
    })
  }
}
