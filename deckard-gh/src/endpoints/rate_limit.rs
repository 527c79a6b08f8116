use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::models::RateLimitResponse;

impl GitHubClient {
  /// Get the current API rate limit status
  ///
  /// Querying the rate limit does not count against it.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_rate_limit(&self) -> Result<RateLimitResponse> {
    let url = self.url("rate_limit");

    let response = Self::send(self.get(&url), &url).await?;
    match response.status() {
      StatusCode::OK => response
        .json::<RateLimitResponse>()
        .await
        .context("Failed to parse GitHub rate limit response"),
      _ => Err(Self::unexpected_status(response).await),
    }
  }

  /// Log the current rate limit at debug level
  ///
  /// Failures are logged too and otherwise ignored; this is a diagnostic aid,
  /// not something callers branch on.
  pub async fn check_rate_limit(&self) {
    match self.get_rate_limit().await {
      Ok(limits) => debug!("Github API Rate Limit: {:?}", limits),
      Err(e) => debug!("Error fetching Github rate limit: {:#}", e),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::endpoints::test_support::test_client;

  #[tokio::test]
  async fn test_get_rate_limit() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/rate_limit"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "resources": {
          "core": { "limit": 5000, "used": 10, "remaining": 4990, "reset": 1700000000 },
          "search": { "limit": 30, "used": 0, "remaining": 30, "reset": 1700000060 },
          "graphql": { "limit": 5000, "used": 0, "remaining": 5000, "reset": 1700003600 }
        },
        "rate": { "limit": 5000, "used": 10, "remaining": 4990, "reset": 1700000000 }
      })))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let limits = client.get_rate_limit().await?;

    assert_eq!(limits.resources.core.remaining, 4990);
    assert_eq!(limits.resources.search.limit, 30);
    assert_eq!(limits.resources.graphql.map(|rate| rate.limit), Some(5000));

    Ok(())
  }

  #[tokio::test]
  async fn test_check_rate_limit_swallows_errors() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/rate_limit"))
      .respond_with(ResponseTemplate::new(503))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    // Must return normally even though the endpoint failed
    client.check_rate_limit().await;

    Ok(())
  }
}
