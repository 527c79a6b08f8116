//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling
//! authentication, request building, and status checking for GitHub REST API
//! operations.

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, RequestBuilder, Response, header, redirect};
use tracing::{debug, warn};
use url::Url;

use crate::consts::{ACCEPT, API_BASE_URL, USER_AGENT};
use crate::error::GitHubError;
use crate::models::GitHubAuth;

/// Represents a GitHub API client
///
/// Without credentials the client is anonymous and can still read public
/// resources, subject to the much lower unauthenticated rate limit.
pub struct GitHubClient {
  pub(crate) client: Client,
  /// Used for endpoints that answer with a redirect we want to read, not follow
  pub(crate) no_redirect_client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: Option<GitHubAuth>,
}

impl GitHubClient {
  /// Create a new GitHub client
  pub fn new(auth: Option<GitHubAuth>) -> Result<Self> {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .context("Failed to build HTTP client")?;
    let no_redirect_client = Client::builder()
      .user_agent(USER_AGENT)
      .redirect(redirect::Policy::none())
      .build()
      .context("Failed to build non-redirecting HTTP client")?;

    Ok(Self {
      client,
      no_redirect_client,
      base_url: API_BASE_URL.to_string(),
      auth,
    })
  }

  /// Create a client without credentials
  pub fn anonymous() -> Result<Self> {
    Self::new(None)
  }

  /// Point the client at a different API root, e.g. GitHub Enterprise
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }

  /// The API root this client talks to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Whether requests carry a bearer token
  pub const fn is_authenticated(&self) -> bool {
    self.auth.is_some()
  }

  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path.trim_start_matches('/'))
  }

  /// Build an API URL from path segments, percent-encoding each one so names
  /// containing `#`, `?` or `%` address the intended resource
  pub(crate) fn segments_url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<String> {
    let mut url = Url::parse(&self.base_url).with_context(|| format!("Invalid GitHub API URL: {}", self.base_url))?;
    url
      .path_segments_mut()
      .map_err(|()| anyhow!("GitHub API URL cannot take a path: {}", self.base_url))?
      .pop_if_empty()
      .extend(segments);
    Ok(url.to_string())
  }

  pub(crate) fn get(&self, url: &str) -> RequestBuilder {
    self.get_accepting(url, ACCEPT)
  }

  /// GET with a media type other than the default JSON one
  pub(crate) fn get_accepting(&self, url: &str, accept: &str) -> RequestBuilder {
    self.authorize(self.client.get(url).header(header::ACCEPT, accept))
  }

  pub(crate) fn post(&self, url: &str) -> RequestBuilder {
    self.authorize(self.client.post(url).header(header::ACCEPT, ACCEPT))
  }

  pub(crate) fn get_without_redirect(&self, url: &str) -> RequestBuilder {
    self.authorize(self.no_redirect_client.get(url).header(header::ACCEPT, ACCEPT))
  }

  fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
    match &self.auth {
      Some(auth) => builder.bearer_auth(&auth.token),
      None => builder,
    }
  }

  /// Turn an unexpected response into a [`GitHubError::BadStatus`], logging
  /// whatever message GitHub sent along with it.
  pub(crate) async fn unexpected_status(response: Response) -> anyhow::Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<serde_json::Value>(&body)
      .ok()
      .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(str::to_string))
      .unwrap_or(body);

    warn!("Unexpected GitHub API response: HTTP {} - {}", status, message);
    GitHubError::BadStatus(status).into()
  }

  /// Send a request and fail on transport errors, logging the status
  pub(crate) async fn send(builder: RequestBuilder, url: &str) -> Result<Response> {
    let response = builder.send().await.with_context(|| format!("Request to {url} failed"))?;
    debug!("GitHub API response status: {}", response.status());
    Ok(response)
  }
}

/// Create a GitHub client from an optional token
///
/// An empty token is treated the same as no token at all.
pub fn create_github_client(token: Option<&str>) -> Result<GitHubClient> {
  let auth = token
    .map(str::trim)
    .filter(|token| !token.is_empty())
    .map(|token| GitHubAuth {
      token: token.to_string(),
    });

  GitHubClient::new(auth)
}
