//! GitHub Issues API endpoint implementations.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, info, instrument, trace};

use crate::client::GitHubClient;
use crate::consts::ISSUE_BODY;
use crate::error::GitHubError;
use crate::models::{CreateIssueRequest, GitHubIssue};

impl GitHubClient {
  /// Create an issue in a repository.
  ///
  /// # Errors
  ///
  /// Returns [`GitHubError::BadStatus`] unless GitHub answers `201 Created`,
  /// or an error if the request cannot be sent or the response cannot be
  /// parsed.
  #[instrument(skip(self, request), level = "debug")]
  pub async fn create_issue(&self, owner: &str, repo: &str, request: &CreateIssueRequest) -> Result<GitHubIssue> {
    info!("Creating issue '{}' in {}/{}", request.title, owner, repo);

    let url = self.segments_url(["repos", owner, repo, "issues"])?;
    trace!("GitHub API URL: {}", url);

    let response = Self::send(self.post(&url).json(request), &url).await?;
    let status = response.status();
    debug!("Create issue status code: {}", status.as_u16());

    match status {
      StatusCode::CREATED => response
        .json::<GitHubIssue>()
        .await
        .context("Failed to parse GitHub issue response"),
      _ => Err(Self::unexpected_status(response).await),
    }
  }

  /// Open an issue titled `title` and describe the outcome for chat.
  ///
  /// The repository is checked first; every failure is rendered into the
  /// returned text. Only a success status other than `201 Created` counts as
  /// "not created"; API errors are reported as errors.
  pub async fn create_issue_report(&self, org: &str, repo: &str, title: &str) -> String {
    if !self.repo_exists(org, repo).await {
      return format!("PANIC: `{repo}` Repository Does Not Exist");
    }

    let request = CreateIssueRequest {
      title: title.to_string(),
      body: Some(ISSUE_BODY.to_string()),
      assignees: Vec::new(),
    };

    match self.create_issue(org, repo, &request).await {
      Ok(issue) => {
        debug!("Issue URL: {}", issue.html_url);
        debug!("Issue number: {}", issue.number);
        format!(
          "*Issue # {} has been created successfully*\n{}",
          issue.number, issue.html_url
        )
      }
      Err(e) => match e.downcast_ref::<GitHubError>() {
        Some(GitHubError::BadStatus(status)) if status.is_success() => {
          format!("PANIC: Issue was not created!\nResponse code: {status}")
        }
        _ => format!("Error occurred when creating issue: {e:#}"),
      },
    }
  }
}
