//! Typed failures for status-driven GitHub API errors.
//!
//! Transport problems stay as `anyhow` context chains; these variants cover
//! the cases callers want to tell apart before rendering a message.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
  #[error("Bad response from Github: {0}")]
  BadStatus(StatusCode),
  #[error("Github repo not found: {0}")]
  RepoNotFound(String),
  #[error("No branch named {branch} found in repo {repo}")]
  BranchNotFound { branch: String, repo: String },
  #[error("Archive response did not include a Location header (HTTP {0})")]
  MissingLocation(StatusCode),
  #[error("Invalid file content: {0}")]
  InvalidContent(String),
}

impl GitHubError {
  /// The HTTP status carried by this error, if any
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      Self::BadStatus(status) | Self::MissingLocation(status) => Some(*status),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bad_status_message() {
    let err = GitHubError::BadStatus(StatusCode::NOT_FOUND);
    assert_eq!(err.to_string(), "Bad response from Github: 404 Not Found");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
  }

  #[test]
  fn test_branch_not_found_message() {
    let err = GitHubError::BranchNotFound {
      branch: "feature".to_string(),
      repo: "widgets".to_string(),
    };
    assert_eq!(err.to_string(), "No branch named feature found in repo widgets");
    assert_eq!(err.status(), None);
  }
}
