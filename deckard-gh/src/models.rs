use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub token: String,
}

impl fmt::Debug for GitHubAuth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GitHubAuth").field("token", &"<redacted>").finish()
  }
}

/// Represents a GitHub user
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
  pub login: String,
  pub id: u64,
}

/// A single file entry returned by the contents endpoint
#[derive(Debug, Deserialize)]
pub struct RepositoryContent {
  pub name: String,
  pub path: String,
  pub sha: String,
  #[serde(default)]
  pub size: u64,
  #[serde(rename = "type")]
  pub content_type: String,
  pub encoding: Option<String>,
  pub content: Option<String>,
  pub download_url: Option<String>,
}

/// Quota for one API resource family
#[derive(Debug, Clone, Deserialize)]
pub struct Rate {
  pub limit: u32,
  #[serde(default)]
  pub used: u32,
  pub remaining: u32,
  /// Reset time as a unix timestamp in seconds
  pub reset: u64,
}

/// Per-resource breakdown of the rate limit
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitResources {
  pub core: Rate,
  pub search: Rate,
  pub graphql: Option<Rate>,
}

/// Response body of `GET /rate_limit`
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitResponse {
  pub resources: RateLimitResources,
  pub rate: Rate,
}

/// Represents a GitHub repository
#[derive(Debug, Deserialize)]
pub struct GitHubRepository {
  pub id: u64,
  pub name: String,
  pub full_name: String,
  #[serde(default)]
  pub private: bool,
  pub default_branch: Option<String>,
}

/// Commit pointer carried by a branch
#[derive(Debug, Deserialize)]
pub struct BranchCommit {
  pub sha: String,
  pub url: Option<String>,
}

/// Represents a GitHub branch
#[derive(Debug, Deserialize)]
pub struct GitHubBranch {
  pub name: String,
  pub commit: BranchCommit,
  #[serde(default)]
  pub protected: bool,
}

/// Represents a GitHub issue
#[derive(Debug, Deserialize)]
pub struct GitHubIssue {
  pub number: u64,
  pub title: String,
  pub html_url: String,
  pub state: String,
}

/// Payload for `POST /repos/{owner}/{repo}/issues`
#[derive(Debug, Serialize)]
pub struct CreateIssueRequest {
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub assignees: Vec<String>,
}

/// Archive flavours offered by the archive link endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
  Tarball,
  Zipball,
}

impl ArchiveFormat {
  /// Path segment used by the API for this format
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Tarball => "tarball",
      Self::Zipball => "zipball",
    }
  }
}

impl fmt::Display for ArchiveFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Archive link for a branch together with the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
  pub url: Url,
  pub commit_sha: String,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_github_auth_debug_redacts_token() {
    let auth = GitHubAuth {
      token: "ghp_secret".to_string(),
    };

    let debug = format!("{auth:?}");
    assert!(!debug.contains("ghp_secret"));
    assert!(debug.contains("redacted"));
  }

  #[test]
  fn test_repository_content_deserialization() {
    let json = json!({
        "type": "file",
        "encoding": "base64",
        "size": 12,
        "name": "README.md",
        "path": "README.md",
        "content": "aGVsbG8gd29y\nbGQK\n",
        "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
        "url": "https://api.github.com/repos/octokit/octokit.rb/contents/README.md",
        "download_url": "https://raw.githubusercontent.com/octokit/octokit.rb/master/README.md"
    });

    let content: RepositoryContent = serde_json::from_value(json).unwrap();

    assert_eq!(content.content_type, "file");
    assert_eq!(content.encoding.as_deref(), Some("base64"));
    assert_eq!(content.size, 12);
    assert!(content.download_url.unwrap().ends_with("README.md"));
  }

  #[test]
  fn test_rate_limit_deserialization() {
    let json = json!({
        "resources": {
            "core": { "limit": 5000, "used": 1, "remaining": 4999, "reset": 1372700873 },
            "search": { "limit": 30, "used": 12, "remaining": 18, "reset": 1372697452 }
        },
        "rate": { "limit": 5000, "used": 1, "remaining": 4999, "reset": 1372700873 }
    });

    let limits: RateLimitResponse = serde_json::from_value(json).unwrap();

    assert_eq!(limits.resources.core.remaining, 4999);
    assert_eq!(limits.resources.search.limit, 30);
    assert!(limits.resources.graphql.is_none());
    assert_eq!(limits.rate.reset, 1372700873);
  }

  #[test]
  fn test_branch_deserialization() {
    let json = json!({
        "name": "main",
        "commit": {
            "sha": "c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc",
            "url": "https://api.github.com/repos/octocat/Hello-World/commits/c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc"
        },
        "protected": true
    });

    let branch: GitHubBranch = serde_json::from_value(json).unwrap();

    assert_eq!(branch.name, "main");
    assert_eq!(branch.commit.sha, "c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc");
    assert!(branch.protected);
  }

  #[test]
  fn test_create_issue_request_skips_empty_fields() {
    let request = CreateIssueRequest {
      title: "Broken build".to_string(),
      body: None,
      assignees: Vec::new(),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, json!({ "title": "Broken build" }));
  }

  #[test]
  fn test_archive_format_path_segment() {
    assert_eq!(ArchiveFormat::Tarball.as_str(), "tarball");
    assert_eq!(ArchiveFormat::Zipball.to_string(), "zipball");
  }
}
