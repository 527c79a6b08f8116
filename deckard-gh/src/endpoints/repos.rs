//! GitHub repository, branch and archive endpoints.

use anyhow::{Context, Result, anyhow};
use reqwest::{StatusCode, header};
use tracing::{debug, error, info, instrument, trace};
use url::Url;

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::models::{Archive, ArchiveFormat, GitHubBranch, GitHubRepository};
use crate::pagination::Page;

impl GitHubClient {
  /// List every repository of an organization visible to the client
  #[instrument(skip(self), level = "debug")]
  pub async fn list_org_repos(&self, org: &str) -> Result<Vec<GitHubRepository>> {
    let url = self.segments_url(["orgs", org, "repos"])?;
    self.get_all_pages(&url).await
  }

  /// Check whether `repo` exists in `org` and the client can see it.
  ///
  /// Pages through the organization's repositories. A failing page is logged
  /// and ends the search early, so an API outage reads as "not found".
  #[instrument(skip(self), level = "debug")]
  pub async fn repo_exists(&self, org: &str, repo: &str) -> bool {
    let url = match self.segments_url(["orgs", org, "repos"]) {
      Ok(url) => url,
      Err(e) => {
        error!("{:#}", e);
        return false;
      }
    };
    let mut all_repos: Vec<GitHubRepository> = Vec::new();
    let mut page = 1;

    loop {
      match self.get_page::<GitHubRepository>(&url, page).await {
        Ok(Page { items, next_page }) => {
          all_repos.extend(items);
          match next_page {
            Some(next) if next > page => page = next,
            _ => break,
          }
        }
        Err(e) => {
          error!("{:#}", e);
          break;
        }
      }
    }

    all_repos.iter().any(|r| {
      debug!("r.name: {}", r.name);
      r.name == repo
    })
  }

  /// List every branch of a repository
  #[instrument(skip(self), level = "debug")]
  pub async fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<GitHubBranch>> {
    let url = self.segments_url(["repos", owner, repo, "branches"])?;
    self.get_all_pages(&url).await
  }

  /// Get a single branch, including the commit it points at
  #[instrument(skip(self), level = "debug")]
  pub async fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<GitHubBranch> {
    let url = self.segments_url(["repos", owner, repo, "branches", branch])?;

    let response = Self::send(self.get(&url), &url).await?;
    match response.status() {
      StatusCode::OK => response
        .json::<GitHubBranch>()
        .await
        .context("Failed to parse GitHub branch response"),
      _ => Err(Self::unexpected_status(response).await),
    }
  }

  /// Confirm that the repository exists and has a branch named `branch`.
  ///
  /// # Errors
  ///
  /// * [`GitHubError::RepoNotFound`] when the organization has no such repo
  /// * a "Could not fetch branches" error when listing branches fails
  /// * [`GitHubError::BranchNotFound`] when no branch matches
  pub async fn check_repo_and_branch(&self, org: &str, repo: &str, branch: &str) -> Result<()> {
    if !self.repo_exists(org, repo).await {
      return Err(GitHubError::RepoNotFound(repo.to_string()).into());
    }

    let branches = self
      .list_branches(org, repo)
      .await
      .map_err(|e| anyhow!("Could not fetch branches for {repo}: {e:#}"))?;

    if branches.iter().any(|b| b.name == branch) {
      Ok(())
    } else {
      Err(
        GitHubError::BranchNotFound {
          branch: branch.to_string(),
          repo: repo.to_string(),
        }
        .into(),
      )
    }
  }

  /// Get a download link for an archive of `git_ref`.
  ///
  /// GitHub answers with a redirect to a short-lived download URL; the
  /// redirect is read, not followed.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_archive_link(&self, owner: &str, repo: &str, format: ArchiveFormat, git_ref: &str) -> Result<Url> {
    let url = self.segments_url(["repos", owner, repo, format.as_str(), git_ref])?;

    let response = Self::send(self.get_without_redirect(&url), &url).await?;
    let status = response.status();

    if status != StatusCode::FOUND {
      return Err(Self::unexpected_status(response).await);
    }

    let location = response
      .headers()
      .get(header::LOCATION)
      .and_then(|value| value.to_str().ok())
      .ok_or(GitHubError::MissingLocation(status))?;
    trace!("Archive location: {}", location);

    Url::parse(location).with_context(|| format!("Invalid archive URL returned by GitHub: {location}"))
  }

  /// Get a tarball link for `branch` together with its head commit SHA.
  ///
  /// The repository and branch are verified first so callers get a precise
  /// message when either is missing.
  pub async fn get_archive(&self, org: &str, repo: &str, branch: &str) -> Result<Archive> {
    self.check_repo_and_branch(org, repo, branch).await?;

    let url = match self.get_archive_link(org, repo, ArchiveFormat::Tarball, branch).await {
      Ok(url) => url,
      Err(e) => {
        error!("Could not get archive URL: {:#}", e);
        return Err(e);
      }
    };

    let commit_sha = self.get_branch(org, repo, branch).await?.commit.sha;
    info!("Archive for {}/{}@{} at {}", org, repo, branch, commit_sha);

    Ok(Archive { url, commit_sha })
  }
}
