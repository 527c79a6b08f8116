//! # GitHub API Client
//!
//! Thin GitHub REST API integration for chat-bot style workflows: reading
//! files, checking repositories and branches, fetching archive links, listing
//! organization members, opening issues and the occasional octocat.

pub mod auth;
pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod pagination;

// Re-export the client
pub use client::{GitHubClient, create_github_client};
// Re-export errors
pub use error::GitHubError;
// Re-export models
pub use models::{
  Archive, ArchiveFormat, CreateIssueRequest, GitHubAuth, GitHubBranch, GitHubIssue, GitHubRepository, GitHubUser,
  Rate, RateLimitResponse, RepositoryContent,
};
// Re-export pagination
pub use pagination::Page;
