//! # GitHub API Endpoints
//!
//! Endpoint implementations grouped by GitHub API resource type. Each one is
//! an `impl GitHubClient` block; the `*_report` wrappers render outcomes as
//! chat-ready strings instead of returning errors.

pub mod contents;
pub mod issues;
pub mod meta;
pub mod orgs;
pub mod rate_limit;
pub mod repos;
