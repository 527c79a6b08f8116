//! Constants for the deckard-gh client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("deckard/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Accept header value for the octocat endpoint, which answers in plain text
pub const ACCEPT_OCTOCAT: &str = "application/octocat-stream";

/// Page size used for every paginated listing
pub const PER_PAGE: u32 = 10;

/// Body attached to every issue opened through [`crate::GitHubClient::create_issue_report`]
pub const ISSUE_BODY: &str = "Issue created by the Deckard Chatbot Plugin";
