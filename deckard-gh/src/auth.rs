//! Authentication helpers for the GitHub client.
//!
//! A token is looked for in the `GITHUB_TOKEN` environment variable, then in
//! the configuration file, then in the `github.com` entry of `.netrc`. When
//! none is found the client is anonymous, which still works for public
//! resources.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use deckard_core::DeckardConfig;
use deckard_core::consts::ENV_GITHUB_TOKEN;
use deckard_core::creds::get_github_credentials;
use tracing::debug;

use crate::{GitHubClient, create_github_client};

/// Where a GitHub token was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
  Environment,
  ConfigFile,
  Netrc,
}

impl fmt::Display for TokenSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Environment => write!(f, "{ENV_GITHUB_TOKEN} environment variable"),
      Self::ConfigFile => f.write_str("configuration file"),
      Self::Netrc => f.write_str(".netrc"),
    }
  }
}

fn non_empty(token: Option<&str>) -> Option<String> {
  token.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}

/// Resolve a token given an explicit environment value.
pub fn resolve_github_token_from(
  env_token: Option<&str>,
  home: &Path,
  config: &DeckardConfig,
) -> Result<Option<(String, TokenSource)>> {
  if let Some(token) = non_empty(env_token) {
    return Ok(Some((token, TokenSource::Environment)));
  }

  if let Some(token) = non_empty(config.github.token.as_deref()) {
    return Ok(Some((token, TokenSource::ConfigFile)));
  }

  let creds = get_github_credentials(home).context("Failed to read GitHub credentials from .netrc")?;
  Ok(non_empty(creds.as_ref().map(|c| c.password.as_str())).map(|token| (token, TokenSource::Netrc)))
}

/// Resolve a token from the process environment, config and `.netrc`.
pub fn resolve_github_token(home: &Path, config: &DeckardConfig) -> Result<Option<(String, TokenSource)>> {
  let env_token = std::env::var(ENV_GITHUB_TOKEN).ok();
  resolve_github_token_from(env_token.as_deref(), home, config)
}

/// Create a client from the discovered token, honouring the configured API URL.
pub fn create_github_client_from_config(
  token: Option<&str>,
  home: &Path,
  config: &DeckardConfig,
) -> Result<GitHubClient> {
  let token = match non_empty(token) {
    Some(token) => Some(token),
    None => match resolve_github_token(home, config)? {
      Some((token, source)) => {
        debug!("Using GitHub token from {}", source);
        Some(token)
      }
      None => {
        debug!("No GitHub token found, using an anonymous client");
        None
      }
    },
  };

  let client = create_github_client(token.as_deref())?;
  Ok(match &config.github.api_url {
    Some(api_url) => client.with_base_url(api_url.as_str()),
    None => client,
  })
}

#[cfg(test)]
mod tests {
  use deckard_core::GitHubConfig;
  use deckard_test_utils::NetrcGuard;

  use super::*;

  fn config_with_token(token: Option<&str>) -> DeckardConfig {
    DeckardConfig {
      github: GitHubConfig {
        token: token.map(str::to_string),
        api_url: None,
      },
    }
  }

  #[test]
  fn test_environment_wins() -> Result<()> {
    let guard = NetrcGuard::github("octocat", "from_netrc");
    let config = config_with_token(Some("from_config"));

    let resolved = resolve_github_token_from(Some("from_env"), guard.home_dir(), &config)?;
    assert_eq!(resolved, Some(("from_env".to_string(), TokenSource::Environment)));

    Ok(())
  }

  #[test]
  fn test_config_before_netrc() -> Result<()> {
    let guard = NetrcGuard::github("octocat", "from_netrc");
    let config = config_with_token(Some("from_config"));

    let resolved = resolve_github_token_from(Some("  "), guard.home_dir(), &config)?;
    assert_eq!(resolved, Some(("from_config".to_string(), TokenSource::ConfigFile)));

    Ok(())
  }

  #[test]
  fn test_netrc_fallback() -> Result<()> {
    let guard = NetrcGuard::github("octocat", "from_netrc");

    let resolved = resolve_github_token_from(None, guard.home_dir(), &config_with_token(None))?;
    assert_eq!(resolved, Some(("from_netrc".to_string(), TokenSource::Netrc)));

    Ok(())
  }

  #[test]
  fn test_nothing_found() -> Result<()> {
    let guard = NetrcGuard::new("machine example.com login someone password secret\n");

    let resolved = resolve_github_token_from(None, guard.home_dir(), &config_with_token(None))?;
    assert_eq!(resolved, None);

    Ok(())
  }

  #[test]
  fn test_explicit_token_and_api_url() -> Result<()> {
    let guard = NetrcGuard::new("");
    let config = DeckardConfig {
      github: GitHubConfig {
        token: None,
        api_url: Some("https://ghe.example.com/api/v3".to_string()),
      },
    };

    let client = create_github_client_from_config(Some("explicit"), guard.home_dir(), &config)?;

    assert!(client.is_authenticated());
    assert_eq!(client.base_url(), "https://ghe.example.com/api/v3");

    Ok(())
  }

  #[test]
  fn test_token_source_display() {
    assert_eq!(TokenSource::Environment.to_string(), "GITHUB_TOKEN environment variable");
    assert_eq!(TokenSource::Netrc.to_string(), ".netrc");
  }
}
