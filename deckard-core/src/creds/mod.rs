//! # Credential Management
//!
//! Discovery of credentials stored in the user's `.netrc` file.

pub mod netrc;

use std::path::Path;

use anyhow::Result;

use crate::consts::GITHUB_MACHINE;

/// Represents credentials for a service
#[derive(Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Look up GitHub credentials in `<home>/.netrc`
///
/// A missing `.netrc` file is not an error; it simply yields `None`.
pub fn get_github_credentials(home: &Path) -> Result<Option<Credentials>> {
  let netrc_path = netrc::get_netrc_path(home);
  if !netrc_path.exists() {
    return Ok(None);
  }

  netrc::parse_netrc_file(&netrc_path, GITHUB_MACHINE)
}

#[cfg(test)]
mod tests {
  use deckard_test_utils::NetrcGuard;

  use super::*;

  #[test]
  fn test_get_github_credentials() {
    let guard = NetrcGuard::new("machine github.com\n  login octocat\n  password ghp_token\n");

    let creds = get_github_credentials(guard.home_dir()).unwrap().unwrap();
    assert_eq!(creds.username, "octocat");
    assert_eq!(creds.password, "ghp_token");
  }

  #[test]
  fn test_get_github_credentials_without_netrc() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    assert!(get_github_credentials(temp_dir.path()).unwrap().is_none());
  }

  #[test]
  fn test_credentials_debug_redacts_password() {
    let creds = Credentials {
      username: "octocat".to_string(),
      password: "ghp_token".to_string(),
    };

    assert!(!format!("{creds:?}").contains("ghp_token"));
  }
}
