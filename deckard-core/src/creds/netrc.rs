//! Reading credentials from `.netrc` files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// ```
/// use std::path::Path;
/// use deckard_core::creds::netrc::get_netrc_path;
///
/// let path = get_netrc_path(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Finds the `login`/`password` pair for `target_machine` in `.netrc` text.
///
/// Tokens may be spread over any number of lines, so both the single-line
/// (`machine host login user password pass`) and multi-line layouts work.
/// A `default` entry is used only when no machine matches. Entries missing
/// either field are skipped.
pub fn parse_netrc(content: &str, target_machine: &str) -> Option<Credentials> {
  #[derive(Default)]
  struct Entry<'a> {
    machine: Option<&'a str>,
    login: Option<&'a str>,
    password: Option<&'a str>,
  }

  impl Entry<'_> {
    fn credentials(&self) -> Option<Credentials> {
      Some(Credentials {
        username: self.login?.to_string(),
        password: self.password?.to_string(),
      })
    }
  }

  let mut entries: Vec<Entry<'_>> = Vec::new();
  let mut tokens = content.split_whitespace();

  while let Some(token) = tokens.next() {
    match token {
      "machine" => entries.push(Entry {
        machine: tokens.next(),
        ..Default::default()
      }),
      "default" => entries.push(Entry::default()),
      "login" => {
        if let (Some(entry), Some(value)) = (entries.last_mut(), tokens.next()) {
          entry.login = Some(value);
        }
      }
      "password" => {
        if let (Some(entry), Some(value)) = (entries.last_mut(), tokens.next()) {
          entry.password = Some(value);
        }
      }
      _ => {}
    }
  }

  entries
    .iter()
    .filter(|entry| entry.machine == Some(target_machine))
    .find_map(Entry::credentials)
    .or_else(|| {
      entries
        .iter()
        .filter(|entry| entry.machine.is_none())
        .find_map(Entry::credentials)
    })
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  Ok(parse_netrc(&content, target_machine))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_multi_line() {
    let content = "machine example.com\n  login someone\n  password secret\n\nmachine github.com\n  login octocat\n  password ghp_token\n";

    let creds = parse_netrc(content, "github.com").unwrap();
    assert_eq!(creds.username, "octocat");
    assert_eq!(creds.password, "ghp_token");
  }

  #[test]
  fn test_parse_single_line() {
    let content = "machine github.com login octocat password ghp_token";

    let creds = parse_netrc(content, "github.com").unwrap();
    assert_eq!(creds.username, "octocat");
    assert_eq!(creds.password, "ghp_token");
  }

  #[test]
  fn test_parse_missing_machine() {
    let content = "machine example.com login someone password secret";

    assert!(parse_netrc(content, "github.com").is_none());
  }

  #[test]
  fn test_parse_incomplete_entry() {
    let content = "machine github.com login octocat";

    assert!(parse_netrc(content, "github.com").is_none());
  }

  #[test]
  fn test_parse_default_entry_is_fallback() {
    let content = "default login anyone password fallback\nmachine github.com login octocat password ghp_token";

    assert_eq!(parse_netrc(content, "github.com").unwrap().password, "ghp_token");
    assert_eq!(parse_netrc(content, "gitlab.com").unwrap().password, "fallback");
  }

  #[test]
  fn test_parse_netrc_file_missing() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    assert!(parse_netrc_file(&temp_dir.path().join(".netrc"), "github.com").is_err());
  }
}
