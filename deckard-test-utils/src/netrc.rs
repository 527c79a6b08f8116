use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary home directory containing a `.netrc` file
///
/// Nothing in the process environment is touched; pass [`NetrcGuard::home_dir`]
/// to the code under test. The directory is removed when the guard is dropped.
pub struct NetrcGuard {
  temp_dir: TempDir,
  netrc_path: PathBuf,
}

impl NetrcGuard {
  /// Create a new NetrcGuard with the given content
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");

    fs::write(&netrc_path, content).expect("Failed to write test .netrc");

    Self { temp_dir, netrc_path }
  }

  /// Create a home directory with a `github.com` entry
  pub fn github(login: &str, token: &str) -> Self {
    Self::new(&format!("machine github.com\n  login {login}\n  password {token}\n"))
  }

  /// Get the path to the .netrc file
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  /// Get the path to the temporary home directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
