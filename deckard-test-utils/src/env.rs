//! Process environment isolation for tests
//!
//! [`EnvTestGuard`] points the XDG base directories at a throwaway directory
//! and hides any `GITHUB_TOKEN` from the developer's shell, so a test sees a
//! fresh deckard installation. Everything is put back on drop.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

const CONFIG_HOME: &str = "XDG_CONFIG_HOME";
const CACHE_HOME: &str = "XDG_CACHE_HOME";
const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Overrides the environment deckard reads its configuration from
pub struct EnvTestGuard {
  root: TempDir,
  saved: Vec<(&'static str, Option<OsString>)>,
}

impl Default for EnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvTestGuard {
  pub fn new() -> Self {
    let root = TempDir::new().expect("Failed to create temporary directory");
    let config_home = root.path().join("config");
    let cache_home = root.path().join("cache");
    fs::create_dir_all(&config_home).expect("Failed to create config home");
    fs::create_dir_all(&cache_home).expect("Failed to create cache home");

    let saved = [CONFIG_HOME, CACHE_HOME, GITHUB_TOKEN]
      .into_iter()
      .map(|key| (key, env::var_os(key)))
      .collect();

    // SAFETY: tests holding this guard don't read these variables from other
    // threads while it is alive.
    unsafe {
      env::set_var(CONFIG_HOME, &config_home);
      env::set_var(CACHE_HOME, &cache_home);
      env::remove_var(GITHUB_TOKEN);
    }

    Self { root, saved }
  }

  /// Directory standing in for `XDG_CONFIG_HOME`
  pub fn config_dir(&self) -> PathBuf {
    self.root.path().join("config")
  }

  /// Directory standing in for `XDG_CACHE_HOME`
  pub fn cache_dir(&self) -> PathBuf {
    self.root.path().join("cache")
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    for (key, value) in self.saved.drain(..) {
      // SAFETY: see `EnvTestGuard::new`.
      unsafe {
        match value {
          Some(value) => env::set_var(key, value),
          None => env::remove_var(key),
        }
      }
    }
  }
}
