//! # Client Creation
//!
//! Builds the tokio runtime and GitHub client every API-backed command needs,
//! combining command-line flags, the configuration file and `.netrc`.

use anyhow::{Context, Result};
use deckard_core::get_config_dirs;
use deckard_gh::GitHubClient;
use deckard_gh::auth::create_github_client_from_config;
use directories::BaseDirs;
use tokio::runtime::Runtime;
use tracing::Level;

use crate::cli::GitHubOptions;

/// Creates a GitHub client honouring `--token` and `--api-url`
///
/// Flags win over the configuration file; with no token anywhere the client
/// is anonymous.
pub fn create_github_client_from_options(options: &GitHubOptions) -> Result<GitHubClient> {
  let base_dirs = BaseDirs::new().context("Could not determine home directory")?;
  let config = get_config_dirs()?.load_config()?;

  let client = create_github_client_from_config(options.token.as_deref(), base_dirs.home_dir(), &config)
    .context("Failed to create GitHub client")?;

  Ok(match &options.api_url {
    Some(api_url) => client.with_base_url(api_url.as_str()),
    None => client,
  })
}

/// Creates a tokio runtime and a GitHub client
pub fn create_github_runtime_and_client(options: &GitHubOptions) -> Result<(Runtime, GitHubClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_github_client_from_options(options)?;
  Ok((rt, client))
}

/// Log the remaining API quota when debug logging is on
pub fn log_rate_limit(rt: &Runtime, client: &GitHubClient) {
  if tracing::enabled!(Level::DEBUG) {
    rt.block_on(client.check_rate_limit());
  }
}
