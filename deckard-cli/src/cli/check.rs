use anyhow::Result;
use clap::Args;
use deckard_core::print_success;
use deckard_gh::GitHubError;

use crate::cli::GitHubOptions;
use crate::clients::{create_github_runtime_and_client, log_rate_limit};

/// Arguments for the check command
#[derive(Args)]
pub struct CheckArgs {
  /// Organization owning the repository
  pub org: String,

  /// Repository name
  pub repo: String,

  /// Also require this branch to exist
  #[arg(short, long)]
  pub branch: Option<String>,
}

pub(crate) fn handle_check_command(options: &GitHubOptions, args: CheckArgs) -> Result<()> {
  let (rt, client) = create_github_runtime_and_client(options)?;

  match &args.branch {
    Some(branch) => {
      rt.block_on(client.check_repo_and_branch(&args.org, &args.repo, branch))?;
      print_success(&format!("Found branch {branch} in {}/{}", args.org, args.repo));
    }
    None => {
      if !rt.block_on(client.repo_exists(&args.org, &args.repo)) {
        return Err(GitHubError::RepoNotFound(args.repo).into());
      }
      print_success(&format!("Found repository {}/{}", args.org, args.repo));
    }
  }

  log_rate_limit(&rt, &client);
  Ok(())
}
