use anyhow::Result;
use clap::Args;
use deckard_core::output::{format_sha, format_url, print_info};

use crate::cli::GitHubOptions;
use crate::clients::{create_github_runtime_and_client, log_rate_limit};

/// Arguments for the archive command
#[derive(Args)]
pub struct ArchiveArgs {
  /// Organization or user owning the repository
  pub org: String,

  /// Repository name
  pub repo: String,

  /// Branch to archive
  pub branch: String,

  /// Print the result as JSON
  #[arg(long)]
  pub json: bool,
}

pub(crate) fn handle_archive_command(options: &GitHubOptions, args: ArchiveArgs) -> Result<()> {
  let (rt, client) = create_github_runtime_and_client(options)?;

  let archive = rt.block_on(client.get_archive(&args.org, &args.repo, &args.branch))?;
  log_rate_limit(&rt, &client);

  if args.json {
    let value = serde_json::json!({
      "url": archive.url.as_str(),
      "commit": archive.commit_sha,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
  } else {
    print_info(&format!("Archive: {}", format_url(archive.url.as_str())));
    print_info(&format!("Commit:  {}", format_sha(&archive.commit_sha)));
  }

  Ok(())
}
