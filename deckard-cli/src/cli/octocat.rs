use anyhow::Result;
use clap::Args;

use crate::cli::GitHubOptions;
use crate::clients::create_github_runtime_and_client;

/// Arguments for the octocat command
#[derive(Args)]
pub struct OctocatArgs {
  /// What the octocat should say
  pub message: Vec<String>,
}

pub(crate) fn handle_octocat_command(options: &GitHubOptions, args: OctocatArgs) -> Result<()> {
  let (rt, client) = create_github_runtime_and_client(options)?;

  let art = rt.block_on(client.octocat(&args.message.join(" ")))?;
  println!("{art}");

  Ok(())
}
