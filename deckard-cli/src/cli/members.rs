use anyhow::Result;
use clap::Args;

use crate::cli::GitHubOptions;
use crate::clients::{create_github_runtime_and_client, log_rate_limit};

/// Arguments for the members command
#[derive(Args)]
pub struct MembersArgs {
  /// Organization to list
  pub org: String,
}

pub(crate) fn handle_members_command(options: &GitHubOptions, args: MembersArgs) -> Result<()> {
  let (rt, client) = create_github_runtime_and_client(options)?;

  let report = rt.block_on(client.org_members_report(&args.org));
  log_rate_limit(&rt, &client);

  println!("{report}");
  Ok(())
}
