use anyhow::{Result, bail};
use clap::Args;

use crate::cli::GitHubOptions;
use crate::clients::{create_github_runtime_and_client, log_rate_limit};

/// Arguments for the issue command
#[derive(Args)]
pub struct IssueArgs {
  /// Organization owning the repository
  pub org: String,

  /// Repository name
  pub repo: String,

  /// Issue title; multiple words are joined with spaces
  #[arg(required = true, num_args = 1..)]
  pub title: Vec<String>,
}

impl IssueArgs {
  /// The issue title as a single string
  pub fn title(&self) -> String {
    self.title.join(" ")
  }
}

pub(crate) fn handle_issue_command(options: &GitHubOptions, args: IssueArgs) -> Result<()> {
  let title = args.title();
  if title.trim().is_empty() {
    bail!("Issue title cannot be empty");
  }

  let (rt, client) = create_github_runtime_and_client(options)?;

  let report = rt.block_on(client.create_issue_report(&args.org, &args.repo, &title));
  log_rate_limit(&rt, &client);

  println!("{report}");
  Ok(())
}
