use anyhow::Result;
use chrono::{DateTime, Local};
use deckard_core::output::{format_quota, print_header};
use deckard_gh::Rate;

use crate::cli::GitHubOptions;
use crate::clients::create_github_runtime_and_client;

fn format_reset(reset: u64) -> String {
  i64::try_from(reset)
    .ok()
    .and_then(|secs| DateTime::from_timestamp(secs, 0))
    .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
    .unwrap_or_else(|| reset.to_string())
}

fn format_rate_line(name: &str, rate: &Rate) -> String {
  format!(
    "  {:<8} {} remaining, resets at {}",
    name,
    format_quota(rate.remaining, rate.limit),
    format_reset(rate.reset)
  )
}

pub(crate) fn handle_rate_limit_command(options: &GitHubOptions) -> Result<()> {
  let (rt, client) = create_github_runtime_and_client(options)?;

  let limits = rt.block_on(client.get_rate_limit())?;

  let mode = if client.is_authenticated() {
    "authenticated"
  } else {
    "anonymous"
  };
  print_header(&format!("GitHub API rate limit ({mode})"));
  println!("{}", format_rate_line("core", &limits.resources.core));
  println!("{}", format_rate_line("search", &limits.resources.search));
  if let Some(graphql) = &limits.resources.graphql {
    println!("{}", format_rate_line("graphql", graphql));
  }

  Ok(())
}
