use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use deckard_core::output::{format_path, format_url};
use deckard_core::{print_info, print_success};

use crate::cli::GitHubOptions;
use crate::clients::{create_github_runtime_and_client, log_rate_limit};

/// Arguments for the file command
#[derive(Args)]
pub struct FileArgs {
  /// Organization or user owning the repository
  pub org: String,

  /// Repository name
  pub repo: String,

  /// Path of the file inside the repository
  pub path: String,

  /// Write the contents to this file instead of stdout
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,
}

pub(crate) fn handle_file_command(options: &GitHubOptions, args: FileArgs) -> Result<()> {
  let (rt, client) = create_github_runtime_and_client(options)?;

  let (contents, download_url) = rt.block_on(client.get_file(&args.org, &args.repo, &args.path))?;
  log_rate_limit(&rt, &client);

  match &args.output {
    Some(output) => {
      fs::write(output, &contents).with_context(|| format!("Failed to write {}", output.display()))?;
      print_success(&format!(
        "Wrote {} bytes to {}",
        contents.len(),
        format_path(&output.display().to_string())
      ));
      if !download_url.is_empty() {
        print_info(&format!("Download URL: {}", format_url(&download_url)));
      }
    }
    None => {
      let mut stdout = io::stdout().lock();
      stdout.write_all(&contents).context("Failed to write file contents")?;
      stdout.flush()?;
      if !download_url.is_empty() {
        eprintln!("{download_url}");
      }
    }
  }

  Ok(())
}
