//! # Shell Completion
//!
//! Generates shell completion scripts for deckard commands and arguments.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Generate shell completions for the specified shell
pub fn generate_completions(shell: Shell, out: &mut dyn io::Write) -> Result<()> {
  let mut cmd = Cli::command();
  let app_name = cmd.get_name().to_string();

  generate(shell, &mut cmd, app_name, out);

  Ok(())
}

#[cfg(test)]
mod tests {
  use clap_complete::Shell;

  use super::generate_completions;

  #[test]
  fn test_generate_completions_succeeds() {
    let shells = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell];

    for shell in shells {
      let mut out = Vec::new();
      let result = generate_completions(shell, &mut out);
      assert!(result.is_ok(), "Failed to generate completions for {shell:?}");
      assert!(String::from_utf8_lossy(&out).contains("deckard"));
    }
  }
}
