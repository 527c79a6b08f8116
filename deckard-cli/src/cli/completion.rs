use std::io;

use anyhow::Result;
use clap::Args;
use clap_complete::Shell;

use crate::completion::generate_completions;

/// Arguments for the completion command
#[derive(Args)]
pub struct CompletionArgs {
  /// Shell to generate completions for
  #[arg(value_enum)]
  pub shell: Shell,
}

pub(crate) fn handle_completion_command(args: CompletionArgs) -> Result<()> {
  generate_completions(args.shell, &mut io::stdout())
}
