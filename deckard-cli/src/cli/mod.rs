//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the deckard tool.

mod archive;
mod check;
mod completion;
mod file;
mod init;
mod issue;
mod members;
mod octocat;
mod rate_limit;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Args, Parser, Subcommand};
use deckard_core::ColorMode;

/// Options shared by every command that talks to GitHub
#[derive(Args, Debug, Clone, Default)]
pub struct GitHubOptions {
  /// GitHub token (overrides the config file and .netrc)
  #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
  pub token: Option<String>,

  /// GitHub API root, e.g. https://ghe.example.com/api/v3
  #[arg(long, global = true, value_name = "URL")]
  pub api_url: Option<String>,
}

/// Top-level CLI command for the deckard tool
#[derive(Parser)]
#[command(name = "deckard")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Chat-friendly GitHub helpers")]
#[command(
  long_about = "Deckard wraps a handful of GitHub REST calls behind short commands.\n\n\
        It can read files from repositories, verify repositories and branches,\n\
        hand out archive links, list organization members and open issues.\n\
        A token is taken from --token, GITHUB_TOKEN, the config file or .netrc,\n\
        in that order; without one, only public resources are reachable."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages (including the API rate limit)\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    global = true,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  #[command(flatten)]
  pub github: GitHubOptions,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the deckard tool
#[derive(Subcommand)]
pub enum Commands {
  /// Get a download link for a branch archive
  #[command(long_about = "Verify the repository and branch, then print a tarball link\n\
            for the branch together with the SHA of its head commit.")]
  #[command(alias = "tar")]
  Archive(archive::ArchiveArgs),

  /// Check that a repository (and optionally a branch) exists
  #[command(long_about = "Check that a repository exists in an organization and is visible\n\
            with the current credentials. With --branch, also check the branch.")]
  Check(check::CheckArgs),

  /// Generate shell completions
  Completion(completion::CompletionArgs),

  /// Print the contents of a file in a repository
  #[command(long_about = "Fetch a file from a repository's default branch.\n\n\
            The contents go to stdout (or --output) and the download URL to stderr,\n\
            so the output can be piped safely.")]
  #[command(alias = "cat")]
  File(file::FileArgs),

  /// Create the configuration directory and file
  Init,

  /// Open an issue in a repository
  #[command(long_about = "Open an issue in a repository and print a chat-ready report.\n\n\
            The repository is checked first; failures are reported in the output\n\
            rather than as an error.")]
  Issue(issue::IssueArgs),

  /// List the GitHub usernames of an organization's members
  #[command(alias = "users")]
  Members(members::MembersArgs),

  /// Draw the octocat
  Octocat(octocat::OctocatArgs),

  /// Show the current API rate limit
  #[command(alias = "rl")]
  RateLimit,
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  match cli.command {
    Commands::Archive(args) => archive::handle_archive_command(&cli.github, args),
    Commands::Check(args) => check::handle_check_command(&cli.github, args),
    Commands::Completion(args) => completion::handle_completion_command(args),
    Commands::File(args) => file::handle_file_command(&cli.github, args),
    Commands::Init => init::handle_init_command(),
    Commands::Issue(args) => issue::handle_issue_command(&cli.github, args),
    Commands::Members(args) => members::handle_members_command(&cli.github, args),
    Commands::Octocat(args) => octocat::handle_octocat_command(&cli.github, args),
    Commands::RateLimit => rate_limit::handle_rate_limit_command(&cli.github),
  }
}
