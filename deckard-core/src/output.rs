//! # Output Formatting
//!
//! Colored, emoji-prefixed status lines and a few value formatters so every
//! deckard command renders GitHub data the same way.

use owo_colors::OwoColorize;

/// When to color terminal output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Always color, even when piped
  #[value(alias = "yes")]
  Always,
  /// Color only when writing to a terminal
  Auto,
  /// Never color
  #[value(alias = "no")]
  Never,
}

impl ColorMode {
  /// Apply this mode as the process-wide color override
  pub fn apply(self) {
    match self {
      Self::Always => owo_colors::set_override(true),
      Self::Never => owo_colors::set_override(false),
      Self::Auto => owo_colors::unset_override(),
    }
  }
}

/// Kinds of status line, each with its own marker
#[derive(Debug, Clone, Copy)]
enum Status {
  Success,
  Error,
  Warning,
  Info,
}

impl Status {
  fn marker(self) -> String {
    let (shortcode, fallback) = match self {
      Self::Success => ("check_mark", "✓"),
      Self::Error => ("cross_mark", "✗"),
      Self::Warning => ("warning", "⚠"),
      Self::Info => ("information", "ℹ"),
    };
    let marker = get_emoji_or_default(shortcode, fallback);

    match self {
      Self::Success => marker.green().bold().to_string(),
      Self::Error => marker.red().bold().to_string(),
      Self::Warning => marker.yellow().bold().to_string(),
      Self::Info => marker.blue().bold().to_string(),
    }
  }

  fn line(self, message: &str) -> String {
    format!("{} {message}", self.marker())
  }
}

/// Look up an emoji by shortcode, falling back to plain text
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  emojis::get_by_shortcode(name).map_or_else(|| default.to_string(), ToString::to_string)
}

pub fn print_success(message: &str) {
  println!("{}", Status::Success.line(message));
}

/// Errors go to stderr so piped output stays clean
pub fn print_error(message: &str) {
  eprintln!("{}", Status::Error.line(message));
}

pub fn print_warning(message: &str) {
  println!("{}", Status::Warning.line(message));
}

pub fn print_info(message: &str) {
  println!("{}", Status::Info.line(message));
}

pub fn print_header(header: &str) {
  println!("\n{}", header.blue().bold());
}

pub fn format_url(url: &str) -> String {
  url.bright_cyan().underline().to_string()
}

pub fn format_sha(sha: &str) -> String {
  sha.yellow().to_string()
}

pub fn format_path(path: &str) -> String {
  path.bright_green().to_string()
}

/// Format a remaining/limit pair, turning red when under a tenth is left
pub fn format_quota(remaining: u32, limit: u32) -> String {
  let text = format!("{remaining}/{limit}");
  if limit > 0 && remaining.saturating_mul(10) < limit {
    text.red().bold().to_string()
  } else {
    text.green().to_string()
  }
}
