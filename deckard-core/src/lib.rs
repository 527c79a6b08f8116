//! # Deckard Core Library
//!
//! Shared pieces used by the deckard GitHub client and CLI: configuration
//! directories and the `config.toml` file, credential discovery from `.netrc`,
//! and consistently styled terminal output.

pub mod config;
pub mod consts;
pub mod creds;
pub mod output;

pub use config::{ConfigDirs, DeckardConfig, GitHubConfig, get_config_dirs};
pub use creds::Credentials;
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
