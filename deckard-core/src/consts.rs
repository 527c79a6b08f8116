//! Constants shared across the deckard workspace

/// Environment variable holding a GitHub token
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// `.netrc` machine name for GitHub credentials
pub const GITHUB_MACHINE: &str = "github.com";

/// File name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
