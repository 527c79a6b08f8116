use anyhow::Result;
use deckard_core::get_config_dirs;
use deckard_core::output::format_path;
use deckard_core::print_success;

pub(crate) fn handle_init_command() -> Result<()> {
  let config_dirs = get_config_dirs()?;
  config_dirs.init()?;

  print_success("Initialized deckard configuration:");
  println!("  Config: {}", format_path(&config_dirs.config_path().display().to_string()));
  if let Some(cache_dir) = config_dirs.cache_dir() {
    println!("  Cache:  {}", format_path(&cache_dir.display().to_string()));
  }

  Ok(())
}
