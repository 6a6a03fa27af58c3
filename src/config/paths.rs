use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable that points at an alternative settings file
pub const CONFIG_ENV: &str = "PETNAME_CONFIG";

/// Returns the user config directory (~/.config/petname/)
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .context(
            "Could not determine home directory. Please ensure HOME environment variable is set.",
        )
        .map(|p| p.join(".config").join("petname"))
}

/// Returns the user config file path ($PETNAME_CONFIG or ~/.config/petname/config.json)
pub fn user_config_file() -> Result<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(user_config_dir()?.join("config.json")),
    }
}
