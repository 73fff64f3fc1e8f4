mod config;
mod store;

pub use config::{EffectsConfig, EventConfig, EventInfo, StatCounter};
pub use store::{MemoryStore, SqliteStore, StateStore, REGISTERED_KEY, REGISTERED_VALUE};

use std::path::PathBuf;

/// Returns `~/.config/hackdeck[-dev]/` based on HACKDECK_ENV.
///
/// Set HACKDECK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HACKDECK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("hackdeck-dev")
    } else {
        base_dir.join("hackdeck")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
