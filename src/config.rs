// File: ./src/config.rs
// The persisted preferences: theme and the desktop-notification switch.
use crate::context::AppContext;
use crate::storage;
use crate::theme::Theme;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    /// Raise OS notifications in addition to in-app toasts when a task
    /// becomes due soon.
    #[serde(default = "default_true")]
    pub desktop_notifications: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            // Keep in sync with the serde field defaults above.
            desktop_notifications: true,
        }
    }
}

impl Config {
    /// Reads the config file under the given context. A missing file is its
    /// own error kind (see `is_missing_config_error`); anything else comes
    /// back with the offending path in the message.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        // Distinguish "no file yet" from broken files, the first run
        // depends on it.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Could not parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// True when `err` means the config file simply does not exist, as
    /// opposed to being unreadable or malformed.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Writes the config atomically, holding the sidecar lock so a second
    /// instance cannot interleave its own save.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        storage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            storage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    /// The config file path as a display string, for log lines.
    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }
}
