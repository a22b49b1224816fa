use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::store::InvalidEntryPolicy;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigInvalidEntries {
    Fail,
    Skip,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Session storage directory; overrides the `~/.worklog` default.
    #[serde(default)]
    pub(crate) storage_dir: Option<String>,
    /// What to do with unrecognized files in the storage directory.
    #[serde(default)]
    pub(crate) invalid_entries: Option<ConfigInvalidEntries>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    pub(crate) fn invalid_entry_policy(&self) -> InvalidEntryPolicy {
        match self.invalid_entries {
            Some(ConfigInvalidEntries::Skip) => InvalidEntryPolicy::Skip,
            Some(ConfigInvalidEntries::Fail) | None => InvalidEntryPolicy::Fail,
        }
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/worklog/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("worklog").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("worklog").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.worklog.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".worklog.toml"));
        }

        paths
    }
}
