use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_ARCHIVE_EXTENSIONS, FR_PERSISTENT, FR_PRIVATE, WORK_DIR_NAME};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub install: InstallSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct InstallSettings {
    pub work_dir: Option<PathBuf>,
    pub archive_extensions: Vec<String>,
    pub scope: InstallScope,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InstallScope {
    /// Registered for every process; survives a reboot via the font registry.
    #[default]
    Persistent,
    /// Registered for the installing process only.
    Private,
}

impl InstallScope {
    pub fn registration_flags(self) -> u32 {
        match self {
            InstallScope::Persistent => FR_PERSISTENT,
            InstallScope::Private => FR_PRIVATE,
        }
    }
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            work_dir: None,
            archive_extensions: DEFAULT_ARCHIVE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            scope: InstallScope::default(),
        }
    }
}

impl InstallSettings {
    /// Root under which each archive gets its own extraction directory.
    pub fn work_root(&self) -> PathBuf {
        self.work_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(WORK_DIR_NAME))
    }
}

impl Config {
    pub fn load() -> Self {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    pub fn load_from(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Config::default();
        }

        let content = match fs::read_to_string(config_path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to read config file: {}", e);
                return Config::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Config::default()
            }
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("font-installer").join("config.toml"))
}
