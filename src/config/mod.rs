pub mod models;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    AutoFitConfigItem, ConfigItem, FileLoggingConfigItem, GridWindowConfigItem,
};
use crate::core::types::TimeRange;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::grid::time_grid::TimeGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    GridWindow,
    ExportAutoFit,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub grid_window: GridWindowConfigItem,
    #[serde(default)]
    pub export_auto_fit: AutoFitConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

/// (key, description, value) as shown by the `config` command.
pub type ConfigRow = (String, String, String);

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    last_change: Option<ConfigRow>,
}

impl Config {
    /// Missing file means defaults; the file is written on the first change.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = if path.exists() {
            let text = fs::read_to_string(&path)
                .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
            serde_json::from_str(&text).map_err(|e| {
                Error::config(format!("Invalid JSON in '{}': {}", path.display(), e))
            })?
        } else {
            ConfigFile::default()
        };
        TimeGrid::from_window(data.grid_window.get_value())?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn grid_window(&self) -> &TimeRange {
        self.data.grid_window.get_value()
    }

    pub fn export_auto_fit(&self) -> bool {
        self.data.export_auto_fit.get_value().0
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    pub fn rows(&self) -> Vec<ConfigRow> {
        ConfigKey::iter()
            .map(|key| {
                (
                    key.to_string(),
                    self.description_of(key).to_string(),
                    self.value_of(key),
                )
            })
            .collect()
    }

    fn description_of(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::GridWindow => self.data.grid_window.description(),
            ConfigKey::ExportAutoFit => self.data.export_auto_fit.description(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.description(),
        }
    }

    fn value_of(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::GridWindow => self.data.grid_window.get_value().to_string(),
            ConfigKey::ExportAutoFit => self.data.export_auto_fit.get_value().to_string(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.get_value().to_string(),
        }
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.value_of(key);
        match key {
            ConfigKey::GridWindow => self.data.grid_window.set_value(new_value)?,
            ConfigKey::ExportAutoFit => self.data.export_auto_fit.set_value(new_value)?,
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.set_value(new_value)?,
        }
        self.save()?;
        self.last_change = Some((key.to_string(), old, self.value_of(key)));
        Ok(())
    }

    /// (key, old, new) of the last successful change, for the caller to log.
    pub fn take_last_change(&mut self) -> Option<ConfigRow> {
        self.last_change.take()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
