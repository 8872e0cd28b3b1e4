//! Mod configuration (`config/config.json`)

use std::fs;
use std::path::{Path, PathBuf};

use global_hotkey::hotkey::Code;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::keybinds::{parse_keys, string_to_code, DEFAULT_CANCEL_KEYS};

/// Errors raised while loading or validating the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Configured cancel keys, resolved to key codes when the config is parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CancelKeys {
    names: Vec<String>,
    codes: Vec<Code>,
}

impl CancelKeys {
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for CancelKeys {
    fn default() -> Self {
        Self {
            names: DEFAULT_CANCEL_KEYS.iter().map(|k| k.to_string()).collect(),
            codes: DEFAULT_CANCEL_KEYS
                .iter()
                .filter_map(|k| string_to_code(k))
                .collect(),
        }
    }
}

impl TryFrom<Vec<String>> for CancelKeys {
    type Error = String;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        let codes = parse_keys(&names)
            .map_err(|invalid| format!("unknown cancel keys: {}", invalid.join(", ")))?;
        Ok(Self { names, codes })
    }
}

impl From<CancelKeys> for Vec<String> {
    fn from(keys: CancelKeys) -> Self {
        keys.names
    }
}

/// Tunables read once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModConfig {
    /// Max out cast power and skip the wait for a bite
    pub fast_bite: bool,
    /// 1-based inventory slot holding food, 0 disables auto-eating
    pub food_index: u32,
    /// 1-based inventory slot the rod is re-equipped from
    pub rod_index: u32,
    pub start_fishing_time: u32,
    pub end_fishing_time: u32,
    pub stamina_to_eat: f32,
    pub cancel_keys: CancelKeys,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            fast_bite: false,
            food_index: 0,
            rod_index: 3,
            start_fishing_time: 600,
            end_fishing_time: 2200,
            stamina_to_eat: 30.0,
            cancel_keys: CancelKeys::default(),
        }
    }
}

impl ModConfig {
    /// Load the config file, writing the defaults when it does not exist yet
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = ModConfig::default();
            config.save(path)?;
            tracing::info!("[CONFIG] Created default config at {:?}", path);
            return Ok(config);
        }
        Self::load(path)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::debug!("[CONFIG] Loaded {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Parse and validate config JSON
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: ModConfig =
            serde_json::from_str(content).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_fishing_time >= self.end_fishing_time {
            return Err(ConfigError::Invalid(format!(
                "StartFishingTime ({}) must be before EndFishingTime ({})",
                self.start_fishing_time, self.end_fishing_time
            )));
        }
        if self.rod_index == 0 {
            return Err(ConfigError::Invalid("RodIndex is 1-based and cannot be 0".into()));
        }
        Ok(())
    }

    /// Zero-based food slot, `None` when auto-eating is disabled
    pub fn food_slot(&self) -> Option<usize> {
        self.food_index.checked_sub(1).map(|i| i as usize)
    }

    /// Zero-based rod slot
    pub fn rod_slot(&self) -> usize {
        self.rod_index.saturating_sub(1) as usize
    }

    /// Whether the clock is inside the fishing-hours window
    pub fn within_fishing_hours(&self, time_of_day: u32) -> bool {
        let before_start = time_of_day <= 200 || time_of_day < self.start_fishing_time;
        let after_end = time_of_day >= self.end_fishing_time;
        !before_start && !after_end
    }
}
