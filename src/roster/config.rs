use crate::codec::Format;
use crate::error::{Result, RosterError};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for roster, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Data file, relative paths resolve against the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// On-disk format of the data file
    #[serde(default)]
    pub format: Format,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            format: Format::default(),
        }
    }
}

impl RosterConfig {
    pub const KEYS: [&'static str; 2] = ["data-file", "format"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            "format" => Some(self.format.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err(RosterError::Config("data-file cannot be empty".to_string()));
                }
                self.data_file = PathBuf::from(value);
            }
            "format" => self.format = value.parse()?,
            other => return Err(RosterError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
