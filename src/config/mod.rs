use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{currency::CurrencySettings, errors::ConfigError};

/// Overrides the directory that holds `config.json`.
pub const HOME_ENV: &str = "BUDGET_TRACKER_HOME";

const CONFIG_FILE: &str = "config.json";
const APP_DIR: &str = "budget_tracker";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    #[serde(default)]
    pub currency: CurrencySettings,
    #[serde(default)]
    pub high_contrast_mode: bool,
    #[serde(default)]
    pub screen_reader_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-GB".into(),
            currency: CurrencySettings::default(),
            high_contrast_mode: false,
            screen_reader_mode: false,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Resolves the base directory from [`HOME_ENV`] or the platform config dir.
    pub fn new() -> Result<Self, ConfigError> {
        let base = match env::var_os(HOME_ENV) {
            Some(home) => PathBuf::from(home),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(ConfigError::NoConfigDir)?,
        };
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let base = base.into();
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the stored configuration, falling back to defaults when absent.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
