use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use filterkit_core::format::{DEFAULT_TRUNCATE_END, DEFAULT_TRUNCATE_LENGTH, MAX_DECIMALS};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "filterkit";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub percentage: PercentageConfig,
    pub truncate: TruncateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PercentageConfig {
    pub decimals: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateConfig {
    pub length: usize,
    pub end: String,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_TRUNCATE_LENGTH,
            end: DEFAULT_TRUNCATE_END.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid percentage.decimals value: {0}")]
    InvalidDecimals(usize),
    #[error("invalid truncate.length value: {0}")]
    InvalidTruncateLength(usize),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    percentage: Option<PercentageFile>,
    truncate: Option<TruncateFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PercentageFile {
    decimals: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TruncateFile {
    length: Option<usize>,
    end: Option<String>,
}

/// Loads the config file, falling back to defaults when the implicit path
/// has no file. An explicit path must exist.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(percentage) = parsed.percentage {
        if let Some(decimals) = percentage.decimals {
            if decimals > MAX_DECIMALS {
                return Err(ConfigError::InvalidDecimals(decimals));
            }
            config.percentage.decimals = Some(decimals);
        }
    }

    if let Some(truncate) = parsed.truncate {
        if let Some(length) = truncate.length {
            if length == 0 {
                return Err(ConfigError::InvalidTruncateLength(length));
            }
            config.truncate.length = length;
        }
        if let Some(end) = truncate.end {
            config.truncate.end = end;
        }
    }

    Ok(config)
}
