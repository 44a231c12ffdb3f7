//src/config.rs
use crate::record::Metric;
use crate::store::SortMode;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use comfy_table::Color;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_CONFIG_DIR: &str = "fit-diary";
const CONFIG_ENV_VAR: &str = "FIT_DIARY_CONFIG_DIR"; // Environment variable name

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine configuration directory.")]
    CannotDetermineConfigDir,
    #[error("I/O error accessing config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file (TOML): {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize config data (TOML): {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Invalid color name: {0}")]
    InvalidColor(String),
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),
}

// Define standard colors using strum for easy iteration/parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum StandardColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkGrey,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    Grey,
}

// Helper to convert our enum to comfy_table::Color
impl From<StandardColor> for Color {
    fn from(value: StandardColor) -> Self {
        match value {
            StandardColor::Black => Self::Black,
            StandardColor::Red => Self::Red,
            StandardColor::Green => Self::Green,
            StandardColor::Yellow => Self::Yellow,
            StandardColor::Blue => Self::Blue,
            StandardColor::Magenta => Self::Magenta,
            StandardColor::Cyan => Self::Cyan,
            StandardColor::White => Self::White,
            StandardColor::DarkGrey => Self::DarkGrey,
            StandardColor::DarkRed => Self::DarkRed,
            StandardColor::DarkGreen => Self::DarkGreen,
            StandardColor::DarkYellow => Self::DarkYellow,
            StandardColor::DarkBlue => Self::DarkBlue,
            StandardColor::DarkMagenta => Self::DarkMagenta,
            StandardColor::DarkCyan => Self::DarkCyan,
            StandardColor::Grey => Self::Grey,
        }
    }
}

/// Parses a colour name case-insensitively.
/// # Errors
/// - `Error::InvalidColor` if the name matches no `StandardColor`.
pub fn parse_color(color_str: &str) -> Result<StandardColor, Error> {
    StandardColor::iter()
        .find(|color| format!("{color:?}").eq_ignore_ascii_case(color_str.trim()))
        .ok_or_else(|| Error::InvalidColor(color_str.to_string()))
}

/// Checks that a chrono format string can render a calendar date.
/// # Errors
/// - `Error::InvalidDateFormat` on an unknown `%` specifier, or one that
///   needs a time of day or an offset (e.g. `%H`, `%z`).
pub fn validate_date_format(format: &str) -> Result<(), Error> {
    let invalid = || Error::InvalidDateFormat(format.to_string());
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::MIN.format(format)).map_err(|_| invalid())?;
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)] // Ensure defaults are used if fields are missing
pub struct Theme {
    pub header_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header_color: "Cyan".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub default_sort: SortMode,
    pub seed_sample_records: bool,
    pub date_format: String,
    pub chart_metric: Metric,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: SortMode::Recent,
            seed_sample_records: true,
            date_format: "%d/%m/%Y".to_string(),
            chart_metric: Metric::Water,
            theme: Theme::default(),
        }
    }
}

/// Determines the configuration directory, creating it if needed.
/// `FIT_DIARY_CONFIG_DIR` takes precedence over the platform config dir.
/// # Errors
/// - `Error::CannotDetermineConfigDir` if the platform has no config dir.
/// - `Error::Io` if the directory cannot be created.
pub fn get_config_dir() -> Result<PathBuf, Error> {
    let config_dir_path = if let Ok(path_str) = std::env::var(CONFIG_ENV_VAR) {
        PathBuf::from(path_str)
    } else {
        let base_config_dir = dirs::config_dir().ok_or(Error::CannotDetermineConfigDir)?;
        base_config_dir.join(APP_CONFIG_DIR)
    };

    if !config_dir_path.is_dir() {
        tracing::debug!(path = %config_dir_path.display(), "creating config directory");
        fs::create_dir_all(&config_dir_path)?;
    }

    Ok(config_dir_path)
}

/// Determines the path to the configuration file.
/// Exposed at crate root as `get_config_path_util`
/// # Errors
/// Same as [`get_config_dir`].
pub fn get_config_path() -> Result<PathBuf, Error> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from the TOML file at the given path.
/// A missing file is created with the defaults. An unusable `date_format`
/// is replaced by the default one (the file is left as is).
/// Exposed at crate root as `load_config_util`
/// # Errors
/// - `Error::Io` if the file cannot be read or created.
/// - `Error::TomlParse` if the file is not valid config TOML.
pub fn load(config_path: &Path) -> Result<Config, Error> {
    if config_path.exists() {
        let config_content = fs::read_to_string(config_path)?;
        let mut config: Config = toml::from_str(&config_content)?;
        if let Err(e) = validate_date_format(&config.date_format) {
            tracing::warn!(error = %e, "falling back to the default date format");
            config.date_format = Config::default().date_format;
        }
        Ok(config)
    } else {
        let default_config = Config::default();
        save(config_path, &default_config)?;
        Ok(default_config)
    }
}

/// Saves the configuration to the TOML file.
/// Exposed at crate root as `save_config_util`
/// # Errors
/// - `Error::TomlSerialize` or `Error::Io` if writing fails.
pub fn save(config_path: &Path, config: &Config) -> Result<(), Error> {
    if let Some(parent_dir) = config_path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            fs::create_dir_all(parent_dir)?;
        }
    }
    let config_content = toml::to_string_pretty(config)?;
    fs::write(config_path, config_content)?;
    Ok(())
}
