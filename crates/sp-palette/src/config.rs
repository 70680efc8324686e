//! TOML configuration for the palette and logging.
//!
//! Every field is optional. An empty file, or no file at all, gives the stock
//! eight-color palette stepped every 2% from 0% to 100%.
//!
//! ```toml
//! [palette]
//! step = 5
//! max_percent = 100
//!
//! [[palette.base_colors]]
//! name = "Teal"
//! hex = "#008080"
//!
//! [logging]
//! level = "debug"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{LevelFilter, debug, info};
use serde::{Deserialize, Serialize};
use sp_color::{Color, FormatError};
use thiserror::Error;

use crate::palette::{BaseColor, default_base_colors};

/// Default distance between percentage rows.
pub const DEFAULT_STEP: u32 = 2;

/// Default last percentage row.
pub const DEFAULT_MAX_PERCENT: u32 = 100;

/// Most percentage rows a panel may have.
pub const MAX_ROWS: u64 = 10_000;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that can go wrong loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    ParseText(#[source] toml::de::Error),

    #[error("palette step must be greater than zero")]
    ZeroStep,

    #[error("palette would have {rows} rows per panel, at most {max} allowed")]
    TooManyRows { rows: u64, max: u64 },

    #[error("unknown log level '{0}'")]
    LogLevel(String),

    #[error("base color '{name}': {source}")]
    BaseColor {
        name: String,
        #[source]
        source: FormatError,
    },
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// One `[[palette.base_colors]]` entry as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseColorEntry {
    pub name: String,
    pub hex: String,
}

/// The `[palette]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub step: u32,
    pub max_percent: u32,
    /// `None` means the stock palette.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_colors: Option<Vec<BaseColorEntry>>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            max_percent: DEFAULT_MAX_PERCENT,
            base_colors: None,
        }
    }
}

impl PaletteConfig {
    /// The base palette this section describes, parsed.
    ///
    /// # Errors
    ///
    /// [`ConfigError::BaseColor`] naming the first entry that is not a valid
    /// color.
    pub fn base_colors(&self) -> Result<Vec<BaseColor>, ConfigError> {
        let Some(entries) = &self.base_colors else {
            return Ok(default_base_colors());
        };

        entries
            .iter()
            .map(|entry| {
                Color::parse(&entry.hex)
                    .map(|color| BaseColor::new(entry.name.clone(), color))
                    .map_err(|source| ConfigError::BaseColor {
                        name: entry.name.clone(),
                        source,
                    })
            })
            .collect()
    }

    /// Number of percentage rows per panel: `0, step, …, max_percent`.
    #[must_use]
    pub fn row_count(&self) -> u64 {
        u64::from(self.max_percent) / u64::from(self.step.max(1)) + 1
    }

    /// Check the section without building anything.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroStep`], [`ConfigError::TooManyRows`] or
    /// [`ConfigError::BaseColor`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        let rows = self.row_count();
        if rows > MAX_ROWS {
            return Err(ConfigError::TooManyRows {
                rows,
                max: MAX_ROWS,
            });
        }
        self.base_colors().map(|_| ())
    }
}

/// The `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`. Used only when neither
    /// `--log-level` nor `RUST_LOG` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl LoggingConfig {
    /// The configured level, parsed. `None` when unset.
    ///
    /// # Errors
    ///
    /// [`ConfigError::LogLevel`] if `level` is not a level name.
    pub fn level_filter(&self) -> Result<Option<LevelFilter>, ConfigError> {
        self.level
            .as_deref()
            .map(|level| {
                level
                    .parse::<LevelFilter>()
                    .map_err(|_| ConfigError::LogLevel(level.to_owned()))
            })
            .transpose()
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] / [`ConfigError::Parse`] carrying `path`, or a
    /// validation error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ParseText`] or a validation error.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::ParseText)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// See [`PaletteConfig::validate`] and [`LoggingConfig::level_filter`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.palette.validate()?;
        self.logging.level_filter().map(|_| ())
    }

    /// Load `path` if given, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
