//! Panel settings file.
//!
//! Settings live in a TOML file; a missing file means defaults, a malformed
//! one is an error.
//!
//! ```toml
//! formats = ["HH:mm:ss", "HH:mm"]
//! locale = "en_GB"
//! fixed_now = "2024-03-05T08:00:00"
//!
//! [columns]
//! show_second = false
//! use_12_hours = true
//! ```

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tp_engine::{ChronoEngine, Locale};
use tp_panel::{ColumnConfig, DEFAULT_FORMAT, TimePanelConfig};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown locale '{name}' (built-in locales: {known})")]
    UnknownLocale { name: String, known: String },

    #[error("invalid date/time value '{0}' (expected YYYY-MM-DD[THH:MM[:SS]])")]
    InvalidValue(String),
}

/// Settings for one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Format list; the first entry is the header pattern.
    pub formats: Vec<String>,
    /// Built-in locale code.
    pub locale: String,
    /// Full locale table, used instead of `locale` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_locale: Option<Locale>,
    pub columns: ColumnConfig,
    /// Pin the engine clock, for reproducible runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_now: Option<String>,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            formats: vec![DEFAULT_FORMAT.to_string()],
            locale: "en_US".to_string(),
            custom_locale: None,
            columns: ColumnConfig::default(),
            fixed_now: None,
        }
    }
}

impl PanelSettings {
    /// Load settings from `path`, falling back to defaults if it does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&content).map_err(|source| SettingsError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Default settings path in the platform config directory.
    #[must_use]
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "timepanel", "timepanel")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("timepanel.toml"))
    }

    /// The locale these settings select.
    ///
    /// # Errors
    ///
    /// Returns an error if `locale` names no built-in locale and no custom
    /// table is given.
    pub fn resolve_locale(&self) -> Result<Locale, SettingsError> {
        if let Some(custom) = &self.custom_locale {
            return Ok(custom.clone());
        }
        resolve_builtin_locale(&self.locale)
    }

    /// Header pattern: the first configured format.
    #[must_use]
    pub fn header_format(&self) -> &str {
        self.formats.first().map_or(DEFAULT_FORMAT, String::as_str)
    }

    /// Panel configuration built from these settings.
    ///
    /// # Errors
    ///
    /// Fails when the locale cannot be resolved.
    pub fn panel_config(&self) -> Result<TimePanelConfig, SettingsError> {
        Ok(TimePanelConfig {
            columns: self.columns,
            format: self.header_format().to_string(),
            locale: self.resolve_locale()?,
        })
    }

    /// Engine honoring `fixed_now`.
    ///
    /// # Errors
    ///
    /// Fails when `fixed_now` is not a valid date/time.
    pub fn engine(&self) -> Result<ChronoEngine, SettingsError> {
        match &self.fixed_now {
            Some(now) => Ok(ChronoEngine::with_fixed_now(parse_value(now)?)),
            None => Ok(ChronoEngine::new()),
        }
    }
}

/// Look up a built-in locale by code.
///
/// # Errors
///
/// Returns [`SettingsError::UnknownLocale`] listing the known codes.
pub fn resolve_builtin_locale(name: &str) -> Result<Locale, SettingsError> {
    Locale::builtin(name).ok_or_else(|| SettingsError::UnknownLocale {
        name: name.to_string(),
        known: Locale::builtin_names().join(", "),
    })
}

/// Parse a date/time argument.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, the same without
/// seconds, or a bare date (midnight).
///
/// # Errors
///
/// Returns [`SettingsError::InvalidValue`] if no form matches.
pub fn parse_value(value: &str) -> Result<NaiveDateTime, SettingsError> {
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    let trimmed = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| SettingsError::InvalidValue(value.to_string()))
}
