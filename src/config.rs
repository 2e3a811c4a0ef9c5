//! Configuration management for Lessonist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_LESSON_MINUTES, FIRST_SELECTABLE_YEAR, FIRST_YEAR_MAX, FIRST_YEAR_MIN,
    YEAR_WINDOW_AHEAD, YEAR_WINDOW_MAX,
};
use crate::utils::date;
use crate::utils::duration::DURATION_OPTIONS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub scheduling: SchedulingConfig,
    pub logging: LoggingConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for lesson dates and accounting periods
    pub date_format: String,
    /// Time format for lesson start/finish times
    pub time_format: String,
}

/// Scheduling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    /// First year offered in year selection controls
    pub first_selectable_year: i32,
    /// Years offered beyond the current one
    pub year_window_ahead: i32,
    /// Default lesson length in minutes; must match a duration option
    pub default_lesson_minutes: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: date::DATE_FORMAT.to_string(),
            time_format: date::TIME_FORMAT.to_string(),
        }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            first_selectable_year: FIRST_SELECTABLE_YEAR,
            year_window_ahead: YEAR_WINDOW_AHEAD,
            default_lesson_minutes: DEFAULT_LESSON_MINUTES,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("lessonist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("lessonist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate scheduling settings
        let first_year = self.scheduling.first_selectable_year;
        if !(FIRST_YEAR_MIN..=FIRST_YEAR_MAX).contains(&first_year) {
            anyhow::bail!(
                "first_selectable_year must be between {} and {}, got {}",
                FIRST_YEAR_MIN,
                FIRST_YEAR_MAX,
                first_year
            );
        }

        if self.scheduling.year_window_ahead < 1 || self.scheduling.year_window_ahead > YEAR_WINDOW_MAX {
            anyhow::bail!(
                "year_window_ahead must be between 1 and {}, got {}",
                YEAR_WINDOW_MAX,
                self.scheduling.year_window_ahead
            );
        }

        let default_minutes = self.scheduling.default_lesson_minutes;
        if !DURATION_OPTIONS.iter().any(|option| option.total_minutes() == default_minutes) {
            anyhow::bail!(
                "default_lesson_minutes {} does not match any duration option",
                default_minutes
            );
        }

        // Validate date/time formats
        if let Err(e) = chrono::NaiveDate::parse_from_str("2025-01-01", &self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}': {}", self.display.date_format, e);
        }

        if let Err(e) = chrono::NaiveTime::parse_from_str("12:00", &self.display.time_format) {
            anyhow::bail!("Invalid time_format '{}': {}", self.display.time_format, e);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Lessonist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(date::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("lessonist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
