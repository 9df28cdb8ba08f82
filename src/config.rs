//! Configuration module for the academic planner

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the planner's config directory
const DIR_VARIABLE: &str = "$ACADPLAN";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Reference data (catalog, requirements, profile) TOML file; empty uses the built-in sample
    #[serde(default)]
    pub seed_file: String,
    /// Directory for rendered progress reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Planning grid configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// First fall of the planning grid; `0` means the current calendar year
    #[serde(default)]
    pub start_year: i32,
    /// Number of academic years shown in the planning grid
    #[serde(default)]
    pub horizon_years: u32,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Planning grid settings
    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override reference data file
    pub seed_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override first planning year
    pub start_year: Option<i32>,
}

impl Config {
    /// Get the `$ACADPLAN` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/acadplan`
    /// - macOS: `~/Library/Application Support/acadplan`
    /// - Windows: `%APPDATA%\acadplan`
    #[must_use]
    pub fn get_acadplan_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("acadplan")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty (or zero) here and set in `defaults` are
    /// filled in, so upgrading picks up new settings without touching the
    /// user's own values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.seed_file.is_empty() && !defaults.paths.seed_file.is_empty() {
            self.paths.seed_file.clone_from(&defaults.paths.seed_file);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        if self.planner.horizon_years == 0 && defaults.planner.horizon_years != 0 {
            self.planner.horizon_years = defaults.planner.horizon_years;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only live for the current run; the config file is untouched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(seed_file) = &overrides.seed_file {
            self.paths.seed_file.clone_from(seed_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(start_year) = overrides.start_year {
            self.planner.start_year = start_year;
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_acadplan_dir`](Self::get_acadplan_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_acadplan_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$ACADPLAN` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_acadplan_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults; `$ACADPLAN` is expanded in
    /// every path-like value.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.seed_file = Self::expand_variables(&config.paths.seed_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration cannot be parsed.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `path`
    ///
    /// - File exists: parse it, merge newly added default fields, and save back if anything was merged
    /// - File missing: write the defaults there and return them
    ///
    /// Falls back to defaults if the file exists but cannot be read or parsed.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let defaults = Self::from_defaults();

        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save_to(path);
                    }
                    return config;
                }
            }
            crate::warn!(
                "Ignoring unreadable config at {}; using defaults",
                path.display()
            );
        } else {
            let _ = defaults.save_to(path);
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration as pretty TOML to `path`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `seed_file`, `reports_dir`,
    /// `start_year`, `horizon_years` (hyphenated spellings are accepted too).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "seed_file" | "seed-file" => Some(self.paths.seed_file.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "start_year" | "start-year" => Some(self.planner.start_year.to_string()),
            "horizon_years" | "horizon-years" => Some(self.planner.horizon_years.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Only updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "seed_file" | "seed-file" => self.paths.seed_file = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "start_year" | "start-year" => {
                self.planner.start_year = value
                    .parse::<i32>()
                    .map_err(|_| format!("Invalid year for 'start_year': '{value}'"))?;
            }
            "horizon_years" | "horizon-years" => {
                let years = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid count for 'horizon_years': '{value}'"))?;
                if years == 0 {
                    return Err("'horizon_years' must be at least 1".to_string());
                }
                self.planner.horizon_years = years;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "seed_file" | "seed-file" => {
                self.paths.seed_file.clone_from(&defaults.paths.seed_file);
            }
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "start_year" | "start-year" => self.planner.start_year = defaults.planner.start_year,
            "horizon_years" | "horizon-years" => {
                self.planner.horizon_years = defaults.planner.horizon_years;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it from defaults.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// First fall of the planning grid, resolving `0` to the current year
    #[must_use]
    pub fn resolved_start_year(&self) -> i32 {
        if self.planner.start_year == 0 {
            chrono::Local::now().year()
        } else {
            self.planner.start_year
        }
    }

    /// Planning horizon in academic years (never less than one)
    #[must_use]
    pub fn horizon_years(&self) -> u32 {
        self.planner.horizon_years.max(1)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  seed_file = \"{}\"", self.paths.seed_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[planner]")?;
        writeln!(f, "  start_year = {}", self.planner.start_year)?;
        writeln!(f, "  horizon_years = {}", self.planner.horizon_years)?;

        Ok(())
    }
}
