//! # Configuration
//!
//! Session settings resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`, `--color`)
//! 2. Environment variables (`STOCKROOM_DB_PATH`, `STOCKROOM_COLOR`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "inventory.db";

/// Command-line flags. The menu itself is always interactive.
#[derive(Parser, Debug, Default)]
#[command(name = "stockroom")]
#[command(about = "Interactive inventory manager backed by SQLite", version)]
pub struct CliArgs {
    /// Database file path [env: STOCKROOM_DB_PATH] [default: inventory.db]
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// When to colour output [env: STOCKROOM_COLOR] [default: auto]
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,
}

/// Colour policy for console output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let `colored` decide from `NO_COLOR` / `CLICOLOR*`
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Applies the policy process-wide.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(ConfigError::InvalidValue("STOCKROOM_COLOR".to_string())),
        }
    }
}

/// Resolved session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite file holding the `products` table.
    pub database_path: PathBuf,

    /// Colour policy.
    pub color: ColorMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            color: ColorMode::Auto,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment, then applies flags.
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        Self::from_sources(|key| env::var(key).ok(), args)
    }

    fn from_sources(
        lookup: impl Fn(&str) -> Option<String>,
        args: &CliArgs,
    ) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("STOCKROOM_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(color) = lookup("STOCKROOM_COLOR") {
            config.color = color.parse()?;
        }

        if let Some(path) = &args.db {
            config.database_path = path.clone();
        }

        if let Some(color) = args.color {
            config.color = color;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_sources(lookup_from(&[]), &CliArgs::default()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.database_path, PathBuf::from("inventory.db"));
    }

    #[test]
    fn test_env_overrides_defaults() {
        let lookup = lookup_from(&[
            ("STOCKROOM_DB_PATH", "/var/lib/stock.db"),
            ("STOCKROOM_COLOR", "Never"),
        ]);
        let config = AppConfig::from_sources(lookup, &CliArgs::default()).unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/lib/stock.db"));
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_flags_override_env() {
        let lookup = lookup_from(&[
            ("STOCKROOM_DB_PATH", "/var/lib/stock.db"),
            ("STOCKROOM_COLOR", "never"),
        ]);
        let args = CliArgs {
            db: Some(PathBuf::from("local.db")),
            color: Some(ColorMode::Always),
        };
        let config = AppConfig::from_sources(lookup, &args).unwrap();

        assert_eq!(config.database_path, PathBuf::from("local.db"));
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_blank_db_path_env_is_ignored() {
        let lookup = lookup_from(&[("STOCKROOM_DB_PATH", "  ")]);
        let config = AppConfig::from_sources(lookup, &CliArgs::default()).unwrap();
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn test_invalid_color_env() {
        let lookup = lookup_from(&[("STOCKROOM_COLOR", "sometimes")]);
        let err = AppConfig::from_sources(lookup, &CliArgs::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOCKROOM_COLOR");
    }

    #[test]
    fn test_args_parse() {
        let args = CliArgs::try_parse_from(["stockroom", "--db", "x.db", "--color", "never"]).unwrap();
        assert_eq!(args.db, Some(PathBuf::from("x.db")));
        assert_eq!(args.color, Some(ColorMode::Never));

        assert!(CliArgs::try_parse_from(["stockroom", "list"]).is_err());
    }
}
