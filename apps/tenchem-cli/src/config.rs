//! # App Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TENCHEM_OUTPUT_DIR=./out                                           │
//! │     TENCHEM_COMPANY_NAME / _PHONE / _EMAIL                             │
//! │     TENCHEM_VALIDITY_DAYS=15                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else the platform config dir:                     │
//! │     ~/.config/tenchem/tenchem.toml (Linux)                             │
//! │     ~/Library/Application Support/in.tenchem.tenchem/tenchem.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     TenChem India company details, 15 mm margin, 7 day validity        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [company]
//! name = "TenChem India"
//! address = "At. Surendranagar, Gujarat, INDIA"
//! phone = "+91-95587 35135"
//! email = "tenchemindia@gmail.com"
//!
//! [render]
//! margin = 15.0
//! validity_days = 7
//! page_break_gap = 5.0
//! file_prefix = "TenChem"
//! jurisdiction = "Surendranagar"
//!
//! [output]
//! directory = "."
//! catalog_csv = "products.csv"   # optional
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tenchem_core::CompanyInfo;
use tenchem_render::RenderSettings;
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "tenchem.toml";

/// Longest validity period a quote may promise.
const MAX_VALIDITY_DAYS: u32 = 365;

// =============================================================================
// Output Settings
// =============================================================================

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Where generated PDFs are written.
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,

    /// Catalog CSV used when `--catalog` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_csv: Option<PathBuf>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            directory: default_output_dir(),
            catalog_csv: None,
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub company: CompanyInfo,

    #[serde(default)]
    pub render: RenderSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`tenchem.toml`)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// default file is not.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.company.name.trim().is_empty() {
            return Err(ConfigError::Invalid("company.name must not be empty".into()));
        }

        let render = &self.render;
        if !render.margin.is_finite() || render.margin < 0.0 || render.margin > 40.0 {
            return Err(ConfigError::Invalid(format!(
                "render.margin must be between 0 and 40 mm, got {}",
                render.margin
            )));
        }
        if !render.page_break_gap.is_finite() || render.page_break_gap < 0.0 {
            return Err(ConfigError::Invalid(
                "render.page_break_gap must not be negative".into(),
            ));
        }
        if render.validity_days > MAX_VALIDITY_DAYS {
            return Err(ConfigError::Invalid(format!(
                "render.validity_days must be at most {MAX_VALIDITY_DAYS}"
            )));
        }
        if render.file_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "render.file_prefix must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides read through `var`.
    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = var("TENCHEM_OUTPUT_DIR") {
            debug!(dir = %dir, "Overriding output directory from environment");
            self.output.directory = PathBuf::from(dir);
        }

        if let Some(name) = var("TENCHEM_COMPANY_NAME") {
            self.company.name = name;
        }

        if let Some(phone) = var("TENCHEM_COMPANY_PHONE") {
            self.company.phone = phone;
        }

        if let Some(email) = var("TENCHEM_COMPANY_EMAIL") {
            self.company.email = email;
        }

        if let Some(days) = var("TENCHEM_VALIDITY_DAYS") {
            match days.parse::<u32>() {
                Ok(d) => {
                    debug!(days = d, "Overriding validity days from environment");
                    self.render.validity_days = d;
                }
                Err(_) => warn!(value = %days, "Ignoring non-numeric TENCHEM_VALIDITY_DAYS"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("in", "tenchem", "tenchem")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.company.name, "TenChem India");
        assert_eq!(config.render.validity_days, 7);
        assert_eq!(config.output.directory, PathBuf::from("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [company]
            name = "Acme Chemicals"

            [render]
            validity_days = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.company.name, "Acme Chemicals");
        assert_eq!(config.company.phone, "+91-95587 35135");
        assert_eq!(config.render.validity_days, 15);
        assert_eq!(config.render.margin, 15.0);
        assert_eq!(config.render.file_prefix, "TenChem");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("TENCHEM_OUTPUT_DIR", "/tmp/quotes"),
            ("TENCHEM_COMPANY_NAME", "Acme"),
            ("TENCHEM_VALIDITY_DAYS", "30"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.output.directory, PathBuf::from("/tmp/quotes"));
        assert_eq!(config.company.name, "Acme");
        assert_eq!(config.render.validity_days, 30);
    }

    #[test]
    fn test_bad_validity_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| {
            (key == "TENCHEM_VALIDITY_DAYS").then(|| "soon".to_string())
        });
        assert_eq!(config.render.validity_days, 7);
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        config.render.margin = -1.0;
        assert!(config.validate().is_err());

        config.render.margin = 15.0;
        config.render.validity_days = 1000;
        assert!(config.validate().is_err());

        config.render.validity_days = 7;
        config.company.name = "  ".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("tenchem-does-not-exist.toml");
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("[company]"));
        assert!(toml_str.contains("[render]"));
        assert!(toml_str.contains("[output]"));
    }
}
