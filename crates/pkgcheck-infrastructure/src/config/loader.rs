//! Configuration loader
//!
//! Configuration sources are merged in this order (later sources override
//! earlier ones):
//! 1. Default values from `AppConfig::default()`
//! 2. TOML configuration file (explicit path, else the first default location found)
//! 3. Environment variables with the `PKGCHECK_` prefix, nested keys split on
//!    `__` (e.g. `PKGCHECK_REPORT__FAIL_ON=severe`)

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    LOG_ENV_KEY,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use pkgcheck_domain::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Look for a configuration file in the default locations
    search_defaults: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            search_defaults: true,
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Do not look for a configuration file outside an explicit path
    pub fn without_default_search(mut self) -> Self {
        self.search_defaults = false;
        self
    }

    /// Get the explicit configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.is_file() {
                log_config_loaded(config_path, false);
                return Err(Error::configuration(format!(
                    "configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, true);
        } else if self.search_defaults {
            if let Some(default_path) = Self::find_default_config_path() {
                figment = figment.merge(Toml::file(&default_path));
                log_config_loaded(&default_path, true);
            }
        }

        // PKGCHECK_LOG holds a tracing filter, not a configuration key
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix))
                .ignore(&[LOG_ENV_KEY])
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;
        Ok(())
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.is_file())
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    config.report.fail_on_severity()?;
    validate_checks(config)?;
    validate_schema(config)?;
    Ok(())
}

fn validate_checks(config: &AppConfig) -> Result<()> {
    if let Some(position) = config
        .checks
        .iter()
        .position(|spec| spec.implementation.trim().is_empty())
    {
        return Err(Error::configuration(format!(
            "checks[{position}] has an empty 'impl' name"
        )));
    }
    Ok(())
}

fn validate_schema(config: &AppConfig) -> Result<()> {
    config
        .schema
        .document_refs()
        .and_then(|_| config.schema.post_install_refs())
        .map_err(|e| Error::configuration(format!("invalid schema document locator: {e}")))?;
    Ok(())
}
