//! Configuration types

use crate::constants::{DEFAULT_FAIL_ON, DEFAULT_LOG_LEVEL};
use pkgcheck_domain::{Error, Result, SchemaDocumentRef, Severity};
use pkgcheck_validate::CheckSpec;
use pkgcheck_validate::checks::ac_handling::AC_HANDLING_CHECK_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Schema documents to register before scanning
    #[serde(default)]
    pub schema: SchemaConfig,
    /// Check pipeline, in execution order
    #[serde(default)]
    pub checks: Vec<CheckSpec>,
    /// Report output
    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            schema: SchemaConfig::default(),
            checks: vec![CheckSpec::new(AC_HANDLING_CHECK_NAME)],
            report: ReportConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    #[serde(default)]
    pub json_format: bool,

    /// Also log to a daily rolling file at this path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Schema document locations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Main documents, as URLs or filesystem paths
    #[serde(default)]
    pub documents: Vec<String>,
    /// Documents registered once each after the main set
    #[serde(default)]
    pub post_install: Vec<String>,
    /// Directories searched recursively for `*.cnd` documents
    #[serde(default)]
    pub directories: Vec<PathBuf>,
}

impl SchemaConfig {
    /// Parsed main document locators
    pub fn document_refs(&self) -> Result<Vec<SchemaDocumentRef>> {
        parse_refs(&self.documents)
    }

    /// Parsed post-install document locators
    pub fn post_install_refs(&self) -> Result<Vec<SchemaDocumentRef>> {
        parse_refs(&self.post_install)
    }

    /// Whether nothing is configured
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.post_install.is_empty() && self.directories.is_empty()
    }
}

fn parse_refs(locators: &[String]) -> Result<Vec<SchemaDocumentRef>> {
    locators
        .iter()
        .map(|locator| SchemaDocumentRef::parse(locator))
        .collect()
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format
    #[serde(default)]
    pub format: ReportFormat,
    /// Lowest severity that fails the run
    pub fail_on: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            fail_on: DEFAULT_FAIL_ON.to_string(),
        }
    }
}

impl ReportConfig {
    /// Parsed fail threshold
    pub fn fail_on_severity(&self) -> Result<Severity> {
        self.fail_on.parse().map_err(|e: Error| {
            Error::configuration(format!("invalid report.fail_on: {e}"))
        })
    }
}
