//! Configuration management
//!
//! TOML configuration with environment overrides, merged and validated by
//! the [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ReportConfig, ReportFormat, SchemaConfig};
