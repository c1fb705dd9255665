//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around a validation run.
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Inputs
//! | Module | Description |
//! |--------|-------------|
//! | [`discovery`] | Schema document discovery in directories |
//! | [`packages`] | Package descriptor loading |

pub mod config;
pub mod constants;
pub mod discovery;
pub mod error_ext;
pub mod logging;
pub mod packages;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, LoggingConfig, ReportConfig, ReportFormat, SchemaConfig};
pub use error_ext::ErrorContext;
