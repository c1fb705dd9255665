//! Schema Registration and Package Checks for pkgcheck
//!
//! This crate holds the two engines a package validation run needs:
//! - Schema registration: parsing compact node type definition documents
//!   and registering them with bounded multi-pass retry
//! - Package checks: a pipeline of configurable checks driven through the
//!   scan lifecycle, each reporting severity-ranked violations
//!
//! # Example
//!
//! ```ignore
//! use pkgcheck_validate::{CheckRegistry, CheckSpec, ValidationSession};
//!
//! let registry = CheckRegistry::standard();
//! let loaded = ValidationSession::from_specs(&registry, &[CheckSpec::new("ac_handling")]);
//! let mut session = loaded.session;
//! let report = session.scan(&packages)?;
//! ```

pub mod checks;
pub mod listener;
pub mod reporter;
pub mod schema;
pub mod session;

pub use checks::{
    AcHandlingCheck, AcHandlingFactory, AcHandlingLevelSet, AcHandlingPolicy, CheckConfig,
    CheckFactory, CheckRegistry, CheckSpec, ConfigurationError, FnCheckFactory, PackageCheck,
    ViolationReporter,
};
pub use listener::{DefaultErrorListener, RecordedError};
pub use reporter::{CheckReport, Reporter, ScanReport, ScanSummary};
pub use schema::{
    RegistrationPhase, RegistrationReport, SchemaImporter, SchemaRegistrar,
    SchemaRegistrationOutcome,
};
pub use session::{CheckLoadOutcome, LoadedCheck, ValidationSession};

use pkgcheck_domain::PackageId;
use thiserror::Error;

/// Result type for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error(transparent)]
    Domain(#[from] pkgcheck_domain::Error),

    #[error("Invalid configuration for check '{check}': {source}")]
    Configuration {
        check: String,
        #[source]
        source: ConfigurationError,
    },

    #[error("Unknown check implementation: {0}")]
    UnknownCheck(String),

    #[error("Check '{check}' failed during {phase}: {source}")]
    Check {
        check: String,
        phase: &'static str,
        package: Option<PackageId>,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValidationError {
    /// Name of the check the error belongs to, if any
    pub fn check_name(&self) -> Option<&str> {
        match self {
            Self::Configuration { check, .. } | Self::Check { check, .. } => Some(check),
            Self::UnknownCheck(name) => Some(name),
            _ => None,
        }
    }
}
