//! # pkgcheck
//!
//! Validates content packages before installation: registers the schema
//! (node type) documents they depend on, then runs a configurable pipeline
//! of checks over the package descriptors and reports severity-ranked
//! violations.
//!
//! ## Example
//!
//! ```ignore
//! use pkgcheck::infrastructure::ConfigLoader;
//!
//! let config = ConfigLoader::new().load()?;
//! let outcome = pkgcheck::run(&config, &["package.json".into()])?;
//! println!("{}", outcome.render(config.report.format));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, ports and the domain error
//! - `validate` - schema registrar and check pipeline
//! - `providers` - in-memory repository and document sources
//! - `infrastructure` - configuration, logging and input loading

/// Domain layer - value objects and ports
pub mod domain {
    pub use pkgcheck_domain::*;
}

/// Validation layer - schema registration and package checks
pub mod validate {
    pub use pkgcheck_validate::*;
}

/// Adapters for the domain ports
pub mod providers {
    pub use pkgcheck_providers::*;
}

/// Infrastructure layer - config, logging and inputs
pub mod infrastructure {
    pub use pkgcheck_infrastructure::*;
}

mod pipeline;

pub use pipeline::{RunOutcome, run};
