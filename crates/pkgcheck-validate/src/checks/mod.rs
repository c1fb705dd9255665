//! Package Checks
//!
//! - **contract** - the check lifecycle and the violation side channel
//! - **config** - typed access to per-check JSON configuration
//! - **factory** - building check instances from configuration
//! - **registry** - looking up factories by implementation name
//! - **ac_handling** - access control handling policy check

pub mod ac_handling;
pub mod config;
pub mod contract;
pub mod factory;
pub mod registry;

pub use ac_handling::{AcHandlingCheck, AcHandlingFactory, AcHandlingLevelSet, AcHandlingPolicy};
pub use config::{CheckConfig, ConfigurationError};
pub use contract::{PackageCheck, ViolationReporter};
pub use factory::{CheckFactory, FnCheckFactory};
pub use registry::{CheckRegistry, CheckSpec};
