//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `pkgcheck_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "pkgcheck.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "pkgcheck";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PKGCHECK";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "PKGCHECK_LOG";

/// `LOG_ENV_VAR` without the configuration prefix
pub const LOG_ENV_KEY: &str = "log";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "pkgcheck";

// ============================================================================
// REPORT CONSTANTS
// ============================================================================

/// Lowest severity that fails a run unless configured otherwise
pub const DEFAULT_FAIL_ON: &str = "major";
