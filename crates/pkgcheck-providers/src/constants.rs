//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in pkgcheck-domain) and infrastructure
//! constants.

// ============================================================================
// BUILT-IN NAMESPACE PREFIXES
// ============================================================================

/// Prefix of the `jcr` namespace
pub const PREFIX_JCR: &str = "jcr";

/// Prefix of the `nt` namespace
pub const PREFIX_NT: &str = "nt";

/// Prefix of the `mix` namespace
pub const PREFIX_MIX: &str = "mix";

/// Prefix of the `xml` namespace
pub const PREFIX_XML: &str = "xml";

/// Prefixes starting with this (case-insensitive) are reserved
pub const RESERVED_PREFIX_START: &str = "xml";

// ============================================================================
// DOCUMENT SOURCE CONSTANTS
// ============================================================================

/// URL scheme served by the file document source
pub const FILE_SCHEME: &str = "file";
