//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the validation layer. Infrastructure-specific constants remain in
//! `pkgcheck_infrastructure::constants`.

// ============================================================================
// SCHEMA REGISTRATION CONSTANTS
// ============================================================================

/// Maximum number of passes the registrar makes over unregistered documents
pub const MAX_REGISTRATION_PASSES: usize = 5;

/// File extension of compact node type definition documents
pub const SCHEMA_DOCUMENT_EXTENSION: &str = "cnd";

// ============================================================================
// BUILT-IN NAMESPACES
// ============================================================================

/// `jcr` namespace URI
pub const NAMESPACE_JCR: &str = "http://www.jcp.org/jcr/1.0";

/// `nt` namespace URI
pub const NAMESPACE_NT: &str = "http://www.jcp.org/jcr/nt/1.0";

/// `mix` namespace URI
pub const NAMESPACE_MIX: &str = "http://www.jcp.org/jcr/mix/1.0";

/// `xml` namespace URI
pub const NAMESPACE_XML: &str = "http://www.w3.org/XML/1998/namespace";

/// Root node type every primary type implicitly extends
pub const NT_BASE: &str = "nt:base";

// ============================================================================
// PACKAGE PROPERTY CONSTANTS
// ============================================================================

/// Package property holding the access control handling mode
pub const PROPERTY_AC_HANDLING: &str = "acHandling";

/// Package property holding the package description
pub const PROPERTY_DESCRIPTION: &str = "description";

/// Package property flagging packages that require a repository restart
pub const PROPERTY_REQUIRES_RESTART: &str = "requiresRestart";
