//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pkgcheck domain operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Schema document could not be parsed
    #[error("Parse error in {document} at line {line}: {message}")]
    Parse {
        /// Document locator or name
        document: String,
        /// 1-based line number where parsing failed
        line: usize,
        /// Description of the parse failure
        message: String,
    },

    /// Namespace mapping or prefix resolution error
    #[error("Namespace error: {message}")]
    Namespace {
        /// Description of the namespace error
        message: String,
    },

    /// Node type registration error
    #[error("Node type error for {node_type}: {message}")]
    NodeType {
        /// Qualified name of the offending node type
        node_type: String,
        /// Description of the node type error
        message: String,
    },

    /// Property value conversion error
    #[error("Value error: {message}")]
    Value {
        /// Description of the value error
        message: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Schema error creation methods
impl Error {
    /// Create a parse error for a document at a given line
    pub fn parse<D: Into<String>, S: Into<String>>(document: D, line: usize, message: S) -> Self {
        Self::Parse {
            document: document.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a namespace error
    pub fn namespace<S: Into<String>>(message: S) -> Self {
        Self::Namespace {
            message: message.into(),
        }
    }

    /// Create a node type error
    pub fn node_type<N: Into<String>, S: Into<String>>(node_type: N, message: S) -> Self {
        Self::NodeType {
            node_type: node_type.into(),
            message: message.into(),
        }
    }

    /// Create a value conversion error
    pub fn value<S: Into<String>>(message: S) -> Self {
        Self::Value {
            message: message.into(),
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
