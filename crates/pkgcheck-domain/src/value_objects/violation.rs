//! Violation value objects
//!
//! A violation is an immutable, severity-ranked finding reported by a check,
//! optionally tied to the packages it concerns.

use super::package::PackageId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity level for violations, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Informational, the package may still be installed
    Minor,
    /// Policy breach that should block installation
    Major,
    /// Breach that makes the package unusable
    Severe,
}

impl Severity {
    /// All severities, least severe first
    pub const ALL: [Severity; 3] = [Severity::Minor, Severity::Major, Severity::Severe];

    /// Whether this severity is at or above `threshold`
    pub fn meets_minimum(self, threshold: Severity) -> bool {
        self >= threshold
    }

    /// Uppercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Severe => "SEVERE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "MINOR" => Ok(Self::Minor),
            "MAJOR" => Ok(Self::Major),
            "SEVERE" => Ok(Self::Severe),
            _ => Err(Error::invalid_argument(format!(
                "unknown severity '{s}': use minor, major or severe"
            ))),
        }
    }
}

/// A reported finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    severity: Severity,
    description: String,
    packages: Vec<PackageId>,
}

impl Violation {
    /// Create a violation concerning the given packages
    pub fn new(
        severity: Severity,
        description: impl Into<String>,
        packages: impl IntoIterator<Item = PackageId>,
    ) -> Self {
        Self {
            severity,
            description: description.into(),
            packages: packages.into_iter().collect(),
        }
    }

    /// Create a violation not tied to any package
    pub fn unscoped(severity: Severity, description: impl Into<String>) -> Self {
        Self::new(severity, description, [])
    }

    /// Severity of the finding
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Packages the finding concerns, in reporting order
    pub fn packages(&self) -> &[PackageId] {
        &self.packages
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.description)?;
        if !self.packages.is_empty() {
            let ids: Vec<String> = self.packages.iter().map(ToString::to_string).collect();
            write!(f, " ({})", ids.join(", "))?;
        }
        Ok(())
    }
}
