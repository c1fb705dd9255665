//! Access control handling policy check
//!
//! Packages declare how their access control entries are applied on
//! install. This check rejects packages whose mode is not acceptable under
//! the configured policy, which is either a named tier of the escalating
//! [`AcHandlingLevelSet`] ladder or an explicit allow-list.
//!
//! Configuration keys:
//! - `allowedModes`: array of permitted mode names; takes precedence
//! - `levelSet`: tier name (`no_clear`, `no_unsafe`, `only_add`, `only_ignore`)
//!
//! Without either key the `no_unsafe` tier applies.

use super::config::{CheckConfig, ConfigurationError};
use super::contract::{PackageCheck, ViolationReporter};
use super::factory::CheckFactory;
use anyhow::Context;
use pkgcheck_domain::{AcHandling, MetaInf, PackageId, PackageProperties, Severity, Violation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Registry and report name of the check
pub const AC_HANDLING_CHECK_NAME: &str = "ac_handling";

/// Configuration key holding the explicit allow-list
pub const KEY_ALLOWED_MODES: &str = "allowedModes";

/// Configuration key holding the tier name
pub const KEY_LEVEL_SET: &str = "levelSet";

/// Escalating tiers of forbidden access control handling modes
///
/// Each tier forbids everything the previous one does plus one more mode.
/// `Explicit` forbids nothing on its own; it marks a policy driven by an
/// allow-list instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcHandlingLevelSet {
    Explicit,
    NoClear,
    NoUnsafe,
    OnlyAdd,
    OnlyIgnore,
}

impl AcHandlingLevelSet {
    /// All tiers, `Explicit` first, then least to most strict
    pub const ALL: [AcHandlingLevelSet; 5] = [
        AcHandlingLevelSet::Explicit,
        AcHandlingLevelSet::NoClear,
        AcHandlingLevelSet::NoUnsafe,
        AcHandlingLevelSet::OnlyAdd,
        AcHandlingLevelSet::OnlyIgnore,
    ];

    /// Modes this tier forbids
    pub fn forbidden_modes(self) -> &'static [AcHandling] {
        match self {
            Self::Explicit => &[],
            Self::NoClear => &[AcHandling::Clear],
            Self::NoUnsafe => &[AcHandling::Clear, AcHandling::Overwrite],
            Self::OnlyAdd => &[AcHandling::Clear, AcHandling::Overwrite, AcHandling::Merge],
            Self::OnlyIgnore => &[
                AcHandling::Clear,
                AcHandling::Overwrite,
                AcHandling::Merge,
                AcHandling::MergePreserve,
            ],
        }
    }

    /// Whether this tier forbids `mode`
    pub fn forbids(self, mode: AcHandling) -> bool {
        self.forbidden_modes().contains(&mode)
    }

    /// Configuration name of the tier
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::NoClear => "no_clear",
            Self::NoUnsafe => "no_unsafe",
            Self::OnlyAdd => "only_add",
            Self::OnlyIgnore => "only_ignore",
        }
    }
}

impl fmt::Display for AcHandlingLevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcHandlingLevelSet {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|l| l.as_str()).collect();
                ConfigurationError::invalid_value(
                    KEY_LEVEL_SET,
                    format!("unknown level set '{s}', expected one of: {}", names.join(", ")),
                )
            })
    }
}

/// Decision rule resolved from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcHandlingPolicy {
    /// Only the listed modes are permitted
    Allowed(Vec<AcHandling>),
    /// Modes forbidden by the tier are rejected; never `Explicit`
    LevelSet(AcHandlingLevelSet),
}

impl Default for AcHandlingPolicy {
    fn default() -> Self {
        Self::LevelSet(AcHandlingLevelSet::NoUnsafe)
    }
}

impl AcHandlingPolicy {
    /// Policy permitting exactly `modes`
    pub fn explicit(modes: impl IntoIterator<Item = AcHandling>) -> Self {
        let mut allowed: Vec<AcHandling> = Vec::new();
        for mode in modes {
            if !allowed.contains(&mode) {
                allowed.push(mode);
            }
        }
        Self::Allowed(allowed)
    }

    /// Policy enforcing a named tier
    ///
    /// `Explicit` has no forbidden set of its own and is rejected here; use
    /// [`AcHandlingPolicy::explicit`] with an allow-list instead.
    pub fn level_set(level: AcHandlingLevelSet) -> Result<Self, ConfigurationError> {
        if level == AcHandlingLevelSet::Explicit {
            return Err(ConfigurationError::invalid_value(
                KEY_LEVEL_SET,
                format!("level set 'explicit' requires '{KEY_ALLOWED_MODES}' to be configured"),
            ));
        }
        Ok(Self::LevelSet(level))
    }

    /// Resolve the policy from check configuration
    ///
    /// `allowedModes` wins over `levelSet`, though a malformed `levelSet` is
    /// still rejected. Neither present yields the `no_unsafe` tier.
    pub fn from_config(config: &CheckConfig) -> Result<Self, ConfigurationError> {
        config.deny_unknown_keys(&[KEY_ALLOWED_MODES, KEY_LEVEL_SET])?;
        let level = config
            .string(KEY_LEVEL_SET)?
            .map(str::parse::<AcHandlingLevelSet>)
            .transpose()?;

        if let Some(raw_modes) = config.string_list(KEY_ALLOWED_MODES)? {
            let modes = raw_modes
                .iter()
                .map(|raw| {
                    raw.parse::<AcHandling>().map_err(|e| {
                        ConfigurationError::invalid_value(KEY_ALLOWED_MODES, e.to_string())
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(level) = level {
                warn!(
                    check = AC_HANDLING_CHECK_NAME,
                    ignored = %level,
                    "'{KEY_LEVEL_SET}' is ignored because '{KEY_ALLOWED_MODES}' is configured"
                );
            }
            return Ok(Self::explicit(modes));
        }

        match level {
            Some(level) => Self::level_set(level),
            None => Ok(Self::default()),
        }
    }

    /// Tier this policy belongs to
    pub fn level(&self) -> AcHandlingLevelSet {
        match self {
            Self::Allowed(_) => AcHandlingLevelSet::Explicit,
            Self::LevelSet(level) => *level,
        }
    }

    /// Whether a package declaring `mode` is acceptable
    pub fn permits(&self, mode: AcHandling) -> bool {
        match self {
            Self::Allowed(allowed) => allowed.contains(&mode),
            Self::LevelSet(level) => !level.forbids(mode),
        }
    }

    /// Violation text naming `mode` and the clause that rejected it
    pub fn describe_rejection(&self, mode: AcHandling) -> String {
        match self {
            Self::Allowed(allowed) => format!(
                "acHandling mode {mode} is forbidden. acHandling values in {KEY_ALLOWED_MODES} are {}",
                join_modes(allowed)
            ),
            Self::LevelSet(level) => format!(
                "acHandling mode {mode} is forbidden. forbidden acHandling values in {KEY_LEVEL_SET}:{level} are {}",
                join_modes(level.forbidden_modes())
            ),
        }
    }
}

fn join_modes(modes: &[AcHandling]) -> String {
    let names: Vec<&str> = modes.iter().map(|m| m.as_str()).collect();
    format!("[{}]", names.join(", "))
}

/// Reports a MAJOR violation for each package whose mode the policy rejects
#[derive(Debug, Clone, Default)]
pub struct AcHandlingCheck {
    policy: AcHandlingPolicy,
}

impl AcHandlingCheck {
    pub fn new(policy: AcHandlingPolicy) -> Self {
        Self { policy }
    }

    /// Active policy
    pub fn policy(&self) -> &AcHandlingPolicy {
        &self.policy
    }
}

impl PackageCheck for AcHandlingCheck {
    fn check_name(&self) -> String {
        AC_HANDLING_CHECK_NAME.to_string()
    }

    fn before_extract(
        &mut self,
        package_id: &PackageId,
        properties: &PackageProperties,
        _meta_inf: &MetaInf,
        _subpackages: &[PackageId],
        reporter: &mut ViolationReporter<'_>,
    ) -> anyhow::Result<()> {
        let mode = properties
            .ac_handling()
            .with_context(|| format!("package {package_id} declares an unreadable acHandling mode"))?
            .unwrap_or(AcHandling::Ignore);

        if !self.policy.permits(mode) {
            reporter.report(Violation::new(
                Severity::Major,
                self.policy.describe_rejection(mode),
                [package_id.clone()],
            ));
        }
        Ok(())
    }
}

/// Builds [`AcHandlingCheck`] instances
#[derive(Debug, Clone, Copy, Default)]
pub struct AcHandlingFactory;

impl CheckFactory for AcHandlingFactory {
    fn name(&self) -> &str {
        AC_HANDLING_CHECK_NAME
    }

    fn description(&self) -> &str {
        "Rejects packages whose acHandling mode the configured policy forbids"
    }

    fn new_instance(
        &self,
        config: &CheckConfig,
    ) -> Result<Box<dyn PackageCheck>, ConfigurationError> {
        let policy = AcHandlingPolicy::from_config(config)?;
        Ok(Box::new(AcHandlingCheck::new(policy)))
    }
}
