//! Iterative schema registrar
//!
//! Schema documents may depend on each other in ways nobody declares up
//! front. The registrar discovers a workable order empirically: it makes up
//! to [`MAX_REGISTRATION_PASSES`] passes over the documents not yet
//! registered, and a document that fails on one pass is simply tried again on
//! the next. Only failures that survive the last pass are reported.
//!
//! Post-install documents are registered after the main set, once each, and
//! every failure among them is reported on its own. Reporting goes through
//! the [`ErrorListener`]; the registrar itself only traces progress.

use super::importer::SchemaImporter;
use pkgcheck_domain::constants::MAX_REGISTRATION_PASSES;
use pkgcheck_domain::{DocumentSource, Error, ErrorListener, RepositorySession, SchemaDocumentRef};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// When a registration attempt took place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationPhase {
    /// 1-based pass over the main documents
    Pass(usize),
    /// The single attempt made for a post-install document
    PostInstall,
}

impl fmt::Display for RegistrationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass(pass) => write!(f, "pass {pass}"),
            Self::PostInstall => f.write_str("post-install"),
        }
    }
}

/// Final result for one document
#[derive(Debug)]
pub struct SchemaRegistrationOutcome {
    pub reference: SchemaDocumentRef,
    /// Attempt that produced this result
    pub phase: RegistrationPhase,
    /// `Err` carries the failure of the last attempt
    pub result: std::result::Result<(), Error>,
}

impl SchemaRegistrationOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything one [`SchemaRegistrar::register`] call did
#[derive(Debug, Default)]
pub struct RegistrationReport {
    /// Final outcome per attempted document, in the order outcomes were decided
    pub outcomes: Vec<SchemaRegistrationOutcome>,
    /// Passes made over the main documents
    pub passes: usize,
    /// Documents left out because an earlier call already registered them
    pub already_registered: Vec<SchemaDocumentRef>,
}

impl RegistrationReport {
    /// Documents registered by this call
    pub fn registered(&self) -> impl Iterator<Item = &SchemaDocumentRef> {
        self.outcomes
            .iter()
            .filter(|o| o.is_success())
            .map(|o| &o.reference)
    }

    /// Documents registered during a given main pass
    pub fn registered_in_pass(&self, pass: usize) -> Vec<&SchemaDocumentRef> {
        self.outcomes
            .iter()
            .filter(|o| o.is_success() && o.phase == RegistrationPhase::Pass(pass))
            .map(|o| &o.reference)
            .collect()
    }

    /// Terminal failures
    pub fn failures(&self) -> impl Iterator<Item = &SchemaRegistrationOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Whether every attempted document registered
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Registers schema documents with bounded retry
///
/// Keeps track of every document it has registered, so calling
/// [`register`](Self::register) again never re-attempts them.
pub struct SchemaRegistrar<'a> {
    source: &'a dyn DocumentSource,
    registered: HashSet<SchemaDocumentRef>,
}

impl<'a> SchemaRegistrar<'a> {
    /// Create a registrar opening documents through `source`
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self {
            source,
            registered: HashSet::new(),
        }
    }

    /// Whether `reference` has been registered by this registrar
    pub fn is_registered(&self, reference: &SchemaDocumentRef) -> bool {
        self.registered.contains(reference)
    }

    /// Register `main` with retry, then each of `post_install` once
    ///
    /// Failures never abort the call: main documents still failing after the
    /// last pass, and every failing post-install document, are handed to
    /// `listener` and recorded in the returned report.
    pub fn register(
        &mut self,
        session: &mut dyn RepositorySession,
        listener: &mut dyn ErrorListener,
        main: &[SchemaDocumentRef],
        post_install: &[SchemaDocumentRef],
    ) -> RegistrationReport {
        let mut report = RegistrationReport::default();

        let mut working = self.pending(main, &mut report.already_registered);
        info!(documents = working.len(), "Registering schema documents");

        while !working.is_empty() && report.passes < MAX_REGISTRATION_PASSES {
            report.passes += 1;
            let pass = report.passes;
            let last_pass = pass == MAX_REGISTRATION_PASSES;
            let mut retry = Vec::new();

            for reference in working {
                match self.register_one(session, &reference) {
                    Ok(()) => {
                        debug!(document = %reference, pass, "Schema document registered");
                        self.registered.insert(reference.clone());
                        report.outcomes.push(SchemaRegistrationOutcome {
                            reference,
                            phase: RegistrationPhase::Pass(pass),
                            result: Ok(()),
                        });
                    }
                    Err(e) if last_pass => {
                        debug!(document = %reference, pass, "Giving up on schema document");
                        listener.on_schema_registration_error(&e, &reference);
                        report.outcomes.push(SchemaRegistrationOutcome {
                            reference,
                            phase: RegistrationPhase::Pass(pass),
                            result: Err(e),
                        });
                    }
                    Err(e) => {
                        debug!(
                            document = %reference,
                            pass,
                            error = %e,
                            "Schema document deferred"
                        );
                        retry.push(reference);
                    }
                }
            }

            working = retry;
        }

        let post_install = self.pending(post_install, &mut report.already_registered);
        for reference in post_install {
            let result = self.register_one(session, &reference);
            match &result {
                Ok(()) => {
                    debug!(document = %reference, "Post-install schema document registered");
                    self.registered.insert(reference.clone());
                }
                Err(e) => {
                    debug!(document = %reference, "Post-install schema document failed");
                    listener.on_schema_registration_error(e, &reference);
                }
            }
            report.outcomes.push(SchemaRegistrationOutcome {
                reference,
                phase: RegistrationPhase::PostInstall,
                result,
            });
        }

        info!(
            passes = report.passes,
            registered = report.registered().count(),
            failed = report.failures().count(),
            "Schema registration finished"
        );
        report
    }

    /// Distinct references not registered yet, in first-seen order
    fn pending(
        &self,
        references: &[SchemaDocumentRef],
        already_registered: &mut Vec<SchemaDocumentRef>,
    ) -> Vec<SchemaDocumentRef> {
        let mut seen = HashSet::new();
        let mut pending = Vec::new();
        for reference in references {
            if !seen.insert(reference) {
                continue;
            }
            if self.registered.contains(reference) {
                already_registered.push(reference.clone());
            } else {
                pending.push(reference.clone());
            }
        }
        pending
    }

    /// One attempt: open, parse and import a single document
    fn register_one(
        &self,
        session: &mut dyn RepositorySession,
        reference: &SchemaDocumentRef,
    ) -> pkgcheck_domain::Result<()> {
        let mut reader = self.source.open(reference)?;
        let mut capabilities = session.schema_capabilities();
        SchemaImporter::import(reference.as_str(), &mut reader, &mut capabilities)?;
        Ok(())
    }
}
