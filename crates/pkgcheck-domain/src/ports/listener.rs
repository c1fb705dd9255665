//! Error reporting port

use crate::error::Error;
use crate::value_objects::SchemaDocumentRef;

/// Sink for failures that survive every retry
pub trait ErrorListener {
    /// A schema document could not be registered after all passes
    fn on_schema_registration_error(&mut self, error: &Error, reference: &SchemaDocumentRef);
}
