//! Schema document source port

use crate::error::Result;
use crate::value_objects::SchemaDocumentRef;
use std::io::Read;

/// Opens readable streams for schema document locators
///
/// Each call must return a fresh stream; the caller drops it at the end of
/// a single registration attempt.
pub trait DocumentSource {
    /// Open the document behind `reference`
    fn open(&self, reference: &SchemaDocumentRef) -> Result<Box<dyn Read + '_>>;
}
