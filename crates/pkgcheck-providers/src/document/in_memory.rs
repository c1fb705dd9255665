//! In-memory document source
//!
//! Serves documents held in memory and counts how often each was opened,
//! which makes registration behavior observable in tests and tools.

use pkgcheck_domain::{DocumentSource, Error, Result, SchemaDocumentRef};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Cursor, Read};

/// Map of locators to document text
#[derive(Debug, Default)]
pub struct InMemoryDocumentSource {
    documents: HashMap<SchemaDocumentRef, String>,
    opened: RefCell<HashMap<SchemaDocumentRef, usize>>,
}

impl InMemoryDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document
    pub fn insert(&mut self, reference: SchemaDocumentRef, text: impl Into<String>) {
        self.documents.insert(reference, text.into());
    }

    /// Add a document (builder pattern)
    pub fn with_document(mut self, reference: SchemaDocumentRef, text: impl Into<String>) -> Self {
        self.insert(reference, text);
        self
    }

    /// How many times `reference` was opened
    pub fn open_count(&self, reference: &SchemaDocumentRef) -> usize {
        self.opened.borrow().get(reference).copied().unwrap_or(0)
    }

    /// Total number of opens across all documents
    pub fn total_opens(&self) -> usize {
        self.opened.borrow().values().sum()
    }
}

impl DocumentSource for InMemoryDocumentSource {
    fn open(&self, reference: &SchemaDocumentRef) -> Result<Box<dyn Read + '_>> {
        *self
            .opened
            .borrow_mut()
            .entry(reference.clone())
            .or_insert(0) += 1;
        let text = self
            .documents
            .get(reference)
            .ok_or_else(|| Error::not_found(format!("schema document {reference}")))?;
        Ok(Box::new(Cursor::new(text.as_bytes())))
    }
}
