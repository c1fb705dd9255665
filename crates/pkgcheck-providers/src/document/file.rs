//! Filesystem document source

use crate::constants::FILE_SCHEME;
use pkgcheck_domain::{DocumentSource, Error, Result, SchemaDocumentRef};
use std::fs::File;
use std::io::{BufReader, Read};

/// Opens `file:` locators
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDocumentSource;

impl FileDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for FileDocumentSource {
    fn open(&self, reference: &SchemaDocumentRef) -> Result<Box<dyn Read + '_>> {
        let url = reference.url();
        if url.scheme() != FILE_SCHEME {
            return Err(Error::invalid_argument(format!(
                "unsupported scheme '{}' for schema document {reference}",
                url.scheme()
            )));
        }
        let path = url.to_file_path().map_err(|()| {
            Error::invalid_argument(format!("not a local file: {reference}"))
        })?;
        let file = File::open(&path).map_err(|e| {
            Error::io_with_source(format!("cannot open {}", path.display()), e)
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}
