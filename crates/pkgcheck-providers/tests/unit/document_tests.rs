//! Tests for document sources

use pkgcheck_domain::{DocumentSource, SchemaDocumentRef};
use pkgcheck_providers::{FileDocumentSource, InMemoryDocumentSource};
use std::io::Read;
use tempfile::TempDir;

fn read_all(source: &dyn DocumentSource, reference: &SchemaDocumentRef) -> String {
    let mut text = String::new();
    source
        .open(reference)
        .unwrap()
        .read_to_string(&mut text)
        .unwrap();
    text
}

#[test]
fn test_file_source_reads_file_urls() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("types.cnd");
    std::fs::write(&path, "[acme:Page]").unwrap();
    let reference = SchemaDocumentRef::from_file_path(&path).unwrap();

    assert_eq!(read_all(&FileDocumentSource::new(), &reference), "[acme:Page]");
}

#[test]
fn test_file_source_reports_missing_file() {
    let temp = TempDir::new().unwrap();
    let reference = SchemaDocumentRef::from_file_path(temp.path().join("absent.cnd")).unwrap();

    assert!(FileDocumentSource::new().open(&reference).is_err());
}

#[test]
fn test_file_source_rejects_other_schemes() {
    let reference = SchemaDocumentRef::parse("https://example.com/types.cnd").unwrap();
    let err = FileDocumentSource::new().open(&reference).err().unwrap();
    assert!(err.to_string().contains("unsupported scheme"));
}

#[test]
fn test_in_memory_source_counts_opens() {
    let a = SchemaDocumentRef::parse("mem:/a.cnd").unwrap();
    let missing = SchemaDocumentRef::parse("mem:/missing.cnd").unwrap();
    let source = InMemoryDocumentSource::new().with_document(a.clone(), "[a]");

    assert_eq!(read_all(&source, &a), "[a]");
    assert_eq!(read_all(&source, &a), "[a]");
    assert!(source.open(&missing).is_err());

    assert_eq!(source.open_count(&a), 2);
    assert_eq!(source.open_count(&missing), 1);
    assert_eq!(source.total_opens(), 3);
}
