//! Integration tests against the real platform documents directory.
//!
//! Each test works under its own uniquely named subtree and removes it
//! afterwards. Hosts that resolve no documents directory (common on
//! headless machines) skip the test body.

use std::path::PathBuf;

use filekit_documents as documents;
use filekit_documents::DocumentsError;

const PAYLOAD: &[u8] = b"Test string to be converted into data";

/// A per-test subtree of the documents directory, removed on drop.
struct TestTree {
    root: PathBuf,
}

impl TestTree {
    fn new(name: &str) -> Self {
        Self {
            root: PathBuf::from(format!("filekit-documents-tests-{name}")),
        }
    }

    fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Drop for TestTree {
    fn drop(&mut self) {
        let _ = documents::delete(&self.root);
    }
}

#[test]
fn path_for_joins_onto_the_documents_directory() {
    let Some(dir) = documents::dir() else { return };

    assert_eq!(
        documents::path_for("reports/q3.pdf"),
        Some(dir.join("reports/q3.pdf"))
    );
}

#[test]
fn path_for_an_empty_relative_path_is_the_directory_itself() {
    let Some(dir) = documents::dir() else { return };

    assert_eq!(documents::path_for(""), Some(dir));
}

#[test]
fn write_read_delete_cycle() {
    if documents::dir().is_none() {
        return;
    }
    let tree = TestTree::new("cycle");
    let file = tree.file("test.mp4");

    documents::write(PAYLOAD, &file).expect("write failed");
    assert!(documents::exists(&file));
    assert_eq!(documents::read(&file).expect("read failed"), PAYLOAD);

    documents::delete(&file).expect("delete failed");
    assert!(!documents::exists(&file));
}

#[test]
fn write_creates_missing_intermediate_directories() {
    if documents::dir().is_none() {
        return;
    }
    let tree = TestTree::new("nested");
    let file = tree.file("a/b/file.bin");

    documents::write(PAYLOAD, &file).expect("write failed");

    assert!(documents::exists(&file));
}

#[test]
fn write_rejects_empty_inputs() {
    let err = documents::write(PAYLOAD, "").unwrap_err();
    assert!(matches!(err, DocumentsError::InvalidInput(_)));

    let err = documents::write(b"", "somewhere.bin").unwrap_err();
    assert!(matches!(err, DocumentsError::InvalidInput(_)));
}

#[test]
fn read_rejects_an_empty_relative_path() {
    let err = documents::read("").unwrap_err();

    assert!(matches!(err, DocumentsError::InvalidInput(_)));
}

#[test]
fn read_of_a_missing_file_is_a_persistence_error() {
    if documents::dir().is_none() {
        return;
    }
    let tree = TestTree::new("missing-read");

    let err = documents::read(tree.file("absent.bin")).unwrap_err();

    assert!(matches!(err, DocumentsError::Persistence(_)));
}

#[test]
fn exists_on_an_empty_relative_path_is_false() {
    assert!(!documents::exists(""));
}

#[test]
fn delete_rejects_an_empty_relative_path() {
    let err = documents::delete("").unwrap_err();

    assert!(matches!(err, DocumentsError::InvalidInput(_)));
}
