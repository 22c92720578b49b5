//! Tests for knowledge-base loading.

use std::collections::HashMap;
use std::fs;

use ragchat::{ChatError, Document, load_directory};
use tempfile::tempdir;

/// Index loaded documents by their source label, since enumeration order is
/// platform-dependent.
fn by_source(documents: Vec<Document>) -> HashMap<String, Document> {
    documents.into_iter().map(|d| (d.source.clone(), d)).collect()
}

#[test]
fn one_document_per_txt_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("alpha.txt"), "first document").unwrap();
    fs::write(dir.path().join("beta.txt"), "second document\nwith two lines").unwrap();

    let documents = by_source(load_directory(dir.path()).unwrap());
    assert_eq!(documents.len(), 2);
    assert_eq!(documents["alpha.txt"].text, "first document");
    assert_eq!(documents["beta.txt"].text, "second document\nwith two lines");
}

#[test]
fn document_ids_are_file_stems() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "content").unwrap();

    let documents = load_directory(dir.path()).unwrap();
    assert_eq!(documents[0].id, "notes");
    assert_eq!(documents[0].source, "notes.txt");
}

#[test]
fn non_txt_entries_are_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("kept.txt"), "kept").unwrap();
    fs::write(dir.path().join("ignored.md"), "ignored").unwrap();
    fs::write(dir.path().join("ignored"), "no extension").unwrap();
    fs::create_dir(dir.path().join("subdir.txt")).unwrap();

    let documents = load_directory(dir.path()).unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].source, "kept.txt");
}

#[test]
fn empty_directory_yields_no_documents() {
    let dir = tempdir().unwrap();
    assert!(load_directory(dir.path()).unwrap().is_empty());
}

#[test]
fn missing_directory_is_a_loader_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");
    assert!(matches!(load_directory(&missing), Err(ChatError::Loader { .. })));
}

#[test]
fn invalid_utf8_aborts_the_load() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.txt"), "fine").unwrap();
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x80]).unwrap();

    assert!(matches!(load_directory(dir.path()), Err(ChatError::Loader { .. })));
}
