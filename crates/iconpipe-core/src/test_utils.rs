//! Test utilities for building icon-font export archives.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are stored uncompressed
/// with mode 0o644.
///
/// # Examples
///
/// ```
/// use iconpipe_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(vec![("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = stored_options();

    for (path, data) in entries {
        zip.start_file(path, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Creates an in-memory archive shaped like an icon-font service export.
///
/// Holds every entry the extractor needs plus a `demo.html` it must leave
/// alone.
#[must_use]
pub fn create_icomoon_zip() -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = stored_options();

    let files: [(&str, &[u8]); 7] = [
        ("selection.json", br#"{"icons": []}"#),
        ("style.css", b".devicon-rust-plain:before { content: \"\\e900\"; }"),
        ("demo.html", b"<html></html>"),
        ("fonts/devicon.ttf", b"ttf"),
        ("fonts/devicon.woff", b"woff"),
        ("fonts/devicon.eot", b"eot"),
        ("fonts/devicon.svg", b"<svg/>"),
    ];

    zip.add_directory("fonts/", options).unwrap();
    for (path, data) in files {
        zip.start_file(path, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

fn stored_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o644)
}
