#![cfg(test)]

use std::env;
use std::path::PathBuf;
use std::process;

use super::*;
use crate::collections::contiguous::Array;

fn fixture_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("utility-lib-{}-{name}", process::id()))
}

#[test]
fn test_load_exact_contents() {
    let path = fixture_path("contents");
    let bytes = b"alpha\0beta\ngamma\0";
    std::fs::write(&path, bytes).expect("fixture write should succeed");

    let loaded = load(&path).expect("loading an existing file should succeed");
    assert_eq!(
        &*loaded, bytes,
        "The loaded bytes should match exactly, embedded zeros included."
    );
    assert_eq!(loaded.len(), bytes.len());

    std::fs::remove_file(&path).expect("fixture cleanup should succeed");
}

#[test]
fn test_load_empty_file() {
    let path = fixture_path("empty");
    std::fs::write(&path, b"").expect("fixture write should succeed");

    let loaded = load(&path).expect("an empty file is a success, not an error");
    assert!(
        loaded.is_empty(),
        "An empty file should load as a zero-length Array."
    );

    std::fs::remove_file(&path).expect("fixture cleanup should succeed");
}

#[test]
fn test_load_missing_file() {
    let result = load(fixture_path("does-not-exist"));
    assert!(
        matches!(result, Err(LoadError::MissingFile(_))),
        "A missing path should be distinguishable from an empty file."
    );
}

#[test]
fn test_load_directory() {
    let result = load(env::temp_dir());
    assert!(
        matches!(
            result,
            Err(LoadError::Irregular(IrregularFileError(FileType::Directory)))
        ),
        "A directory is not loadable, and the error should name what was found."
    );
}

#[test]
fn test_load_invalid_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let result = load(OsStr::from_bytes(b"bad\0path"));
    assert!(
        matches!(result, Err(LoadError::InvalidPath(_))),
        "An interior nul byte can't reach the OS and should be rejected up front."
    );
}

#[test]
fn test_open_read_close() {
    let path = fixture_path("stream");
    std::fs::write(&path, b"0123456789").expect("fixture write should succeed");

    let file = File::open(&path).expect("open should succeed");
    assert_eq!(file.metadata().expect("fstat should succeed").size, 10);

    let mut buf = [0_u8; 4];
    assert_eq!(file.read(&mut buf).expect("read should succeed"), 4);
    assert_eq!(&buf, b"0123");

    let rest = file.read_all().expect("read_all should succeed");
    assert_eq!(
        &*rest,
        b"456789",
        "read_all should continue from the current offset and shrink to the bytes available."
    );

    file.close().expect("close should succeed");
    std::fs::remove_file(&path).expect("fixture cleanup should succeed");
}

#[test]
fn test_load_larger_file() {
    let path = fixture_path("large");
    let bytes = Array::from((0..65536_u32).map(|i| (i % 251) as u8));
    std::fs::write(&path, &*bytes).expect("fixture write should succeed");

    let loaded = load(&path).expect("loading should succeed");
    assert_eq!(
        loaded, bytes,
        "A file larger than one page should round-trip byte for byte."
    );

    std::fs::remove_file(&path).expect("fixture cleanup should succeed");
}
