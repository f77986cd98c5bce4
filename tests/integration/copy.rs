//! Integration tests for the `copy` step.

#[path = "../common/mod.rs"]
mod common;

use common::{TestFixture, copy_values};
use pipecopy::{CopyOptions, CopyPlugin, Error, ErrorCode, Plugin};
use std::fs;
use std::io;

#[test]
fn test_copy_file_content() {
    let fx = TestFixture::new();
    let src = fx.source("test.txt", "hello world");
    let dst = fx.dest("test.txt");

    CopyPlugin::default()
        .execute(&copy_values(&src, &dst))
        .unwrap();

    fx.assert_file_content(&dst, "hello world");
    // Source is untouched
    fx.assert_file_content(&src, "hello world");
}

#[test]
fn test_copy_overwrites_destination() {
    let fx = TestFixture::new();
    let src = fx.source("test.txt", "new content");
    let dst = fx.dest("test.txt");
    fs::write(&dst, "old content that is longer").unwrap();

    CopyPlugin::default()
        .execute(&copy_values(&src, &dst))
        .unwrap();

    fx.assert_file_content(&dst, "new content");
}

#[test]
fn test_copy_twice_same_result() {
    let fx = TestFixture::new();
    let src = fx.source("test.txt", "stable");
    let dst = fx.dest("test.txt");
    let step = CopyPlugin::default();

    step.execute(&copy_values(&src, &dst)).unwrap();
    step.execute(&copy_values(&src, &dst)).unwrap();

    fx.assert_file_content(&dst, "stable");
}

#[test]
fn test_copy_empty_file() {
    let fx = TestFixture::new();
    let src = fx.source("empty.txt", "");
    let dst = fx.dest("empty.txt");

    CopyPlugin::default()
        .execute(&copy_values(&src, &dst))
        .unwrap();

    assert_eq!(fs::metadata(&dst).unwrap().len(), 0);
}

#[test]
fn test_copy_missing_source_is_not_found() {
    let fx = TestFixture::new();
    let dst = fx.dest("test.txt");

    let err = CopyPlugin::default()
        .execute(&copy_values(
            std::path::Path::new("/nonexistent/path"),
            &dst,
        ))
        .unwrap_err();

    assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(!dst.exists());
}

#[test]
fn test_copy_into_missing_directory_fails() {
    let fx = TestFixture::new();
    let src = fx.source("test.txt", "content");
    let dst = fx.dest("missing/sub/test.txt");

    let err = CopyPlugin::default()
        .execute(&copy_values(&src, &dst))
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(!fx.dest("missing").exists());
}

#[test]
fn test_copy_directory_source_fails() {
    let fx = TestFixture::new();
    let dst = fx.dest("test.txt");

    let err = CopyPlugin::default()
        .execute(&copy_values(fx.src.path(), &dst))
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::IsADirectory);
    assert!(!dst.exists());
}

#[test]
fn test_copy_atomic_replaces_destination() {
    let fx = TestFixture::new();
    let src = fx.source("test.txt", "replacement");
    let dst = fx.dest("test.txt");
    fs::write(&dst, "original").unwrap();

    CopyPlugin::new(CopyOptions::default().with_atomic())
        .execute(&copy_values(&src, &dst))
        .unwrap();

    fx.assert_file_content(&dst, "replacement");
    assert_eq!(fs::read_dir(fx.dst.path()).unwrap().count(), 1);
}

#[test]
fn test_copy_large_file() {
    let fx = TestFixture::new();
    let content = "0123456789abcdef".repeat(1 << 16);
    let src = fx.source("large.bin", &content);
    let dst = fx.dest("large.bin");

    CopyPlugin::new(CopyOptions::default().with_fsync())
        .execute(&copy_values(&src, &dst))
        .unwrap();

    assert_eq!(fs::metadata(&dst).unwrap().len(), content.len() as u64);
    fx.assert_file_content(&dst, &content);
}
