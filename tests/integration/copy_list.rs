//! Integration tests for the `copy-list` step.

#[path = "../common/mod.rs"]
mod common;

use common::{TestFixture, copy_list_values};
use pipecopy::{
    CopyListPlugin, CopyOptions, Error, LENGTH_MISMATCH_DIAGNOSTIC, OnLengthMismatch, Plugin,
};
use rstest::rstest;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

thread_local! {
    static DIAGNOSTICS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn capture(msg: &str) {
    DIAGNOSTICS.with(|d| d.borrow_mut().push(msg.to_owned()));
}

fn captured() -> Vec<String> {
    DIAGNOSTICS.with(|d| d.borrow_mut().drain(..).collect())
}

fn step(on_length_mismatch: OnLengthMismatch) -> CopyListPlugin {
    CopyListPlugin::new(
        CopyOptions::default()
            .with_warn_handler(capture)
            .with_on_length_mismatch(on_length_mismatch),
    )
}

#[test]
fn test_copy_list_into_subdirectory() {
    let fx = TestFixture::new();
    let a = fx.source("a.txt", "A");
    let b = fx.source("b.txt", "B");
    fs::create_dir(fx.dest("out")).unwrap();
    let dst = [fx.dest("out/a.txt"), fx.dest("out/b.txt")];

    CopyListPlugin::default()
        .execute(&copy_list_values(&[a, b], &dst))
        .unwrap();

    fx.assert_file_content(&dst[0], "A");
    fx.assert_file_content(&dst[1], "B");
}

#[test]
fn test_copy_list_many_files() {
    let fx = TestFixture::new();
    let src: Vec<PathBuf> = (0..50)
        .map(|i| fx.source(&format!("file{}.txt", i), &format!("content {}", i)))
        .collect();
    let dst: Vec<PathBuf> = (0..50).map(|i| fx.dest(&format!("copy{}.txt", i))).collect();

    CopyListPlugin::default()
        .execute(&copy_list_values(&src, &dst))
        .unwrap();

    for (i, path) in dst.iter().enumerate() {
        fx.assert_file_content(path, &format!("content {}", i));
    }
}

#[test]
fn test_copy_list_same_destination_last_wins() {
    let fx = TestFixture::new();
    let a = fx.source("a.txt", "A");
    let b = fx.source("b.txt", "B");
    let out = fx.dest("out.txt");

    CopyListPlugin::default()
        .execute(&copy_list_values(&[a, b], &[out.clone(), out.clone()]))
        .unwrap();

    fx.assert_file_content(&out, "B");
}

#[test]
fn test_copy_list_empty_lists() {
    CopyListPlugin::default()
        .execute(&copy_list_values(&[], &[]))
        .unwrap();
}

#[test]
fn test_copy_list_failure_aborts_remaining() {
    let fx = TestFixture::new();
    let a = fx.source("a.txt", "A");
    let c = fx.source("c.txt", "C");
    let src = [a, fx.src.path().join("missing.txt"), c];
    let dst = [fx.dest("a.txt"), fx.dest("b.txt"), fx.dest("c.txt")];

    let err = CopyListPlugin::default()
        .execute(&copy_list_values(&src, &dst))
        .unwrap_err();

    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    fx.assert_file_content(&dst[0], "A");
    assert!(!dst[1].exists());
    assert!(!dst[2].exists());
}

#[rstest]
#[case::fail(OnLengthMismatch::Fail)]
#[case::continue_(OnLengthMismatch::Continue)]
fn test_mismatch_emits_diagnostic(#[case] policy: OnLengthMismatch) {
    let fx = TestFixture::new();
    let a = fx.source("a.txt", "A");
    let dst = [fx.dest("x.txt"), fx.dest("y.txt")];

    let _ = step(policy).execute(&copy_list_values(&[a], &dst));

    assert_eq!(captured(), vec![LENGTH_MISMATCH_DIAGNOSTIC.to_owned()]);
}

#[test]
fn test_mismatch_fail_copies_nothing() {
    let fx = TestFixture::new();
    let a = fx.source("a.txt", "A");
    let dst = [fx.dest("x.txt"), fx.dest("y.txt")];

    let err = step(OnLengthMismatch::Fail)
        .execute(&copy_list_values(&[a], &dst))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::LengthMismatch {
            src_len: 1,
            dst_len: 2
        }
    ));
    assert!(!dst[0].exists());
    assert!(!dst[1].exists());
    captured();
}

#[test]
fn test_mismatch_continue_ignores_surplus_destinations() {
    let fx = TestFixture::new();
    let a = fx.source("a.txt", "A");
    let dst = [fx.dest("x.txt"), fx.dest("y.txt")];

    step(OnLengthMismatch::Continue)
        .execute(&copy_list_values(&[a], &dst))
        .unwrap();

    fx.assert_file_content(&dst[0], "A");
    assert!(!dst[1].exists());
    captured();
}

#[test]
fn test_mismatch_continue_fails_past_shorter_destination_list() {
    let fx = TestFixture::new();
    let a = fx.source("a.txt", "A");
    let b = fx.source("b.txt", "B");
    let dst = [fx.dest("x.txt")];

    let err = step(OnLengthMismatch::Continue)
        .execute(&copy_list_values(&[a, b], &dst))
        .unwrap_err();

    assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 1 }));
    fx.assert_file_content(&dst[0], "A");
    captured();
}
