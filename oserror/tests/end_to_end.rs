// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use oserror::catalog::{BLOCKING_IO_EAGAIN, FILE_EXISTS, FILE_NOT_FOUND, TIMEOUT};
use oserror::{ErrnoClass, ErrorContext, OsErrorBuilder};
use pretty_assertions::assert_eq;
use std::path::Path;

#[test]
fn file_exists_with_one_path() {
    let err = FILE_EXISTS.with_path("foo");
    assert_eq!(err.errno(), errno::EEXIST);
    assert_eq!(err.message(), errno::EEXIST.desc());
    assert_eq!(err.filename(), Some(Path::new("foo")));
    assert_eq!(err.filename2(), None);
    assert_eq!(err.written(), None);
    assert_eq!(err.class(), ErrnoClass::FileExists);
}

#[test]
fn factory_matches_named_builder() {
    let enoent_error = OsErrorBuilder::new(errno::ENOENT);
    let generic = enoent_error.with_path("foo");
    let named = FILE_NOT_FOUND.with_path("foo");
    assert_eq!(generic.errno(), named.errno());
    assert_eq!(generic.message(), named.message());
    assert_eq!(generic, named);
}

#[test]
fn blocking_io_with_everything() {
    let err = BLOCKING_IO_EAGAIN.with_context(
        ErrorContext::new()
            .filename("foo")
            .filename2("bar")
            .written(5),
    );
    assert_eq!(err.errno(), errno::EAGAIN);
    assert_eq!(err.filename(), Some(Path::new("foo")));
    assert_eq!(err.filename2(), Some(Path::new("bar")));
    assert_eq!(err.written(), Some(5));
    assert!(err.class().is_would_block());
    assert_eq!(err.kind(), std::io::ErrorKind::WouldBlock);
}

#[test]
fn blocking_io_written_only() {
    let err = BLOCKING_IO_EAGAIN.with_context(ErrorContext::new().written(5));
    assert_eq!(err.filename(), None);
    assert_eq!(err.filename2(), None);
    assert_eq!(err.written(), Some(5));
    assert_eq!(err.to_string(), format!("[Errno {}] {}", errno::EAGAIN, err.message()));
}

#[test]
fn equal_but_independent() {
    let first = TIMEOUT.with_paths("a", "b");
    let second = TIMEOUT.with_paths("a", "b");
    assert_eq!(first, second);
    assert!(!std::ptr::eq(first.message(), second.message()));
}

#[cfg(target_os = "linux")]
#[test]
fn rendering_follows_host_convention() {
    assert_eq!(FILE_EXISTS.build().to_string(), "[Errno 17] File exists");
    assert_eq!(FILE_EXISTS.with_path("foo").to_string(), "[Errno 17] File exists: 'foo'");
    assert_eq!(
        FILE_EXISTS.with_paths("foo", "bar").to_string(),
        "[Errno 17] File exists: 'foo' -> 'bar'"
    );
    assert_eq!(
        BLOCKING_IO_EAGAIN
            .call(Some("foo"), Some("bar"), Some(5))
            .to_string(),
        "[Errno 11] Resource temporarily unavailable: 'foo' -> 'bar'"
    );
    assert_eq!(
        OsErrorBuilder::new(errno::ENOENT).with_path("foo").to_string(),
        "[Errno 2] No such file or directory: 'foo'"
    );
}

#[test]
fn io_error_interop() {
    let io: std::io::Error = FILE_NOT_FOUND.with_path("missing").into();
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    assert!(io.to_string().ends_with(": 'missing'"));
}
