// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The error builder: a reusable constructor of [`OsError`]s for one [`Errno`].

use crate::{ErrorContext, OsError};
use errno::{Errno, UnknownErrno};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Target of every event emitted while building errors.
const TARGET: &str = "oserror";

/// Builds [`OsError`]s for a fixed [`Errno`].
///
/// A builder is a plain `Copy` value; it holds no state besides the error number and may be
/// shared freely across threads.
/// Every call allocates a fresh [`OsError`], and the platform description is looked up on each
/// call, so two calls with the same arguments produce equal (but independent) errors.
///
/// ```
/// # use oserror::OsErrorBuilder;
/// let not_found = OsErrorBuilder::new(errno::ENOENT);
/// let err = not_found.with_path("foo");
/// assert_eq!(err.errno(), errno::ENOENT);
/// assert_eq!(err.filename(), Some(std::path::Path::new("foo")));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct OsErrorBuilder {
    errno: Errno,
}

impl OsErrorBuilder {
    /// Create a builder for a raw error number without any checks.
    pub const fn from_raw(code: i32) -> Self {
        Self {
            errno: Errno::from_raw(code),
        }
    }

    /// Create a builder for any error number.
    ///
    /// Numbers the platform does not define are accepted; errors built from them carry the
    /// platform's fallback description (e.g. `"Unknown error 9999"`).
    /// Use [`OsErrorBuilder::try_new`] to reject them instead.
    pub fn new(errno: impl Into<Errno>) -> Self {
        let errno = errno.into();
        if !errno.is_known() {
            debug!(target: TARGET, "building errors for unknown errno {errno}");
        }
        Self { errno }
    }

    /// Create a builder, rejecting error numbers the platform does not define.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownErrno`] if `errno` is not a known error number on this platform.
    pub fn try_new(errno: impl Into<Errno>) -> Result<Self, UnknownErrno> {
        let errno = errno.into();
        match Errno::new_checked(errno.raw()) {
            Ok(errno) => Ok(Self { errno }),
            Err(err) => {
                debug!(target: TARGET, "refusing to build errors: {err}");
                Err(err)
            }
        }
    }

    /// The error number of every error this builder produces.
    #[must_use]
    pub const fn errno(&self) -> Errno {
        self.errno
    }

    /// Build an error with the given context.
    #[must_use]
    pub fn with_context(&self, context: ErrorContext) -> OsError {
        let class = self.errno.class();
        if context.written.is_some() && !class.is_would_block() {
            debug!(
                target: TARGET,
                "written count attached to errno {} which is not a would-block error",
                self.errno
            );
        }
        trace!(
            target: TARGET,
            errno = self.errno.raw(),
            %class,
            filename = ?context.filename,
            filename2 = ?context.filename2,
            written = ?context.written,
            "building os error"
        );
        OsError::new(self.errno, self.errno.desc(), context)
    }

    /// Build an error without any context.
    #[must_use]
    pub fn build(&self) -> OsError {
        self.with_context(ErrorContext::new())
    }

    /// Build an error concerning a single path.
    #[must_use]
    pub fn with_path(&self, filename: impl Into<PathBuf>) -> OsError {
        self.with_context(ErrorContext::new().filename(filename))
    }

    /// Build an error concerning two paths (e.g. the source and destination of a rename).
    #[must_use]
    pub fn with_paths(&self, filename: impl Into<PathBuf>, filename2: impl Into<PathBuf>) -> OsError {
        self.with_context(ErrorContext::new().filename(filename).filename2(filename2))
    }

    /// Build an error from positional arguments, each of which may be absent.
    #[must_use]
    pub fn call<P, Q>(&self, filename: Option<P>, filename2: Option<Q>, written: Option<usize>) -> OsError
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        self.with_context(ErrorContext::from_parts(filename, filename2, written))
    }
}

impl From<Errno> for OsErrorBuilder {
    fn from(errno: Errno) -> Self {
        Self::new(errno)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use errno::{EAGAIN, EEXIST, ENOENT, KnownErrno};
    use std::path::Path;
    use tracing_test::traced_test;

    #[test]
    fn build_without_context() {
        let err = OsErrorBuilder::new(ENOENT).build();
        assert_eq!(err.errno(), ENOENT);
        assert_eq!(err.message(), ENOENT.desc());
        assert_eq!(err.filename(), None);
        assert_eq!(err.filename2(), None);
        assert_eq!(err.written(), None);
    }

    #[test]
    fn positional_shortcuts() {
        let builder = OsErrorBuilder::new(EEXIST);
        let err = builder.with_path("foo");
        assert_eq!(err.filename(), Some(Path::new("foo")));
        assert_eq!(err.filename2(), None);
        let err = builder.with_paths("foo", "bar");
        assert_eq!(err.filename(), Some(Path::new("foo")));
        assert_eq!(err.filename2(), Some(Path::new("bar")));
        assert_eq!(err.written(), None);
        assert_eq!(builder.call(Some("foo"), Some("bar"), None), err);
    }

    #[test]
    fn zero_written_differs_from_absent() {
        let builder = OsErrorBuilder::new(EAGAIN);
        let zero = builder.call(None::<&str>, None::<&str>, Some(0));
        let absent = builder.build();
        assert_eq!(zero.written(), Some(0));
        assert_eq!(absent.written(), None);
        assert_ne!(zero, absent);
    }

    #[test]
    fn context_is_kept_verbatim() {
        bolero::check!()
            .with_type()
            .for_each(|(errno, context): &(Errno, ErrorContext)| {
                let err = OsErrorBuilder::new(*errno).with_context(context.clone());
                assert_eq!(err.errno(), *errno);
                assert_eq!(err.filename(), context.get_filename());
                assert_eq!(err.filename2(), context.get_filename2());
                assert_eq!(err.written(), context.get_written());
            });
    }

    #[test]
    fn message_depends_only_on_errno() {
        bolero::check!()
            .with_type()
            .for_each(|(errno, context): &(Errno, ErrorContext)| {
                let builder = OsErrorBuilder::new(*errno);
                assert_eq!(
                    builder.with_context(context.clone()).message(),
                    builder.build().message()
                );
            });
    }

    #[test]
    fn try_new_accepts_known() {
        bolero::check!()
            .with_generator(KnownErrno)
            .for_each(|errno: &Errno| {
                let checked = OsErrorBuilder::try_new(*errno).unwrap();
                assert_eq!(checked, OsErrorBuilder::new(*errno));
            });
    }

    #[test]
    #[traced_test]
    fn try_new_rejects_unknown() {
        assert_eq!(OsErrorBuilder::try_new(99_999), Err(UnknownErrno(99_999)));
        assert!(logs_contain("refusing to build errors"));
    }

    #[test]
    #[traced_test]
    fn unknown_errno_degrades_message() {
        let err = OsErrorBuilder::new(99_999).with_path("foo");
        assert_eq!(err.raw_os_error(), 99_999);
        assert!(!err.message().is_empty());
        assert!(logs_contain("unknown errno 99999"));
    }

    #[test]
    #[traced_test]
    fn events_use_crate_target() {
        let _ = OsErrorBuilder::new(99_999);
        assert!(logs_contain(" oserror: building errors for unknown errno 99999"));
        let _ = OsErrorBuilder::new(EEXIST).build();
        assert!(logs_contain(" oserror: building os error"));
        assert!(!logs_contain("oserror::builder:"));
    }

    #[test]
    #[traced_test]
    fn written_outside_would_block_is_logged() {
        let err = OsErrorBuilder::new(ENOENT).with_context(ErrorContext::new().written(3));
        assert_eq!(err.written(), Some(3));
        assert!(logs_contain("not a would-block error"));
    }

    #[test]
    fn from_raw_is_new() {
        assert_eq!(OsErrorBuilder::from_raw(ENOENT.raw()), OsErrorBuilder::new(ENOENT));
        assert_eq!(OsErrorBuilder::from(EEXIST).errno(), EEXIST);
    }
}
