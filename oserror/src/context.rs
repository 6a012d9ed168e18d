// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Optional context attached to an [`OsError`](crate::OsError) at construction time.

use std::path::{Path, PathBuf};

/// The optional arguments of an error constructor, supplied by name.
///
/// Every field is independent: any subset may be present.
/// An absent field stays absent in the built error; in particular `written(0)` is kept as
/// `Some(0)` and is not the same thing as never calling [`ErrorContext::written`].
///
/// ```
/// # use oserror::{ErrorContext, catalog::BLOCKING_IO_EAGAIN};
/// let err = BLOCKING_IO_EAGAIN.with_context(ErrorContext::new().filename("foo").written(5));
/// assert_eq!(err.written(), Some(5));
/// assert_eq!(err.filename2(), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct ErrorContext {
    pub(crate) filename: Option<PathBuf>,
    pub(crate) filename2: Option<PathBuf>,
    pub(crate) written: Option<usize>,
}

impl ErrorContext {
    /// An empty context.
    pub const fn new() -> Self {
        Self {
            filename: None,
            filename2: None,
            written: None,
        }
    }

    /// Set the primary path.
    pub fn filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the secondary path (e.g. the destination of a rename).
    pub fn filename2(mut self, filename2: impl Into<PathBuf>) -> Self {
        self.filename2 = Some(filename2.into());
        self
    }

    /// Set the number of bytes transferred before the operation would have blocked.
    pub fn written(mut self, written: usize) -> Self {
        self.written = Some(written);
        self
    }

    /// Build a context where each argument may or may not be present.
    pub fn from_parts<P, Q>(filename: Option<P>, filename2: Option<Q>, written: Option<usize>) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        Self {
            filename: filename.map(Into::into),
            filename2: filename2.map(Into::into),
            written,
        }
    }

    /// The primary path, if any.
    #[must_use]
    pub fn get_filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// The secondary path, if any.
    #[must_use]
    pub fn get_filename2(&self) -> Option<&Path> {
        self.filename2.as_deref()
    }

    /// The written byte count, if any.
    #[must_use]
    pub const fn get_written(&self) -> Option<usize> {
        self.written
    }

    /// Returns true if no argument was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filename.is_none() && self.filename2.is_none() && self.written.is_none()
    }
}

/// Generators for [`ErrorContext`]
#[cfg(any(test, feature = "bolero"))]
mod contract {
    use crate::ErrorContext;
    use bolero::{Driver, TypeGenerator};

    impl TypeGenerator for ErrorContext {
        fn generate<D: Driver>(driver: &mut D) -> Option<Self> {
            let filename: Option<String> = driver.produce()?;
            let filename2: Option<String> = driver.produce()?;
            let written: Option<usize> = driver.produce()?;
            Some(ErrorContext::from_parts(filename, filename2, written))
        }
    }
}
