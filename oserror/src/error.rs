// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The error value handed to callers.

use crate::ErrorContext;
use errno::{Errno, ErrnoClass};
use std::path::{Path, PathBuf};

/// An operating system style error: an [`Errno`], its platform description, and whatever
/// context the caller supplied.
///
/// Values are only produced by [`OsErrorBuilder`](crate::OsErrorBuilder) (directly or through
/// the [`catalog`](crate::catalog)) and nothing mutates them afterwards.
///
/// The [`Display`](core::fmt::Display) rendering follows the host convention:
///
/// ```text
/// [Errno 17] File exists
/// [Errno 17] File exists: 'foo'
/// [Errno 17] File exists: 'foo' -> 'bar'
/// ```
///
/// The second path is only rendered when the first one is present.
/// Paths are quoted like string literals: `it's` renders as `"it's"`, and backslashes, the
/// enclosing quote and control characters are escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("[Errno {errno}] {message}{}", path_suffix(.filename, .filename2))]
pub struct OsError {
    errno: Errno,
    message: String,
    filename: Option<PathBuf>,
    filename2: Option<PathBuf>,
    written: Option<usize>,
}

fn path_suffix(filename: &Option<PathBuf>, filename2: &Option<PathBuf>) -> String {
    match (filename, filename2) {
        (Some(filename), Some(filename2)) => {
            format!(": {} -> {}", quoted(filename), quoted(filename2))
        }
        (Some(filename), None) => format!(": {}", quoted(filename)),
        (None, _) => String::new(),
    }
}

/// Quote a path as a string literal: single quotes, unless the path contains a single quote and
/// no double quote, in which case double quotes.
/// Backslashes, the chosen quote and control characters are escaped.
/// Paths that are not valid UTF-8 are rendered lossily.
fn quoted(path: &Path) -> String {
    let text = path.to_string_lossy();
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

impl OsError {
    pub(crate) fn new(errno: Errno, message: String, context: ErrorContext) -> Self {
        let ErrorContext {
            filename,
            filename2,
            written,
        } = context;
        Self {
            errno,
            message,
            filename,
            filename2,
            written,
        }
    }

    /// The error number this error was built from.
    #[must_use]
    pub const fn errno(&self) -> Errno {
        self.errno
    }

    /// The raw error number, as [`std::io::Error::raw_os_error`] would report it.
    #[must_use]
    pub const fn raw_os_error(&self) -> i32 {
        self.errno.raw()
    }

    /// The platform description of [`OsError::errno`].
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The primary path, if one was supplied.
    #[must_use]
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// The secondary path, if one was supplied.
    #[must_use]
    pub fn filename2(&self) -> Option<&Path> {
        self.filename2.as_deref()
    }

    /// Bytes transferred before the operation would have blocked, if supplied.
    #[must_use]
    pub const fn written(&self) -> Option<usize> {
        self.written
    }

    /// The family of [`OsError::errno`].
    #[must_use]
    pub fn class(&self) -> ErrnoClass {
        self.errno.class()
    }

    /// The [`std::io::ErrorKind`] matching [`OsError::errno`].
    #[must_use]
    pub fn kind(&self) -> std::io::ErrorKind {
        self.errno.kind()
    }

    /// A copy of the context this error was built with.
    pub fn context(&self) -> ErrorContext {
        ErrorContext {
            filename: self.filename.clone(),
            filename2: self.filename2.clone(),
            written: self.written,
        }
    }
}

/// Wraps the [`OsError`] as the inner error of a [`std::io::Error`] of the matching kind.
///
/// The paths and written count survive and can be recovered with
/// [`std::io::Error::get_ref`] and a downcast.
impl From<OsError> for std::io::Error {
    fn from(err: OsError) -> Self {
        std::io::Error::new(err.kind(), err)
    }
}
