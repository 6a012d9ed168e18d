// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Platform errno values, descriptions, and classification.
//!
//! The numbers come from the host's own errno namespace (via [`nix::libc`]) rather than a
//! hand-maintained table, so [`Errno`] always agrees with what the kernel and libc hand back.
//! Descriptions are looked up through the platform's `strerror`.

#![deny(clippy::all, clippy::pedantic, clippy::panic)]
#![forbid(unsafe_code, missing_docs)]
#![forbid(clippy::missing_errors_doc)]
#![cfg_attr(not(test), forbid(clippy::unwrap_used, clippy::expect_used))]

use nix::libc;

mod class;

pub use class::ErrnoClass;

#[allow(unused_imports)] // re-export
#[cfg(any(test, feature = "bolero"))]
pub use contract::*;

/// Resource temporarily unavailable
pub const EAGAIN: Errno = Errno(libc::EAGAIN);
/// Operation already in progress
pub const EALREADY: Errno = Errno(libc::EALREADY);
/// Operation would block (an alias of [`EAGAIN`] on most platforms)
pub const EWOULDBLOCK: Errno = Errno(libc::EWOULDBLOCK);
/// Operation now in progress
pub const EINPROGRESS: Errno = Errno(libc::EINPROGRESS);
/// No child processes
pub const ECHILD: Errno = Errno(libc::ECHILD);
/// Cannot send after transport endpoint shutdown
pub const ESHUTDOWN: Errno = Errno(libc::ESHUTDOWN);
/// Broken pipe
pub const EPIPE: Errno = Errno(libc::EPIPE);
/// Software caused connection abort
pub const ECONNABORTED: Errno = Errno(libc::ECONNABORTED);
/// Connection refused
pub const ECONNREFUSED: Errno = Errno(libc::ECONNREFUSED);
/// Connection reset by peer
pub const ECONNRESET: Errno = Errno(libc::ECONNRESET);
/// File exists
pub const EEXIST: Errno = Errno(libc::EEXIST);
/// No such file or directory
pub const ENOENT: Errno = Errno(libc::ENOENT);
/// Interrupted system call
pub const EINTR: Errno = Errno(libc::EINTR);
/// Is a directory
pub const EISDIR: Errno = Errno(libc::EISDIR);
/// Not a directory
pub const ENOTDIR: Errno = Errno(libc::ENOTDIR);
/// Permission denied
pub const EACCES: Errno = Errno(libc::EACCES);
/// Operation not permitted
pub const EPERM: Errno = Errno(libc::EPERM);
/// No such process
pub const ESRCH: Errno = Errno(libc::ESRCH);
/// Connection timed out
pub const ETIMEDOUT: Errno = Errno(libc::ETIMEDOUT);
/// Invalid argument
pub const EINVAL: Errno = Errno(libc::EINVAL);
/// I/O error
pub const EIO: Errno = Errno(libc::EIO);

/// A platform error number.
///
/// Any `i32` may be wrapped; whether the host actually defines it is answered by
/// [`Errno::is_known`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Errno(pub i32);

/// The code is not part of the host's errno namespace.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("{0} is not a known errno on this platform")]
pub struct UnknownErrno(pub i32);

impl Errno {
    /// Wrap a raw error number.
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        Self(code)
    }

    /// The raw error number.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Returns true if the host defines this error number.
    #[must_use]
    pub fn is_known(self) -> bool {
        nix::errno::Errno::from_raw(self.0) != nix::errno::Errno::UnknownErrno
    }

    /// Wrap a raw error number, rejecting codes the host does not define.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownErrno`] if the host does not define `code`.
    pub fn new_checked(code: i32) -> Result<Self, UnknownErrno> {
        let errno = Self(code);
        if errno.is_known() {
            Ok(errno)
        } else {
            Err(UnknownErrno(code))
        }
    }

    /// Human readable description of this error number, as given by the platform's `strerror`.
    ///
    /// Codes unknown to the platform get whatever the platform says about them
    /// (`"Unknown error 9999"` on glibc).
    #[must_use]
    pub fn desc(self) -> String {
        strip_os_error_suffix(std::io::Error::from_raw_os_error(self.0).to_string(), self.0)
    }

    /// The [`std::io::ErrorKind`] the standard library assigns to this error number.
    #[must_use]
    pub fn kind(self) -> std::io::ErrorKind {
        std::io::Error::from_raw_os_error(self.0).kind()
    }

    /// The family this error number belongs to.
    #[must_use]
    pub fn class(self) -> ErrnoClass {
        ErrnoClass::of(self)
    }

    /// Extract the error number of an OS originated [`std::io::Error`].
    #[must_use]
    pub fn from_io_error(err: &std::io::Error) -> Option<Self> {
        err.raw_os_error().map(Self)
    }
}

/// Remove the `" (os error {code})"` tail std appends to the `strerror` text.
///
/// That tail is not a documented part of std's `Display` output; any trailing parenthesized
/// `os error` note is cut as well so a reworded suffix does not leak into descriptions.
fn strip_os_error_suffix(rendered: String, code: i32) -> String {
    if let Some(text) = rendered.strip_suffix(&format!(" (os error {code})")) {
        return text.to_owned();
    }
    match rendered.rfind(" (os error") {
        Some(idx) if rendered.ends_with(')') => rendered[..idx].to_owned(),
        _ => rendered,
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Errno {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Errno> for i32 {
    fn from(value: Errno) -> i32 {
        value.0
    }
}

impl From<nix::errno::Errno> for Errno {
    fn from(value: nix::errno::Errno) -> Self {
        Self(value as i32)
    }
}

impl TryFrom<Errno> for nix::errno::Errno {
    type Error = UnknownErrno;

    fn try_from(value: Errno) -> Result<Self, Self::Error> {
        match nix::errno::Errno::from_raw(value.0) {
            nix::errno::Errno::UnknownErrno => Err(UnknownErrno(value.0)),
            known => Ok(known),
        }
    }
}

/// Generators for [`Errno`]
#[cfg(any(test, feature = "bolero"))]
mod contract {
    use crate::Errno;
    use bolero::{Driver, TypeGenerator, ValueGenerator};

    impl TypeGenerator for Errno {
        fn generate<D: Driver>(driver: &mut D) -> Option<Self> {
            Some(Errno(driver.produce()?))
        }
    }

    /// Generate an [`Errno`] the host knows about.
    ///
    /// Linux and the BSDs keep their errno space below 256, so a `u8` is enough to cover it.
    pub struct KnownErrno;

    impl ValueGenerator for KnownErrno {
        type Output = Errno;

        fn generate<D: Driver>(&self, driver: &mut D) -> Option<Errno> {
            let errno = Errno(i32::from(driver.produce::<u8>()?));
            if errno.is_known() {
                Some(errno)
            } else {
                Some(crate::EIO)
            }
        }
    }
}
