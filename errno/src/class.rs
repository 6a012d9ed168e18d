// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Families of related error numbers.

use crate::Errno;
use nix::libc;

/// The family an [`Errno`] belongs to.
///
/// Callers are expected to branch on this (or on the raw number) rather than on which
/// constructor produced an error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrnoClass {
    /// A non-blocking operation could not complete immediately
    /// (`EAGAIN`, `EWOULDBLOCK`, `EALREADY`, `EINPROGRESS`).
    BlockingIo,
    /// `ECHILD`
    ChildProcess,
    /// `EPIPE`, `ESHUTDOWN`
    BrokenPipe,
    /// `ECONNABORTED`
    ConnectionAborted,
    /// `ECONNREFUSED`
    ConnectionRefused,
    /// `ECONNRESET`
    ConnectionReset,
    /// `EEXIST`
    FileExists,
    /// `ENOENT`
    FileNotFound,
    /// `EINTR`
    Interrupted,
    /// `EISDIR`
    IsADirectory,
    /// `ENOTDIR`
    NotADirectory,
    /// `EACCES`, `EPERM`
    Permission,
    /// `ESRCH`
    ProcessLookup,
    /// `ETIMEDOUT`
    Timeout,
    /// Anything else
    Other,
}

impl ErrnoClass {
    /// Classify an error number.
    #[must_use]
    #[allow(unreachable_patterns)] // EWOULDBLOCK aliases EAGAIN on most platforms
    pub fn of(errno: Errno) -> ErrnoClass {
        match errno.0 {
            libc::EAGAIN | libc::EWOULDBLOCK | libc::EALREADY | libc::EINPROGRESS => {
                ErrnoClass::BlockingIo
            }
            libc::ECHILD => ErrnoClass::ChildProcess,
            libc::EPIPE | libc::ESHUTDOWN => ErrnoClass::BrokenPipe,
            libc::ECONNABORTED => ErrnoClass::ConnectionAborted,
            libc::ECONNREFUSED => ErrnoClass::ConnectionRefused,
            libc::ECONNRESET => ErrnoClass::ConnectionReset,
            libc::EEXIST => ErrnoClass::FileExists,
            libc::ENOENT => ErrnoClass::FileNotFound,
            libc::EINTR => ErrnoClass::Interrupted,
            libc::EISDIR => ErrnoClass::IsADirectory,
            libc::ENOTDIR => ErrnoClass::NotADirectory,
            libc::EACCES | libc::EPERM => ErrnoClass::Permission,
            libc::ESRCH => ErrnoClass::ProcessLookup,
            libc::ETIMEDOUT => ErrnoClass::Timeout,
            _ => ErrnoClass::Other,
        }
    }

    /// Returns true for the would-block family.
    #[must_use]
    pub const fn is_would_block(self) -> bool {
        matches!(self, ErrnoClass::BlockingIo)
    }

    /// Returns true for connection related failures: broken pipe, aborted, refused, or reset.
    #[must_use]
    pub const fn is_connection(self) -> bool {
        matches!(
            self,
            ErrnoClass::BrokenPipe
                | ErrnoClass::ConnectionAborted
                | ErrnoClass::ConnectionRefused
                | ErrnoClass::ConnectionReset
        )
    }
}

impl From<Errno> for ErrnoClass {
    fn from(errno: Errno) -> Self {
        ErrnoClass::of(errno)
    }
}
