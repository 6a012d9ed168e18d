// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Named builders for the common error numbers.
//!
//! Each builder is a `const` [`OsErrorBuilder`], and [`CATALOG`] lists all of them under their
//! symbolic names.
//!
//! ```
//! # use oserror::catalog::{self, FILE_EXISTS};
//! let err = FILE_EXISTS.with_path("foo");
//! assert_eq!(err.errno(), errno::EEXIST);
//! assert_eq!(catalog::lookup("file_exists"), Some(FILE_EXISTS));
//! ```

use crate::OsErrorBuilder;
use errno::Errno;

/// A named builder.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Symbolic name, e.g. `"file_not_found"`.
    pub name: &'static str,
    /// The builder published under [`CatalogEntry::name`].
    pub builder: OsErrorBuilder,
}

impl CatalogEntry {
    /// The error number of the entry.
    #[must_use]
    pub const fn errno(&self) -> Errno {
        self.builder.errno()
    }
}

/// Declares one `const` builder per entry, plus the [`CATALOG`] table listing them all in order.
macro_rules! os_error_catalog {
    ($($(#[$doc:meta])* $konst:ident = $name:literal => $errno:expr;)+) => {
        $(
            $(#[$doc])*
            pub const $konst: OsErrorBuilder = OsErrorBuilder::from_raw(Errno::raw($errno));
        )+

        /// Every named builder, in declaration order.
        pub static CATALOG: &[CatalogEntry] = &[
            $(CatalogEntry { name: $name, builder: $konst },)+
        ];
    };
}

os_error_catalog! {
    /// Resource temporarily unavailable (`EAGAIN`)
    BLOCKING_IO_EAGAIN = "blocking_io_eagain" => errno::EAGAIN;
    /// Operation already in progress (`EALREADY`)
    BLOCKING_IO_EALREADY = "blocking_io_ealready" => errno::EALREADY;
    /// Operation would block (`EWOULDBLOCK`)
    BLOCKING_IO_EWOULDBLOCK = "blocking_io_ewouldblock" => errno::EWOULDBLOCK;
    /// Operation now in progress (`EINPROGRESS`)
    BLOCKING_IO_EINPROGRESS = "blocking_io_einprogress" => errno::EINPROGRESS;
    /// No child processes (`ECHILD`)
    CHILD_PROCESS = "child_process" => errno::ECHILD;
    /// Cannot send after transport endpoint shutdown (`ESHUTDOWN`)
    BROKEN_PIPE_ESHUTDOWN = "broken_pipe_eshutdown" => errno::ESHUTDOWN;
    /// Broken pipe (`EPIPE`)
    BROKEN_PIPE_EPIPE = "broken_pipe_epipe" => errno::EPIPE;
    /// Connection aborted (`ECONNABORTED`)
    CONNECTION_ABORTED = "connection_aborted" => errno::ECONNABORTED;
    /// Connection refused (`ECONNREFUSED`)
    CONNECTION_REFUSED = "connection_refused" => errno::ECONNREFUSED;
    /// Connection reset by peer (`ECONNRESET`)
    CONNECTION_RESET = "connection_reset" => errno::ECONNRESET;
    /// File exists (`EEXIST`)
    FILE_EXISTS = "file_exists" => errno::EEXIST;
    /// No such file or directory (`ENOENT`)
    FILE_NOT_FOUND = "file_not_found" => errno::ENOENT;
    /// Interrupted system call (`EINTR`)
    INTERRUPTED = "interrupted" => errno::EINTR;
    /// Is a directory (`EISDIR`)
    IS_A_DIRECTORY = "is_a_directory" => errno::EISDIR;
    /// Not a directory (`ENOTDIR`)
    NOT_A_DIRECTORY = "not_a_directory" => errno::ENOTDIR;
    /// Permission denied (`EACCES`)
    PERMISSION_EACCES = "permission_eacces" => errno::EACCES;
    /// Operation not permitted (`EPERM`)
    PERMISSION_EPERM = "permission_eperm" => errno::EPERM;
    /// No such process (`ESRCH`)
    PROCESS_LOOKUP = "process_lookup" => errno::ESRCH;
    /// Connection timed out (`ETIMEDOUT`)
    TIMEOUT = "timeout" => errno::ETIMEDOUT;
}

/// Find a named builder.
#[must_use]
pub fn lookup(name: &str) -> Option<OsErrorBuilder> {
    CATALOG
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.builder)
}
