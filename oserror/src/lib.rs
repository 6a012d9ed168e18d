// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Operating system style errors, built consistently.
//!
//! Code that needs to signal an OS flavored failure ("no such file or directory", "connection
//! refused") should not have to assemble the error number, the platform text and the paths by
//! hand every time.
//! An [`OsErrorBuilder`] does that for one [`Errno`](errno::Errno), and the [`catalog`] offers
//! ready made builders for the usual suspects.
//!
//! ```
//! use oserror::{ErrorContext, OsErrorBuilder};
//! use oserror::catalog::{BLOCKING_IO_EAGAIN, FILE_NOT_FOUND};
//!
//! let err = FILE_NOT_FOUND.with_path("foo");
//! assert_eq!(err, OsErrorBuilder::new(errno::ENOENT).with_path("foo"));
//!
//! let err = BLOCKING_IO_EAGAIN.with_context(
//!     ErrorContext::new().filename("foo").filename2("bar").written(5),
//! );
//! assert!(err.class().is_would_block());
//! assert_eq!(err.written(), Some(5));
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code, missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod builder;
pub mod catalog;
mod context;
mod error;

pub use builder::OsErrorBuilder;
pub use context::ErrorContext;
pub use error::OsError;

pub use errno::{Errno, ErrnoClass, UnknownErrno};
