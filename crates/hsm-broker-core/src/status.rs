// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw HSM status codes.
//!
//! The HSM client reports failures as negative errno-like integers. The broker
//! never rewrites them: every error variant that carries a code carries the
//! exact value the client returned.

use core::fmt;

/// Status code returned by the HSM client library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct HsmStatus(pub i32);

/// Coarse classification of a status code, for callers that map broker
/// errors onto their own failure idiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Credentials were rejected while establishing the session.
    CredentialRejected,
    /// The named file does not exist.
    NotFound,
    /// Permission denied, typically an expired or missing session.
    AccessDenied,
    /// The HSM is unreachable or the file is locked.
    Unavailable,
    /// The name refers to a directory.
    IsDirectory,
    /// No space left in the disk cache to recall into.
    NoSpace,
    /// Any other code.
    Other,
}

macro_rules! known_codes {
    ($($(#[$meta:meta])* $name:ident = $code:literal;)*) => {
        impl HsmStatus {
            $(
                $(#[$meta])*
                pub const $name: HsmStatus = HsmStatus($code);
            )*

            /// Symbolic name of a known code.
            pub fn name(&self) -> Option<&'static str> {
                $(
                    if self.0 == $code {
                        return Some(stringify!($name));
                    }
                )*

                None
            }
        }
    };
}

known_codes! {
    /// No error.
    NOERROR = 0;
    /// Operation not permitted (credential establishment rejected).
    EPERM = -1;
    /// No such file or directory.
    ENOENT = -2;
    /// I/O error: HSM unavailable or file locked.
    EIO = -5;
    /// Bad file handle.
    EBADF = -9;
    /// Permission denied.
    EACCES = -13;
    /// Null path or output buffer.
    EFAULT = -14;
    /// Is a directory.
    EISDIR = -21;
    /// Invalid argument or open flags.
    EINVAL = -22;
    /// Client open file table is full.
    EMFILE = -24;
    /// No space left in the target storage class.
    ENOSPACE = -28;
    /// Connection failure.
    ECONN = -50;
    /// Timed out.
    ETIMEDOUT = -78;
}

impl HsmStatus {
    /// Returns `true` for the success code.
    pub fn is_ok(&self) -> bool {
        self.0 == Self::NOERROR.0
    }

    /// Returns the raw code.
    pub fn code(&self) -> i32 {
        self.0
    }

    /// Classifies the code.
    pub fn kind(&self) -> StatusKind {
        match *self {
            Self::EPERM => StatusKind::CredentialRejected,
            Self::ENOENT => StatusKind::NotFound,
            Self::EACCES => StatusKind::AccessDenied,
            Self::EIO => StatusKind::Unavailable,
            Self::EISDIR => StatusKind::IsDirectory,
            Self::ENOSPACE => StatusKind::NoSpace,
            _ => StatusKind::Other,
        }
    }
}

impl From<i32> for HsmStatus {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for HsmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
