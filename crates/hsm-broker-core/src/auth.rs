// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// Authentication mechanism used to establish an HSM session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthMechanism {
    /// Unix-style keytab authentication.
    #[default]
    Unix,
    /// Kerberos keytab authentication.
    Kerberos,
}

impl AuthMechanism {
    /// Selects the mechanism for a case-sensitive name.
    ///
    /// `"kerberos"` selects [`AuthMechanism::Kerberos`]. Any other value,
    /// including `"unix"`, an empty string, or an unknown name, selects
    /// [`AuthMechanism::Unix`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "kerberos" => Self::Kerberos,
            _ => Self::Unix,
        }
    }

    /// Returns `true` when `name` selects a mechanism explicitly rather than
    /// through the unix fallback.
    pub fn is_recognized(name: &str) -> bool {
        matches!(name, "unix" | "kerberos")
    }

    /// Canonical name of the mechanism.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::Kerberos => "kerberos",
        }
    }
}

impl fmt::Display for AuthMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
