// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// State of a single file query.
///
/// ```text
/// Unresolved -> Scanning -> Resolved | Errored
/// Resolved   -> Staging  -> Staged   | StageErrored
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryState {
    /// Nothing has been asked to the HSM yet.
    Unresolved,
    /// The attribute query is in flight.
    Scanning,
    /// A location record is available.
    Resolved,
    /// The attribute query failed or was classified as an error.
    Errored,
    /// The recall is in flight.
    Staging,
    /// The recall was accepted.
    Staged,
    /// The recall failed.
    StageErrored,
}

impl QueryState {
    /// Returns `true` when no transition leaves this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Errored | Self::Staged | Self::StageErrored)
    }

    /// Returns `true` when `next` directly follows `self`.
    pub fn can_transition_to(&self, next: QueryState) -> bool {
        matches!(
            (self, next),
            (Self::Unresolved, Self::Scanning)
                | (Self::Scanning, Self::Resolved)
                | (Self::Scanning, Self::Errored)
                | (Self::Resolved, Self::Staging)
                | (Self::Staging, Self::Staged)
                | (Self::Staging, Self::StageErrored)
        )
    }
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unresolved => "unresolved",
            Self::Scanning => "scanning",
            Self::Resolved => "resolved",
            Self::Errored => "errored",
            Self::Staging => "staging",
            Self::Staged => "staged",
            Self::StageErrored => "stage-errored",
        };

        f.write_str(name)
    }
}
