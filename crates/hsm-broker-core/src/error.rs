// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for the HSM file broker.
use thiserror::Error;

use crate::location::EMPTY_LABEL;
use crate::state::QueryState;
use crate::status::HsmStatus;

/// Errors of the session lifecycle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The HSM rejected the credentials.
    #[error("authentication failed: {0}")]
    AuthFailure(HsmStatus),

    /// No session has been established.
    #[error("no active session")]
    NoActiveSession,

    /// A session is already established on this broker.
    #[error("a session is already active")]
    AlreadyActive,

    /// The HSM rejected the credential purge. The session is dropped anyway.
    #[error("failed to release credentials: {0}")]
    ReleaseFailed(HsmStatus),
}

impl SessionError {
    /// Status code reported by the HSM, if any.
    pub fn status(&self) -> Option<HsmStatus> {
        match self {
            Self::AuthFailure(status) | Self::ReleaseFailed(status) => Some(*status),
            Self::NoActiveSession | Self::AlreadyActive => None,
        }
    }
}

/// Errors of the attribute scan.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocateError {
    /// The name refers to a directory.
    #[error("object is a directory")]
    IsDirectory,

    /// The file exists but no segment is recorded for it.
    #[error("no segments exist for this file")]
    NoSegments,

    /// No tier holds data for the file.
    #[error("file is empty")]
    EmptyFile,

    /// The attribute query itself failed.
    #[error("attribute query failed: {0}")]
    QueryFailed(HsmStatus),

    /// Data exists at a tape tier but no usable volume descriptor was
    /// returned: none at all, no physical volume label, or a negative position.
    #[error("no usable volume descriptor at tier {tier}")]
    MissingVolume {
        /// Tier that was resolved.
        tier: u32,
    },

    /// No session has been established.
    #[error("no active session")]
    NoActiveSession,
}

impl LocateError {
    /// Status code reported by the HSM, if any.
    pub fn status(&self) -> Option<HsmStatus> {
        match self {
            Self::QueryFailed(status) => Some(*status),
            Self::IsDirectory => Some(HsmStatus::EISDIR),
            _ => None,
        }
    }

    /// Tape label associated with the classification.
    ///
    /// An empty file is labelled [`EMPTY_LABEL`].
    pub fn tape_label(&self) -> Option<&'static str> {
        match self {
            Self::EmptyFile => Some(EMPTY_LABEL),
            _ => None,
        }
    }
}

/// Errors of the stage orchestrator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StageError {
    /// The file could not be opened. No recall was attempted.
    #[error("open failed: {0}")]
    OpenFailed(HsmStatus),

    /// The recall request failed. The handle was closed.
    #[error("recall failed: {0}")]
    RecallFailed(HsmStatus),

    /// The recall succeeded but the handle could not be closed.
    #[error("close failed: {0}")]
    CloseFailed(HsmStatus),

    /// No session has been established.
    #[error("no active session")]
    NoActiveSession,
}

impl StageError {
    /// Status code reported by the HSM, if any.
    pub fn status(&self) -> Option<HsmStatus> {
        match self {
            Self::OpenFailed(status) | Self::RecallFailed(status) | Self::CloseFailed(status) => {
                Some(*status)
            }
            Self::NoActiveSession => None,
        }
    }
}

/// Errors of a per-file query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The scan failed.
    #[error("LocateError: {0}")]
    Locate(#[from] LocateError),

    /// The recall failed.
    #[error("StageError: {0}")]
    Stage(#[from] StageError),

    /// The requested step does not follow the current state.
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition {
        /// Current state.
        from: QueryState,
        /// Requested state.
        to: QueryState,
    },
}

impl QueryError {
    /// Status code reported by the HSM, if any.
    pub fn status(&self) -> Option<HsmStatus> {
        match self {
            Self::Locate(e) => e.status(),
            Self::Stage(e) => e.status(),
            Self::InvalidTransition { .. } => None,
        }
    }
}
