// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hsm_broker_core
//!
//! Vocabulary shared by the HSM file broker and its HSM client backends.
//!
//! ## Core Types
//!
//! - [`HsmStatus`]: Raw status code returned by the HSM client, passed through unmodified
//! - [`FileAttributes`]: Result of an all-levels attribute query, one [`TierAttributes`] per tier
//! - [`StorageLocationRecord`]: Canonical location of a file once the tiers are reduced
//! - [`StageRequest`]: File name and recall window handed to the stage orchestrator
//!
//! ## Traits
//!
//! - [`HsmClient`]: Capability interface over the native HSM client library
//! - [`VolumeDescriptor`]: Access to a volume descriptor that owns native buffers
//!
//! ## Tiers
//!
//! Storage tiers are indexed from `0` (disk cache, fastest) to
//! [`MAX_TIERS`]` - 1` (farthest tape level).

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod attributes;
mod auth;
mod error;
mod location;
mod state;
mod status;
mod traits;

pub use attributes::{FileAttributes, MAX_TIERS, ObjectType, TierAttributes, TierFlags};
pub use auth::AuthMechanism;
pub use error::{LocateError, QueryError, SessionError, StageError};
pub use location::{DISK_LABEL, DISK_POSITION, EMPTY_LABEL, StageRequest, StorageLocationRecord};
pub use state::QueryState;
pub use status::{HsmStatus, StatusKind};
pub use traits::{FileHandle, HsmClient, OpenFlags, VolumeDescriptor};
