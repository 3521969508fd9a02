// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hsm_broker
//!
//! Broker between a request scheduler and a tape-backed hierarchical storage
//! system (HSM).
//!
//! The broker authenticates against the HSM, resolves where a file physically
//! resides across the storage tiers, and recalls ("stages") files from tape
//! into the disk tier in the order the caller asks for them.
//!
//! ## Control flow
//!
//! ```text
//! init_context -> (locate -> [stage])* -> end_context
//! ```
//!
//! The HSM client library is reached through the [`HsmClient`] capability
//! trait, so the broker can run against the native client or a test double.
//!
//! ## Example
//!
//! ```rust,ignore
//! use hsm_broker::Broker;
//!
//! let mut broker = Broker::new(client);
//! broker.init_context("kerberos", "/etc/hpss.keytab", "treqs")?;
//!
//! let record = broker.locate("/hpss/data/run42.root")?;
//! if record.needs_stage() {
//!     broker.stage("/hpss/data/run42.root", record.size)?;
//! }
//!
//! broker.end_context()?;
//! ```
//!
//! ## Logging
//!
//! The broker emits `tracing` events and installs no subscriber itself. A
//! host without its own subscriber calls [`logging::init`] once at startup
//! so that `TREQS_LOG` selects the verbosity. A host with its own subscriber
//! adds [`logging::LogLevel::current`]`().as_level_filter()` to it.
//!
//! ## Concurrency
//!
//! [`Broker::init_context`] and [`Broker::end_context`] take `&mut self`, so
//! session lifecycle changes are serialized. [`Broker::locate`] and
//! [`Broker::stage`] take `&self` and may run concurrently when the client is
//! `Sync` and the native library tolerates concurrent calls. Every call
//! blocks until the HSM answers, so successive stages from one thread reach
//! the HSM in call order.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod broker;
mod guard;
mod lifecycle;
mod scanner;
mod session;
mod stager;
mod support;

pub use broker::Broker;
pub use lifecycle::FileQuery;
pub use session::Session;

pub use hsm_broker_core::{
    AuthMechanism, FileAttributes, FileHandle, HsmClient, HsmStatus, LocateError, MAX_TIERS,
    ObjectType, OpenFlags, QueryError, QueryState, SessionError, StageError,
    StageRequest, StatusKind, StorageLocationRecord, TierAttributes, TierFlags,
    VolumeDescriptor,
};
pub use hsm_broker_core::{DISK_LABEL, DISK_POSITION, EMPTY_LABEL};
pub use hsm_broker_log as logging;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
