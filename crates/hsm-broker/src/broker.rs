// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hsm_broker_core::{
    HsmClient, LocateError, SessionError, StageError, StageRequest, StorageLocationRecord,
};
use tracing::warn;

use crate::lifecycle::FileQuery;
use crate::session::{self, Session};
use crate::{scanner, stager};

/// Broker over an HSM client.
///
/// Holds the client and at most one [`Session`]. File operations fail fast
/// with `NoActiveSession` until [`Broker::init_context`] succeeds, and issue
/// no HSM call in that case.
///
/// Dropping a broker with an active session purges its credentials.
///
/// Diagnostics are `tracing` events. `TREQS_LOG` only takes effect through
/// a subscriber filtered at
/// [`LogLevel::current`](crate::logging::LogLevel::current): either the one
/// installed by [`logging::init`](crate::logging::init), or a host
/// subscriber with `LogLevel::current().as_level_filter()` added as a layer.
pub struct Broker<C: HsmClient> {
    client: C,
    session: Option<Session>,
}

impl<C: HsmClient> Broker<C> {
    /// Creates a broker with no active session.
    pub fn new(client: C) -> Self {
        Self {
            client,
            session: None,
        }
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns `true` when a session is established.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Establishes the session.
    ///
    /// `auth_mechanism` is case-sensitive: `"kerberos"` selects Kerberos and
    /// any other value selects the unix mechanism.
    ///
    /// # Errors
    ///
    /// - [`SessionError::AlreadyActive`] if a session is already established
    /// - [`SessionError::AuthFailure`] with the HSM status if the credentials
    ///   are rejected; the broker stays without a session
    pub fn init_context(
        &mut self,
        auth_mechanism: &str,
        keytab_path: &str,
        principal: &str,
    ) -> Result<(), SessionError> {
        if self.session.is_some() {
            warn!(principal, "init_context called with an active session");
            return Err(SessionError::AlreadyActive);
        }

        let session = session::establish(&self.client, auth_mechanism, keytab_path, principal)?;
        self.session = Some(session);

        Ok(())
    }

    /// Releases the session.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoActiveSession`] without an active session; no HSM
    ///   call is made
    /// - [`SessionError::ReleaseFailed`] if the HSM rejects the purge; the
    ///   session is released nonetheless
    pub fn end_context(&mut self) -> Result<(), SessionError> {
        let session = self.session.take().ok_or(SessionError::NoActiveSession)?;

        session::release(&self.client, session)
    }

    /// Resolves where `file_name` resides across the storage tiers.
    ///
    /// # Errors
    ///
    /// - [`LocateError::NoActiveSession`] without an active session; no HSM
    ///   call is made
    /// - [`LocateError::QueryFailed`] with the HSM status of a failed query
    /// - [`LocateError::IsDirectory`], [`LocateError::NoSegments`] or
    ///   [`LocateError::EmptyFile`] when the object has no resolvable tier
    /// - [`LocateError::MissingVolume`] when the resolved tape tier has no
    ///   usable volume
    pub fn locate(&self, file_name: &str) -> Result<StorageLocationRecord, LocateError> {
        if self.session.is_none() {
            return Err(LocateError::NoActiveSession);
        }

        scanner::locate(&self.client, file_name)
    }

    /// Recalls bytes `[0, length)` of `file_name` into the disk tier.
    ///
    /// Blocks until the HSM accepts the request, so successive calls from one
    /// thread reach the HSM in call order.
    ///
    /// # Errors
    ///
    /// Same as [`Broker::stage_request`].
    pub fn stage(&self, file_name: &str, length: u64) -> Result<(), StageError> {
        self.stage_request(&StageRequest::new(file_name, length))
    }

    /// Same as [`Broker::stage`] for a prepared request.
    ///
    /// # Errors
    ///
    /// - [`StageError::NoActiveSession`] without an active session; no HSM
    ///   call is made
    /// - [`StageError::OpenFailed`] if the open fails; nothing is recalled
    /// - [`StageError::RecallFailed`] if the recall fails, whatever the close
    ///   outcome
    /// - [`StageError::CloseFailed`] if only the close fails
    ///
    /// None of these ends the session.
    pub fn stage_request(&self, request: &StageRequest) -> Result<(), StageError> {
        if self.session.is_none() {
            return Err(StageError::NoActiveSession);
        }

        stager::stage(&self.client, request)
    }

    /// Starts the lifecycle of one file.
    pub fn query(&self, file_name: impl Into<String>) -> FileQuery<'_, C> {
        FileQuery::new(self, file_name)
    }
}

impl<C: HsmClient> Drop for Broker<C> {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            if let Err(e) = session::release(&self.client, session) {
                warn!(error = %e, "failed to release session on drop");
            }
        }
    }
}

impl<C: HsmClient> core::fmt::Debug for Broker<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Broker")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
